use polars::prelude::PolarsError;
use thiserror::Error;

use crate::field::TableKind;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("column {column} is missing from the {table} table")]
    MissingColumn { column: String, table: TableKind },
    #[error("column {column}, row {row}: value '{value}' is not numeric")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },
    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, ModelError>;
