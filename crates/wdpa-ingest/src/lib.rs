//! Loading of WDPA tables and reference data.
//!
//! Tables are read from CSV exports into [`wdpa_model::RecordSet`]s. The
//! country-code list is read from the ISO-3166 CSV (`alpha-3` column).

pub mod error;
pub mod reference;
pub mod schema;
pub mod table;

pub use error::{IngestError, Result};
pub use reference::{ALPHA3_COLUMN, load_country_codes, read_country_codes};
pub use schema::{SchemaReport, verify_schema, warn_on_schema_drift};
pub use table::{load_table, validate_encoding};
