//! ISO-3166 country-code reference list.

use std::io::Read;
use std::path::Path;

use tracing::debug;
use wdpa_model::CountryCodes;

use crate::error::{IngestError, Result};

/// Column holding alpha-3 codes in the ISO-3166 country list.
pub const ALPHA3_COLUMN: &str = "alpha-3";

/// Load alpha-3 codes from a CSV file with an `alpha-3` header.
pub fn load_country_codes(path: &Path) -> Result<CountryCodes> {
    let file = std::fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_country_codes(file, path)
}

/// Parse alpha-3 codes from any CSV reader; `path` is used in errors only.
pub fn read_country_codes<R: Read>(reader: R, path: &Path) -> Result<CountryCodes> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let index = headers
        .iter()
        .position(|h| {
            h.trim_start_matches('\u{feff}')
                .trim()
                .eq_ignore_ascii_case(ALPHA3_COLUMN)
        })
        .ok_or_else(|| IngestError::MissingColumn {
            column: ALPHA3_COLUMN.to_string(),
            path: path.to_path_buf(),
        })?;

    let mut values = Vec::new();
    for record in csv.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if let Some(code) = record.get(index) {
            values.push(code.to_string());
        }
    }

    let codes: CountryCodes = values.into_iter().collect();
    if codes.is_empty() {
        return Err(IngestError::EmptyReference {
            column: ALPHA3_COLUMN.to_string(),
            path: path.to_path_buf(),
        });
    }
    debug!(count = codes.len(), "country codes loaded");
    Ok(codes)
}
