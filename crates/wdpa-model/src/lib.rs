//! Data model for World Database on Protected Areas (WDPA) tables.
//!
//! - [`field`]: column names of the polygon, point and source tables
//! - [`record_set`]: a loaded table with typed column accessors
//! - [`values`]: cell rendering shared by every check
//! - [`country`]: the ISO3 reference list

pub mod country;
pub mod error;
pub mod field;
pub mod record_set;
pub mod values;

pub use country::CountryCodes;
pub use error::{ModelError, Result};
pub use field::{Field, SOURCE_COLUMNS, TableKind};
pub use record_set::RecordSet;
