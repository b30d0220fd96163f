//! Verification that a loaded table has the published WDPA layout.

use tracing::warn;
use wdpa_model::RecordSet;

/// Differences between a table's columns and the expected layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    /// Expected columns that are absent.
    pub missing: Vec<&'static str>,
    /// Columns present but not part of the layout.
    pub unexpected: Vec<String>,
    /// True when the expected columns appear in their published order.
    pub in_order: bool,
}

impl SchemaReport {
    pub fn is_exact(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty() && self.in_order
    }
}

pub fn verify_schema(records: &RecordSet) -> SchemaReport {
    let expected = records.kind().expected_columns();
    let present: Vec<String> = records
        .frame()
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    let missing = records.missing_columns();
    let unexpected: Vec<String> = present
        .iter()
        .filter(|name| !expected.contains(&name.as_str()))
        .cloned()
        .collect();
    let known: Vec<&str> = present
        .iter()
        .map(String::as_str)
        .filter(|name| expected.contains(name))
        .collect();
    let in_order = missing.is_empty() && known == expected;

    SchemaReport {
        missing,
        unexpected,
        in_order,
    }
}

/// Verify and log the outcome; checks reading a missing column will error on their own.
pub fn warn_on_schema_drift(records: &RecordSet) -> SchemaReport {
    let report = verify_schema(records);
    let table = records.kind();
    if !report.missing.is_empty() {
        warn!(%table, missing = ?report.missing, "expected columns are absent");
    }
    if !report.unexpected.is_empty() {
        warn!(%table, unexpected = ?report.unexpected, "table carries unexpected columns");
    }
    if report.missing.is_empty() && !report.in_order {
        warn!(%table, "columns are not in the published order");
    }
    report
}
