//! CSV exports of the rows behind each violated rule.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::debug;
use wdpa_model::RecordSet;
use wdpa_validate::{IntegrityInput, ValidationReport};

/// Write `<rule>.csv` for every rule of `report` with violators, holding
/// the violating rows of `records`. Returns the written paths.
pub fn export_violations(
    output_dir: &Path,
    records: &RecordSet,
    report: &ValidationReport,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let mut written = Vec::new();
    for result in report.results.iter().filter(|r| !r.violators.is_empty()) {
        let mut rows = records
            .find_records(result.identifier.field(), &result.violators)
            .with_context(|| format!("select rows for {}", result.rule))?;
        let path = output_dir.join(format!("{}.csv", result.rule));
        write_csv(&path, &mut rows)?;
        written.push(path);
    }
    Ok(written)
}

/// Integrity counterpart of [`export_violations`]: rows are looked up in
/// every table carrying the rule's identifier and written to
/// `<rule>_<table>.csv`.
pub fn export_integrity_violations(
    output_dir: &Path,
    input: &IntegrityInput<'_>,
    report: &ValidationReport,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let tables = [input.polygons, input.points, input.source];
    let mut written = Vec::new();
    for result in report.results.iter().filter(|r| !r.violators.is_empty()) {
        let field = result.identifier.field();
        for records in tables.iter().filter(|t| t.has_column(field.column())) {
            let mut rows = records
                .find_records(field, &result.violators)
                .with_context(|| format!("select {} rows for {}", records.kind(), result.rule))?;
            if rows.height() == 0 {
                continue;
            }
            let path = output_dir.join(format!("{}_{}.csv", result.rule, records.kind().label()));
            write_csv(&path, &mut rows)?;
            written.push(path);
        }
    }
    Ok(written)
}

fn write_csv(path: &Path, rows: &mut DataFrame) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(rows)
        .with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), rows = rows.height(), "exported violating rows");
    Ok(())
}
