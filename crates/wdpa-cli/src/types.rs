use std::path::PathBuf;

use wdpa_validate::ValidationReport;

#[derive(Debug)]
pub struct RunResult {
    pub reports: Vec<ValidationReport>,
    pub output_dir: PathBuf,
    pub report_path: PathBuf,
    pub exports: Vec<PathBuf>,
}

impl RunResult {
    /// True when any `Fail` rule was violated or a rule could not run.
    pub fn has_failures(&self) -> bool {
        self.reports.iter().any(ValidationReport::has_failures)
    }
}
