//! Run results, the violation index, and the JSON report.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::catalog::{IdentifierKind, RuleDef, Verdict};
use crate::error::ValidationError;

const REPORT_SCHEMA: &str = "wdpa-qa/report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// File name of the JSON report inside the output directory.
pub const REPORT_FILE_NAME: &str = "qa_report.json";

/// Outcome of one rule in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleStatus {
    /// No violators.
    Pass,
    /// Violators found for a `Fail` rule.
    Fail,
    /// Violators found for a `Check` rule.
    Check,
    /// The check could not run on this data.
    Errored,
    /// The time budget ran out before the check started.
    Skipped,
}

impl RuleStatus {
    pub fn label(self) -> &'static str {
        match self {
            RuleStatus::Pass => "Pass",
            RuleStatus::Fail => "Fail",
            RuleStatus::Check => "Check",
            RuleStatus::Errored => "Errored",
            RuleStatus::Skipped => "Skipped",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleResult {
    pub rule: String,
    pub description: String,
    pub verdict: Verdict,
    pub identifier: IdentifierKind,
    pub status: RuleStatus,
    pub violators: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RuleResult {
    pub fn new(
        rule: &str,
        description: &str,
        verdict: Verdict,
        identifier: IdentifierKind,
        violators: BTreeSet<String>,
    ) -> Self {
        let status = match (violators.is_empty(), verdict) {
            (true, _) => RuleStatus::Pass,
            (false, Verdict::Fail) => RuleStatus::Fail,
            (false, Verdict::Check) => RuleStatus::Check,
        };
        Self {
            rule: rule.to_string(),
            description: description.to_string(),
            verdict,
            identifier,
            status,
            violators,
            error: None,
        }
    }

    pub fn completed(rule: &RuleDef, violators: BTreeSet<String>) -> Self {
        Self::new(
            rule.name,
            rule.description,
            rule.verdict,
            rule.identifier,
            violators,
        )
    }

    pub fn errored(rule: &RuleDef, message: String) -> Self {
        Self {
            status: RuleStatus::Errored,
            error: Some(message),
            ..Self::completed(rule, BTreeSet::new())
        }
    }

    pub fn skipped(rule: &RuleDef) -> Self {
        Self {
            status: RuleStatus::Skipped,
            ..Self::completed(rule, BTreeSet::new())
        }
    }

    pub fn violation_count(&self) -> usize {
        self.violators.len()
    }
}

/// Rule name to violating identifiers, holding only rules with violators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ViolationIndex {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl ViolationIndex {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a RuleResult>) -> Self {
        Self {
            entries: results
                .into_iter()
                .filter(|result| !result.violators.is_empty())
                .map(|result| (result.rule.clone(), result.violators.clone()))
                .collect(),
        }
    }

    pub fn get(&self, rule: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(rule)
    }

    pub fn contains_rule(&self, rule: &str) -> bool {
        self.entries.contains_key(rule)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rules(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(rule, ids)| (rule.as_str(), ids))
    }
}

/// Results of running a catalog over one table (or the integrity checks).
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// `poly`, `point` or `integrity`.
    pub scope: String,
    pub record_count: usize,
    pub results: Vec<RuleResult>,
    /// True when the time budget cut the run short.
    pub partial: bool,
    pub elapsed_ms: u64,
}

impl ValidationReport {
    pub fn violation_index(&self) -> ViolationIndex {
        ViolationIndex::from_results(&self.results)
    }

    pub fn count(&self, status: RuleStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    pub fn has_failures(&self) -> bool {
        self.results
            .iter()
            .any(|r| matches!(r.status, RuleStatus::Fail | RuleStatus::Errored))
    }

    pub fn result(&self, rule: &str) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.rule == rule)
    }
}

#[derive(Debug, Serialize)]
struct ReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    reports: Vec<ReportSummary<'a>>,
}

#[derive(Debug, Serialize)]
struct ReportSummary<'a> {
    scope: &'a str,
    record_count: usize,
    partial: bool,
    elapsed_ms: u64,
    fail_count: usize,
    check_count: usize,
    errored_count: usize,
    skipped_count: usize,
    rules: &'a [RuleResult],
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ValidationError {
    let path = path.to_path_buf();
    move |source| ValidationError::Io { path, source }
}

/// Write `qa_report.json` into `output_dir`, creating the directory.
pub fn write_report_json(
    output_dir: &Path,
    reports: &[ValidationReport],
) -> Result<PathBuf, ValidationError> {
    std::fs::create_dir_all(output_dir).map_err(io_error(output_dir))?;
    let output_path = output_dir.join(REPORT_FILE_NAME);
    let payload = ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        reports: reports
            .iter()
            .map(|report| ReportSummary {
                scope: &report.scope,
                record_count: report.record_count,
                partial: report.partial,
                elapsed_ms: report.elapsed_ms,
                fail_count: report.count(RuleStatus::Fail),
                check_count: report.count(RuleStatus::Check),
                errored_count: report.count(RuleStatus::Errored),
                skipped_count: report.count(RuleStatus::Skipped),
                rules: &report.results,
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n")).map_err(io_error(&output_path))?;
    Ok(output_path)
}
