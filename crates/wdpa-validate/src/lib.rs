//! Rule-based validation of WDPA protected-area tables.
//!
//! The [`catalog`] describes every rule as data; [`checks`] holds the
//! factories that evaluate them; [`runner`] applies a catalog to a record
//! set in parallel and [`report`] collects the outcome. Checks that need
//! two or three tables at once live in [`cross_table`].
//!
//! ```ignore
//! use wdpa_validate::{RunOptions, ValidationContext, run_table};
//!
//! let ctx = ValidationContext::default().with_country_codes(&codes);
//! let report = run_table(&polygons, &ctx, &RunOptions::default())?;
//! for (rule, ids) in report.violation_index().iter() {
//!     println!("{rule}: {}", ids.len());
//! }
//! ```

pub mod catalog;
pub mod checks;
pub mod config;
pub mod context;
pub mod criteria;
pub mod cross_table;
pub mod error;
pub mod report;
pub mod runner;

pub use catalog::{
    AllowedValues, Applicability, Bespoke, CheckKind, IdentifierKind, RULES, RuleCatalog,
    RuleDef, Verdict,
};
pub use checks::{CheckResult, Violators, evaluate};
pub use config::{QaConfig, RunnerConfig, Thresholds};
pub use context::ValidationContext;
pub use cross_table::{
    INTEGRITY_RULES, IntegrityInput, IntegrityRule, OverlapKey, cross_table_duplicate,
    metadata_referenced_but_missing, metadata_unused, run_integrity,
};
pub use error::{CheckError, ConfigError, ValidationError};
pub use report::{
    REPORT_FILE_NAME, RuleResult, RuleStatus, ValidationReport, ViolationIndex,
    write_report_json,
};
pub use runner::{RunOptions, run, run_table};
