//! Runs a rule catalog over a record set.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};
use wdpa_model::RecordSet;

use crate::catalog::{RuleCatalog, RuleDef};
use crate::checks::evaluate;
use crate::context::ValidationContext;
use crate::error::{CheckError, ValidationError};
use crate::report::{RuleResult, RuleStatus, ValidationReport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Rules not started within this budget are skipped.
    pub time_budget: Option<Duration>,
    /// Size of a dedicated thread pool; `None` uses the global pool.
    pub threads: Option<usize>,
}

/// Evaluate every rule of `catalog` against `records`.
///
/// Rules run in parallel and results keep catalog order. A misconfigured
/// rule aborts the run; a rule that cannot read the data is reported as
/// [`RuleStatus::Errored`] and the run continues.
pub fn run(
    catalog: &RuleCatalog,
    records: &RecordSet,
    ctx: &ValidationContext<'_>,
    options: &RunOptions,
) -> Result<ValidationReport, ValidationError> {
    let span = info_span!("validate", table = %records.kind(), rules = catalog.len());
    let _guard = span.enter();

    let started = Instant::now();
    let deadline = options.time_budget.map(|budget| started + budget);

    let evaluate_all = || {
        catalog
            .rules()
            .par_iter()
            .map(|rule| evaluate_rule(rule, records, ctx, deadline))
            .collect::<Vec<_>>()
    };
    let outcomes = match options.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(evaluate_all),
        None => evaluate_all(),
    };
    let results = outcomes.into_iter().collect::<Result<Vec<_>, _>>()?;

    let partial = results.iter().any(|r| r.status == RuleStatus::Skipped);
    if partial {
        warn!(
            skipped = results
                .iter()
                .filter(|r| r.status == RuleStatus::Skipped)
                .count(),
            "time budget exhausted; report is partial"
        );
    }

    let report = ValidationReport {
        scope: records.kind().label().to_string(),
        record_count: records.len(),
        results,
        partial,
        elapsed_ms: started.elapsed().as_millis() as u64,
    };
    info!(
        records = report.record_count,
        failed = report.count(RuleStatus::Fail),
        flagged = report.count(RuleStatus::Check),
        errored = report.count(RuleStatus::Errored),
        elapsed_ms = report.elapsed_ms,
        "validation complete"
    );
    Ok(report)
}

/// Run the catalog applicable to the record set's table kind.
pub fn run_table(
    records: &RecordSet,
    ctx: &ValidationContext<'_>,
    options: &RunOptions,
) -> Result<ValidationReport, ValidationError> {
    run(&RuleCatalog::for_table(records.kind()), records, ctx, options)
}

fn evaluate_rule(
    rule: &RuleDef,
    records: &RecordSet,
    ctx: &ValidationContext<'_>,
    deadline: Option<Instant>,
) -> Result<RuleResult, ValidationError> {
    if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
        debug!(rule = rule.name, "skipped");
        return Ok(RuleResult::skipped(rule));
    }

    let started = Instant::now();
    match evaluate(rule, records, ctx) {
        Ok(violators) => {
            debug!(
                rule = rule.name,
                violations = violators.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "rule evaluated"
            );
            Ok(RuleResult::completed(rule, violators))
        }
        Err(CheckError::Configuration(message)) => Err(ValidationError::Configuration {
            rule: rule.name.to_string(),
            message,
        }),
        Err(error) => {
            warn!(rule = rule.name, %error, "rule could not be evaluated");
            Ok(RuleResult::errored(rule, error.to_string()))
        }
    }
}
