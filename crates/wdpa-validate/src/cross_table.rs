//! Integrity checks spanning the polygon, point and source tables.
//!
//! - **Overlap**: a protected area is published either as a polygon or as
//!   a point, never both, so `WDPA_PID` and `WDPAID` must not occur in both
//!   tables.
//! - **Metadata references**: every `METADATAID` used by a record must have
//!   a row in the source table, and every source row should be used.

use std::collections::{BTreeSet, HashSet};
use std::time::Instant;

use tracing::{debug, info, info_span, warn};
use wdpa_model::{Field, RecordSet};

use crate::catalog::{IdentifierKind, Verdict};
use crate::checks::CheckResult;
use crate::error::CheckError;
use crate::report::{RuleResult, RuleStatus, ValidationReport};

/// Key compared between the polygon and point tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapKey {
    RecordId,
    AreaGroupId,
}

impl OverlapKey {
    pub fn field(self) -> Field {
        match self {
            OverlapKey::RecordId => Field::RecordId,
            OverlapKey::AreaGroupId => Field::AreaGroupId,
        }
    }
}

fn value_set(records: &RecordSet, field: Field) -> Result<HashSet<String>, CheckError> {
    Ok(records.text(field)?.into_iter().flatten().collect())
}

/// Polygon record identifiers whose `key` value also occurs in the point table.
pub fn cross_table_duplicate(
    polygons: &RecordSet,
    points: &RecordSet,
    key: OverlapKey,
) -> CheckResult {
    let field = key.field();
    let in_points = value_set(points, field)?;
    let ids = polygons.identifiers()?;
    let values = polygons.text(field)?;

    Ok(values
        .iter()
        .zip(ids)
        .filter(|(value, _)| value.as_ref().is_some_and(|v| in_points.contains(v)))
        .map(|(_, id)| id)
        .collect())
}

/// Records whose `METADATAID` has no row in the source table.
///
/// A null `METADATAID` references nothing and is always reported.
pub fn metadata_referenced_but_missing(records: &RecordSet, source: &RecordSet) -> CheckResult {
    let known = value_set(source, Field::MetadataId)?;
    let ids = records.identifiers()?;
    let references = records.text(Field::MetadataId)?;

    Ok(references
        .iter()
        .zip(ids)
        .filter(|(reference, _)| !reference.as_ref().is_some_and(|r| known.contains(r)))
        .map(|(_, id)| id)
        .collect())
}

/// Source `METADATAID`s referenced by neither the point nor the polygon table.
pub fn metadata_unused(points: &RecordSet, polygons: &RecordSet, source: &RecordSet) -> CheckResult {
    let mut used = value_set(points, Field::MetadataId)?;
    used.extend(value_set(polygons, Field::MetadataId)?);

    Ok(source
        .identifiers_of(Field::MetadataId)?
        .into_iter()
        .filter(|id| !used.contains(id))
        .collect::<BTreeSet<_>>())
}

/// The three tables of one WDPA release.
#[derive(Debug, Clone, Copy)]
pub struct IntegrityInput<'a> {
    pub polygons: &'a RecordSet,
    pub points: &'a RecordSet,
    pub source: &'a RecordSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityCheck {
    Overlap(OverlapKey),
    MetadataOnlyInData,
    MetadataOnlyInMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityRule {
    pub name: &'static str,
    pub description: &'static str,
    pub verdict: Verdict,
    pub identifier: IdentifierKind,
    pub check: IntegrityCheck,
}

pub const INTEGRITY_RULES: &[IntegrityRule] = &[
    IntegrityRule {
        name: "overlap_wdpa_pid",
        description: "WDPA_PID occurs in both the polygon and the point table",
        verdict: Verdict::Fail,
        identifier: IdentifierKind::RecordId,
        check: IntegrityCheck::Overlap(OverlapKey::RecordId),
    },
    IntegrityRule {
        name: "overlap_wdpaid",
        description: "WDPAID occurs in both the polygon and the point table",
        verdict: Verdict::Fail,
        identifier: IdentifierKind::RecordId,
        check: IntegrityCheck::Overlap(OverlapKey::AreaGroupId),
    },
    IntegrityRule {
        name: "metaid_only_in_data",
        description: "METADATAID is used by a record but missing from the source table",
        verdict: Verdict::Fail,
        identifier: IdentifierKind::RecordId,
        check: IntegrityCheck::MetadataOnlyInData,
    },
    IntegrityRule {
        name: "metaid_only_in_metadata",
        description: "source table row is not referenced by any record",
        verdict: Verdict::Check,
        identifier: IdentifierKind::MetadataId,
        check: IntegrityCheck::MetadataOnlyInMetadata,
    },
];

impl IntegrityRule {
    pub fn evaluate(&self, input: &IntegrityInput<'_>) -> CheckResult {
        match self.check {
            IntegrityCheck::Overlap(key) => cross_table_duplicate(input.polygons, input.points, key),
            IntegrityCheck::MetadataOnlyInData => {
                let mut violators = metadata_referenced_but_missing(input.polygons, input.source)?;
                violators.extend(metadata_referenced_but_missing(input.points, input.source)?);
                Ok(violators)
            }
            IntegrityCheck::MetadataOnlyInMetadata => {
                metadata_unused(input.points, input.polygons, input.source)
            }
        }
    }
}

/// Run every integrity rule. Data-shape problems mark a rule as errored.
pub fn run_integrity(input: &IntegrityInput<'_>) -> ValidationReport {
    let span = info_span!("integrity");
    let _guard = span.enter();
    let started = Instant::now();

    let results: Vec<RuleResult> = INTEGRITY_RULES
        .iter()
        .map(|rule| {
            let result = match rule.evaluate(input) {
                Ok(violators) => RuleResult::new(
                    rule.name,
                    rule.description,
                    rule.verdict,
                    rule.identifier,
                    violators,
                ),
                Err(error) => {
                    warn!(rule = rule.name, %error, "integrity rule could not be evaluated");
                    RuleResult {
                        status: RuleStatus::Errored,
                        error: Some(error.to_string()),
                        ..RuleResult::new(
                            rule.name,
                            rule.description,
                            rule.verdict,
                            rule.identifier,
                            BTreeSet::new(),
                        )
                    }
                }
            };
            debug!(rule = rule.name, violations = result.violation_count(), "rule evaluated");
            result
        })
        .collect();

    let report = ValidationReport {
        scope: "integrity".to_string(),
        record_count: input.polygons.len() + input.points.len() + input.source.len(),
        results,
        partial: false,
        elapsed_ms: started.elapsed().as_millis() as u64,
    };
    info!(
        failed = report.count(RuleStatus::Fail),
        flagged = report.count(RuleStatus::Check),
        errored = report.count(RuleStatus::Errored),
        "integrity checks complete"
    );
    report
}
