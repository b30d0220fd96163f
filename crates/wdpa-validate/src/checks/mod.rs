//! Check factories and bespoke checks.
//!
//! Every check is a pure function of a [`RecordSet`] returning the
//! identifiers of the violating records. [`evaluate`] dispatches a catalog
//! entry to the matching factory.

pub mod bespoke;
pub mod consistency;
pub mod forbidden;
pub mod magnitude;
pub mod membership;
pub mod outlier;

use std::collections::BTreeSet;

use wdpa_model::{Field, RecordSet};

use crate::catalog::{AllowedValues, Bespoke, CheckKind, RuleDef};
use crate::context::ValidationContext;
use crate::criteria::international_criteria;
use crate::error::CheckError;

pub use bespoke::{
    duplicate_record_id, int_crit_applicability, iucn_applicability, marine_area_positive,
    marine_bucket, marine_by_geometry, missing_values, no_take_area_equality, small_gis_area,
};
pub use consistency::group_consistency_check;
pub use forbidden::forbidden_character_check;
pub use magnitude::size_order_check;
pub use membership::{Allowed, Condition, membership_check};
pub use outlier::{OutlierParams, RatioBand, outlier_ratio_check, ratio_band};

/// Identifiers of the records violating a rule.
pub type Violators = BTreeSet<String>;

pub type CheckResult = Result<Violators, CheckError>;

fn resolve<'a>(
    values: AllowedValues,
    ctx: &'a ValidationContext<'_>,
) -> Result<Allowed<'a>, CheckError> {
    Ok(match values {
        AllowedValues::Fixed(values) => Allowed::Values(values),
        AllowedValues::Numbers(numbers) => Allowed::Numbers(numbers),
        AllowedValues::InternationalCriteria => Allowed::Set(international_criteria()),
        AllowedValues::StatusYears => Allowed::Set(ctx.status_years()),
        AllowedValues::CountryCodes => Allowed::Countries(
            ctx.country_codes()
                .ok_or(CheckError::MissingReference("country codes"))?,
        ),
    })
}

/// Evaluate one catalog entry against `records`.
pub fn evaluate(rule: &RuleDef, records: &RecordSet, ctx: &ValidationContext<'_>) -> CheckResult {
    let thresholds = ctx.thresholds();
    match rule.kind {
        CheckKind::Membership {
            field,
            allowed,
            condition,
        } => {
            let allowed = resolve(allowed, ctx)?;
            let condition = match condition {
                Some(spec) => Some(Condition {
                    field: spec.field,
                    values: resolve(spec.values, ctx)?,
                }),
                None => None,
            };
            membership_check(records, field, allowed, condition)
        }
        CheckKind::GroupConsistency { field } => {
            group_consistency_check(records, Field::AreaGroupId, field)
        }
        CheckKind::SizeOrder { smaller, larger } => {
            size_order_check(records, smaller, larger, thresholds.size_tolerance)
        }
        CheckKind::OutlierRatio { field_a, field_b } => outlier_ratio_check(
            records,
            field_a,
            field_b,
            OutlierParams {
                abs_diff_threshold: thresholds.max_abs_diff_km2,
                trim_max: thresholds.ratio_trim_max,
            },
        ),
        CheckKind::ForbiddenCharacters { field } => forbidden_character_check(records, field),
        CheckKind::Bespoke(check) => match check {
            Bespoke::DuplicateRecordId => duplicate_record_id(records),
            Bespoke::MarineByGeometry => {
                marine_by_geometry(records, thresholds.coast_min, thresholds.coast_max)
            }
            Bespoke::NoTakeAreaEquality => no_take_area_equality(records),
            Bespoke::IntCritApplicability => int_crit_applicability(records),
            Bespoke::IucnApplicability => iucn_applicability(records),
            Bespoke::SmallGisArea => small_gis_area(records, thresholds.min_gis_area_km2),
            Bespoke::MarineAreaPositive(area) => marine_area_positive(records, area),
            Bespoke::MissingValues => missing_values(records),
        },
    }
}
