//! One-off rules that do not fit a factory.

use std::collections::{BTreeSet, HashMap};

use wdpa_model::{Field, RecordSet};

use super::CheckResult;
use crate::catalog::values::{
    IUCN_CAT_GENERAL, NOT_APPLICABLE, RAMSAR_WHS_DESIG_ENG, UNESCO_WHS_DESIG_ENG,
};

/// Record identifiers occurring more than once, each reported once.
pub fn duplicate_record_id(records: &RecordSet) -> CheckResult {
    let ids = records.identifiers()?;
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for id in &ids {
        *counts.entry(id.as_str()).or_default() += 1;
    }
    Ok(counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id.to_string())
        .collect())
}

/// Marine class implied by the share of the GIS area that is marine.
///
/// Boundaries are closed on the outer classes: a proportion equal to
/// `coast_min` is terrestrial, one equal to `coast_max` is marine.
pub fn marine_bucket(proportion: f64, coast_min: f64, coast_max: f64) -> Option<&'static str> {
    if proportion.is_nan() {
        None
    } else if proportion <= coast_min {
        Some("0")
    } else if proportion >= coast_max {
        Some("2")
    } else {
        Some("1")
    }
}

/// Records whose `MARINE` value disagrees with `GIS_M_AREA / GIS_AREA`.
/// A proportion that cannot be computed never agrees.
pub fn marine_by_geometry(records: &RecordSet, coast_min: f64, coast_max: f64) -> CheckResult {
    let ids = records.identifiers()?;
    let marine = records.text(Field::Marine)?;
    let gis_m = records.numeric(Field::GisMArea)?;
    let gis = records.numeric(Field::GisArea)?;

    let mut violators = BTreeSet::new();
    for idx in 0..ids.len() {
        let bucket = gis_m[idx]
            .zip(gis[idx])
            .and_then(|(m, total)| marine_bucket(m / total, coast_min, coast_max));
        let agrees = matches!((bucket, marine[idx].as_deref()), (Some(b), Some(m)) if b == m);
        if !agrees {
            violators.insert(ids[idx].clone());
        }
    }
    Ok(violators)
}

/// `NO_TAKE = "All"` requires `NO_TK_AREA` to equal `REP_M_AREA` exactly.
pub fn no_take_area_equality(records: &RecordSet) -> CheckResult {
    let ids = records.identifiers()?;
    let no_take = records.text(Field::NoTake)?;
    let rep_m = records.numeric(Field::RepMArea)?;
    let no_tk = records.numeric(Field::NoTkArea)?;

    let mut violators = BTreeSet::new();
    for idx in 0..ids.len() {
        if no_take[idx].as_deref() != Some("All") {
            continue;
        }
        let equal = matches!((rep_m[idx], no_tk[idx]), (Some(a), Some(b)) if a == b);
        if !equal {
            violators.insert(ids[idx].clone());
        }
    }
    Ok(violators)
}

/// Records where neither `field` is in `allowed` nor `other` is in `other_allowed`.
fn outside_both(
    records: &RecordSet,
    field: Field,
    allowed: &[&str],
    other: Field,
    other_allowed: &[&str],
) -> CheckResult {
    let ids = records.identifiers()?;
    let values = records.text(field)?;
    let others = records.text(other)?;
    let within = |value: &Option<String>, set: &[&str]| {
        value.as_deref().is_some_and(|v| set.contains(&v))
    };

    Ok(ids
        .iter()
        .enumerate()
        .filter(|&(idx, _)| !within(&values[idx], allowed) && !within(&others[idx], other_allowed))
        .map(|(_, id)| id.clone())
        .collect())
}

/// Only Ramsar sites and World Heritage sites may report international criteria.
pub fn int_crit_applicability(records: &RecordSet) -> CheckResult {
    outside_both(
        records,
        Field::DesigEng,
        RAMSAR_WHS_DESIG_ENG,
        Field::IntCrit,
        NOT_APPLICABLE,
    )
}

/// Outside UNESCO-MAB and World Heritage designations, `IUCN_CAT` must be a
/// category (or "Not Reported"/"Not Assigned").
pub fn iucn_applicability(records: &RecordSet) -> CheckResult {
    outside_both(
        records,
        Field::IucnCat,
        IUCN_CAT_GENERAL,
        Field::DesigEng,
        UNESCO_WHS_DESIG_ENG,
    )
}

pub fn small_gis_area(records: &RecordSet, min_area: f64) -> CheckResult {
    let ids = records.identifiers()?;
    let gis = records.numeric(Field::GisArea)?;
    Ok(gis
        .iter()
        .zip(ids)
        .filter(|(area, _)| area.is_some_and(|a| a <= min_area))
        .map(|(_, id)| id)
        .collect())
}

/// A coastal or marine area (`MARINE` 1 or 2) must have a positive `area`.
pub fn marine_area_positive(records: &RecordSet, area: Field) -> CheckResult {
    let ids = records.identifiers()?;
    let marine = records.text(Field::Marine)?;
    let values = records.numeric(area)?;

    Ok((0..ids.len())
        .filter(|&idx| {
            matches!(marine[idx].as_deref(), Some("1" | "2"))
                && values[idx].is_some_and(|v| v <= 0.0)
        })
        .map(|idx| ids[idx].clone())
        .collect())
}

/// Records with a null in any expected column present in the table.
pub fn missing_values(records: &RecordSet) -> CheckResult {
    let ids = records.identifiers()?;
    let mut flagged = vec![false; ids.len()];
    for column in records.kind().expected_columns() {
        if !records.has_column(column) {
            continue;
        }
        for (idx, value) in records.text_column(column)?.iter().enumerate() {
            if value.is_none() {
                flagged[idx] = true;
            }
        }
    }
    Ok(ids
        .into_iter()
        .zip(flagged)
        .filter_map(|(id, flagged)| flagged.then_some(id))
        .collect())
}
