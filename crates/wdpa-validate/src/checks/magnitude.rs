use std::collections::BTreeSet;

use wdpa_model::{Field, RecordSet};

use super::CheckResult;
use crate::error::CheckError;

/// Records where `smaller` exceeds `larger * tolerance`. Missing values are never flagged.
pub fn size_order_check(
    records: &RecordSet,
    smaller: Field,
    larger: Field,
    tolerance: f64,
) -> CheckResult {
    if smaller == larger {
        return Err(CheckError::Configuration(format!(
            "size order compares {smaller} with itself"
        )));
    }
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(CheckError::Configuration(format!(
            "size order tolerance must be positive, got {tolerance}"
        )));
    }

    let ids = records.identifiers()?;
    let small = records.numeric(smaller)?;
    let large = records.numeric(larger)?;

    Ok(small
        .iter()
        .zip(&large)
        .zip(ids)
        .filter_map(|((s, l), id)| match (s, l) {
            (Some(s), Some(l)) if *s > *l * tolerance => Some(id),
            _ => None,
        })
        .collect::<BTreeSet<_>>())
}
