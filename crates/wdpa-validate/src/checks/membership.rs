//! Value-membership checks, optionally gated by a condition on another field.

use std::collections::{BTreeSet, HashSet};

use wdpa_model::{CountryCodes, Field, RecordSet};

use super::CheckResult;
use crate::error::CheckError;

/// A set of permitted cell values.
#[derive(Debug, Clone, Copy)]
pub enum Allowed<'a> {
    Values(&'a [&'a str]),
    Set(&'a HashSet<String>),
    Countries(&'a CountryCodes),
    /// Numeric values, compared after parsing the cell as a number.
    Numbers(&'a [f64]),
}

impl Allowed<'_> {
    /// Exact, case-sensitive match of a text cell.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Allowed::Values(values) => values.contains(&value),
            Allowed::Set(set) => set.contains(value),
            Allowed::Countries(codes) => codes.contains(value),
            Allowed::Numbers(numbers) => value
                .trim()
                .parse::<f64>()
                .is_ok_and(|v| numbers.contains(&v)),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Allowed::Values(values) => values.is_empty(),
            Allowed::Set(set) => set.is_empty(),
            Allowed::Countries(codes) => codes.is_empty(),
            Allowed::Numbers(numbers) => numbers.is_empty(),
        }
    }

    /// Per-row membership of `field`; null cells are never members.
    fn members(&self, records: &RecordSet, field: Field) -> Result<Vec<bool>, CheckError> {
        Ok(match self {
            Allowed::Numbers(numbers) => records
                .numeric(field)?
                .into_iter()
                .map(|v| v.is_some_and(|v| numbers.contains(&v)))
                .collect(),
            _ => records
                .text(field)?
                .iter()
                .map(|v| v.as_deref().is_some_and(|v| self.contains(v)))
                .collect(),
        })
    }
}

/// Restricts a membership check to records whose `field` is in `values`.
#[derive(Debug, Clone, Copy)]
pub struct Condition<'a> {
    pub field: Field,
    pub values: Allowed<'a>,
}

/// Records whose `field` is not in `allowed` (and, when a condition is
/// given, whose condition field is in the condition's values).
///
/// A null value is never allowed. A null condition value never matches.
pub fn membership_check(
    records: &RecordSet,
    field: Field,
    allowed: Allowed<'_>,
    condition: Option<Condition<'_>>,
) -> CheckResult {
    if allowed.is_empty() {
        return Err(CheckError::Configuration(format!(
            "no allowed values given for {field}"
        )));
    }
    if let Some(condition) = &condition
        && condition.values.is_empty()
    {
        return Err(CheckError::Configuration(format!(
            "no condition values given for {}",
            condition.field
        )));
    }

    let ids = records.identifiers()?;
    let valid = allowed.members(records, field)?;
    let applies = match condition {
        Some(condition) => condition.values.members(records, condition.field)?,
        None => vec![true; ids.len()],
    };

    Ok(ids
        .into_iter()
        .zip(valid.into_iter().zip(applies))
        .filter_map(|(id, (valid, applies))| (applies && !valid).then_some(id))
        .collect::<BTreeSet<_>>())
}
