//! Intra-group consistency: every parcel of one protected area must agree.

use std::collections::{BTreeSet, HashMap, HashSet};

use wdpa_model::{Field, RecordSet};

use super::CheckResult;

/// All records of any `group_key` group holding more than one distinct
/// value of `field`.
///
/// Null is a value of its own and equal to other nulls, so a group mixing
/// `"A"` and null is inconsistent while a group of nulls is not. Records
/// with a null group key belong to no group.
pub fn group_consistency_check(records: &RecordSet, group_key: Field, field: Field) -> CheckResult {
    let ids = records.identifiers()?;
    let keys = records.text(group_key)?;
    let values = records.text(field)?;

    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, key) in keys.iter().enumerate() {
        if let Some(key) = key {
            groups.entry(key.as_str()).or_default().push(idx);
        }
    }

    let mut violators = BTreeSet::new();
    for members in groups.values().filter(|members| members.len() > 1) {
        let distinct: HashSet<Option<&str>> =
            members.iter().map(|&idx| values[idx].as_deref()).collect();
        if distinct.len() > 1 {
            violators.extend(members.iter().map(|&idx| ids[idx].clone()));
        }
    }
    Ok(violators)
}
