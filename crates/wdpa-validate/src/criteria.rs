//! Allowed values for `INT_CRIT`.
//!
//! Ramsar and World Heritage sites report the criteria they were listed
//! under as a concatenation of roman numerals, always in ascending order,
//! e.g. `(i)(iii)(x)`.

use std::collections::HashSet;
use std::sync::LazyLock;

/// The ten criteria in their fixed order.
pub const CRITERIA: [&str; 10] = [
    "(i)", "(ii)", "(iii)", "(iv)", "(v)", "(vi)", "(vii)", "(viii)", "(ix)", "(x)",
];

pub const NOT_REPORTED: &str = "Not Reported";

static INTERNATIONAL_CRITERIA: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let mut values: HashSet<String> = ordered_combinations(&CRITERIA).into_iter().collect();
    values.insert(NOT_REPORTED.to_string());
    values
});

/// Every non-empty subset of `elements`, each joined in source order.
pub fn ordered_combinations(elements: &[&str]) -> Vec<String> {
    let n = elements.len();
    let mut subsets: Vec<Vec<usize>> = (1u32..(1u32 << n))
        .map(|mask| (0..n).filter(|bit| mask & (1 << bit) != 0).collect())
        .collect();
    // Shorter first, then lexicographic by position.
    subsets.sort();
    subsets.sort_by_key(Vec::len);
    subsets
        .into_iter()
        .map(|subset| subset.into_iter().map(|idx| elements[idx]).collect())
        .collect()
}

/// The precomputed set of valid `INT_CRIT` values.
pub fn international_criteria() -> &'static HashSet<String> {
    &INTERNATIONAL_CRITERIA
}
