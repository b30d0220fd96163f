use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use wdpa_model::{Field, RecordSet};

use super::CheckResult;

/// Characters not permitted in free-text fields.
pub const FORBIDDEN_CHARACTERS: [char; 7] = ['<', '>', '?', '*', '#', '\n', '\r'];

static FORBIDDEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[<>?*#\n\r]").expect("valid regex"));

/// Records whose `field` contains a forbidden character.
pub fn forbidden_character_check(records: &RecordSet, field: Field) -> CheckResult {
    let ids = records.identifiers()?;
    let values = records.text(field)?;
    Ok(values
        .iter()
        .zip(ids)
        .filter(|(value, _)| value.as_deref().is_some_and(|v| FORBIDDEN.is_match(v)))
        .map(|(_, id)| id)
        .collect::<BTreeSet<_>>())
}
