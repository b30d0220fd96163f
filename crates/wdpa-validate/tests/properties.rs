mod common;

use std::collections::{BTreeSet, HashMap};

use common::{opt_text, polygons, text};
use proptest::prelude::*;
use wdpa_model::Field;
use wdpa_validate::checks::{
    Allowed, Condition, duplicate_record_id, group_consistency_check, membership_check,
};

fn pid_list(values: &[String]) -> Vec<&str> {
    values.iter().map(String::as_str).collect()
}

/// Unique identifiers `r0`, `r1`, ... for `n` records.
fn row_ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("r{i}")).collect()
}

proptest! {
    #[test]
    fn duplicates_are_exactly_repeated_ids(raw in prop::collection::vec(0u8..20, 1..60)) {
        let pids: Vec<String> = raw.iter().map(u8::to_string).collect();
        let records = polygons(vec![text("WDPA_PID", &pid_list(&pids))]);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for pid in &pids {
            *counts.entry(pid.as_str()).or_default() += 1;
        }
        let expected: BTreeSet<String> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(pid, _)| pid.to_string())
            .collect();

        prop_assert_eq!(duplicate_record_id(&records).unwrap(), expected);
    }

    #[test]
    fn conditional_membership_flags_only_matching_rows(
        rows in prop::collection::vec(
            (prop::sample::select(vec!["0", "1", "2"]), prop::option::of(prop::sample::select(vec!["All", "Part", "Not Applicable"]))),
            1..40,
        )
    ) {
        let ids = row_ids(rows.len());
        let marine: Vec<&str> = rows.iter().map(|(m, _)| *m).collect();
        let no_take: Vec<Option<&str>> = rows.iter().map(|(_, n)| *n).collect();
        let records = polygons(vec![
            text("WDPA_PID", &pid_list(&ids)),
            text("MARINE", &marine),
            opt_text("NO_TAKE", &no_take),
        ]);

        let result = membership_check(
            &records,
            Field::NoTake,
            Allowed::Values(&["Not Applicable"]),
            Some(Condition { field: Field::Marine, values: Allowed::Values(&["0"]) }),
        )
        .unwrap();

        for (idx, (marine, no_take)) in rows.iter().enumerate() {
            let expected = *marine == "0" && *no_take != Some("Not Applicable");
            prop_assert_eq!(result.contains(&ids[idx]), expected);
        }
    }

    #[test]
    fn groups_are_flagged_all_or_nothing(
        rows in prop::collection::vec(
            (0u8..6, prop::option::of(prop::sample::select(vec!["A", "B"]))),
            1..40,
        )
    ) {
        let ids = row_ids(rows.len());
        let groups: Vec<String> = rows.iter().map(|(g, _)| g.to_string()).collect();
        let values: Vec<Option<&str>> = rows.iter().map(|(_, v)| *v).collect();
        let records = polygons(vec![
            text("WDPAID", &pid_list(&groups)),
            text("WDPA_PID", &pid_list(&ids)),
            opt_text("DESIG", &values),
        ]);

        let result = group_consistency_check(&records, Field::AreaGroupId, Field::Desig).unwrap();

        let mut distinct: HashMap<u8, BTreeSet<Option<&str>>> = HashMap::new();
        for (group, value) in &rows {
            distinct.entry(*group).or_default().insert(*value);
        }
        for (idx, (group, _)) in rows.iter().enumerate() {
            prop_assert_eq!(result.contains(&ids[idx]), distinct[group].len() > 1);
        }
    }
}
