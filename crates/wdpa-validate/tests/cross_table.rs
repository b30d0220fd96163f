mod common;

use common::{ids, opt_text, polygons, records, source_table, text};
use wdpa_model::{RecordSet, TableKind};
use wdpa_validate::{
    IntegrityInput, OverlapKey, RuleStatus, cross_table_duplicate,
    metadata_referenced_but_missing, metadata_unused, run_integrity,
};

fn points(columns: Vec<polars::prelude::Column>) -> RecordSet {
    records(TableKind::Point, columns)
}

#[test]
fn record_id_in_both_tables_is_reported_from_polygons() {
    let polys = polygons(vec![
        text("WDPAID", &["1", "2", "3"]),
        text("WDPA_PID", &["1", "2", "3"]),
    ]);
    let pts = points(vec![text("WDPAID", &["3", "4"]), text("WDPA_PID", &["3", "4"])]);

    let result = cross_table_duplicate(&polys, &pts, OverlapKey::RecordId).unwrap();
    assert_eq!(result, ids(&["3"]));
}

#[test]
fn shared_area_group_is_an_overlap() {
    let polys = polygons(vec![
        text("WDPAID", &["10", "10", "20"]),
        text("WDPA_PID", &["10_A", "10_B", "20_A"]),
    ]);
    let pts = points(vec![
        text("WDPAID", &["20", "30"]),
        text("WDPA_PID", &["20_B", "30"]),
    ]);

    assert!(
        cross_table_duplicate(&polys, &pts, OverlapKey::RecordId)
            .unwrap()
            .is_empty()
    );
    let result = cross_table_duplicate(&polys, &pts, OverlapKey::AreaGroupId).unwrap();
    assert_eq!(result, ids(&["20_A"]));
}

#[test]
fn unknown_or_missing_metadata_reference_is_reported() {
    let polys = polygons(vec![
        text("WDPA_PID", &["a", "b", "c"]),
        opt_text("METADATAID", &[Some("1"), Some("2"), None]),
    ]);
    let source = source_table(&["1", "3"]);

    let result = metadata_referenced_but_missing(&polys, &source).unwrap();
    assert_eq!(result, ids(&["b", "c"]));
}

#[test]
fn source_rows_used_by_neither_table_are_unused() {
    let polys = polygons(vec![
        text("WDPA_PID", &["a", "b"]),
        text("METADATAID", &["1", "2"]),
    ]);
    let pts = points(vec![text("WDPA_PID", &["c"]), text("METADATAID", &["4"])]);
    let source = source_table(&["1", "3", "4"]);

    let result = metadata_unused(&pts, &polys, &source).unwrap();
    assert_eq!(result, ids(&["3"]));
}

#[test]
fn single_unused_source_row_is_still_reported() {
    let polys = polygons(vec![text("WDPA_PID", &["a"]), text("METADATAID", &["1"])]);
    let pts = points(vec![text("WDPA_PID", &["b"]), text("METADATAID", &["1"])]);
    let source = source_table(&["1", "5"]);

    let report = run_integrity(&IntegrityInput {
        polygons: &polys,
        points: &pts,
        source: &source,
    });
    let unused = report.result("metaid_only_in_metadata").unwrap();
    assert_eq!(unused.status, RuleStatus::Check);
    assert_eq!(unused.violators, ids(&["5"]));
}

#[test]
fn fully_referenced_source_passes() {
    let polys = polygons(vec![text("WDPA_PID", &["a"]), text("METADATAID", &["1"])]);
    let pts = points(vec![text("WDPA_PID", &["b"]), text("METADATAID", &["2"])]);
    let source = source_table(&["1", "2"]);

    assert!(metadata_unused(&pts, &polys, &source).unwrap().is_empty());
}

#[test]
fn integrity_report_covers_every_rule() {
    let polys = polygons(vec![
        text("WDPAID", &["1", "2"]),
        text("WDPA_PID", &["1", "2"]),
        text("METADATAID", &["7", "8"]),
    ]);
    let pts = points(vec![
        text("WDPAID", &["2"]),
        text("WDPA_PID", &["p"]),
        text("METADATAID", &["9"]),
    ]);
    let source = source_table(&["7", "8"]);

    let report = run_integrity(&IntegrityInput {
        polygons: &polys,
        points: &pts,
        source: &source,
    });
    assert_eq!(report.scope, "integrity");
    assert_eq!(report.record_count, 5);

    let statuses: Vec<(&str, RuleStatus)> = report
        .results
        .iter()
        .map(|r| (r.rule.as_str(), r.status))
        .collect();
    assert_eq!(
        statuses,
        [
            ("overlap_wdpa_pid", RuleStatus::Pass),
            ("overlap_wdpaid", RuleStatus::Fail),
            ("metaid_only_in_data", RuleStatus::Fail),
            ("metaid_only_in_metadata", RuleStatus::Pass),
        ]
    );
    assert_eq!(
        report.result("metaid_only_in_data").unwrap().violators,
        ids(&["p"])
    );
    assert!(report.has_failures());
}

#[test]
fn missing_metadata_column_errors_metadata_rules() {
    let polys = polygons(vec![text("WDPAID", &["1"]), text("WDPA_PID", &["1"])]);
    let pts = points(vec![text("WDPAID", &["2"]), text("WDPA_PID", &["2"])]);
    let source = source_table(&["1"]);

    let report = run_integrity(&IntegrityInput {
        polygons: &polys,
        points: &pts,
        source: &source,
    });
    assert_eq!(report.count(RuleStatus::Pass), 2);
    assert_eq!(report.count(RuleStatus::Errored), 2);
}
