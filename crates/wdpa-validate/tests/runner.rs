mod common;

use std::time::Duration;

use common::{clean_frame, country_codes, ids, text, with_column};
use wdpa_model::{Field, RecordSet, TableKind};
use wdpa_validate::{
    AllowedValues, Applicability, CheckKind, IdentifierKind, RuleCatalog, RuleDef, RuleStatus,
    RunOptions, ValidationContext, ValidationError, Verdict, run, run_table,
};

fn table(kind: TableKind, frame: polars::prelude::DataFrame) -> RecordSet {
    RecordSet::new(kind, frame)
}

#[test]
fn clean_polygons_pass_every_rule() {
    let codes = country_codes();
    let ctx = ValidationContext::default()
        .with_country_codes(&codes)
        .with_current_year(2024);
    let records = table(TableKind::Polygon, clean_frame(TableKind::Polygon, 5));

    let report = run_table(&records, &ctx, &RunOptions::default()).unwrap();
    assert_eq!(report.scope, "poly");
    assert_eq!(report.record_count, 5);
    assert_eq!(report.results.len(), 65);
    assert_eq!(report.count(RuleStatus::Pass), 65, "{:#?}", report.violation_index());
    assert!(report.violation_index().is_empty());
    assert!(!report.has_failures());
    assert!(!report.partial);
}

#[test]
fn clean_points_pass_every_rule() {
    let codes = country_codes();
    let ctx = ValidationContext::default()
        .with_country_codes(&codes)
        .with_current_year(2024);
    let records = table(TableKind::Point, clean_frame(TableKind::Point, 3));

    let report = run_table(&records, &ctx, &RunOptions::default()).unwrap();
    assert_eq!(report.scope, "point");
    assert_eq!(report.results.len(), 56);
    assert!(report.violation_index().is_empty());
}

#[test]
fn injected_violations_are_indexed_by_rule() {
    let codes = country_codes();
    let ctx = ValidationContext::default()
        .with_country_codes(&codes)
        .with_current_year(2024);
    let frame = clean_frame(TableKind::Polygon, 3);
    let frame = with_column(frame, text("ISO3", &["UGA", "XXX", "UGA"]));
    let frame = with_column(frame, text("PA_DEF", &["0", "1", "1"]));
    let frame = with_column(frame, text("STATUS_YR", &["1990", "1990", "2030"]));
    let records = table(TableKind::Polygon, frame);

    let report = run_table(&records, &ctx, &RunOptions::default()).unwrap();
    let index = report.violation_index();
    assert_eq!(index.len(), 3);
    assert_eq!(index.get("invalid_iso3"), Some(&ids(&["2"])));
    assert_eq!(index.get("invalid_pa_def"), Some(&ids(&["1"])));
    assert_eq!(index.get("invalid_status_yr"), Some(&ids(&["3"])));
    assert_eq!(report.count(RuleStatus::Fail), 3);
    assert!(report.has_failures());
}

#[test]
fn results_keep_catalog_order() {
    let codes = country_codes();
    let ctx = ValidationContext::default().with_country_codes(&codes);
    let records = table(TableKind::Point, clean_frame(TableKind::Point, 2));
    let catalog = RuleCatalog::for_table(TableKind::Point);

    let report = run(&catalog, &records, &ctx, &RunOptions::default()).unwrap();
    let names: Vec<&str> = report.results.iter().map(|r| r.rule.as_str()).collect();
    let expected: Vec<&str> = catalog.iter().map(|rule| rule.name).collect();
    assert_eq!(names, expected);
}

#[test]
fn missing_column_errors_only_dependent_rules() {
    let codes = country_codes();
    let ctx = ValidationContext::default()
        .with_country_codes(&codes)
        .with_current_year(2024);
    let frame = clean_frame(TableKind::Point, 2).drop("VERIF").unwrap();
    let records = table(TableKind::Point, frame);

    let report = run_table(&records, &ctx, &RunOptions::default()).unwrap();
    let errored: Vec<&str> = report
        .results
        .iter()
        .filter(|r| r.status == RuleStatus::Errored)
        .map(|r| r.rule.as_str())
        .collect();
    assert_eq!(errored, ["inconsistent_verif_same_wdpaid", "invalid_verif"]);
    assert!(report.result("invalid_verif").unwrap().error.is_some());
    assert_eq!(report.count(RuleStatus::Pass), 54);
    assert!(report.has_failures());
}

#[test]
fn country_rules_error_without_reference_list() {
    let ctx = ValidationContext::default().with_current_year(2024);
    let records = table(TableKind::Point, clean_frame(TableKind::Point, 2));

    let report = run_table(&records, &ctx, &RunOptions::default()).unwrap();
    for rule in ["invalid_iso3", "invalid_parent_iso3"] {
        let result = report.result(rule).unwrap();
        assert_eq!(result.status, RuleStatus::Errored);
        assert!(result.error.as_deref().unwrap().contains("country codes"));
    }
    assert_eq!(report.count(RuleStatus::Errored), 2);
}

static EMPTY_ALLOWED: RuleDef = RuleDef {
    name: "broken_rule",
    description: "membership with nothing allowed",
    applies_to: Applicability::Both,
    verdict: Verdict::Fail,
    identifier: IdentifierKind::RecordId,
    kind: CheckKind::Membership {
        field: Field::PaDef,
        allowed: AllowedValues::Fixed(&[]),
        condition: None,
    },
};

#[test]
fn misconfigured_rule_aborts_the_run() {
    let ctx = ValidationContext::default();
    let records = table(TableKind::Point, clean_frame(TableKind::Point, 1));
    let catalog = RuleCatalog::from_rules(vec![&EMPTY_ALLOWED]);

    let err = run(&catalog, &records, &ctx, &RunOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Configuration { ref rule, .. } if rule == "broken_rule"
    ));
}

#[test]
fn exhausted_budget_skips_rules_and_marks_report_partial() {
    let ctx = ValidationContext::default();
    let records = table(TableKind::Point, clean_frame(TableKind::Point, 2));
    let options = RunOptions {
        time_budget: Some(Duration::ZERO),
        threads: None,
    };

    let report = run_table(&records, &ctx, &options).unwrap();
    assert!(report.partial);
    assert_eq!(report.count(RuleStatus::Skipped), 56);
    assert!(!report.has_failures());
}

#[test]
fn dedicated_pool_gives_the_same_results() {
    let codes = country_codes();
    let ctx = ValidationContext::default()
        .with_country_codes(&codes)
        .with_current_year(2024);
    let frame = with_column(
        clean_frame(TableKind::Polygon, 4),
        text("NAME", &["A", "B#", "C", "D"]),
    );
    let records = table(TableKind::Polygon, frame);

    let shared = run_table(&records, &ctx, &RunOptions::default()).unwrap();
    let dedicated = run_table(
        &records,
        &ctx,
        &RunOptions {
            time_budget: None,
            threads: Some(2),
        },
    )
    .unwrap();
    assert_eq!(shared.violation_index(), dedicated.violation_index());
    assert_eq!(
        dedicated.violation_index().get("forbidden_character_name"),
        Some(&ids(&["2"]))
    );
}
