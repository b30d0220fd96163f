mod common;

use common::{ids, num, opt_num, opt_text, polygons, records, text};
use wdpa_model::{Field, TableKind};
use wdpa_validate::checks::forbidden::FORBIDDEN_CHARACTERS;
use wdpa_validate::checks::{
    duplicate_record_id, forbidden_character_check, int_crit_applicability, iucn_applicability,
    marine_area_positive, marine_bucket, marine_by_geometry, missing_values,
    no_take_area_equality, small_gis_area,
};

#[test]
fn duplicates_are_reported_once() {
    let records = polygons(vec![text("WDPA_PID", &["9421", "9421", "9421", "555"])]);
    assert_eq!(duplicate_record_id(&records).unwrap(), ids(&["9421"]));
}

#[test]
fn unique_identifiers_have_no_duplicates() {
    let records = polygons(vec![text("WDPA_PID", &["1", "2", "3"])]);
    assert!(duplicate_record_id(&records).unwrap().is_empty());
}

// --- marine ---

#[test]
fn marine_bucket_boundaries_are_closed() {
    assert_eq!(marine_bucket(0.0, 0.1, 0.9), Some("0"));
    assert_eq!(marine_bucket(0.1, 0.1, 0.9), Some("0"));
    assert_eq!(marine_bucket(0.5, 0.1, 0.9), Some("1"));
    assert_eq!(marine_bucket(0.9, 0.1, 0.9), Some("2"));
    assert_eq!(marine_bucket(1.0, 0.1, 0.9), Some("2"));
    assert_eq!(marine_bucket(f64::NAN, 0.1, 0.9), None);
}

#[test]
fn marine_flag_must_match_marine_share() {
    let records = polygons(vec![
        text("WDPA_PID", &["land", "coast", "sea", "mislabelled"]),
        text("MARINE", &["0", "1", "2", "1"]),
        num("GIS_M_AREA", &[5.0, 50.0, 95.0, 5.0]),
        num("GIS_AREA", &[100.0, 100.0, 100.0, 100.0]),
    ]);
    let result = marine_by_geometry(&records, 0.1, 0.9).unwrap();
    assert_eq!(result, ids(&["mislabelled"]));
}

#[test]
fn uncomputable_marine_share_is_flagged() {
    let records = polygons(vec![
        text("WDPA_PID", &["zero", "missing"]),
        text("MARINE", &["0", "0"]),
        opt_num("GIS_M_AREA", &[Some(0.0), None]),
        num("GIS_AREA", &[0.0, 10.0]),
    ]);
    let result = marine_by_geometry(&records, 0.1, 0.9).unwrap();
    assert_eq!(result, ids(&["zero", "missing"]));
}

#[test]
fn coastal_areas_need_positive_marine_area() {
    let records = polygons(vec![
        text("WDPA_PID", &["1", "2", "3", "4"]),
        text("MARINE", &["1", "2", "0", "2"]),
        num("REP_M_AREA", &[0.0, -1.0, 0.0, 3.5]),
    ]);
    let result = marine_area_positive(&records, Field::RepMArea).unwrap();
    assert_eq!(result, ids(&["1", "2"]));
}

// --- no take ---

#[test]
fn fully_no_take_area_must_equal_marine_area() {
    let records = polygons(vec![
        text("WDPA_PID", &["equal", "differs", "partial", "missing"]),
        text("NO_TAKE", &["All", "All", "Part", "All"]),
        opt_num("REP_M_AREA", &[Some(10.0), Some(10.0), Some(10.0), Some(4.0)]),
        opt_num("NO_TK_AREA", &[Some(10.0), Some(9.5), Some(2.0), None]),
    ]);
    let result = no_take_area_equality(&records).unwrap();
    assert_eq!(result, ids(&["differs", "missing"]));
}

// --- applicability ---

#[test]
fn international_criteria_only_for_ramsar_and_whs() {
    let records = polygons(vec![
        text("WDPA_PID", &["ramsar", "park", "park_na"]),
        text(
            "DESIG_ENG",
            &[
                "Ramsar Site, Wetland of International Importance",
                "National Park",
                "National Park",
            ],
        ),
        text("INT_CRIT", &["(i)(ii)", "(iv)", "Not Applicable"]),
    ]);
    let result = int_crit_applicability(&records).unwrap();
    assert_eq!(result, ids(&["park"]));
}

#[test]
fn iucn_category_outside_unesco_and_whs() {
    let records = polygons(vec![
        text("WDPA_PID", &["park", "park_na", "whs", "bad"]),
        text(
            "DESIG_ENG",
            &[
                "National Park",
                "National Park",
                "World Heritage Site (natural or mixed)",
                "Nature Reserve",
            ],
        ),
        opt_text(
            "IUCN_CAT",
            &[Some("II"), Some("Not Applicable"), Some("Not Applicable"), None],
        ),
    ]);
    let result = iucn_applicability(&records).unwrap();
    assert_eq!(result, ids(&["park_na", "bad"]));
}

// --- area ---

#[test]
fn tiny_gis_areas_are_flagged() {
    let records = polygons(vec![
        text("WDPA_PID", &["1", "2", "3", "4"]),
        opt_num("GIS_AREA", &[Some(0.0), Some(0.0001), Some(0.01), None]),
    ]);
    assert_eq!(small_gis_area(&records, 0.0001).unwrap(), ids(&["1", "2"]));
}

// --- missing values ---

#[test]
fn nulls_in_expected_columns_are_flagged() {
    let records = records(
        TableKind::Point,
        vec![
            text("WDPA_PID", &["1", "2", "3"]),
            opt_text("NAME", &[Some("A"), None, Some("C")]),
            opt_num("REP_AREA", &[Some(1.0), Some(2.0), None]),
            // Not an expected column; its nulls are ignored.
            opt_text("COMMENTS", &[None, None, None]),
        ],
    );
    assert_eq!(missing_values(&records).unwrap(), ids(&["2", "3"]));
}

// --- forbidden characters ---

#[test]
fn every_forbidden_character_is_detected() {
    let names: Vec<String> = FORBIDDEN_CHARACTERS
        .iter()
        .map(|c| format!("Park{c}Name"))
        .collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let pids: Vec<String> = (0..names.len()).map(|i| i.to_string()).collect();
    let pid_refs: Vec<&str> = pids.iter().map(String::as_str).collect();

    let records = polygons(vec![text("WDPA_PID", &pid_refs), text("NAME", &name_refs)]);
    let result = forbidden_character_check(&records, Field::Name).unwrap();
    assert_eq!(result.len(), FORBIDDEN_CHARACTERS.len());
}

#[test]
fn ordinary_punctuation_is_allowed() {
    let records = polygons(vec![
        text("WDPA_PID", &["1", "2", "3"]),
        opt_text(
            "MANG_AUTH",
            &[Some("Parks & Wildlife (North), Dept."), None, Some("Authority #2")],
        ),
    ]);
    let result = forbidden_character_check(&records, Field::MangAuth).unwrap();
    assert_eq!(result, ids(&["3"]));
}
