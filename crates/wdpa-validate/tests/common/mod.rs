#![allow(dead_code)]

use std::collections::BTreeSet;

use polars::prelude::*;
use wdpa_model::{CountryCodes, RecordSet, TableKind};

pub fn text(name: &str, values: &[&str]) -> Column {
    Column::new(name.into(), values.to_vec())
}

pub fn opt_text(name: &str, values: &[Option<&str>]) -> Column {
    Column::new(name.into(), values.to_vec())
}

pub fn num(name: &str, values: &[f64]) -> Column {
    Column::new(name.into(), values.to_vec())
}

pub fn opt_num(name: &str, values: &[Option<f64>]) -> Column {
    Column::new(name.into(), values.to_vec())
}

pub fn records(kind: TableKind, columns: Vec<Column>) -> RecordSet {
    RecordSet::new(kind, DataFrame::new(columns).unwrap())
}

pub fn polygons(columns: Vec<Column>) -> RecordSet {
    records(TableKind::Polygon, columns)
}

pub fn ids(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

pub fn country_codes() -> CountryCodes {
    ["UGA", "KEN", "TZA", "GBR"].into_iter().collect()
}

/// A table of `n` records that passes every rule. Record `i` has
/// `WDPAID` `i + 1` and `WDPA_PID` `"{i + 1}"`.
pub fn clean_frame(kind: TableKind, n: usize) -> DataFrame {
    let pids: Vec<String> = (1..=n).map(|i| i.to_string()).collect();
    let names: Vec<String> = (1..=n).map(|i| format!("Park {i}")).collect();
    let repeat = |value: &str| vec![value.to_string(); n];
    let repeat_num = |value: f64| vec![value; n];

    let mut columns = vec![
        Column::new("WDPAID".into(), pids.clone()),
        Column::new("WDPA_PID".into(), pids),
        Column::new("PA_DEF".into(), repeat("1")),
        Column::new("NAME".into(), names.clone()),
        Column::new("ORIG_NAME".into(), names),
        Column::new("DESIG".into(), repeat("National Park")),
        Column::new("DESIG_ENG".into(), repeat("National Park")),
        Column::new("DESIG_TYPE".into(), repeat("National")),
        Column::new("IUCN_CAT".into(), repeat("II")),
        Column::new("INT_CRIT".into(), repeat("Not Applicable")),
        Column::new("MARINE".into(), repeat("0")),
        Column::new("REP_M_AREA".into(), repeat_num(0.0)),
    ];
    if kind == TableKind::Polygon {
        columns.push(Column::new("GIS_M_AREA".into(), repeat_num(0.0)));
    }
    columns.push(Column::new("REP_AREA".into(), repeat_num(100.0)));
    if kind == TableKind::Polygon {
        columns.push(Column::new("GIS_AREA".into(), repeat_num(100.0)));
    }
    columns.extend([
        Column::new("NO_TAKE".into(), repeat("Not Applicable")),
        Column::new("NO_TK_AREA".into(), repeat_num(0.0)),
        Column::new("STATUS".into(), repeat("Designated")),
        Column::new("STATUS_YR".into(), repeat("1990")),
        Column::new(
            "GOV_TYPE".into(),
            repeat("Federal or national ministry or agency"),
        ),
        Column::new("OWN_TYPE".into(), repeat("State")),
        Column::new("MANG_AUTH".into(), repeat("Uganda Wildlife Authority")),
        Column::new("MANG_PLAN".into(), repeat("Not Reported")),
        Column::new("VERIF".into(), repeat("State Verified")),
        Column::new("METADATAID".into(), repeat("1")),
        Column::new("SUB_LOC".into(), repeat("Not Reported")),
        Column::new("PARENT_ISO3".into(), repeat("UGA")),
        Column::new("ISO3".into(), repeat("UGA")),
    ]);
    DataFrame::new(columns).unwrap()
}

/// Replace (or add) one column of a frame.
pub fn with_column(mut frame: DataFrame, column: Column) -> DataFrame {
    frame.with_column(column).unwrap();
    frame
}

/// Minimal source table with the given metadata identifiers.
pub fn source_table(metadata_ids: &[&str]) -> RecordSet {
    records(
        TableKind::Source,
        vec![
            text("METADATAID", metadata_ids),
            Column::new(
                "DATA_TITLE".into(),
                vec!["Title".to_string(); metadata_ids.len()],
            ),
        ],
    )
}
