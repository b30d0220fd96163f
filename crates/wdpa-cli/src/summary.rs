use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use wdpa_validate::{RuleResult, RuleStatus, ValidationReport, Verdict};

use crate::types::RunResult;

/// Identifiers shown per rule before the list is truncated.
const EXAMPLE_LIMIT: usize = 5;

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output_dir.display());
    println!("Report: {}", result.report_path.display());
    if !result.exports.is_empty() {
        println!("Exported {} CSV file(s)", result.exports.len());
    }
    for report in &result.reports {
        print_report(report);
    }
}

fn print_report(report: &ValidationReport) {
    println!();
    println!(
        "Scope: {} ({} records, {} ms)",
        report.scope, report.record_count, report.elapsed_ms
    );
    if report.partial {
        println!("Time budget exhausted: skipped rules were not evaluated.");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rule"),
        header_cell("Verdict"),
        header_cell("Status"),
        header_cell("Count"),
        header_cell("Examples"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);

    let mut flagged: Vec<&RuleResult> = report
        .results
        .iter()
        .filter(|r| r.status != RuleStatus::Pass)
        .collect();
    flagged.sort_by_key(|r| status_rank(r.status));
    for result in &flagged {
        table.add_row(vec![
            Cell::new(&result.rule),
            verdict_cell(result.verdict),
            status_cell(result.status),
            count_cell(result.violation_count(), status_color(result.status)),
            example_cell(result),
        ]);
    }

    let passed = report.count(RuleStatus::Pass);
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!("{passed}/{} passed", report.results.len()))
            .add_attribute(Attribute::Bold),
        count_cell(
            flagged.iter().map(|r| r.violation_count()).sum(),
            Color::Red,
        )
        .add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    for result in flagged.iter().filter(|r| r.status == RuleStatus::Errored) {
        if let Some(error) = &result.error {
            eprintln!("- {}: {error}", result.rule);
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_rank(status: RuleStatus) -> u8 {
    match status {
        RuleStatus::Errored => 0,
        RuleStatus::Fail => 1,
        RuleStatus::Check => 2,
        RuleStatus::Skipped => 3,
        RuleStatus::Pass => 4,
    }
}

fn status_color(status: RuleStatus) -> Color {
    match status {
        RuleStatus::Errored | RuleStatus::Fail => Color::Red,
        RuleStatus::Check => Color::Yellow,
        RuleStatus::Skipped => Color::DarkGrey,
        RuleStatus::Pass => Color::Green,
    }
}

fn status_cell(status: RuleStatus) -> Cell {
    let cell = Cell::new(status.label()).fg(status_color(status));
    if matches!(status, RuleStatus::Errored | RuleStatus::Fail) {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn verdict_cell(verdict: Verdict) -> Cell {
    match verdict {
        Verdict::Fail => Cell::new(verdict.label()),
        Verdict::Check => dim_cell(verdict.label()),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn example_cell(result: &RuleResult) -> Cell {
    if result.violators.is_empty() {
        return dim_cell("-");
    }
    let mut examples: Vec<&str> = result
        .violators
        .iter()
        .take(EXAMPLE_LIMIT)
        .map(String::as_str)
        .collect();
    if result.violators.len() > EXAMPLE_LIMIT {
        examples.push("...");
    }
    Cell::new(examples.join(", "))
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
