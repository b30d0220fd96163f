use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use wdpa_cli::export::{export_integrity_violations, export_violations};
use wdpa_ingest::{load_country_codes, load_table, warn_on_schema_drift};
use wdpa_model::TableKind;
use wdpa_validate::{
    INTEGRITY_RULES, IntegrityInput, QaConfig, RuleCatalog, ValidationContext, run_integrity,
    run_table, write_report_json,
};

use crate::cli::{IntegrityArgs, RulesArgs, ScopeArg, TableArgs};
use crate::summary::apply_table_style;
use crate::types::RunResult;

const DEFAULT_OUTPUT_DIR: &str = "qa_output";

fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(DEFAULT_OUTPUT_DIR)
}

fn load_config(path: Option<&Path>) -> Result<QaConfig> {
    match path {
        Some(path) => {
            QaConfig::load(path).with_context(|| format!("load config {}", path.display()))
        }
        None => Ok(QaConfig::default()),
    }
}

pub fn run_table_command(kind: TableKind, args: &TableArgs) -> Result<RunResult> {
    let span = info_span!("table", table = %kind, input = %args.input.display());
    let _guard = span.enter();

    let config = load_config(args.config.as_deref())?;
    let records =
        load_table(&args.input, kind).with_context(|| format!("load {}", args.input.display()))?;
    warn_on_schema_drift(&records);

    let country_codes = match &args.countries {
        Some(path) => Some(
            load_country_codes(path)
                .with_context(|| format!("load country codes {}", path.display()))?,
        ),
        None => {
            warn!("no country-code list given; ISO3 rules will be reported as errored");
            None
        }
    };
    let mut ctx = ValidationContext::new(config.thresholds);
    if let Some(codes) = &country_codes {
        ctx = ctx.with_country_codes(codes);
    }

    let report = run_table(&records, &ctx, &config.run_options())
        .with_context(|| format!("validate {}", args.input.display()))?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    let report_path = write_report_json(&output_dir, std::slice::from_ref(&report))
        .context("write report")?;
    let exports = if args.no_export {
        Vec::new()
    } else {
        export_violations(&output_dir, &records, &report)?
    };
    info!(
        report = %report_path.display(),
        exports = exports.len(),
        "outputs written"
    );

    Ok(RunResult {
        reports: vec![report],
        output_dir,
        report_path,
        exports,
    })
}

pub fn run_integrity_command(args: &IntegrityArgs) -> Result<RunResult> {
    let span = info_span!("integrity_command");
    let _guard = span.enter();

    let polygons = load_table(&args.polygons, TableKind::Polygon)
        .with_context(|| format!("load {}", args.polygons.display()))?;
    let points = load_table(&args.points, TableKind::Point)
        .with_context(|| format!("load {}", args.points.display()))?;
    let source = load_table(&args.source, TableKind::Source)
        .with_context(|| format!("load {}", args.source.display()))?;
    for records in [&polygons, &points, &source] {
        warn_on_schema_drift(records);
    }

    let input = IntegrityInput {
        polygons: &polygons,
        points: &points,
        source: &source,
    };
    let report = run_integrity(&input);

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.polygons));
    let report_path = write_report_json(&output_dir, std::slice::from_ref(&report))
        .context("write report")?;
    let exports = if args.no_export {
        Vec::new()
    } else {
        export_integrity_violations(&output_dir, &input, &report)?
    };

    Ok(RunResult {
        reports: vec![report],
        output_dir,
        report_path,
        exports,
    })
}

pub fn run_rules(args: &RulesArgs) {
    let mut table = Table::new();
    table.set_header(vec!["Rule", "Applies to", "Verdict", "Kind", "Description"]);
    apply_table_style(&mut table);

    let catalog = match args.scope {
        None => Some(RuleCatalog::all()),
        Some(ScopeArg::Poly) => Some(RuleCatalog::for_table(TableKind::Polygon)),
        Some(ScopeArg::Point) => Some(RuleCatalog::for_table(TableKind::Point)),
        Some(ScopeArg::Integrity) => None,
    };
    for rule in catalog.iter().flat_map(RuleCatalog::iter) {
        table.add_row(vec![
            rule.name,
            rule.applies_to.label(),
            rule.verdict.label(),
            rule.kind.label(),
            rule.description,
        ]);
    }
    if matches!(args.scope, None | Some(ScopeArg::Integrity)) {
        for rule in INTEGRITY_RULES {
            table.add_row(vec![
                rule.name,
                "integrity",
                rule.verdict.label(),
                "cross-table",
                rule.description,
            ]);
        }
    }
    println!("{table}");
}
