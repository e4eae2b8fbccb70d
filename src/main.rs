//! Lease vs. Own CLI
//!
//! Command-line front end: resolves inputs in display units ($M, %), runs the
//! analysis and prints the parameter summary, NPV comparison, and yearly and
//! cumulative cash-flow tables.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use lease_vs_own::params::{load_parameters, load_scenarios, DisplayInputs, ParameterSet};
use lease_vs_own::report::export::{format_currency, format_yearly_table, write_yearly_csv};
use lease_vs_own::report::{analyze, parameter_summary, AnalysisReport};
use lease_vs_own::scenario::ScenarioRunner;
use lease_vs_own::session::{InputControl, SessionStore};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Display-unit parameter flags, which only apply to a single interactive run
const DISPLAY_FLAGS: [&str; 13] = [
    "capex",
    "salvage",
    "op_cost",
    "debt_ratio",
    "interest_rate",
    "debt_term",
    "depr_years",
    "tax_rate",
    "lease_payment",
    "lease_escalation",
    "op_growth",
    "analysis_years",
    "wacc",
];

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare the cost of owning versus leasing a facility")]
struct CliArgs {
    /// New-build CAPEX ($M)
    #[arg(long)]
    capex: Option<f64>,
    /// Salvage value ($M)
    #[arg(long)]
    salvage: Option<f64>,
    /// Initial operating cost ($M)
    #[arg(long)]
    op_cost: Option<f64>,
    /// Debt ratio (0-1)
    #[arg(long)]
    debt_ratio: Option<f64>,
    /// Interest rate (%)
    #[arg(long)]
    interest_rate: Option<f64>,
    /// Debt term (years)
    #[arg(long)]
    debt_term: Option<u32>,
    /// Depreciation years
    #[arg(long)]
    depr_years: Option<u32>,
    /// Tax rate (%)
    #[arg(long)]
    tax_rate: Option<f64>,
    /// Initial lease payment ($M)
    #[arg(long)]
    lease_payment: Option<f64>,
    /// Lease escalation (%)
    #[arg(long)]
    lease_escalation: Option<f64>,
    /// Operating cost growth (%)
    #[arg(long)]
    op_growth: Option<f64>,
    /// Analysis period (years)
    #[arg(long)]
    analysis_years: Option<u32>,
    /// Discount rate / WACC (%)
    #[arg(long)]
    wacc: Option<f64>,

    /// Load base-unit parameters from a JSON file instead of the flags above
    #[arg(long, conflicts_with = "scenarios", conflicts_with_all = DISPLAY_FLAGS)]
    params: Option<PathBuf>,
    /// Run every scenario in a CSV file (display units) and print a summary
    #[arg(long, conflicts_with_all = DISPLAY_FLAGS)]
    scenarios: Option<PathBuf>,
    /// Write the yearly cash-flow table to a CSV file
    #[arg(long, conflicts_with = "scenarios")]
    csv: Option<PathBuf>,
    /// Print the report as JSON instead of tables
    #[arg(long, conflicts_with = "scenarios")]
    json: bool,
}

impl CliArgs {
    /// Apply any flags given on the command line to the session
    fn apply_to(&self, session: &mut SessionStore) {
        let edits = [
            (InputControl::CAPEX, self.capex),
            (InputControl::SALVAGE, self.salvage),
            (InputControl::OP_COST, self.op_cost),
            (InputControl::DEBT_RATIO, self.debt_ratio),
            (InputControl::INTEREST_RATE, self.interest_rate),
            (InputControl::DEBT_TERM, self.debt_term.map(f64::from)),
            (InputControl::DEPRECIATION_YEARS, self.depr_years.map(f64::from)),
            (InputControl::TAX_RATE, self.tax_rate),
            (InputControl::LEASE_PAYMENT, self.lease_payment),
            (InputControl::LEASE_ESCALATION, self.lease_escalation),
            (InputControl::OP_GROWTH, self.op_growth),
            (InputControl::ANALYSIS_YEARS, self.analysis_years.map(f64::from)),
            (InputControl::WACC, self.wacc),
        ];

        for (control, value) in edits {
            if let Some(v) = value {
                session.set(&control, v);
            }
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    generated_at: DateTime<Utc>,
    parameters: &'a ParameterSet,
    report: &'a AnalysisReport,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    if let Some(path) = &args.scenarios {
        return run_scenarios(path);
    }

    let params = match &args.params {
        Some(path) => load_parameters(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => {
            let mut session = SessionStore::new();
            args.apply_to(&mut session);
            let inputs = DisplayInputs::from_session(&mut session);
            ParameterSet::new(inputs.to_raw()).context("invalid input parameters")?
        }
    };

    let report = analyze(&params);
    info!("analysis complete over {} years", params.analysis_years());

    if let Some(path) = &args.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_yearly_csv(&report, file).context("writing yearly cash flows")?;
        info!("yearly cash flows written to {}", path.display());
    }

    if args.json {
        let output = JsonOutput {
            generated_at: Utc::now(),
            parameters: &params,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_report(&params, &report);
    Ok(())
}

fn print_report(params: &ParameterSet, report: &AnalysisReport) {
    println!("Leasing vs. Owning Cost Analysis");
    println!("================================\n");

    println!("Input Parameters Summary");
    println!("{}", "-".repeat(40));
    for row in parameter_summary(params) {
        println!("{:<28} {:>11}", row.parameter, format!("{}", row.value));
    }

    println!("\nNPV Comparison (WACC {:.1}%)", report.discount_rate * 100.0);
    println!("{}", "-".repeat(40));
    for row in report.npv_comparison() {
        println!("{:<28} {:>11.2}", format!("{} NPV ($M)", row.option), row.npv_millions);
    }
    println!(
        "{:<28} {:>11}",
        "Preferred",
        format!("{} by {}", report.preferred(), format_currency(report.npv_advantage().abs()))
    );

    let rows = report.yearly_rows();
    println!("\nYearly Cash Flows");
    print!("{}", format_yearly_table(&rows, false));
    println!("\nCumulative Cash Flows");
    print!("{}", format_yearly_table(&rows, true));
}

fn run_scenarios(path: &Path) -> Result<()> {
    let scenarios = load_scenarios(path)
        .with_context(|| format!("loading scenarios from {}", path.display()))?;
    let results = ScenarioRunner::new().run_named(&scenarios);

    println!("{:<24} {:>14} {:>14} {:>10}", "Scenario", "Own NPV ($M)", "Lease NPV ($M)", "Preferred");
    println!("{}", "-".repeat(65));
    for result in &results {
        let report = &result.report;
        println!(
            "{:<24} {:>14.2} {:>14.2} {:>10}",
            result.name,
            report.own_npv / 1e6,
            report.lease_npv / 1e6,
            report.preferred().to_string()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("lease_vs_own").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_display_flags_reach_session() {
        let args = parse(&["--capex", "450", "--wacc", "8", "--analysis-years", "30"]).unwrap();
        let mut session = SessionStore::new();
        args.apply_to(&mut session);

        let inputs = DisplayInputs::from_session(&mut session);
        assert_eq!(inputs.capex_m, 450.0);
        assert_eq!(inputs.wacc_pct, 8.0);
        assert_eq!(inputs.analysis_years, 30);
    }

    #[test]
    fn test_params_file_excludes_display_flags() {
        let err = parse(&["--params", "base.json", "--capex", "400"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        assert!(parse(&["--params", "base.json", "--json", "--csv", "out.csv"]).is_ok());
    }

    #[test]
    fn test_scenarios_exclude_single_run_flags() {
        let extras: [&[&str]; 4] = [&["--json"], &["--csv", "out.csv"], &["--wacc", "7"], &["--params", "p.json"]];
        for extra in extras {
            let mut args = vec!["--scenarios", "data/scenarios.csv"];
            args.extend_from_slice(extra);
            let err = parse(&args).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict, "{:?}", extra);
        }
    }
}
