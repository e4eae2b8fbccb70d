//! Scenario runner for batch analyses
//!
//! Every analysis is a pure function of its own parameter set, so batches of
//! independent scenarios fan out across threads with no shared state.

use crate::params::{NamedScenario, ParameterSet};
use crate::report::{analyze, AnalysisReport};
use log::info;
use rayon::prelude::*;
use serde::Serialize;

/// Result of one named scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    pub params: ParameterSet,
    pub report: AnalysisReport,
}

/// Runs analyses for one or many parameter sets
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let scenarios = load_scenarios("scenarios.csv")?;
/// for result in runner.run_named(&scenarios) {
///     println!("{}: {:.0}", result.name, result.report.npv_advantage());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a single parameter set
    pub fn run(&self, params: &ParameterSet) -> AnalysisReport {
        analyze(params)
    }

    /// Analyze many parameter sets in parallel, preserving input order
    pub fn run_batch(&self, params: &[ParameterSet]) -> Vec<AnalysisReport> {
        params.par_iter().map(analyze).collect()
    }

    /// Analyze named scenarios in parallel, preserving input order
    pub fn run_named(&self, scenarios: &[NamedScenario]) -> Vec<ScenarioResult> {
        info!("running {} scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|scenario| ScenarioResult {
                name: scenario.name.clone(),
                params: scenario.params,
                report: analyze(&scenario.params),
            })
            .collect()
    }
}
