//! AWS Lambda handler for lease vs. own analyses
//!
//! Accepts base-unit parameters as JSON (missing fields take the reference
//! scenario's values) and returns NPVs plus yearly and cumulative cash flows.
//! Invalid parameters produce a response with `error` set rather than a
//! function failure.

use lease_vs_own::params::{ParameterSet, RawParameters};
use lease_vs_own::report::{analyze, parameter_summary, NpvRow, ParameterSummaryRow, YearlyRow};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::Serialize;

/// Output from the analysis
#[derive(Debug, Serialize, Default)]
pub struct AnalysisResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own_npv: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_npv: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<String>,
    pub parameters: Vec<ParameterSummaryRow>,
    pub npv_comparison: Vec<NpvRow>,
    pub cashflows: Vec<YearlyRow>,
    pub execution_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_field: Option<String>,
}

/// Lambda handler function
async fn handler(event: LambdaEvent<RawParameters>) -> Result<AnalysisResponse, Error> {
    let start = std::time::Instant::now();

    let params = match ParameterSet::new(event.payload) {
        Ok(p) => p,
        Err(e) => {
            warn!("rejected request: {}", e);
            return Ok(AnalysisResponse {
                error_field: Some(e.field().to_string()),
                error: Some(e.to_string()),
                execution_time_ms: start.elapsed().as_millis() as u64,
                ..Default::default()
            });
        }
    };

    let report = analyze(&params);
    let execution_time_ms = start.elapsed().as_millis() as u64;
    info!("analysis over {} years in {} ms", params.analysis_years(), execution_time_ms);

    Ok(AnalysisResponse {
        own_npv: Some(report.own_npv),
        lease_npv: Some(report.lease_npv),
        preferred: Some(report.preferred().to_string()),
        parameters: parameter_summary(&params),
        npv_comparison: report.npv_comparison(),
        cashflows: report.yearly_rows(),
        execution_time_ms,
        error: None,
        error_field: None,
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
