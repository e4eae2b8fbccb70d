//! Load scenario parameters from JSON and CSV files

use super::{DisplayInputs, LoadError, ParameterSet, RawParameters};
use csv::Reader;
use std::fs::File;
use std::path::Path;

/// Raw CSV row: one named scenario in display units ($M, %)
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Scenario")]
    scenario: String,
    #[serde(rename = "CAPEX")]
    capex_m: f64,
    #[serde(rename = "Salvage")]
    salvage_m: f64,
    #[serde(rename = "OpCost")]
    op_cost_m: f64,
    #[serde(rename = "DebtRatio")]
    debt_ratio: f64,
    #[serde(rename = "InterestRate")]
    interest_rate_pct: f64,
    #[serde(rename = "DebtTerm")]
    debt_term: u32,
    #[serde(rename = "DepreciationYears")]
    depreciation_years: u32,
    #[serde(rename = "TaxRate")]
    tax_rate_pct: f64,
    #[serde(rename = "LeasePayment")]
    lease_payment_m: f64,
    #[serde(rename = "LeaseEscalation")]
    lease_escalation_pct: f64,
    #[serde(rename = "OpGrowth")]
    op_growth_pct: f64,
    #[serde(rename = "AnalysisYears")]
    analysis_years: u32,
    #[serde(rename = "WACC")]
    wacc_pct: f64,
}

impl CsvRow {
    fn to_scenario(self) -> Result<NamedScenario, LoadError> {
        let inputs = DisplayInputs {
            capex_m: self.capex_m,
            salvage_m: self.salvage_m,
            op_cost_m: self.op_cost_m,
            debt_ratio: self.debt_ratio,
            interest_rate_pct: self.interest_rate_pct,
            debt_term: self.debt_term,
            depreciation_years: self.depreciation_years,
            tax_rate_pct: self.tax_rate_pct,
            lease_payment_m: self.lease_payment_m,
            lease_escalation_pct: self.lease_escalation_pct,
            op_growth_pct: self.op_growth_pct,
            analysis_years: self.analysis_years,
            wacc_pct: self.wacc_pct,
        };

        match ParameterSet::new(inputs.to_raw()) {
            Ok(params) => Ok(NamedScenario { name: self.scenario, params }),
            Err(source) => Err(LoadError::Invalid { scenario: self.scenario, source }),
        }
    }
}

/// A validated scenario with its user-facing name
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NamedScenario {
    pub name: String,
    pub params: ParameterSet,
}

/// Load a base-unit parameter set from a JSON file
///
/// Fields missing from the document take the reference scenario's values.
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<ParameterSet, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let raw: RawParameters = serde_json::from_reader(file)?;
    ParameterSet::new(raw).map_err(|source| LoadError::Invalid {
        scenario: path.display().to_string(),
        source,
    })
}

/// Load named scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_scenarios_from_reader(file)
}

/// Load named scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedScenario>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamField;
    use approx::assert_relative_eq;
    use std::io::Write;

    const HEADER: &str = "Scenario,CAPEX,Salvage,OpCost,DebtRatio,InterestRate,DebtTerm,DepreciationYears,TaxRate,LeasePayment,LeaseEscalation,OpGrowth,AnalysisYears,WACC";

    #[test]
    fn test_load_scenarios_from_reader() {
        let data = format!(
            "{}\nBase,300,40,12,0.6,4,10,10,25,18,3,2,20,6\nAll equity,300,40,12,0,4,10,10,25,18,3,2,20,6\n",
            HEADER
        );
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].name, "Base");
        assert_relative_eq!(scenarios[0].params.capex(), 300e6);
        assert_relative_eq!(scenarios[0].params.interest_rate(), 0.04);
        assert_eq!(scenarios[0].params.analysis_years(), 20);

        assert_eq!(scenarios[1].name, "All equity");
        assert_eq!(scenarios[1].params.debt_ratio(), 0.0);
    }

    #[test]
    fn test_invalid_scenario_named_in_error() {
        let data = format!("{}\nBroken,300,40,12,1.4,4,10,10,25,18,3,2,20,6\n", HEADER);
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        match err {
            LoadError::Invalid { scenario, source } => {
                assert_eq!(scenario, "Broken");
                assert_eq!(source.field(), ParamField::DebtRatio);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_csv() {
        let data = format!("{}\nShort,300,40\n", HEADER);
        assert!(matches!(
            load_scenarios_from_reader(data.as_bytes()),
            Err(LoadError::Csv(_))
        ));
    }

    #[test]
    fn test_load_parameters_json() {
        let path = std::env::temp_dir().join(format!("lease_vs_own_params_{}.json", std::process::id()));
        let mut file = File::create(&path).unwrap();
        writeln!(file, r#"{{"capex": 250000000.0, "analysis_years": 25}}"#).unwrap();
        drop(file);

        let params = load_parameters(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_relative_eq!(params.capex(), 250e6);
        assert_eq!(params.analysis_years(), 25);
        // Unspecified fields keep the reference values
        assert_relative_eq!(params.lease_initial_payment(), 18e6);
    }

    #[test]
    fn test_load_parameters_missing_file() {
        let err = load_parameters("does/not/exist.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
