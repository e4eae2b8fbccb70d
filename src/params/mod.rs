//! Scenario parameters: validated inputs, display-unit conversion and loaders

mod error;
mod set;
mod display;
pub mod loader;

pub use error::{LoadError, ValidationError};
pub use set::{ParameterSet, RawParameters, MAX_HORIZON_YEARS};
pub use display::DisplayInputs;
pub use loader::{load_parameters, load_scenarios, load_scenarios_from_reader, NamedScenario};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the thirteen scenario inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamField {
    Capex,
    DebtRatio,
    InterestRate,
    DebtTermYears,
    AnalysisYears,
    OperatingCost,
    OpCostGrowth,
    DepreciationYears,
    TaxRate,
    SalvageValue,
    LeaseInitialPayment,
    LeaseEscalation,
    DiscountRate,
}

impl ParamField {
    /// All fields in dashboard display order
    pub const ALL: [ParamField; 13] = [
        ParamField::Capex,
        ParamField::SalvageValue,
        ParamField::OperatingCost,
        ParamField::DebtRatio,
        ParamField::InterestRate,
        ParamField::DebtTermYears,
        ParamField::DepreciationYears,
        ParamField::TaxRate,
        ParamField::LeaseInitialPayment,
        ParamField::LeaseEscalation,
        ParamField::OpCostGrowth,
        ParamField::AnalysisYears,
        ParamField::DiscountRate,
    ];

    /// Field name as it appears in the parameter record
    pub fn name(self) -> &'static str {
        match self {
            ParamField::Capex => "capex",
            ParamField::DebtRatio => "debt_ratio",
            ParamField::InterestRate => "interest_rate",
            ParamField::DebtTermYears => "debt_term_years",
            ParamField::AnalysisYears => "analysis_years",
            ParamField::OperatingCost => "operating_cost",
            ParamField::OpCostGrowth => "op_cost_growth",
            ParamField::DepreciationYears => "depreciation_years",
            ParamField::TaxRate => "tax_rate",
            ParamField::SalvageValue => "salvage_value",
            ParamField::LeaseInitialPayment => "lease_initial_payment",
            ParamField::LeaseEscalation => "lease_escalation",
            ParamField::DiscountRate => "discount_rate",
        }
    }

    /// Human-facing label in display units
    pub fn label(self) -> &'static str {
        match self {
            ParamField::Capex => "CAPEX ($M)",
            ParamField::DebtRatio => "Debt Ratio",
            ParamField::InterestRate => "Interest Rate (%)",
            ParamField::DebtTermYears => "Debt Term (years)",
            ParamField::AnalysisYears => "Analysis Period (years)",
            ParamField::OperatingCost => "Operating Cost ($M)",
            ParamField::OpCostGrowth => "Operating Cost Growth (%)",
            ParamField::DepreciationYears => "Depreciation Years",
            ParamField::TaxRate => "Tax Rate (%)",
            ParamField::SalvageValue => "Salvage Value ($M)",
            ParamField::LeaseInitialPayment => "Initial Lease Payment ($M)",
            ParamField::LeaseEscalation => "Lease Escalation (%)",
            ParamField::DiscountRate => "WACC (%)",
        }
    }
}

impl fmt::Display for ParamField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
