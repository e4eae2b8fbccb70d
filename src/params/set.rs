//! Validated parameter set driving both cash-flow projections

use super::{ParamField, ValidationError};
use serde::{Deserialize, Serialize};

/// Longest accepted schedule, in years, for the horizon, debt term and
/// depreciation life
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Unvalidated scenario inputs in base units (currency, fractional rates)
///
/// Missing fields deserialize to the dashboard defaults, so a partial JSON
/// document describes a scenario relative to the reference case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawParameters {
    pub capex: f64,
    pub debt_ratio: f64,
    pub interest_rate: f64,
    pub debt_term_years: u32,
    pub analysis_years: u32,
    pub operating_cost: f64,
    pub op_cost_growth: f64,
    pub depreciation_years: u32,
    pub tax_rate: f64,
    pub salvage_value: f64,
    pub lease_initial_payment: f64,
    pub lease_escalation: f64,
    /// WACC
    pub discount_rate: f64,
}

impl Default for RawParameters {
    fn default() -> Self {
        Self {
            capex: 300e6,
            debt_ratio: 0.6,
            interest_rate: 0.04,
            debt_term_years: 10,
            analysis_years: 20,
            operating_cost: 12e6,
            op_cost_growth: 0.02,
            depreciation_years: 10,
            tax_rate: 0.25,
            salvage_value: 40e6,
            lease_initial_payment: 18e6,
            lease_escalation: 0.03,
            discount_rate: 0.06,
        }
    }
}

/// Immutable, validated scenario inputs
///
/// Only constructible through [`ParameterSet::new`], so every instance has
/// passed the field-level domain checks. Fields are checked independently;
/// a debt term longer than the analysis horizon is a legal input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters", into = "RawParameters")]
pub struct ParameterSet {
    raw: RawParameters,
}

impl ParameterSet {
    /// Validate raw inputs, naming the first offending field on failure
    pub fn new(raw: RawParameters) -> Result<Self, ValidationError> {
        positive(ParamField::Capex, raw.capex)?;
        fraction(ParamField::DebtRatio, raw.debt_ratio)?;
        fraction(ParamField::InterestRate, raw.interest_rate)?;
        within_horizon(ParamField::DebtTermYears, raw.debt_term_years, 0)?;
        within_horizon(ParamField::AnalysisYears, raw.analysis_years, 1)?;
        positive(ParamField::OperatingCost, raw.operating_cost)?;
        non_negative(ParamField::OpCostGrowth, raw.op_cost_growth)?;
        within_horizon(ParamField::DepreciationYears, raw.depreciation_years, 1)?;
        fraction(ParamField::TaxRate, raw.tax_rate)?;
        non_negative(ParamField::SalvageValue, raw.salvage_value)?;
        positive(ParamField::LeaseInitialPayment, raw.lease_initial_payment)?;
        non_negative(ParamField::LeaseEscalation, raw.lease_escalation)?;
        non_negative(ParamField::DiscountRate, raw.discount_rate)?;

        Ok(Self { raw })
    }

    /// Dashboard reference scenario
    pub fn default_scenario() -> Self {
        Self { raw: RawParameters::default() }
    }

    pub fn capex(&self) -> f64 {
        self.raw.capex
    }

    pub fn debt_ratio(&self) -> f64 {
        self.raw.debt_ratio
    }

    pub fn interest_rate(&self) -> f64 {
        self.raw.interest_rate
    }

    /// Years over which principal is repaid (0 = never amortized)
    pub fn debt_term_years(&self) -> u32 {
        self.raw.debt_term_years
    }

    pub fn analysis_years(&self) -> u32 {
        self.raw.analysis_years
    }

    /// Year-1 operating cost
    pub fn operating_cost(&self) -> f64 {
        self.raw.operating_cost
    }

    pub fn op_cost_growth(&self) -> f64 {
        self.raw.op_cost_growth
    }

    pub fn depreciation_years(&self) -> u32 {
        self.raw.depreciation_years
    }

    pub fn tax_rate(&self) -> f64 {
        self.raw.tax_rate
    }

    /// Received in the final analysis year
    pub fn salvage_value(&self) -> f64 {
        self.raw.salvage_value
    }

    /// Year-1 lease payment
    pub fn lease_initial_payment(&self) -> f64 {
        self.raw.lease_initial_payment
    }

    pub fn lease_escalation(&self) -> f64 {
        self.raw.lease_escalation
    }

    /// WACC used for NPV discounting
    pub fn discount_rate(&self) -> f64 {
        self.raw.discount_rate
    }

    /// Copy of the underlying raw inputs
    pub fn raw(&self) -> RawParameters {
        self.raw
    }
}

impl TryFrom<RawParameters> for ParameterSet {
    type Error = ValidationError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ParameterSet> for RawParameters {
    fn from(params: ParameterSet) -> Self {
        params.raw
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::default_scenario()
    }
}

fn finite(field: ParamField, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite { field, value })
    }
}

fn non_negative(field: ParamField, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

fn positive(field: ParamField, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(())
}

fn fraction(field: ParamField, value: f64) -> Result<(), ValidationError> {
    finite(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::OutOfRange { field, value, min: 0.0, max: 1.0 });
    }
    Ok(())
}

fn within_horizon(field: ParamField, years: u32, min: u32) -> Result<(), ValidationError> {
    if years < min {
        return Err(ValidationError::ZeroYears { field });
    }
    if years > MAX_HORIZON_YEARS {
        return Err(ValidationError::OutOfRange {
            field,
            value: f64::from(years),
            min: f64::from(min),
            max: f64::from(MAX_HORIZON_YEARS),
        });
    }
    Ok(())
}
