//! Human-facing inputs ($M, %) and their conversion to base units

use super::RawParameters;
use crate::session::{InputControl, SessionStore};
use serde::{Deserialize, Serialize};

/// Dollars per display unit ($M)
pub const MILLION: f64 = 1e6;

/// Percent to fraction divisor
pub const PERCENT: f64 = 100.0;

/// Scenario inputs as a user enters them: currency in millions, rates in percent
///
/// The debt ratio is entered as a plain fraction, matching the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayInputs {
    pub capex_m: f64,
    pub salvage_m: f64,
    pub op_cost_m: f64,
    pub debt_ratio: f64,
    pub interest_rate_pct: f64,
    pub debt_term: u32,
    pub depreciation_years: u32,
    pub tax_rate_pct: f64,
    pub lease_payment_m: f64,
    pub lease_escalation_pct: f64,
    pub op_growth_pct: f64,
    pub analysis_years: u32,
    pub wacc_pct: f64,
}

impl DisplayInputs {
    /// Convert to base units
    pub fn to_raw(&self) -> RawParameters {
        RawParameters {
            capex: self.capex_m * MILLION,
            debt_ratio: self.debt_ratio,
            interest_rate: self.interest_rate_pct / PERCENT,
            debt_term_years: self.debt_term,
            analysis_years: self.analysis_years,
            operating_cost: self.op_cost_m * MILLION,
            op_cost_growth: self.op_growth_pct / PERCENT,
            depreciation_years: self.depreciation_years,
            tax_rate: self.tax_rate_pct / PERCENT,
            salvage_value: self.salvage_m * MILLION,
            lease_initial_payment: self.lease_payment_m * MILLION,
            lease_escalation: self.lease_escalation_pct / PERCENT,
            discount_rate: self.wacc_pct / PERCENT,
        }
    }

    /// Convert base-unit inputs back to display units
    pub fn from_raw(raw: &RawParameters) -> Self {
        Self {
            capex_m: raw.capex / MILLION,
            salvage_m: raw.salvage_value / MILLION,
            op_cost_m: raw.operating_cost / MILLION,
            debt_ratio: raw.debt_ratio,
            interest_rate_pct: raw.interest_rate * PERCENT,
            debt_term: raw.debt_term_years,
            depreciation_years: raw.depreciation_years,
            tax_rate_pct: raw.tax_rate * PERCENT,
            lease_payment_m: raw.lease_initial_payment / MILLION,
            lease_escalation_pct: raw.lease_escalation * PERCENT,
            op_growth_pct: raw.op_cost_growth * PERCENT,
            analysis_years: raw.analysis_years,
            wacc_pct: raw.discount_rate * PERCENT,
        }
    }

    /// Resolve every input from the session, seeding control defaults on first use
    pub fn from_session(session: &mut SessionStore) -> Self {
        Self {
            capex_m: session.value(&InputControl::CAPEX),
            salvage_m: session.value(&InputControl::SALVAGE),
            op_cost_m: session.value(&InputControl::OP_COST),
            debt_ratio: session.value(&InputControl::DEBT_RATIO),
            interest_rate_pct: session.value(&InputControl::INTEREST_RATE),
            debt_term: session.value(&InputControl::DEBT_TERM).round() as u32,
            depreciation_years: session.value(&InputControl::DEPRECIATION_YEARS).round() as u32,
            tax_rate_pct: session.value(&InputControl::TAX_RATE),
            lease_payment_m: session.value(&InputControl::LEASE_PAYMENT),
            lease_escalation_pct: session.value(&InputControl::LEASE_ESCALATION),
            op_growth_pct: session.value(&InputControl::OP_GROWTH),
            analysis_years: session.value(&InputControl::ANALYSIS_YEARS).round() as u32,
            wacc_pct: session.value(&InputControl::WACC),
        }
    }
}

impl Default for DisplayInputs {
    fn default() -> Self {
        Self::from_raw(&RawParameters::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_raw_converts_units() {
        let raw = DisplayInputs::default().to_raw();
        assert_relative_eq!(raw.capex, 300e6);
        assert_relative_eq!(raw.interest_rate, 0.04);
        assert_relative_eq!(raw.discount_rate, 0.06);
        assert_relative_eq!(raw.lease_initial_payment, 18e6);
        assert_eq!(raw.analysis_years, 20);
    }

    #[test]
    fn test_session_defaults_match_raw_defaults() {
        let mut session = SessionStore::new();
        let inputs = DisplayInputs::from_session(&mut session);
        let raw = inputs.to_raw();
        let expected = RawParameters::default();

        assert_relative_eq!(raw.capex, expected.capex);
        assert_relative_eq!(raw.salvage_value, expected.salvage_value);
        assert_relative_eq!(raw.tax_rate, expected.tax_rate);
        assert_relative_eq!(raw.op_cost_growth, expected.op_cost_growth);
        assert_eq!(raw.debt_term_years, expected.debt_term_years);
        assert_eq!(raw.depreciation_years, expected.depreciation_years);
    }

    #[test]
    fn test_session_edits_flow_through() {
        let mut session = SessionStore::new();
        session.set(&InputControl::CAPEX, 450.0);
        session.set(&InputControl::ANALYSIS_YEARS, 30.0);

        let inputs = DisplayInputs::from_session(&mut session);
        assert_relative_eq!(inputs.capex_m, 450.0);
        assert_eq!(inputs.analysis_years, 30);
    }
}
