//! Running state carried across years of the ownership projection

use crate::params::ParameterSet;

/// State of the owned facility's financing and costs at a point in the projection
#[derive(Debug, Clone)]
pub struct OwnershipState {
    /// Current projection year (0 before the first advance)
    pub year: u32,

    /// Debt outstanding at the beginning of the current year
    pub outstanding_debt: f64,

    /// Operating cost for the current year
    pub operating_cost: f64,

    /// Level principal repayment while within the debt term
    pub annual_principal: f64,

    /// Straight-line depreciation while within the depreciation horizon
    pub annual_depreciation: f64,
}

impl OwnershipState {
    /// Initialize state at time zero
    pub fn from_params(params: &ParameterSet) -> Self {
        let debt_amount = params.capex() * params.debt_ratio();
        // A zero term never amortizes; interest then runs on the full debt
        let annual_principal = if params.debt_term_years() > 0 {
            debt_amount / params.debt_term_years() as f64
        } else {
            0.0
        };

        Self {
            year: 0,
            outstanding_debt: debt_amount,
            operating_cost: params.operating_cost(),
            annual_principal,
            annual_depreciation: params.capex() / params.depreciation_years() as f64,
        }
    }

    /// Move to the next year
    pub fn advance_year(&mut self) {
        self.year += 1;
    }

    /// Interest on the debt outstanding at the start of the year
    pub fn interest_expense(&self, interest_rate: f64) -> f64 {
        if self.outstanding_debt > 0.0 {
            self.outstanding_debt * interest_rate
        } else {
            0.0
        }
    }

    /// Whether principal is still being repaid this year
    pub fn within_debt_term(&self, debt_term_years: u32) -> bool {
        self.year <= debt_term_years
    }

    /// Whether depreciation is still being taken this year
    pub fn within_depreciation(&self, depreciation_years: u32) -> bool {
        self.year <= depreciation_years
    }

    /// Close out the year: repay scheduled principal, escalate operating cost
    pub fn close_year(&mut self, debt_term_years: u32, op_cost_growth: f64) {
        if self.within_debt_term(debt_term_years) {
            self.outstanding_debt -= self.annual_principal;
        }
        // Growth applies after use, so year 1 carries the unescalated cost
        self.operating_cost *= 1.0 + op_cost_growth;
    }
}
