//! Ownership cash-flow projection
//!
//! The equity-funded share of capex is paid at time zero; the debt-funded share
//! is borrowed and repaid in level principal installments over the debt term.
//! Each year carries operating cost, principal plus interest, and a tax shield
//! on depreciation and interest. Salvage is received in the final year.

use crate::params::ParameterSet;
use super::state::OwnershipState;
use super::cashflows::{CashflowSequence, OwnershipProjection, OwnershipRow};
use log::debug;

/// Run the ownership projection, keeping per-year detail
pub fn project_ownership(params: &ParameterSet) -> OwnershipProjection {
    let years = params.analysis_years();
    let equity_outlay = -params.capex() * (1.0 - params.debt_ratio());

    let mut state = OwnershipState::from_params(params);
    let mut rows = Vec::with_capacity(years as usize);
    let mut cashflows = Vec::with_capacity(years as usize + 1);
    cashflows.push(equity_outlay);

    for _year in 1..=years {
        state.advance_year();

        let row = calculate_year(params, &mut state);
        cashflows.push(row.net_cash);
        rows.push(row);
    }

    debug!(
        "ownership projection: {} years, equity outlay {:.2}, residual debt {:.2}",
        years,
        equity_outlay,
        state.outstanding_debt
    );

    OwnershipProjection {
        equity_outlay,
        rows,
        cashflows: CashflowSequence::from(cashflows),
    }
}

/// Ownership cash flows for years 0..=analysis_years
pub fn ownership_cashflows(params: &ParameterSet) -> CashflowSequence {
    project_ownership(params).cashflows
}

/// Calculate one year and roll the state forward
fn calculate_year(params: &ParameterSet, state: &mut OwnershipState) -> OwnershipRow {
    let year = state.year;
    let tax_rate = params.tax_rate();
    let bop_debt = state.outstanding_debt;

    let interest_expense = state.interest_expense(params.interest_rate());

    // Principal stops after the term; interest continues on anything left
    let principal_payment = if state.within_debt_term(params.debt_term_years()) {
        state.annual_principal
    } else {
        0.0
    };
    let financing_cash = principal_payment + interest_expense;

    let depreciation = if state.within_depreciation(params.depreciation_years()) {
        state.annual_depreciation
    } else {
        0.0
    };

    let depreciation_shield = depreciation * tax_rate;
    let interest_shield = interest_expense * tax_rate;
    let tax_shield = (depreciation + interest_expense) * tax_rate;

    let salvage = if year == params.analysis_years() {
        params.salvage_value()
    } else {
        0.0
    };

    let operating_cost = state.operating_cost;
    let net_cash = -operating_cost - financing_cash + tax_shield + salvage;

    state.close_year(params.debt_term_years(), params.op_cost_growth());

    OwnershipRow {
        year,
        bop_debt,
        interest_expense,
        principal_payment,
        financing_cash,
        eop_debt: state.outstanding_debt,
        operating_cost,
        depreciation,
        depreciation_shield,
        interest_shield,
        tax_shield,
        salvage,
        net_cash,
    }
}
