//! Leasing cash-flow projection
//!
//! No upfront cost; the lease payment escalates annually and is fully
//! tax-deductible.

use crate::params::ParameterSet;
use super::cashflows::{CashflowSequence, LeaseProjection, LeaseRow};
use log::debug;

/// Run the leasing projection, keeping per-year detail
pub fn project_lease(params: &ParameterSet) -> LeaseProjection {
    let years = params.analysis_years();
    let tax_rate = params.tax_rate();

    let mut rows = Vec::with_capacity(years as usize);
    let mut cashflows = Vec::with_capacity(years as usize + 1);
    cashflows.push(0.0);

    let mut payment = params.lease_initial_payment();
    for year in 1..=years {
        let tax_shield = payment * tax_rate;
        let net_cash = -payment + tax_shield;

        cashflows.push(net_cash);
        rows.push(LeaseRow { year, payment, tax_shield, net_cash });

        payment *= 1.0 + params.lease_escalation();
    }

    debug!("lease projection: {} years, final payment {:.2}", years, payment);

    LeaseProjection {
        rows,
        cashflows: CashflowSequence::from(cashflows),
    }
}

/// Leasing cash flows for years 0..=analysis_years
pub fn leasing_cashflows(params: &ParameterSet) -> CashflowSequence {
    project_lease(params).cashflows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RawParameters;
    use approx::assert_relative_eq;

    fn lease_params(escalation: f64, tax_rate: f64) -> ParameterSet {
        ParameterSet::new(RawParameters {
            lease_initial_payment: 18e6,
            lease_escalation: escalation,
            analysis_years: 20,
            tax_rate,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_reference_lease() {
        let cf = leasing_cashflows(&lease_params(0.03, 0.25));

        assert_eq!(cf.len(), 21);
        assert_eq!(cf.get(0), Some(0.0));
        assert_relative_eq!(cf.get(1).unwrap(), -13.5e6);
        assert_relative_eq!(cf.get(2).unwrap(), -18e6 * 1.03 * 0.75, max_relative = 1e-12);
        assert_relative_eq!(
            cf.get(20).unwrap(),
            -18e6 * 1.03_f64.powi(19) * 0.75,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_year_zero_always_zero() {
        for (esc, tax) in [(0.0, 0.0), (0.1, 0.5), (2.0, 1.0)] {
            let cf = leasing_cashflows(&lease_params(esc, tax));
            assert_eq!(cf.get(0), Some(0.0));
        }
    }

    #[test]
    fn test_flat_lease_without_tax() {
        let projection = project_lease(&lease_params(0.0, 0.0));
        assert!(projection.rows.iter().all(|r| r.net_cash == -18e6 && r.tax_shield == 0.0));
        assert_relative_eq!(projection.total_payments(), 18e6 * 20.0);
    }

    #[test]
    fn test_full_deduction_zeroes_cost() {
        let cf = leasing_cashflows(&lease_params(0.03, 1.0));
        assert!(cf.values().iter().all(|&v| v == 0.0));
    }
}
