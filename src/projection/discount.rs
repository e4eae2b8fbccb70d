//! Net present value with annual, end-of-year discounting
//!
//! Shared by the ownership and leasing alternatives. Flows are indexed by year:
//! index 0 is undiscounted, index `t` is divided by `(1 + r)^t`.

/// Calculate the NPV of a yearly cash-flow series
///
/// # Arguments
/// * `cashflows` - Flows indexed by year, starting at year 0
/// * `discount_rate` - Annual rate as a decimal (e.g., 0.06 for 6%); callers
///   keep it above -1
///
/// # Returns
/// * `f64` - Present value at year 0 (0.0 for an empty series)
pub fn npv(cashflows: &[f64], discount_rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + discount_rate).powi(t as i32))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_is_simple_sum() {
        let flows = [-120.0e6, -10.0e6, -9.5e6, 35.0e6, 0.0, 12.25];
        let sum: f64 = flows.iter().sum();
        assert_relative_eq!(npv(&flows, 0.0), sum);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(npv(&[], 0.06), 0.0);
    }

    #[test]
    fn test_single_discounted_flow() {
        // $1,060 received in one year at 6% is worth $1,000 today
        assert_relative_eq!(npv(&[0.0, 1060.0], 0.06), 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_year_zero_undiscounted() {
        assert_eq!(npv(&[-500.0], 0.15), -500.0);
    }

    #[test]
    fn test_level_annuity() {
        // 5 payments of 100 at 5%: 100 * (1 - 1.05^-5) / 0.05 = 432.9477
        let flows = [0.0, 100.0, 100.0, 100.0, 100.0, 100.0];
        assert_relative_eq!(npv(&flows, 0.05), 432.947_667, epsilon = 1e-5);
    }
}
