//! Cash-flow output structures for projections

use super::discount::npv;
use serde::{Deserialize, Serialize};

/// Yearly money values indexed by year 0..=N
///
/// Year 0 is the time-zero flow. Sequences are immutable once built; the
/// running totals come from [`CashflowSequence::cumulative`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashflowSequence(Vec<f64>);

impl CashflowSequence {
    /// Number of entries (analysis years + 1 for projection output)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value at a given year
    pub fn get(&self, year: u32) -> Option<f64> {
        self.0.get(year as usize).copied()
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// (year, value) pairs in year order
    pub fn years(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.0.iter().enumerate().map(|(t, &cf)| (t as u32, cf))
    }

    /// Simple (undiscounted) sum
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Running sum, built so that `c[i] == c[i - 1] + self[i]` exactly
    pub fn cumulative(&self) -> CashflowSequence {
        let mut running = 0.0;
        let values = self
            .0
            .iter()
            .map(|&cf| {
                running += cf;
                running
            })
            .collect();
        CashflowSequence(values)
    }

    /// Net present value at an annual discount rate
    pub fn npv(&self, discount_rate: f64) -> f64 {
        npv(&self.0, discount_rate)
    }
}

impl From<Vec<f64>> for CashflowSequence {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl From<CashflowSequence> for Vec<f64> {
    fn from(seq: CashflowSequence) -> Self {
        seq.0
    }
}

impl FromIterator<f64> for CashflowSequence {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One year of the ownership projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnershipRow {
    pub year: u32,

    // Debt
    pub bop_debt: f64,
    pub interest_expense: f64,
    pub principal_payment: f64,
    pub financing_cash: f64,
    pub eop_debt: f64,

    // Operations
    pub operating_cost: f64,

    // Tax
    pub depreciation: f64,
    pub depreciation_shield: f64,
    pub interest_shield: f64,
    pub tax_shield: f64,

    pub salvage: f64,

    /// -operating_cost - financing_cash + tax_shield + salvage
    pub net_cash: f64,
}

/// Complete ownership projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnershipProjection {
    /// Equity-funded share of capex paid at time zero (negative)
    pub equity_outlay: f64,

    /// Years 1..=N
    pub rows: Vec<OwnershipRow>,

    /// Year 0 outlay followed by each row's net cash
    pub cashflows: CashflowSequence,
}

impl OwnershipProjection {
    /// Row for a given year (1-indexed)
    pub fn row(&self, year: u32) -> Option<&OwnershipRow> {
        year.checked_sub(1).and_then(|i| self.rows.get(i as usize))
    }

    /// Debt still outstanding at the end of the horizon
    pub fn residual_debt(&self) -> f64 {
        self.rows.last().map(|r| r.eop_debt).unwrap_or(0.0)
    }

    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest_expense).sum()
    }

    pub fn total_tax_shield(&self) -> f64 {
        self.rows.iter().map(|r| r.tax_shield).sum()
    }
}

/// One year of the leasing projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseRow {
    pub year: u32,
    pub payment: f64,
    pub tax_shield: f64,
    /// -payment + tax_shield
    pub net_cash: f64,
}

/// Complete leasing projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaseProjection {
    /// Years 1..=N
    pub rows: Vec<LeaseRow>,

    /// Zero at year 0 followed by each row's net cash
    pub cashflows: CashflowSequence,
}

impl LeaseProjection {
    pub fn total_payments(&self) -> f64 {
        self.rows.iter().map(|r| r.payment).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_recurrence() {
        let seq = CashflowSequence::from(vec![-120.0, -13.5, 7.25, 0.1, -0.3]);
        let cum = seq.cumulative();
        assert_eq!(cum.len(), seq.len());
        assert_eq!(cum.get(0), seq.get(0));
        for i in 1..seq.len() {
            assert_eq!(cum.values()[i], cum.values()[i - 1] + seq.values()[i]);
        }
    }

    #[test]
    fn test_years_and_total() {
        let seq: CashflowSequence = vec![-10.0, 4.0, 4.0, 4.0].into_iter().collect();
        let years: Vec<u32> = seq.years().map(|(t, _)| t).collect();
        assert_eq!(years, vec![0, 1, 2, 3]);
        assert_eq!(seq.total(), 2.0);
        assert_eq!(seq.get(4), None);
    }

    #[test]
    fn test_empty_sequence() {
        let seq = CashflowSequence::default();
        assert!(seq.is_empty());
        assert!(seq.cumulative().is_empty());
        assert_eq!(seq.npv(0.06), 0.0);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let seq = CashflowSequence::from(vec![0.0, -1.5]);
        assert_eq!(serde_json::to_string(&seq).unwrap(), "[0.0,-1.5]");
    }
}
