//! Analysis report: NPV comparison and cumulative tables for presentation
//!
//! The report is a derived view over the two cash-flow sequences. It is rebuilt
//! in full whenever the parameters change and never patched in place.

pub mod export;

use crate::params::{DisplayInputs, ParamField, ParameterSet};
use crate::projection::{leasing_cashflows, ownership_cashflows, CashflowSequence};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two financing alternatives being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alternative {
    Owning,
    Leasing,
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alternative::Owning => f.write_str("Owning"),
            Alternative::Leasing => f.write_str("Leasing"),
        }
    }
}

/// NPVs and cumulative cash flows for both alternatives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Rate used for discounting (WACC)
    pub discount_rate: f64,

    pub own_cashflows: CashflowSequence,
    pub lease_cashflows: CashflowSequence,

    pub own_npv: f64,
    pub lease_npv: f64,

    pub cumulative_own: CashflowSequence,
    pub cumulative_lease: CashflowSequence,
}

impl AnalysisReport {
    /// Derive the report from already-projected sequences
    pub fn from_cashflows(
        own_cashflows: CashflowSequence,
        lease_cashflows: CashflowSequence,
        discount_rate: f64,
    ) -> Self {
        let own_npv = own_cashflows.npv(discount_rate);
        let lease_npv = lease_cashflows.npv(discount_rate);
        let cumulative_own = own_cashflows.cumulative();
        let cumulative_lease = lease_cashflows.cumulative();

        Self {
            discount_rate,
            own_cashflows,
            lease_cashflows,
            own_npv,
            lease_npv,
            cumulative_own,
            cumulative_lease,
        }
    }

    /// Alternative with the higher (less costly) NPV; owning on a tie
    pub fn preferred(&self) -> Alternative {
        if self.own_npv >= self.lease_npv {
            Alternative::Owning
        } else {
            Alternative::Leasing
        }
    }

    /// Own NPV minus lease NPV (positive favours owning)
    pub fn npv_advantage(&self) -> f64 {
        self.own_npv - self.lease_npv
    }

    /// NPV comparison table in $M
    pub fn npv_comparison(&self) -> Vec<NpvRow> {
        vec![
            NpvRow { option: Alternative::Owning, npv_millions: self.own_npv / 1e6 },
            NpvRow { option: Alternative::Leasing, npv_millions: self.lease_npv / 1e6 },
        ]
    }

    /// Yearly and cumulative flows side by side, one row per year
    pub fn yearly_rows(&self) -> Vec<YearlyRow> {
        self.own_cashflows
            .years()
            .zip(self.lease_cashflows.values())
            .zip(self.cumulative_own.values().iter().zip(self.cumulative_lease.values()))
            .map(|(((year, owning), &leasing), (&cumulative_owning, &cumulative_leasing))| YearlyRow {
                year,
                owning,
                leasing,
                cumulative_owning,
                cumulative_leasing,
            })
            .collect()
    }
}

/// Project both alternatives and derive the report
pub fn analyze(params: &ParameterSet) -> AnalysisReport {
    let own = ownership_cashflows(params);
    let lease = leasing_cashflows(params);
    let report = AnalysisReport::from_cashflows(own, lease, params.discount_rate());

    debug!(
        "analysis: own NPV {:.2}, lease NPV {:.2}, preferred {}",
        report.own_npv,
        report.lease_npv,
        report.preferred()
    );

    report
}

/// One row of the NPV comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpvRow {
    #[serde(rename = "Option")]
    pub option: Alternative,
    #[serde(rename = "NPV ($M)")]
    pub npv_millions: f64,
}

/// One row of the yearly cash-flow table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Owning Cash Flow")]
    pub owning: f64,
    #[serde(rename = "Leasing Cash Flow")]
    pub leasing: f64,
    #[serde(rename = "Cumulative Owning")]
    pub cumulative_owning: f64,
    #[serde(rename = "Cumulative Leasing")]
    pub cumulative_leasing: f64,
}

/// One row of the input parameter summary, in display units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSummaryRow {
    #[serde(rename = "Parameter")]
    pub parameter: String,
    #[serde(rename = "Value")]
    pub value: f64,
}

/// Input parameter summary table in dashboard order
pub fn parameter_summary(params: &ParameterSet) -> Vec<ParameterSummaryRow> {
    let display = DisplayInputs::from_raw(&params.raw());

    ParamField::ALL
        .iter()
        .map(|&field| {
            let value = match field {
                ParamField::Capex => display.capex_m,
                ParamField::SalvageValue => display.salvage_m,
                ParamField::OperatingCost => display.op_cost_m,
                ParamField::DebtRatio => display.debt_ratio,
                ParamField::InterestRate => display.interest_rate_pct,
                ParamField::DebtTermYears => display.debt_term as f64,
                ParamField::DepreciationYears => display.depreciation_years as f64,
                ParamField::TaxRate => display.tax_rate_pct,
                ParamField::LeaseInitialPayment => display.lease_payment_m,
                ParamField::LeaseEscalation => display.lease_escalation_pct,
                ParamField::OpCostGrowth => display.op_growth_pct,
                ParamField::AnalysisYears => display.analysis_years as f64,
                ParamField::DiscountRate => display.wacc_pct,
            };
            ParameterSummaryRow { parameter: field.label().to_string(), value }
        })
        .collect()
}
