//! Lease vs. Own - cash-flow and NPV comparison for a capital facility
//!
//! This library provides:
//! - Validated scenario parameters, with display-unit conversion and loaders
//! - Ownership projection (equity outlay, amortizing debt, depreciation and
//!   interest tax shields, salvage)
//! - Leasing projection (escalating, tax-deductible payments)
//! - NPV discounting and cumulative cash-flow tables
//! - Session-scoped input controls for interactive front ends
//! - Batch scenario runs

pub mod params;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod session;

// Re-export commonly used types
pub use params::{ParameterSet, RawParameters, ValidationError};
pub use projection::{leasing_cashflows, npv, ownership_cashflows, CashflowSequence};
pub use report::{analyze, AnalysisReport};
pub use scenario::ScenarioRunner;
