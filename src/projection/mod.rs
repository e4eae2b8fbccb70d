//! Cash-flow engine: ownership and leasing projections plus NPV discounting

mod state;
mod cashflows;
mod ownership;
mod leasing;
mod discount;

pub use state::OwnershipState;
pub use cashflows::{CashflowSequence, LeaseProjection, LeaseRow, OwnershipProjection, OwnershipRow};
pub use ownership::{ownership_cashflows, project_ownership};
pub use leasing::{leasing_cashflows, project_lease};
pub use discount::npv;
