//! Input controls and session-scoped values for interactive front ends
//!
//! Each scenario input is edited through two equivalent widgets (a slider and a
//! number box). Both write into one named value held by an explicit
//! [`SessionStore`], which the presentation layer owns and passes around. The
//! cash-flow engine never sees the store; it only receives the resolved
//! [`crate::params::ParameterSet`].

use log::warn;
use std::collections::HashMap;

/// One editable input with its widget range, in display units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputControl {
    /// Session key (the stored value lives under `<key>_value`)
    pub key: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    /// Widget increment; stored values snap to multiples of it above `min`
    pub step: f64,
}

impl InputControl {
    pub const CAPEX: InputControl = InputControl {
        key: "CAPEX",
        label: "New-build CAPEX ($M)",
        min: 50.0,
        max: 1000.0,
        default: 300.0,
        step: 1.0,
    };

    pub const SALVAGE: InputControl = InputControl {
        key: "salvage",
        label: "Salvage Value ($M)",
        min: 0.0,
        max: 500.0,
        default: 40.0,
        step: 1.0,
    };

    pub const OP_COST: InputControl = InputControl {
        key: "op_cost",
        label: "Initial Operating Cost ($M)",
        min: 1.0,
        max: 100.0,
        default: 12.0,
        step: 1.0,
    };

    pub const DEBT_RATIO: InputControl = InputControl {
        key: "debt_ratio",
        label: "Debt Ratio",
        min: 0.0,
        max: 1.0,
        default: 0.6,
        step: 0.01,
    };

    pub const INTEREST_RATE: InputControl = InputControl {
        key: "interest_rate",
        label: "Interest Rate (%)",
        min: 0.0,
        max: 20.0,
        default: 4.0,
        step: 0.1,
    };

    pub const DEBT_TERM: InputControl = InputControl {
        key: "debt_term",
        label: "Debt Term (years)",
        min: 1.0,
        max: 30.0,
        default: 10.0,
        step: 1.0,
    };

    pub const DEPRECIATION_YEARS: InputControl = InputControl {
        key: "depr_years",
        label: "Depreciation Years",
        min: 1.0,
        max: 30.0,
        default: 10.0,
        step: 1.0,
    };

    pub const TAX_RATE: InputControl = InputControl {
        key: "tax_rate",
        label: "Tax Rate (%)",
        min: 0.0,
        max: 50.0,
        default: 25.0,
        step: 0.1,
    };

    pub const LEASE_PAYMENT: InputControl = InputControl {
        key: "lease_payment",
        label: "Initial Lease Payment ($M)",
        min: 1.0,
        max: 100.0,
        default: 18.0,
        step: 1.0,
    };

    pub const LEASE_ESCALATION: InputControl = InputControl {
        key: "lease_escalation",
        label: "Lease Escalation (%)",
        min: 0.0,
        max: 10.0,
        default: 3.0,
        step: 0.1,
    };

    pub const OP_GROWTH: InputControl = InputControl {
        key: "op_growth",
        label: "Operating Cost Growth (%)",
        min: 0.0,
        max: 10.0,
        default: 2.0,
        step: 0.1,
    };

    pub const ANALYSIS_YEARS: InputControl = InputControl {
        key: "analysis_years",
        label: "Analysis Period (years)",
        min: 5.0,
        max: 40.0,
        default: 20.0,
        step: 1.0,
    };

    pub const WACC: InputControl = InputControl {
        key: "wacc",
        label: "Discount Rate / WACC (%)",
        min: 0.0,
        max: 20.0,
        default: 6.0,
        step: 0.1,
    };

    /// All controls in form order (ownership group, then leasing and analysis)
    pub const ALL: [InputControl; 13] = [
        Self::CAPEX,
        Self::SALVAGE,
        Self::OP_COST,
        Self::DEBT_RATIO,
        Self::INTEREST_RATE,
        Self::DEBT_TERM,
        Self::DEPRECIATION_YEARS,
        Self::TAX_RATE,
        Self::LEASE_PAYMENT,
        Self::LEASE_ESCALATION,
        Self::OP_GROWTH,
        Self::ANALYSIS_YEARS,
        Self::WACC,
    ];

    /// Look up a control by session key
    pub fn by_key(key: &str) -> Option<InputControl> {
        Self::ALL.iter().copied().find(|c| c.key == key)
    }

    /// Clamp a value into the widget range
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Round a value to the nearest widget increment, trimmed to the step's
    /// decimal places
    pub fn snap(&self, value: f64) -> f64 {
        let steps = ((value - self.min) / self.step).round();
        let decimals = (-self.step.log10()).ceil().max(0.0) as i32;
        let scale = 10f64.powi(decimals);
        ((self.min + steps * self.step) * scale).round() / scale
    }

    fn value_key(&self) -> String {
        format!("{}_value", self.key)
    }
}

/// Session-scoped key-value store for edited input values
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    values: HashMap<String, f64>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a control, seeding its default on first read
    pub fn value(&mut self, control: &InputControl) -> f64 {
        *self
            .values
            .entry(control.value_key())
            .or_insert(control.default)
    }

    /// Store a value from either widget, snapped to the control's step and
    /// clamped into its range
    pub fn set(&mut self, control: &InputControl, value: f64) -> f64 {
        let snapped = control.snap(value);
        let clamped = control.clamp(snapped);
        if clamped != snapped {
            warn!(
                "{} = {} outside [{}, {}], using {}",
                control.label, value, control.min, control.max, clamped
            );
        }
        self.values.insert(control.value_key(), clamped);
        clamped
    }

    /// Reconcile the slider and number box readings of one control
    ///
    /// Whichever widget differs from the stored value becomes the new value.
    /// The number box wins when both changed.
    pub fn dual_input(&mut self, control: &InputControl, slider: f64, number: f64) -> f64 {
        let current = self.value(control);
        if number != current {
            self.set(control, number)
        } else if slider != current {
            self.set(control, slider)
        } else {
            current
        }
    }

    /// Whether a control has been read or edited in this session
    pub fn contains(&self, control: &InputControl) -> bool {
        self.values.contains_key(&control.value_key())
    }

    /// Forget all edited values
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_seeds_default() {
        let mut session = SessionStore::new();
        assert!(!session.contains(&InputControl::WACC));
        assert_eq!(session.value(&InputControl::WACC), 6.0);
        assert!(session.contains(&InputControl::WACC));
    }

    #[test]
    fn test_slider_change_wins() {
        let mut session = SessionStore::new();
        // Number box still shows the stored value
        let v = session.dual_input(&InputControl::CAPEX, 420.0, 300.0);
        assert_eq!(v, 420.0);
    }

    #[test]
    fn test_number_change_wins() {
        let mut session = SessionStore::new();
        let v = session.dual_input(&InputControl::CAPEX, 300.0, 512.0);
        assert_eq!(v, 512.0);
    }

    #[test]
    fn test_number_wins_when_both_change() {
        let mut session = SessionStore::new();
        let v = session.dual_input(&InputControl::TAX_RATE, 30.0, 35.0);
        assert_eq!(v, 35.0);
    }

    #[test]
    fn test_values_clamped_to_range() {
        let mut session = SessionStore::new();
        assert_eq!(session.set(&InputControl::ANALYSIS_YEARS, 2.0), 5.0);
        assert_eq!(session.set(&InputControl::DEBT_RATIO, 1.5), 1.0);
        assert_eq!(session.value(&InputControl::DEBT_RATIO), 1.0);
    }

    #[test]
    fn test_values_snap_to_step() {
        let mut session = SessionStore::new();
        assert_eq!(session.set(&InputControl::CAPEX, 300.4), 300.0);
        assert_eq!(session.set(&InputControl::TAX_RATE, 25.04), 25.0);
        assert_eq!(session.set(&InputControl::WACC, 6.0), 6.0);
        assert_eq!(session.set(&InputControl::DEBT_RATIO, 0.557), 0.56);
        assert_eq!(session.set(&InputControl::ANALYSIS_YEARS, 24.6), 25.0);
        assert_eq!(session.value(&InputControl::ANALYSIS_YEARS), 25.0);
    }

    #[test]
    fn test_defaults_lie_on_step_grid() {
        for control in InputControl::ALL.iter() {
            assert_eq!(control.snap(control.default), control.default, "{}", control.key);
        }
    }

    #[test]
    fn test_by_key_and_defaults_in_range() {
        assert_eq!(InputControl::by_key("depr_years"), Some(InputControl::DEPRECIATION_YEARS));
        assert!(InputControl::by_key("missing").is_none());

        for control in InputControl::ALL.iter() {
            assert!(control.default >= control.min && control.default <= control.max, "{}", control.key);
        }
    }

    #[test]
    fn test_clear_resets_to_defaults() {
        let mut session = SessionStore::new();
        session.set(&InputControl::OP_COST, 50.0);
        session.clear();
        assert_eq!(session.value(&InputControl::OP_COST), 12.0);
    }
}
