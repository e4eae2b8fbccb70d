//! Error types for parameter construction and loading

use super::ParamField;
use thiserror::Error;

/// A scenario input violated its domain constraint
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// NaN or infinite input
    #[error("{field} must be a finite number (got {value})")]
    NonFinite { field: ParamField, value: f64 },

    /// Monetary or rate input below zero
    #[error("{field} must be non-negative (got {value})")]
    Negative { field: ParamField, value: f64 },

    /// Input that must be strictly positive was zero or less
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: ParamField, value: f64 },

    /// Fraction or year count outside its closed interval
    #[error("{field} must be within [{min}, {max}] (got {value})")]
    OutOfRange {
        field: ParamField,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Year count that must be at least one was zero
    #[error("{field} must be at least 1 year")]
    ZeroYears { field: ParamField },
}

impl ValidationError {
    /// The offending field
    pub fn field(&self) -> ParamField {
        match self {
            ValidationError::NonFinite { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::NotPositive { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::ZeroYears { field } => *field,
        }
    }
}

/// Failure reading parameters or scenarios from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parameter JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scenario CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("scenario '{scenario}': {source}")]
    Invalid {
        scenario: String,
        #[source]
        source: ValidationError,
    },
}
