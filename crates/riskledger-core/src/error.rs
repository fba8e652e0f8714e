//! Error types for RiskLedger

use thiserror::Error;

/// Main error type for RiskLedger operations
#[derive(Debug, Error)]
pub enum RiskError {
    /// A rubric rating outside the 1-5 scale
    #[error("{dimension} rating {value} is out of range (expected 1-5)")]
    RatingOutOfRange {
        /// Rubric dimension the rating belongs to
        dimension: &'static str,
        /// The rejected value
        value: u8,
    },

    /// A countermeasure effectiveness outside the 20-95% range
    #[error("effectiveness {0}% is out of range (expected 20-95)")]
    EffectivenessOutOfRange(u8),

    /// A required form field was left empty
    #[error("required field is missing: {0}")]
    MissingField(&'static str),

    /// Impact weights that are negative or do not sum to 1.0
    #[error("invalid impact weights: {0}")]
    InvalidWeights(String),

    /// Severity thresholds that are not strictly descending
    #[error("invalid risk thresholds: {0}")]
    InvalidThresholds(String),

    /// An operation referenced a threat id that is not in the register
    #[error("unknown threat: {0}")]
    UnknownThreat(String),

    /// A threat id collided with an existing record
    #[error("threat {0} already exists")]
    DuplicateThreat(String),

    /// A countermeasure was recorded for a threat without a risk calculation
    #[error("threat {0} has no risk calculation; assess impact and likelihood first")]
    MissingRiskCalculation(String),

    /// A delete referenced a threat with no recorded countermeasure
    #[error("threat {0} has no recorded countermeasure")]
    MissingCountermeasure(String),
}

/// Result type alias for RiskLedger operations
pub type Result<T> = std::result::Result<T, RiskError>;
