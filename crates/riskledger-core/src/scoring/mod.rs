//! Canonical scoring functions for the risk register
//!
//! Every derived score in the register comes from the pure functions in this
//! module. Range validation is the caller's responsibility; the register
//! rejects out-of-range input before any record is created.

mod level;

#[cfg(test)]
mod tests;

pub use level::{RiskLevel, RiskThresholds, ScoreBand};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};

/// Weights applied to the four impact dimensions.
///
/// Weights must be non-negative and sum to 1.0, which keeps the weighted
/// impact score inside the 1.0-5.0 band of the underlying ratings.
///
/// # Examples
///
/// ```
/// use riskledger_core::ImpactWeights;
///
/// let weights = ImpactWeights::default();
/// assert!(weights.validate().is_ok());
/// assert_eq!(weights.financial, 0.30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ImpactWeights {
    /// Weight of the financial impact rating.
    pub financial: f64,
    /// Weight of the reputational impact rating.
    pub reputational: f64,
    /// Weight of the operational impact rating.
    pub operational: f64,
    /// Weight of the regulatory impact rating.
    pub regulatory: f64,
}

impl Default for ImpactWeights {
    fn default() -> Self {
        ImpactWeights {
            financial: 0.30,
            reputational: 0.30,
            operational: 0.20,
            regulatory: 0.20,
        }
    }
}

impl ImpactWeights {
    /// Tolerance when checking that weights sum to 1.0.
    const SUM_EPSILON: f64 = 1e-6;

    /// Checks that all weights are non-negative and sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        let parts = [
            ("financial", self.financial),
            ("reputational", self.reputational),
            ("operational", self.operational),
            ("regulatory", self.regulatory),
        ];
        for (name, weight) in parts {
            if !weight.is_finite() || weight < 0.0 {
                return Err(RiskError::InvalidWeights(format!(
                    "{name} weight {weight} is negative or not finite"
                )));
            }
        }

        let sum = self.financial + self.reputational + self.operational + self.regulatory;
        if (sum - 1.0).abs() > Self::SUM_EPSILON {
            return Err(RiskError::InvalidWeights(format!(
                "weights sum to {sum}, expected 1.0"
            )));
        }
        Ok(())
    }
}

/// Returns true if `rating` is a valid 1-5 rubric rating.
#[inline]
pub const fn is_valid_rating(rating: u8) -> bool {
    rating >= 1 && rating <= 5
}

/// Returns true if `effectiveness` is a valid 20-95% estimate.
#[inline]
pub const fn is_valid_effectiveness(effectiveness: u8) -> bool {
    effectiveness >= 20 && effectiveness <= 95
}

/// Computes the weighted impact score across the four impact dimensions.
///
/// Each rating is an integer in 1-5; with valid weights the result lands in
/// 1.0-5.0.
///
/// # Examples
///
/// ```
/// use riskledger_core::{weighted_impact_score, ImpactWeights};
///
/// let score = weighted_impact_score(5, 5, 4, 5, &ImpactWeights::default());
/// assert!((score - 4.8).abs() < 1e-9);
/// ```
pub fn weighted_impact_score(
    financial: u8,
    reputational: u8,
    operational: u8,
    regulatory: u8,
    weights: &ImpactWeights,
) -> f64 {
    financial as f64 * weights.financial
        + reputational as f64 * weights.reputational
        + operational as f64 * weights.operational
        + regulatory as f64 * weights.regulatory
}

/// Computes the likelihood score as the mean of the three likelihood ratings.
///
/// # Examples
///
/// ```
/// use riskledger_core::likelihood_score;
///
/// let score = likelihood_score(4, 4, 4);
/// assert!((score - 4.0).abs() < 1e-9);
/// ```
pub fn likelihood_score(actor_capability: u8, opportunity: u8, historical_precedent: u8) -> f64 {
    (actor_capability as f64 + opportunity as f64 + historical_precedent as f64) / 3.0
}

/// Computes the total risk score from its two component scores.
///
/// Monotonically non-decreasing in both arguments; range 1.0-25.0 for valid
/// component scores.
#[inline]
pub fn total_risk_score(weighted_impact: f64, likelihood: f64) -> f64 {
    weighted_impact * likelihood
}

/// Computes the residual risk score left after applying a countermeasure.
///
/// The stated domain of `effectiveness_percent` is 20-95, but the boundary
/// values 0 and 100 degrade gracefully to the full and zero score.
///
/// # Examples
///
/// ```
/// use riskledger_core::residual_risk_score;
///
/// let residual = residual_risk_score(19.2, 75);
/// assert!((residual - 4.8).abs() < 1e-9);
/// assert_eq!(residual_risk_score(19.2, 100), 0.0);
/// ```
#[inline]
pub fn residual_risk_score(total: f64, effectiveness_percent: u8) -> f64 {
    total * (1.0 - effectiveness_percent as f64 / 100.0)
}
