//! Domain records for the risk register
//!
//! Records are plain serde-serializable value types. Derived score fields are
//! set at construction time from the scoring functions and are never mutated
//! independently.

mod assessment;
mod countermeasure;
mod dataset;
mod threat;

#[cfg(test)]
mod tests;

pub use assessment::{ImpactAssessment, LikelihoodAssessment};
pub use countermeasure::{ControlFunction, Countermeasure};
pub use dataset::RiskDataset;
pub use threat::{Threat, ThreatCategory, ThreatStatus};

use serde::{Deserialize, Serialize};

use crate::scoring::{total_risk_score, RiskLevel, RiskThresholds};

/// Derived risk record joining a threat with its two assessments.
///
/// Rebuilt by the register after every mutation; never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskCalculation {
    /// Id of the threat this calculation belongs to.
    pub threat_id: String,
    /// Threat name, denormalized for display and export.
    pub threat_name: String,
    /// Weighted impact component score.
    pub weighted_impact_score: f64,
    /// Likelihood component score.
    pub likelihood_score: f64,
    /// Product of the two component scores.
    pub total_risk_score: f64,
    /// Severity tier of the total score.
    pub risk_level: RiskLevel,
}

impl RiskCalculation {
    /// Derives the risk record for a threat from its two assessments.
    pub fn derive(
        threat: &Threat,
        impact: &ImpactAssessment,
        likelihood: &LikelihoodAssessment,
        thresholds: &RiskThresholds,
    ) -> Self {
        let total = total_risk_score(impact.weighted_impact_score, likelihood.likelihood_score);
        RiskCalculation {
            threat_id: threat.id.clone(),
            threat_name: threat.name.clone(),
            weighted_impact_score: impact.weighted_impact_score,
            likelihood_score: likelihood.likelihood_score,
            total_risk_score: total,
            risk_level: RiskLevel::classify(total, thresholds),
        }
    }
}
