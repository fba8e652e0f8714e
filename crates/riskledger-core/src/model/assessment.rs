//! Impact and likelihood assessment records

use serde::{Deserialize, Serialize};

use crate::scoring::{likelihood_score, weighted_impact_score, ImpactWeights};

/// Per-threat impact ratings across the four impact dimensions.
///
/// Ratings are integers in 1-5; `weighted_impact_score` is derived at
/// construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactAssessment {
    /// Id of the assessed threat.
    pub threat_id: String,
    /// Direct monetary loss rating.
    pub financial: u8,
    /// Brand and trust damage rating.
    pub reputational: u8,
    /// Business disruption rating.
    pub operational: u8,
    /// Compliance exposure rating.
    pub regulatory: u8,
    /// Weighted sum of the four ratings.
    pub weighted_impact_score: f64,
}

impl ImpactAssessment {
    /// Builds an assessment, deriving the weighted score from the ratings.
    ///
    /// Callers validate the ratings first; see
    /// [`is_valid_rating`](crate::scoring::is_valid_rating).
    pub fn new(
        threat_id: impl Into<String>,
        financial: u8,
        reputational: u8,
        operational: u8,
        regulatory: u8,
        weights: &ImpactWeights,
    ) -> Self {
        ImpactAssessment {
            threat_id: threat_id.into(),
            financial,
            reputational,
            operational,
            regulatory,
            weighted_impact_score: weighted_impact_score(
                financial,
                reputational,
                operational,
                regulatory,
                weights,
            ),
        }
    }
}

/// Per-threat likelihood ratings across the three likelihood dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikelihoodAssessment {
    /// Id of the assessed threat.
    pub threat_id: String,
    /// Capability of the expected threat actor.
    pub actor_capability: u8,
    /// Exposure and opportunity rating.
    pub opportunity: u8,
    /// Historical precedent rating.
    pub historical_precedent: u8,
    /// Mean of the three ratings.
    pub likelihood_score: f64,
}

impl LikelihoodAssessment {
    /// Builds an assessment, deriving the mean score from the ratings.
    pub fn new(
        threat_id: impl Into<String>,
        actor_capability: u8,
        opportunity: u8,
        historical_precedent: u8,
    ) -> Self {
        LikelihoodAssessment {
            threat_id: threat_id.into(),
            actor_capability,
            opportunity,
            historical_precedent,
            likelihood_score: likelihood_score(actor_capability, opportunity, historical_precedent),
        }
    }
}
