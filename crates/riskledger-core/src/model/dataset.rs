//! The five register collections as one value

use serde::{Deserialize, Serialize};

use super::{Countermeasure, ImpactAssessment, LikelihoodAssessment, RiskCalculation, Threat};

/// All register collections together.
///
/// This is the unit the store persists and the exporters consume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskDataset {
    pub threats: Vec<Threat>,
    pub impact_assessments: Vec<ImpactAssessment>,
    pub likelihood_assessments: Vec<LikelihoodAssessment>,
    pub risk_calculations: Vec<RiskCalculation>,
    pub countermeasures: Vec<Countermeasure>,
}

impl RiskDataset {
    /// An empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.threats.is_empty()
            && self.impact_assessments.is_empty()
            && self.likelihood_assessments.is_empty()
            && self.risk_calculations.is_empty()
            && self.countermeasures.is_empty()
    }

    /// Looks up a threat by id.
    pub fn threat(&self, id: &str) -> Option<&Threat> {
        self.threats.iter().find(|t| t.id == id)
    }

    /// Looks up the impact assessment for a threat.
    pub fn impact_assessment(&self, threat_id: &str) -> Option<&ImpactAssessment> {
        self.impact_assessments
            .iter()
            .find(|a| a.threat_id == threat_id)
    }

    /// Looks up the likelihood assessment for a threat.
    pub fn likelihood_assessment(&self, threat_id: &str) -> Option<&LikelihoodAssessment> {
        self.likelihood_assessments
            .iter()
            .find(|a| a.threat_id == threat_id)
    }

    /// Looks up the derived risk calculation for a threat.
    pub fn risk_calculation(&self, threat_id: &str) -> Option<&RiskCalculation> {
        self.risk_calculations
            .iter()
            .find(|r| r.threat_id == threat_id)
    }

    /// Looks up the countermeasure recorded for a threat.
    pub fn countermeasure(&self, threat_id: &str) -> Option<&Countermeasure> {
        self.countermeasures
            .iter()
            .find(|c| c.threat_id == threat_id)
    }
}
