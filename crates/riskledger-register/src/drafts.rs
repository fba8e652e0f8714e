//! Form payloads the register consumes

use chrono::NaiveDate;

use riskledger_core::{ControlFunction, RiskError, ThreatCategory, ThreatStatus};

/// Unvalidated threat form payload.
///
/// The register validates and assigns the identifier.
#[derive(Debug, Clone)]
pub struct ThreatDraft {
    pub name: String,
    pub description: String,
    pub category: ThreatCategory,
    pub owner: String,
    pub date_identified: NaiveDate,
    pub status: ThreatStatus,
}

impl ThreatDraft {
    pub(crate) fn validate(&self) -> Result<(), RiskError> {
        if self.name.trim().is_empty() {
            return Err(RiskError::MissingField("name"));
        }
        if self.description.trim().is_empty() {
            return Err(RiskError::MissingField("description"));
        }
        if self.owner.trim().is_empty() {
            return Err(RiskError::MissingField("owner"));
        }
        Ok(())
    }
}

/// Unvalidated countermeasure form payload.
///
/// The register resolves the threat's current total risk score and derives
/// the residual.
#[derive(Debug, Clone)]
pub struct CountermeasureDraft {
    pub description: String,
    pub control_function: ControlFunction,
    pub implementation_timeline: String,
    pub estimated_cost: String,
    pub effectiveness_percent: u8,
}

impl CountermeasureDraft {
    pub(crate) fn validate(&self) -> Result<(), RiskError> {
        if self.description.trim().is_empty() {
            return Err(RiskError::MissingField("description"));
        }
        if !riskledger_core::is_valid_effectiveness(self.effectiveness_percent) {
            return Err(RiskError::EffectivenessOutOfRange(self.effectiveness_percent));
        }
        Ok(())
    }
}
