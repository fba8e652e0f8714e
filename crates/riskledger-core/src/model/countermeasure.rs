//! Countermeasure records and the control-framework vocabulary

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::residual_risk_score;

/// A mitigating control recorded against a threat.
///
/// The residual score is derived from the threat's total risk score and the
/// estimated effectiveness at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Countermeasure {
    /// Id of the mitigated threat.
    pub threat_id: String,
    /// What the control does.
    pub description: String,
    /// Control-framework function the control belongs to.
    pub control_function: ControlFunction,
    /// Rough implementation timeline, free-form (`"3-6 months"`).
    pub implementation_timeline: String,
    /// Rough cost estimate, free-form.
    pub estimated_cost: String,
    /// Estimated risk reduction, integer percent in 20-95.
    pub effectiveness_percent: u8,
    /// Total risk score the residual was computed against.
    pub total_risk_score: f64,
    /// Risk remaining after the control is applied.
    pub residual_risk_score: f64,
}

impl Countermeasure {
    /// Builds a countermeasure, deriving the residual score.
    ///
    /// Callers validate effectiveness first; see
    /// [`is_valid_effectiveness`](crate::scoring::is_valid_effectiveness).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        threat_id: impl Into<String>,
        description: impl Into<String>,
        control_function: ControlFunction,
        implementation_timeline: impl Into<String>,
        estimated_cost: impl Into<String>,
        effectiveness_percent: u8,
        total_risk_score: f64,
    ) -> Self {
        Countermeasure {
            threat_id: threat_id.into(),
            description: description.into(),
            control_function,
            implementation_timeline: implementation_timeline.into(),
            estimated_cost: estimated_cost.into(),
            effectiveness_percent,
            total_risk_score,
            residual_risk_score: residual_risk_score(total_risk_score, effectiveness_percent),
        }
    }
}

/// The five control-framework functions a countermeasure is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlFunction {
    Identify,
    Protect,
    Detect,
    Respond,
    Recover,
}

impl ControlFunction {
    /// All functions, in framework order.
    pub const ALL: [ControlFunction; 5] = [
        ControlFunction::Identify,
        ControlFunction::Protect,
        ControlFunction::Detect,
        ControlFunction::Respond,
        ControlFunction::Recover,
    ];
}

impl fmt::Display for ControlFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControlFunction::Identify => "Identify",
            ControlFunction::Protect => "Protect",
            ControlFunction::Detect => "Detect",
            ControlFunction::Respond => "Respond",
            ControlFunction::Recover => "Recover",
        };
        write!(f, "{}", name)
    }
}
