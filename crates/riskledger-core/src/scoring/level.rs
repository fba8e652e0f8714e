//! Severity tiers and score bands

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};

/// Severity tier of a total risk score.
///
/// Tiers order from least to most severe, so `Ord` can rank risks directly.
///
/// # Examples
///
/// ```
/// use riskledger_core::{RiskLevel, RiskThresholds};
///
/// let level = RiskLevel::classify(19.2, &RiskThresholds::default());
/// assert_eq!(level, RiskLevel::High);
/// assert!(RiskLevel::Critical > RiskLevel::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Acceptable with monitoring.
    Low,
    /// Manageable; not a high risk.
    Medium,
    /// Priority mitigation needed with controls.
    High,
    /// Immediate action needed.
    Critical,
}

impl RiskLevel {
    /// All tiers, least severe first.
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Classifies a total risk score against a threshold table.
    pub fn classify(total_risk_score: f64, thresholds: &RiskThresholds) -> Self {
        if total_risk_score >= thresholds.critical {
            RiskLevel::Critical
        } else if total_risk_score >= thresholds.high {
            RiskLevel::High
        } else if total_risk_score >= thresholds.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Classifies a total risk score against the canonical threshold table.
    pub fn from_score(total_risk_score: f64) -> Self {
        Self::classify(total_risk_score, &RiskThresholds::default())
    }

    /// Short response guidance shown next to the tier.
    pub fn guidance(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Acceptable with monitoring",
            RiskLevel::Medium => "Manageable and not a high risk",
            RiskLevel::High => "Priority mitigation needed with controls",
            RiskLevel::Critical => "Immediate action needed",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        };
        write!(f, "{}", name)
    }
}

/// Lower bounds of the Medium, High, and Critical tiers.
///
/// A score below `medium` is Low. The canonical table is Critical >= 20,
/// High >= 13, Medium >= 6 over the 1-25 total score range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RiskThresholds {
    /// Lower bound of the Medium tier.
    pub medium: f64,
    /// Lower bound of the High tier.
    pub high: f64,
    /// Lower bound of the Critical tier.
    pub critical: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        RiskThresholds {
            medium: 6.0,
            high: 13.0,
            critical: 20.0,
        }
    }
}

impl RiskThresholds {
    /// Checks that the bounds are finite and strictly ascending.
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("medium", self.medium),
            ("high", self.high),
            ("critical", self.critical),
        ];
        for (name, bound) in bounds {
            if !bound.is_finite() {
                return Err(RiskError::InvalidThresholds(format!(
                    "{name} bound {bound} is not finite"
                )));
            }
        }
        if self.medium >= self.high || self.high >= self.critical {
            return Err(RiskError::InvalidThresholds(format!(
                "bounds must ascend: medium {} < high {} < critical {}",
                self.medium, self.high, self.critical
            )));
        }
        Ok(())
    }
}

/// Qualitative band of a continuous 1-5 component score.
///
/// Bands change at 1.5, 2.5, 3.5, and 4.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ScoreBand {
    /// All bands, lowest first.
    pub const ALL: [ScoreBand; 5] = [
        ScoreBand::VeryLow,
        ScoreBand::Low,
        ScoreBand::Medium,
        ScoreBand::High,
        ScoreBand::VeryHigh,
    ];

    /// Maps a 1.0-5.0 component score onto its band.
    ///
    /// # Examples
    ///
    /// ```
    /// use riskledger_core::ScoreBand;
    ///
    /// assert_eq!(ScoreBand::of(1.5), ScoreBand::VeryLow);
    /// assert_eq!(ScoreBand::of(4.8), ScoreBand::VeryHigh);
    /// ```
    pub fn of(score: f64) -> Self {
        if score <= 1.5 {
            ScoreBand::VeryLow
        } else if score <= 2.5 {
            ScoreBand::Low
        } else if score <= 3.5 {
            ScoreBand::Medium
        } else if score <= 4.5 {
            ScoreBand::High
        } else {
            ScoreBand::VeryHigh
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoreBand::VeryLow => "Very Low",
            ScoreBand::Low => "Low",
            ScoreBand::Medium => "Medium",
            ScoreBand::High => "High",
            ScoreBand::VeryHigh => "Very High",
        };
        write!(f, "{}", name)
    }
}
