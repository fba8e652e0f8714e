//! Threat records and their closed category/status vocabularies

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A recorded potential security event with ownership and status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Threat {
    /// Register-assigned identifier, `T001` style.
    pub id: String,
    /// Short display name.
    pub name: String,
    /// Free-form description of the threat.
    pub description: String,
    /// Closed category the threat falls under.
    pub category: ThreatCategory,
    /// Team or person accountable for the threat.
    pub owner: String,
    /// Date the threat was identified.
    pub date_identified: NaiveDate,
    /// Lifecycle status.
    pub status: ThreatStatus,
}

/// Closed set of threat categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatCategory {
    CloudInfrastructure,
    AccessControl,
    InsiderThreat,
    ThirdParty,
    Malware,
    Phishing,
    DataExposure,
    RegulatoryCompliance,
    Other,
}

impl ThreatCategory {
    /// All categories, in form-option order.
    pub const ALL: [ThreatCategory; 9] = [
        ThreatCategory::CloudInfrastructure,
        ThreatCategory::AccessControl,
        ThreatCategory::InsiderThreat,
        ThreatCategory::ThirdParty,
        ThreatCategory::Malware,
        ThreatCategory::Phishing,
        ThreatCategory::DataExposure,
        ThreatCategory::RegulatoryCompliance,
        ThreatCategory::Other,
    ];
}

impl fmt::Display for ThreatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThreatCategory::CloudInfrastructure => "Cloud Infrastructure",
            ThreatCategory::AccessControl => "Access Control",
            ThreatCategory::InsiderThreat => "Insider Threat",
            ThreatCategory::ThirdParty => "Third-Party",
            ThreatCategory::Malware => "Malware",
            ThreatCategory::Phishing => "Phishing",
            ThreatCategory::DataExposure => "Data Exposure",
            ThreatCategory::RegulatoryCompliance => "Regulatory Compliance",
            ThreatCategory::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Lifecycle status of a threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatStatus {
    Open,
    InProgress,
    Closed,
    Mitigated,
}

impl ThreatStatus {
    /// All statuses, in form-option order.
    pub const ALL: [ThreatStatus; 4] = [
        ThreatStatus::Open,
        ThreatStatus::InProgress,
        ThreatStatus::Closed,
        ThreatStatus::Mitigated,
    ];
}

impl fmt::Display for ThreatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThreatStatus::Open => "Open",
            ThreatStatus::InProgress => "In Progress",
            ThreatStatus::Closed => "Closed",
            ThreatStatus::Mitigated => "Mitigated",
        };
        write!(f, "{}", name)
    }
}
