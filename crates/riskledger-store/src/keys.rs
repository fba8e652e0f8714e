//! Storage keys, one per entity collection

use std::fmt;

/// The five collection keys.
///
/// Key strings are stable; renaming one orphans previously persisted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Threats,
    ImpactAssessments,
    LikelihoodAssessments,
    RiskCalculations,
    Countermeasures,
}

impl StorageKey {
    /// All collection keys.
    pub const ALL: [StorageKey; 5] = [
        StorageKey::Threats,
        StorageKey::ImpactAssessments,
        StorageKey::LikelihoodAssessments,
        StorageKey::RiskCalculations,
        StorageKey::Countermeasures,
    ];

    /// The persisted key string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Threats => "risk-analysis-threats",
            StorageKey::ImpactAssessments => "risk-analysis-impact-assessments",
            StorageKey::LikelihoodAssessments => "risk-analysis-likelihood-assessments",
            StorageKey::RiskCalculations => "risk-analysis-risk-calculations",
            StorageKey::Countermeasures => "risk-analysis-countermeasures",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
