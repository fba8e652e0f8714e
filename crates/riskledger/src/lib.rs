//! RiskLedger - A client-local cybersecurity risk register
//!
//! Record threats, score impact and likelihood against fixed rubrics, derive
//! composite risk scores and severity tiers, and track countermeasures with
//! residual risk - all persisted to a flat local blob store.
//!
//! # Example
//!
//! ```
//! use riskledger::prelude::*;
//! use chrono::NaiveDate;
//!
//! let mut register = RiskRegister::open(MemoryStore::new());
//! let id = register.add_threat(ThreatDraft {
//!     name: "Misconfigured Web Application Firewall".into(),
//!     description: "WAF misconfiguration enabling SSRF attacks".into(),
//!     category: ThreatCategory::CloudInfrastructure,
//!     owner: "Cloud Security Team".into(),
//!     date_identified: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     status: ThreatStatus::Open,
//! })?;
//!
//! register.assess_impact(&id, 5, 5, 4, 5)?;
//! register.assess_likelihood(&id, 4, 4, 4)?;
//!
//! let risk = register.risk_calculations().first().unwrap();
//! assert_eq!(risk.risk_level, RiskLevel::High);
//! # Ok::<(), riskledger::RiskError>(())
//! ```

// Domain model and scoring
pub use riskledger_core::{
    is_valid_effectiveness, is_valid_rating, likelihood_score, residual_risk_score, top_risks,
    total_risk_score, weighted_impact_score, ControlFunction, Countermeasure, ImpactAssessment,
    ImpactWeights, LikelihoodAssessment, Result, RiskCalculation, RiskDataset, RiskError,
    RiskLevel, RiskMatrix, RiskSummary, RiskThresholds, ScoreBand, Threat, ThreatCategory,
    ThreatStatus,
};

// Persistence
pub use riskledger_store::{
    clear_all, load_dataset, save_dataset, FileStore, MemoryStore, StorageKey, Store, StoreError,
};

// Configuration
pub use riskledger_config::{ConfigError, ScoringConfig};

// Register service
pub use riskledger_register::{CountermeasureDraft, RiskRegister, ThreatDraft};

// Export
pub use riskledger_export::{CsvExporter, MarkdownReport};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        ControlFunction, CountermeasureDraft, FileStore, ImpactWeights, MemoryStore, RiskLevel,
        RiskRegister, RiskThresholds, ScoreBand, ScoringConfig, Store, ThreatCategory, ThreatDraft,
        ThreatStatus,
    };
}
