//! RiskLedger Core - Domain model and risk scoring
//!
//! This crate provides the fundamental types for RiskLedger:
//! - Domain records for threats, assessments, and countermeasures
//! - The canonical scoring and classification functions
//! - Severity tiers and score bands
//! - Summary statistics and the likelihood/impact matrix

pub mod error;
pub mod model;
pub mod scoring;
pub mod summary;

pub use error::{Result, RiskError};
pub use model::{
    ControlFunction, Countermeasure, ImpactAssessment, LikelihoodAssessment, RiskCalculation,
    RiskDataset, Threat, ThreatCategory, ThreatStatus,
};
pub use scoring::{
    is_valid_effectiveness, is_valid_rating, likelihood_score, residual_risk_score,
    total_risk_score, weighted_impact_score, ImpactWeights, RiskLevel, RiskThresholds, ScoreBand,
};
pub use summary::{top_risks, RiskMatrix, RiskSummary};
