//! Shared test fixtures for RiskLedger crates.
//!
//! Provides the sample threats and the worked scoring example used across
//! crate tests, so every crate asserts against the same dataset.
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! riskledger-test = { workspace = true }
//! ```

use chrono::NaiveDate;

use riskledger_core::{
    ControlFunction, Countermeasure, ImpactAssessment, ImpactWeights, LikelihoodAssessment,
    RiskCalculation, RiskDataset, RiskThresholds, Threat, ThreatCategory, ThreatStatus,
};

/// The WAF misconfiguration threat from the worked example.
pub fn waf_threat() -> Threat {
    Threat {
        id: "T001".to_string(),
        name: "Misconfigured Web Application Firewall".to_string(),
        description: "WAF misconfiguration enabling SSRF attacks".to_string(),
        category: ThreatCategory::CloudInfrastructure,
        owner: "Cloud Security Team".to_string(),
        date_identified: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        status: ThreatStatus::Open,
    }
}

/// The privileged-access threat from the worked example.
pub fn pam_threat() -> Threat {
    Threat {
        id: "T002".to_string(),
        name: "Inadequate Privileged Access Management".to_string(),
        description: "Insufficient controls over privileged access".to_string(),
        category: ThreatCategory::AccessControl,
        owner: "Identity & Access Management".to_string(),
        date_identified: NaiveDate::from_ymd_opt(2024, 7, 16).expect("valid date"),
        status: ThreatStatus::Open,
    }
}

/// Both sample threats.
pub fn sample_threats() -> Vec<Threat> {
    vec![waf_threat(), pam_threat()]
}

/// The complete worked dataset: two threats, T001 fully assessed at the
/// 4.8 x 4.0 = 19.2 (High) example with a 75%-effective countermeasure.
pub fn sample_dataset() -> RiskDataset {
    let weights = ImpactWeights::default();
    let thresholds = RiskThresholds::default();

    let waf = waf_threat();
    let impact = ImpactAssessment::new(&waf.id, 5, 5, 4, 5, &weights);
    let likelihood = LikelihoodAssessment::new(&waf.id, 4, 4, 4);
    let risk = RiskCalculation::derive(&waf, &impact, &likelihood, &thresholds);
    let countermeasure = Countermeasure::new(
        &waf.id,
        "Implement Cloud Security Posture Management (CSPM) tools with \
         Infrastructure as Code (IaC) security reviews",
        ControlFunction::Protect,
        "3-6 months",
        "R150,000 - R300,000",
        75,
        risk.total_risk_score,
    );

    RiskDataset {
        threats: vec![waf, pam_threat()],
        impact_assessments: vec![impact],
        likelihood_assessments: vec![likelihood],
        risk_calculations: vec![risk],
        countermeasures: vec![countermeasure],
    }
}
