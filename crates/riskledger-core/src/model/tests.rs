use chrono::NaiveDate;

use super::*;
use crate::scoring::{ImpactWeights, RiskLevel, RiskThresholds};

fn threat(id: &str, name: &str) -> Threat {
    Threat {
        id: id.to_string(),
        name: name.to_string(),
        description: "WAF misconfiguration enabling SSRF attacks".to_string(),
        category: ThreatCategory::CloudInfrastructure,
        owner: "Cloud Security Team".to_string(),
        date_identified: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        status: ThreatStatus::Open,
    }
}

#[test]
fn impact_assessment_derives_weighted_score() {
    let assessment = ImpactAssessment::new("T001", 5, 5, 4, 5, &ImpactWeights::default());
    assert!((assessment.weighted_impact_score - 4.8).abs() < 1e-9);
    assert_eq!(assessment.financial, 5);
    assert_eq!(assessment.operational, 4);
}

#[test]
fn likelihood_assessment_derives_mean_score() {
    let assessment = LikelihoodAssessment::new("T001", 4, 4, 4);
    assert!((assessment.likelihood_score - 4.0).abs() < 1e-9);
}

#[test]
fn risk_calculation_joins_the_assessments() {
    let threat = threat("T001", "Misconfigured Web Application Firewall");
    let impact = ImpactAssessment::new("T001", 5, 5, 4, 5, &ImpactWeights::default());
    let likelihood = LikelihoodAssessment::new("T001", 4, 4, 4);

    let risk = RiskCalculation::derive(&threat, &impact, &likelihood, &RiskThresholds::default());
    assert_eq!(risk.threat_id, "T001");
    assert_eq!(risk.threat_name, threat.name);
    assert!((risk.total_risk_score - 19.2).abs() < 1e-9);
    assert_eq!(risk.risk_level, RiskLevel::High);
}

#[test]
fn countermeasure_derives_residual_score() {
    let cm = Countermeasure::new(
        "T001",
        "Implement CSPM tooling with IaC security reviews",
        ControlFunction::Protect,
        "3-6 months",
        "R150,000 - R300,000",
        75,
        19.2,
    );
    assert!((cm.residual_risk_score - 4.8).abs() < 1e-9);
    assert_eq!(cm.effectiveness_percent, 75);
}

#[test]
fn dataset_lookups_match_by_threat_id() {
    let mut dataset = RiskDataset::new();
    assert!(dataset.is_empty());

    dataset.threats.push(threat("T001", "WAF"));
    dataset
        .impact_assessments
        .push(ImpactAssessment::new("T001", 3, 3, 3, 3, &ImpactWeights::default()));

    assert!(dataset.threat("T001").is_some());
    assert!(dataset.threat("T002").is_none());
    assert!(dataset.impact_assessment("T001").is_some());
    assert!(dataset.likelihood_assessment("T001").is_none());
    assert!(!dataset.is_empty());
}

#[test]
fn vocabularies_render_their_display_names() {
    assert_eq!(ThreatCategory::ThirdParty.to_string(), "Third-Party");
    assert_eq!(ThreatStatus::InProgress.to_string(), "In Progress");
    assert_eq!(ControlFunction::Identify.to_string(), "Identify");
    assert_eq!(ThreatCategory::ALL.len(), 9);
    assert_eq!(ControlFunction::ALL.len(), 5);
}
