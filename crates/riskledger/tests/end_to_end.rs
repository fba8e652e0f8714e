//! Full register lifecycle against the file-backed store.

use chrono::NaiveDate;
use tempfile::TempDir;

use riskledger::prelude::*;
use riskledger::{CsvExporter, MarkdownReport, RiskError};

fn waf_draft() -> ThreatDraft {
    ThreatDraft {
        name: "Misconfigured Web Application Firewall".into(),
        description: "WAF misconfiguration enabling SSRF attacks".into(),
        category: ThreatCategory::CloudInfrastructure,
        owner: "Cloud Security Team".into(),
        date_identified: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        status: ThreatStatus::Open,
    }
}

fn pam_draft() -> ThreatDraft {
    ThreatDraft {
        name: "Inadequate Privileged Access Management".into(),
        description: "Insufficient controls over privileged access".into(),
        category: ThreatCategory::AccessControl,
        owner: "Identity & Access Management".into(),
        date_identified: NaiveDate::from_ymd_opt(2024, 7, 16).unwrap(),
        status: ThreatStatus::Open,
    }
}

#[test]
fn record_assess_mitigate_export_reload() -> Result<(), RiskError> {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path().join("data")).unwrap();

    let waf_id;
    {
        let mut register = RiskRegister::open(store.clone());
        waf_id = register.add_threat(waf_draft())?;
        let pam_id = register.add_threat(pam_draft())?;

        register.assess_impact(&waf_id, 5, 5, 4, 5)?;
        register.assess_likelihood(&waf_id, 4, 4, 4)?;
        register.assess_impact(&pam_id, 2, 2, 2, 2)?;
        register.assess_likelihood(&pam_id, 2, 2, 2)?;

        register.record_countermeasure(
            &waf_id,
            CountermeasureDraft {
                description: "Implement CSPM tooling with IaC security reviews".into(),
                control_function: ControlFunction::Protect,
                implementation_timeline: "3-6 months".into(),
                estimated_cost: "R150,000 - R300,000".into(),
                effectiveness_percent: 75,
            },
        )?;

        let summary = register.summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.high, 1);
        assert_eq!(summary.low, 1);
    }

    // A fresh register over the same directory sees everything.
    let register = RiskRegister::open(store);
    assert_eq!(register.threats().len(), 2);
    assert_eq!(register.countermeasures().len(), 1);

    let risk = register.dataset().risk_calculation(&waf_id).unwrap();
    assert!((risk.total_risk_score - 19.2).abs() < 1e-9);
    assert_eq!(risk.risk_level, RiskLevel::High);

    let cm = register.dataset().countermeasure(&waf_id).unwrap();
    assert!((cm.residual_risk_score - 4.8).abs() < 1e-9);

    // Export the workbook and report next to the data.
    let export_dir = dir.path().join("export");
    CsvExporter::write_workbook(register.dataset(), &export_dir).unwrap();
    assert!(export_dir.join("risk_calculation.csv").exists());

    let report = MarkdownReport::to_string(register.dataset());
    assert!(report.contains("| Misconfigured Web Application Firewall | 19.2 | High |"));
    Ok(())
}

#[test]
fn custom_config_flows_through_the_register() {
    let config = ScoringConfig::new().with_weights(ImpactWeights {
        financial: 0.70,
        reputational: 0.10,
        operational: 0.10,
        regulatory: 0.10,
    });

    let mut register = RiskRegister::open_with_config(MemoryStore::new(), config).unwrap();
    let id = register.add_threat(waf_draft()).unwrap();
    register.assess_impact(&id, 5, 1, 1, 1).unwrap();
    register.assess_likelihood(&id, 3, 3, 3).unwrap();

    let risk = &register.risk_calculations()[0];
    // 0.7*5 + 0.1*1 + 0.1*1 + 0.1*1 = 3.8, times likelihood 3.0.
    assert!((risk.weighted_impact_score - 3.8).abs() < 1e-9);
    assert!((risk.total_risk_score - 11.4).abs() < 1e-9);
    assert_eq!(risk.risk_level, RiskLevel::Medium);
}
