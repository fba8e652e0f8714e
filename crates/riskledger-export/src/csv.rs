//! CSV workbook export

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use riskledger_core::{
    top_risks, Countermeasure, ImpactAssessment, LikelihoodAssessment, RiskCalculation,
    RiskDataset, RiskMatrix, RiskSummary, Threat,
};

/// CSV exporter for the register collections.
///
/// One sheet per collection plus a summary sheet (tier counts, top-5 risks)
/// and the 5x5 risk-matrix sheet. [`CsvExporter::write_workbook`] writes the
/// whole set as one `.csv` file per sheet.
///
/// # Example
///
/// ```
/// use riskledger_export::CsvExporter;
///
/// let csv = CsvExporter::threats_to_string(&[]);
/// assert!(csv.starts_with("id,name,description"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports the threat register sheet.
    pub fn threats_to_string(threats: &[Threat]) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "id,name,description,category,owner,date_identified,status"
        )
        .unwrap();
        for threat in threats {
            writeln!(
                output,
                "{},{},{},{},{},{},{}",
                field(&threat.id),
                field(&threat.name),
                field(&threat.description),
                field(&threat.category.to_string()),
                field(&threat.owner),
                threat.date_identified,
                field(&threat.status.to_string()),
            )
            .unwrap();
        }
        output
    }

    /// Exports the impact assessment sheet.
    pub fn impact_to_string(assessments: &[ImpactAssessment]) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "threat_id,financial,reputational,operational,regulatory,weighted_impact_score"
        )
        .unwrap();
        for a in assessments {
            writeln!(
                output,
                "{},{},{},{},{},{:.1}",
                field(&a.threat_id),
                a.financial,
                a.reputational,
                a.operational,
                a.regulatory,
                a.weighted_impact_score,
            )
            .unwrap();
        }
        output
    }

    /// Exports the likelihood assessment sheet.
    pub fn likelihood_to_string(assessments: &[LikelihoodAssessment]) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "threat_id,actor_capability,opportunity,historical_precedent,likelihood_score"
        )
        .unwrap();
        for a in assessments {
            writeln!(
                output,
                "{},{},{},{},{:.1}",
                field(&a.threat_id),
                a.actor_capability,
                a.opportunity,
                a.historical_precedent,
                a.likelihood_score,
            )
            .unwrap();
        }
        output
    }

    /// Exports the risk calculation sheet.
    pub fn risks_to_string(calculations: &[RiskCalculation]) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "threat_id,threat_name,weighted_impact_score,likelihood_score,total_risk_score,risk_level"
        )
        .unwrap();
        for risk in calculations {
            writeln!(
                output,
                "{},{},{:.1},{:.1},{:.1},{}",
                field(&risk.threat_id),
                field(&risk.threat_name),
                risk.weighted_impact_score,
                risk.likelihood_score,
                risk.total_risk_score,
                risk.risk_level,
            )
            .unwrap();
        }
        output
    }

    /// Exports the countermeasures sheet.
    pub fn countermeasures_to_string(countermeasures: &[Countermeasure]) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "threat_id,description,control_function,implementation_timeline,estimated_cost,effectiveness_percent,total_risk_score,residual_risk_score"
        )
        .unwrap();
        for cm in countermeasures {
            writeln!(
                output,
                "{},{},{},{},{},{},{:.1},{:.1}",
                field(&cm.threat_id),
                field(&cm.description),
                field(&cm.control_function.to_string()),
                field(&cm.implementation_timeline),
                field(&cm.estimated_cost),
                cm.effectiveness_percent,
                cm.total_risk_score,
                cm.residual_risk_score,
            )
            .unwrap();
        }
        output
    }

    /// Exports the summary sheet: tier counts and the top-5 risks.
    pub fn summary_to_string(dataset: &RiskDataset) -> String {
        let summary = RiskSummary::of(&dataset.risk_calculations);
        let mut output = String::new();

        writeln!(output, "Risk Analysis Summary").unwrap();
        writeln!(
            output,
            "Generated on:,{}",
            chrono::Utc::now().date_naive()
        )
        .unwrap();
        writeln!(output).unwrap();
        writeln!(output, "Risk Statistics").unwrap();
        writeln!(output, "Total Risks:,{}", summary.total).unwrap();
        writeln!(output, "Critical Risks:,{}", summary.critical).unwrap();
        writeln!(output, "High Risks:,{}", summary.high).unwrap();
        writeln!(output, "Medium Risks:,{}", summary.medium).unwrap();
        writeln!(output, "Low Risks:,{}", summary.low).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "Top 5 Highest Risks").unwrap();
        for risk in top_risks(&dataset.risk_calculations, 5) {
            writeln!(
                output,
                "{},{:.1},{}",
                field(&risk.threat_name),
                risk.total_risk_score,
                risk.risk_level,
            )
            .unwrap();
        }
        output
    }

    /// Exports the 5x5 risk-matrix sheet, likelihood rows by impact columns.
    pub fn matrix_to_string(calculations: &[RiskCalculation]) -> String {
        let matrix = RiskMatrix::of(calculations);
        let mut output = String::new();
        for likelihood in 1..=5 {
            let row = matrix.row(likelihood);
            writeln!(
                output,
                "{},{},{},{},{}",
                row[0], row[1], row[2], row[3], row[4]
            )
            .unwrap();
        }
        output
    }

    /// Writes the whole workbook, one `.csv` file per sheet, into `dir`.
    pub fn write_workbook(dataset: &RiskDataset, dir: impl AsRef<Path>) -> io::Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let sheets = [
            ("threat_register.csv", Self::threats_to_string(&dataset.threats)),
            (
                "impact_assessment.csv",
                Self::impact_to_string(&dataset.impact_assessments),
            ),
            (
                "likelihood_assessment.csv",
                Self::likelihood_to_string(&dataset.likelihood_assessments),
            ),
            (
                "risk_calculation.csv",
                Self::risks_to_string(&dataset.risk_calculations),
            ),
            (
                "countermeasures.csv",
                Self::countermeasures_to_string(&dataset.countermeasures),
            ),
            ("summary.csv", Self::summary_to_string(dataset)),
            (
                "risk_matrix.csv",
                Self::matrix_to_string(&dataset.risk_calculations),
            ),
        ];
        for (name, contents) in sheets {
            fs::write(dir.join(name), contents)?;
        }
        Ok(())
    }
}

/// Quotes a CSV field when it carries a comma, quote, or newline.
fn field(raw: &str) -> String {
    if raw.contains([',', '"', '\n']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskledger_test::sample_dataset;

    #[test]
    fn threat_sheet_has_header_and_rows() {
        let dataset = sample_dataset();
        let csv = CsvExporter::threats_to_string(&dataset.threats);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "id,name,description,category,owner,date_identified,status"
        );
        assert!(lines[1].starts_with("T001,Misconfigured Web Application Firewall"));
        assert!(lines[1].contains("2024-01-15"));
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let dataset = sample_dataset();
        let csv = CsvExporter::countermeasures_to_string(&dataset.countermeasures);
        assert!(csv.contains("\"R150,000 - R300,000\""));
    }

    #[test]
    fn risk_sheet_formats_scores_to_one_decimal() {
        let dataset = sample_dataset();
        let csv = CsvExporter::risks_to_string(&dataset.risk_calculations);
        assert!(csv.contains("4.8,4.0,19.2,High"));
    }

    #[test]
    fn summary_sheet_counts_match_the_dataset() {
        let dataset = sample_dataset();
        let csv = CsvExporter::summary_to_string(&dataset);
        assert!(csv.contains("Total Risks:,1"));
        assert!(csv.contains("High Risks:,1"));
        assert!(csv.contains("Critical Risks:,0"));
        assert!(csv.contains("Misconfigured Web Application Firewall,19.2,High"));
    }

    #[test]
    fn matrix_sheet_is_five_rows_of_five() {
        let dataset = sample_dataset();
        let csv = CsvExporter::matrix_to_string(&dataset.risk_calculations);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        // Likelihood 4.0, impact 4.8 -> row 4, column 5.
        assert_eq!(lines[3], "0,0,0,0,1");
    }

    #[test]
    fn workbook_writes_one_file_per_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = sample_dataset();

        CsvExporter::write_workbook(&dataset, dir.path()).unwrap();
        for name in [
            "threat_register.csv",
            "impact_assessment.csv",
            "likelihood_assessment.csv",
            "risk_calculation.csv",
            "countermeasures.csv",
            "summary.csv",
            "risk_matrix.csv",
        ] {
            assert!(dir.path().join(name).exists(), "missing sheet {name}");
        }
    }
}
