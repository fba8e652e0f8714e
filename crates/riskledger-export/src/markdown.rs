//! Markdown report generation

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use riskledger_core::{top_risks, RiskDataset, RiskMatrix, RiskSummary};

/// Markdown report generator.
///
/// Renders the register into a human-readable report: summary statistics,
/// the top-5 risks, the full risk table, recorded countermeasures, and the
/// likelihood/impact matrix.
///
/// # Example
///
/// ```
/// use riskledger_export::MarkdownReport;
/// use riskledger_core::RiskDataset;
///
/// let md = MarkdownReport::to_string(&RiskDataset::new());
/// assert!(md.contains("# Risk Analysis Report"));
/// assert!(md.contains("## Summary"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates the report string.
    pub fn to_string(dataset: &RiskDataset) -> String {
        let summary = RiskSummary::of(&dataset.risk_calculations);
        let mut output = String::new();

        writeln!(output, "# Risk Analysis Report").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "- **Generated**: {}",
            chrono::Utc::now().date_naive()
        )
        .unwrap();
        writeln!(output, "- **Threats**: {}", dataset.threats.len()).unwrap();
        writeln!(output, "- **Calculated Risks**: {}", summary.total).unwrap();
        writeln!(output).unwrap();

        writeln!(output, "## Summary").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Tier | Count |").unwrap();
        writeln!(output, "|------|-------|").unwrap();
        writeln!(output, "| Critical | {} |", summary.critical).unwrap();
        writeln!(output, "| High | {} |", summary.high).unwrap();
        writeln!(output, "| Medium | {} |", summary.medium).unwrap();
        writeln!(output, "| Low | {} |", summary.low).unwrap();
        writeln!(output).unwrap();

        let top = top_risks(&dataset.risk_calculations, 5);
        if !top.is_empty() {
            writeln!(output, "## Top Risks").unwrap();
            writeln!(output).unwrap();
            writeln!(output, "| Threat | Total Score | Tier |").unwrap();
            writeln!(output, "|--------|-------------|------|").unwrap();
            for risk in top {
                writeln!(
                    output,
                    "| {} | {:.1} | {} |",
                    risk.threat_name, risk.total_risk_score, risk.risk_level
                )
                .unwrap();
            }
            writeln!(output).unwrap();
        }

        if !dataset.risk_calculations.is_empty() {
            writeln!(output, "## Risk Calculations").unwrap();
            writeln!(output).unwrap();
            writeln!(
                output,
                "| Threat | Impact | Likelihood | Total | Tier |"
            )
            .unwrap();
            writeln!(
                output,
                "|--------|--------|------------|-------|------|"
            )
            .unwrap();
            for risk in &dataset.risk_calculations {
                writeln!(
                    output,
                    "| {} | {:.1} | {:.1} | {:.1} | {} |",
                    risk.threat_name,
                    risk.weighted_impact_score,
                    risk.likelihood_score,
                    risk.total_risk_score,
                    risk.risk_level,
                )
                .unwrap();
            }
            writeln!(output).unwrap();
        }

        if !dataset.countermeasures.is_empty() {
            writeln!(output, "## Countermeasures").unwrap();
            writeln!(output).unwrap();
            writeln!(
                output,
                "| Threat | Function | Effectiveness | Residual Risk |"
            )
            .unwrap();
            writeln!(
                output,
                "|--------|----------|---------------|---------------|"
            )
            .unwrap();
            for cm in &dataset.countermeasures {
                writeln!(
                    output,
                    "| {} | {} | {}% | {:.1} |",
                    cm.threat_id,
                    cm.control_function,
                    cm.effectiveness_percent,
                    cm.residual_risk_score,
                )
                .unwrap();
            }
            writeln!(output).unwrap();
        }

        let matrix = RiskMatrix::of(&dataset.risk_calculations);
        writeln!(output, "## Likelihood / Impact Matrix").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "| Likelihood \\ Impact | 1 | 2 | 3 | 4 | 5 |"
        )
        .unwrap();
        writeln!(output, "|---|---|---|---|---|---|").unwrap();
        for likelihood in (1..=5).rev() {
            let row = matrix.row(likelihood);
            writeln!(
                output,
                "| {} | {} | {} | {} | {} | {} |",
                likelihood, row[0], row[1], row[2], row[3], row[4]
            )
            .unwrap();
        }

        output
    }

    /// Writes the report to a file.
    pub fn to_file(dataset: &RiskDataset, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(dataset))
    }

    /// Writes the report to a writer.
    pub fn write<W: Write>(dataset: &RiskDataset, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(dataset).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskledger_test::sample_dataset;

    #[test]
    fn report_contains_summary_and_top_risks() {
        let md = MarkdownReport::to_string(&sample_dataset());
        assert!(md.contains("# Risk Analysis Report"));
        assert!(md.contains("| High | 1 |"));
        assert!(md.contains("| Misconfigured Web Application Firewall | 19.2 | High |"));
    }

    #[test]
    fn report_lists_countermeasures() {
        let md = MarkdownReport::to_string(&sample_dataset());
        assert!(md.contains("## Countermeasures"));
        assert!(md.contains("| T001 | Protect | 75% | 4.8 |"));
    }

    #[test]
    fn empty_dataset_still_renders_the_frame() {
        let md = MarkdownReport::to_string(&RiskDataset::new());
        assert!(md.contains("## Summary"));
        assert!(md.contains("| Critical | 0 |"));
        assert!(!md.contains("## Top Risks"));
        assert!(md.contains("## Likelihood / Impact Matrix"));
    }

    #[test]
    fn report_writes_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        MarkdownReport::to_file(&sample_dataset(), &path).unwrap();
        assert!(fs::read_to_string(path).unwrap().contains("19.2"));
    }
}
