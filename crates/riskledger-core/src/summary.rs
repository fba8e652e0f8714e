//! Summary statistics over the derived risk records

use serde::{Deserialize, Serialize};

use crate::model::RiskCalculation;
use crate::scoring::RiskLevel;

/// Counts of risks per severity tier.
///
/// # Examples
///
/// ```
/// use riskledger_core::{RiskSummary, RiskLevel};
///
/// let summary = RiskSummary::of(&[]);
/// assert_eq!(summary.total, 0);
/// assert_eq!(summary.count(RiskLevel::Critical), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Total number of calculated risks.
    pub total: usize,
    /// Risks in the Critical tier.
    pub critical: usize,
    /// Risks in the High tier.
    pub high: usize,
    /// Risks in the Medium tier.
    pub medium: usize,
    /// Risks in the Low tier.
    pub low: usize,
}

impl RiskSummary {
    /// Tallies the tier counts over a set of risk calculations.
    pub fn of(calculations: &[RiskCalculation]) -> Self {
        let mut summary = RiskSummary {
            total: calculations.len(),
            ..RiskSummary::default()
        };
        for calculation in calculations {
            match calculation.risk_level {
                RiskLevel::Critical => summary.critical += 1,
                RiskLevel::High => summary.high += 1,
                RiskLevel::Medium => summary.medium += 1,
                RiskLevel::Low => summary.low += 1,
            }
        }
        summary
    }

    /// Returns the count for one tier.
    pub fn count(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::Critical => self.critical,
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }
}

/// Returns up to `n` risks ordered by total score, highest first.
pub fn top_risks(calculations: &[RiskCalculation], n: usize) -> Vec<&RiskCalculation> {
    let mut ranked: Vec<&RiskCalculation> = calculations.iter().collect();
    ranked.sort_by(|a, b| b.total_risk_score.total_cmp(&a.total_risk_score));
    ranked.truncate(n);
    ranked
}

/// 5x5 likelihood-by-impact distribution of calculated risks.
///
/// Component scores are rounded to the nearest rubric step and clamped to
/// 1-5; rows are likelihood, columns are impact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMatrix {
    cells: [[usize; 5]; 5],
}

impl RiskMatrix {
    /// Buckets every risk calculation into the matrix.
    pub fn of(calculations: &[RiskCalculation]) -> Self {
        let mut matrix = RiskMatrix::default();
        for calculation in calculations {
            let likelihood = Self::bucket(calculation.likelihood_score);
            let impact = Self::bucket(calculation.weighted_impact_score);
            matrix.cells[likelihood - 1][impact - 1] += 1;
        }
        matrix
    }

    /// Rounds a 1.0-5.0 component score to its rubric step, clamped to 1-5.
    pub fn bucket(score: f64) -> usize {
        (score.round() as i64).clamp(1, 5) as usize
    }

    /// Count of risks at a likelihood/impact cell, both in 1-5.
    pub fn count(&self, likelihood: usize, impact: usize) -> usize {
        self.cells[likelihood - 1][impact - 1]
    }

    /// One likelihood row of counts, impact ascending.
    pub fn row(&self, likelihood: usize) -> [usize; 5] {
        self.cells[likelihood - 1]
    }

    /// Tier of a cell under the canonical thresholds, from the products of
    /// the rubric steps.
    pub fn cell_level(likelihood: usize, impact: usize) -> RiskLevel {
        RiskLevel::from_score((likelihood * impact) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculation(id: &str, impact: f64, likelihood: f64) -> RiskCalculation {
        let total = impact * likelihood;
        RiskCalculation {
            threat_id: id.to_string(),
            threat_name: format!("threat {id}"),
            weighted_impact_score: impact,
            likelihood_score: likelihood,
            total_risk_score: total,
            risk_level: RiskLevel::from_score(total),
        }
    }

    #[test]
    fn summary_counts_each_tier() {
        let calculations = vec![
            calculation("T001", 4.8, 4.5), // 21.6 Critical
            calculation("T002", 4.8, 4.0), // 19.2 High
            calculation("T003", 3.0, 3.0), // 9.0 Medium
            calculation("T004", 2.0, 2.0), // 4.0 Low
            calculation("T005", 1.0, 1.0), // 1.0 Low
        ];

        let summary = RiskSummary::of(&calculations);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.high, 1);
        assert_eq!(summary.medium, 1);
        assert_eq!(summary.low, 2);
        assert_eq!(summary.count(RiskLevel::Low), 2);
    }

    #[test]
    fn top_risks_rank_by_total_score() {
        let calculations = vec![
            calculation("T001", 2.0, 2.0),
            calculation("T002", 4.8, 4.0),
            calculation("T003", 3.0, 3.0),
        ];

        let top = top_risks(&calculations, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].threat_id, "T002");
        assert_eq!(top[1].threat_id, "T003");

        // Requesting more than exist returns them all.
        assert_eq!(top_risks(&calculations, 10).len(), 3);
    }

    #[test]
    fn matrix_buckets_round_and_clamp() {
        assert_eq!(RiskMatrix::bucket(1.0), 1);
        assert_eq!(RiskMatrix::bucket(2.4), 2);
        assert_eq!(RiskMatrix::bucket(2.5), 3);
        assert_eq!(RiskMatrix::bucket(4.8), 5);
        // Out-of-range scores clamp instead of indexing out of bounds.
        assert_eq!(RiskMatrix::bucket(0.2), 1);
        assert_eq!(RiskMatrix::bucket(7.0), 5);
    }

    #[test]
    fn matrix_counts_land_in_their_cells() {
        let calculations = vec![
            calculation("T001", 4.8, 4.0),
            calculation("T002", 4.6, 4.1),
            calculation("T003", 1.0, 1.0),
        ];

        let matrix = RiskMatrix::of(&calculations);
        assert_eq!(matrix.count(4, 5), 2);
        assert_eq!(matrix.count(1, 1), 1);
        assert_eq!(matrix.count(5, 5), 0);
        assert_eq!(matrix.row(4), [0, 0, 0, 0, 2]);
    }

    #[test]
    fn cell_levels_follow_the_canonical_table() {
        assert_eq!(RiskMatrix::cell_level(1, 1), RiskLevel::Low);
        assert_eq!(RiskMatrix::cell_level(2, 3), RiskLevel::Medium);
        assert_eq!(RiskMatrix::cell_level(3, 5), RiskLevel::High);
        assert_eq!(RiskMatrix::cell_level(5, 4), RiskLevel::Critical);
    }
}
