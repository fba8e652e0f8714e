use super::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn weighted_impact_matches_formula() {
    let weights = ImpactWeights::default();
    for f in 1..=5u8 {
        for r in 1..=5u8 {
            for o in 1..=5u8 {
                for g in 1..=5u8 {
                    let score = weighted_impact_score(f, r, o, g, &weights);
                    let expected =
                        0.3 * f as f64 + 0.3 * r as f64 + 0.2 * o as f64 + 0.2 * g as f64;
                    assert_close(score, expected);
                    assert!((1.0..=5.0).contains(&score));
                }
            }
        }
    }
}

#[test]
fn likelihood_is_arithmetic_mean() {
    for a in 1..=5u8 {
        for b in 1..=5u8 {
            for c in 1..=5u8 {
                let score = likelihood_score(a, b, c);
                assert_close(score, (a as f64 + b as f64 + c as f64) / 3.0);
                assert!((1.0..=5.0).contains(&score));
            }
        }
    }
}

#[test]
fn worked_example_from_the_register() {
    let impact = weighted_impact_score(5, 5, 4, 5, &ImpactWeights::default());
    assert_close(impact, 4.8);

    let likelihood = likelihood_score(4, 4, 4);
    assert_close(likelihood, 4.0);

    let total = total_risk_score(impact, likelihood);
    assert_close(total, 19.2);
    assert_eq!(RiskLevel::from_score(total), RiskLevel::High);

    assert_close(residual_risk_score(total, 75), 4.8);
}

#[test]
fn total_is_monotone_in_both_arguments() {
    let mut previous = 0.0;
    for impact in [1.0, 2.5, 3.0, 4.8, 5.0] {
        let total = total_risk_score(impact, 3.0);
        assert!(total >= previous);
        previous = total;
    }

    previous = 0.0;
    for likelihood in [1.0, 1.5, 2.0, 4.0, 5.0] {
        let total = total_risk_score(4.8, likelihood);
        assert!(total >= previous);
        previous = total;
    }
}

#[test]
fn residual_is_monotone_in_effectiveness() {
    let mut previous = f64::INFINITY;
    for effectiveness in [0u8, 20, 50, 75, 95, 100] {
        let residual = residual_risk_score(19.2, effectiveness);
        assert!(residual <= previous);
        previous = residual;
    }
}

#[test]
fn residual_boundaries_do_not_panic() {
    // 0 and 100 sit outside the stated 20-95 domain.
    assert_close(residual_risk_score(19.2, 0), 19.2);
    assert_eq!(residual_risk_score(19.2, 100), 0.0);
}

#[test]
fn rating_validation() {
    assert!(!is_valid_rating(0));
    assert!(is_valid_rating(1));
    assert!(is_valid_rating(5));
    assert!(!is_valid_rating(6));
}

#[test]
fn effectiveness_validation() {
    assert!(!is_valid_effectiveness(19));
    assert!(is_valid_effectiveness(20));
    assert!(is_valid_effectiveness(95));
    assert!(!is_valid_effectiveness(96));
}

#[test]
fn tier_boundaries() {
    assert_eq!(RiskLevel::from_score(1.0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(5.9), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(6.0), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(12.9), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(13.0), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(19.9), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(20.0), RiskLevel::Critical);
    assert_eq!(RiskLevel::from_score(25.0), RiskLevel::Critical);
}

#[test]
fn tiers_order_by_severity() {
    assert!(RiskLevel::Low < RiskLevel::Medium);
    assert!(RiskLevel::Medium < RiskLevel::High);
    assert!(RiskLevel::High < RiskLevel::Critical);
}

#[test]
fn score_bands_at_cut_points() {
    assert_eq!(ScoreBand::of(1.0), ScoreBand::VeryLow);
    assert_eq!(ScoreBand::of(1.5), ScoreBand::VeryLow);
    assert_eq!(ScoreBand::of(1.6), ScoreBand::Low);
    assert_eq!(ScoreBand::of(2.5), ScoreBand::Low);
    assert_eq!(ScoreBand::of(3.0), ScoreBand::Medium);
    assert_eq!(ScoreBand::of(3.5), ScoreBand::Medium);
    assert_eq!(ScoreBand::of(4.5), ScoreBand::High);
    assert_eq!(ScoreBand::of(4.6), ScoreBand::VeryHigh);
    assert_eq!(ScoreBand::of(5.0), ScoreBand::VeryHigh);
}

#[test]
fn custom_weights_shift_the_score() {
    let top_heavy = ImpactWeights {
        financial: 1.0,
        reputational: 0.0,
        operational: 0.0,
        regulatory: 0.0,
    };
    assert!(top_heavy.validate().is_ok());
    assert_close(weighted_impact_score(5, 1, 1, 1, &top_heavy), 5.0);
}

#[test]
fn weight_validation_rejects_bad_sums() {
    let weights = ImpactWeights {
        financial: 0.5,
        reputational: 0.5,
        operational: 0.5,
        regulatory: 0.5,
    };
    assert!(weights.validate().is_err());

    let negative = ImpactWeights {
        financial: -0.2,
        reputational: 0.6,
        operational: 0.3,
        regulatory: 0.3,
    };
    assert!(negative.validate().is_err());
}

#[test]
fn threshold_validation_rejects_misordered_bounds() {
    assert!(RiskThresholds::default().validate().is_ok());

    let misordered = RiskThresholds {
        medium: 13.0,
        high: 6.0,
        critical: 20.0,
    };
    assert!(misordered.validate().is_err());
}
