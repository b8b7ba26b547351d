use super::common::*;
use crate::inference::{score_rule, Interpretation, CF_CAP};

#[test]
fn fully_confirmed_single_premise_is_capped() {
    let rule = rule(&[("G1", 0.8)], "D1", 0.9);

    let score = score_rule(&rule, &evidence(&[("G1", 1.0)]));

    assert_eq!(score.cf, CF_CAP);
    assert_close(score.percentage, 99.98);
    assert_eq!(score.interpretation, Interpretation::Certain);
    assert_eq!((score.matched, score.premises), (1, 1));
}

#[test]
fn partial_belief_is_dampened_by_rule_confidence() {
    let rule = rule(&[("G1", 0.8)], "D1", 0.9);

    let score = score_rule(&rule, &evidence(&[("G1", 0.4)]));

    assert_close(score.cf, 0.36);
    assert_close(score.percentage, 36.0);
    assert_eq!(score.interpretation, Interpretation::Possible);
}

#[test]
fn average_is_normalized_by_total_premise_weight() {
    let rule = rule(&[("G1", 0.8), ("G2", 0.2)], "D1", 1.0);

    let score = score_rule(&rule, &evidence(&[("G1", 1.0)]));

    // (1.0 * 0.8) / 1.0 * 0.5 match factor
    assert_close(score.match_factor, 0.5);
    assert_close(score.cf, 0.4);
}

#[test]
fn matches_below_noise_floor_contribute_nothing() {
    let rule = rule(
        &[("G1", 1.0), ("G2", 1.0), ("G3", 1.0), ("G4", 1.0)],
        "D1",
        1.0,
    );

    let score = score_rule(&rule, &evidence(&[("G1", 1.0)]));

    assert_close(score.match_factor, 0.25);
    assert_eq!(score.cf, 0.0);
    assert_eq!(score.percentage, 0.0);
    assert_eq!(score.interpretation, Interpretation::NotSure);
    assert!(!score.has_evidence());
}

#[test]
fn one_of_three_premises_clears_noise_floor() {
    let rule = rule(&[("G1", 1.0), ("G2", 1.0), ("G3", 1.0)], "D1", 1.0);

    let score = score_rule(&rule, &evidence(&[("G1", 0.9)]));

    // 0.9 / 3.0 weight * (1/3) match
    assert_close(score.cf, 0.1);
    assert!(score.has_evidence());
}

#[test]
fn rule_without_any_belief_scores_zero() {
    let rule = rule(&[("G1", 0.5)], "D1", 1.0);

    let score = score_rule(&rule, &evidence(&[]));

    assert_eq!(score.matched, 0);
    assert_eq!(score.cf, 0.0);
}

#[test]
fn absent_symptom_equals_explicit_zero() {
    let rule = rule(&[("G1", 0.7), ("G2", 0.5)], "D1", 0.8);

    let absent = score_rule(&rule, &evidence(&[("G1", 0.6)]));
    let explicit = score_rule(&rule, &evidence(&[("G1", 0.6), ("G2", 0.0)]));

    assert_eq!(absent, explicit);
}

#[test]
fn full_confirmation_ignores_rule_confidence() {
    let rule = rule(&[("G1", 0.3), ("G2", 0.9)], "D1", 0.1);

    let score = score_rule(&rule, &evidence(&[("G1", 1.0), ("G2", 1.0)]));

    assert_eq!(score.cf, CF_CAP);
}

#[test]
fn override_requires_every_belief_at_one() {
    let rule = rule(&[("G1", 1.0), ("G2", 1.0)], "D1", 1.0);

    let score = score_rule(&rule, &evidence(&[("G1", 1.0), ("G2", 0.8)]));

    assert_close(score.cf, 0.9);
}

#[test]
fn scores_never_exceed_cap() {
    let grid = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
    let rule = rule(&[("G1", 1.0), ("G2", 0.6), ("G3", 0.2)], "D1", 1.0);

    for a in grid {
        for b in grid {
            for c in grid {
                let score = score_rule(&rule, &evidence(&[("G1", a), ("G2", b), ("G3", c)]));
                assert!((0.0..=CF_CAP).contains(&score.cf), "cf {} out of range", score.cf);
            }
        }
    }
}

#[test]
fn zero_weight_rule_contributes_nothing() {
    let rule = rule(&[("G1", 0.0)], "D1", 0.5);

    let score = score_rule(&rule, &evidence(&[("G1", 0.4)]));

    assert_eq!(score.cf, 0.0);
    assert_eq!(score.interpretation, Interpretation::NotSure);
    assert!(!score.has_evidence());
}

#[test]
fn non_finite_rule_confidence_contributes_nothing() {
    let rule = rule(&[("G1", 0.8)], "D1", f64::NAN);

    let score = score_rule(&rule, &evidence(&[("G1", 0.4)]));

    assert_eq!(score.cf, 0.0);
}
