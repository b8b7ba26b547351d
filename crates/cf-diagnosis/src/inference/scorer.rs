use serde::{Deserialize, Serialize};

use super::domain::{percentage, ConclusionId, Rule, CF_CAP, MATCH_THRESHOLD};
use super::evidence::Evidence;
use super::interpretation::{interpret, Interpretation};

/// Contribution of a single rule toward its conclusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleScore {
    pub conclusion: ConclusionId,
    pub cf: f64,
    pub percentage: f64,
    pub interpretation: Interpretation,
    pub matched: usize,
    pub premises: usize,
    pub match_factor: f64,
}

impl RuleScore {
    pub fn has_evidence(&self) -> bool {
        self.cf > 0.0
    }
}

/// Score one rule against the user's evidence.
///
/// Premises without positive belief lower the match factor but still count
/// toward the rule's total weight. Below [`MATCH_THRESHOLD`] the rule
/// contributes nothing, as does a rule whose weights sum to zero or whose
/// score is not finite.
pub fn score_rule(rule: &Rule, evidence: &Evidence) -> RuleScore {
    let premises = rule.premises.len();
    let mut total_weight = 0.0;
    let mut weighted_sum = 0.0;
    let mut matched = 0usize;
    let mut fully_confirmed = true;

    for premise in &rule.premises {
        let belief = evidence.belief(premise.symptom.as_str());
        total_weight += premise.weight;

        if belief > 0.0 {
            weighted_sum += belief * premise.weight;
            matched += 1;
        }
        if belief != 1.0 {
            fully_confirmed = false;
        }
    }

    let match_factor = if premises == 0 {
        0.0
    } else {
        matched as f64 / premises as f64
    };

    // A rule with no positive total weight has no defined average.
    if matched == 0 || match_factor < MATCH_THRESHOLD || !(total_weight > 0.0) {
        return unsupported(rule, matched, premises, match_factor);
    }

    let average_cf = weighted_sum / total_weight;
    let mut cf = average_cf * match_factor * rule.cf;

    if matched == premises && fully_confirmed {
        cf = CF_CAP;
    }
    if !cf.is_finite() || cf <= 0.0 {
        return unsupported(rule, matched, premises, match_factor);
    }
    let cf = cf.min(CF_CAP);

    RuleScore {
        conclusion: rule.conclusion.clone(),
        cf,
        percentage: percentage(cf),
        interpretation: interpret(cf),
        matched,
        premises,
        match_factor,
    }
}

fn unsupported(rule: &Rule, matched: usize, premises: usize, match_factor: f64) -> RuleScore {
    RuleScore {
        conclusion: rule.conclusion.clone(),
        cf: 0.0,
        percentage: 0.0,
        interpretation: Interpretation::NotSure,
        matched,
        premises,
        match_factor,
    }
}
