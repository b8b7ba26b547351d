use std::collections::BTreeMap;

use serde::Serialize;

use super::combiner::CombinedResults;
use super::domain::ConclusionId;

/// Presentation-ready diagnosis line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedResult {
    pub conclusion: ConclusionId,
    pub name: String,
    pub cf: f64,
    pub percentage: String,
    pub interpretation: &'static str,
}

/// Resolve display names and order results by descending certainty.
///
/// Unknown or blank-labelled conclusions keep their raw identifier as the name. Equal
/// certainties keep the order in which the conclusions were first reached.
pub fn format_results(
    combined: &CombinedResults,
    diseases: &BTreeMap<ConclusionId, String>,
) -> Vec<FormattedResult> {
    let mut output: Vec<FormattedResult> = combined
        .iter()
        .filter(|result| result.cf > 0.0)
        .map(|result| FormattedResult {
            conclusion: result.conclusion.clone(),
            name: diseases
                .get(&result.conclusion)
                .filter(|name| !name.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| result.conclusion.to_string()),
            cf: result.cf,
            percentage: format!("{:.2}", result.percentage),
            interpretation: result.interpretation.label(),
        })
        .collect();

    output.sort_by(|a, b| b.cf.total_cmp(&a.cf));
    output
}
