use std::collections::BTreeMap;

use super::common::*;
use crate::inference::{combine, format_results, ConclusionId};

#[test]
fn resolves_names_and_falls_back_to_identifier() {
    let rules = vec![
        rule(&[("G01", 1.0)], "P01", 1.0),
        rule(&[("G02", 1.0)], "P99", 1.0),
    ];
    let combined = combine(&rules, &evidence(&[("G01", 0.4), ("G02", 0.6)]));

    let formatted = format_results(&combined, &labels().diseases);

    assert_eq!(formatted.len(), 2);
    assert_eq!(formatted[0].name, "P99");
    assert_eq!(formatted[0].conclusion, ConclusionId::from("P99"));
    assert_eq!(formatted[1].name, "COVID-19");
}

#[test]
fn renders_percentage_with_two_decimals() {
    let rules = vec![rule(&[("G1", 0.8)], "D1", 0.9)];
    let combined = combine(&rules, &evidence(&[("G1", 0.4)]));

    let formatted = format_results(&combined, &BTreeMap::new());

    assert_eq!(formatted[0].percentage, "36.00");
    assert_eq!(formatted[0].interpretation, "possible");
}

#[test]
fn sorts_descending_and_keeps_ties_in_encounter_order() {
    let rules = vec![
        rule(&[("G1", 1.0)], "D1", 1.0),
        rule(&[("G2", 1.0)], "D2", 1.0),
        rule(&[("G3", 1.0)], "D3", 1.0),
        rule(&[("G4", 1.0)], "D3", 1.0),
    ];
    let combined = combine(
        &rules,
        &evidence(&[("G1", 0.5), ("G2", 0.5), ("G3", 0.5), ("G4", 0.5)]),
    );

    let formatted = format_results(&combined, &BTreeMap::new());

    let names: Vec<&str> = formatted.iter().map(|result| result.name.as_str()).collect();
    assert_eq!(names, vec!["D3", "D1", "D2"]);
    assert_eq!(formatted[0].percentage, "75.00");
}

#[test]
fn nothing_to_format_without_evidence() {
    let combined = combine(&sample_rules(), &evidence(&[("G01", 0.0)]));

    assert!(format_results(&combined, &labels().diseases).is_empty());
}

#[test]
fn blank_display_names_fall_back_to_identifier() {
    let rules = vec![rule(&[("G1", 0.8)], "D1", 0.9)];
    let combined = combine(&rules, &evidence(&[("G1", 0.4)]));
    let diseases = BTreeMap::from([(ConclusionId::from("D1"), String::new())]);

    let formatted = format_results(&combined, &diseases);

    assert_eq!(formatted[0].name, "D1");
}
