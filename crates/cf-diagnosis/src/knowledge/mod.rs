//! Loading of the label and rule documents that make up a knowledge base.

mod labels;
mod rules;

pub use labels::{default_certainty_options, CertaintyOption, LabelDocument};
pub use rules::{validate_rule, RuleDefect, RuleValidationError};

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::inference::Rule;

/// Immutable rule set together with its display labels.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    labels: LabelDocument,
    rules: Vec<Rule>,
}

impl KnowledgeBase {
    /// Build a knowledge base from values already in memory, validating every rule.
    pub fn new(labels: LabelDocument, rules: Vec<Rule>) -> Result<Self, KnowledgeBaseError> {
        for (index, rule) in rules.iter().enumerate() {
            validate_rule(rule).map_err(|defect| RuleValidationError { index, defect })?;
        }

        let knowledge = Self { labels, rules };
        knowledge.warn_on_unlabelled_codes();
        Ok(knowledge)
    }

    pub fn from_paths(
        labels_path: impl AsRef<Path>,
        rules_path: impl AsRef<Path>,
    ) -> Result<Self, KnowledgeBaseError> {
        let labels_path = labels_path.as_ref();
        let rules_path = rules_path.as_ref();

        let labels = open(labels_path, DocumentKind::Labels)?;
        let rules = open(rules_path, DocumentKind::Rules)?;
        let knowledge = Self::from_readers(labels, rules)?;

        info!(
            labels = %labels_path.display(),
            rules = %rules_path.display(),
            rule_count = knowledge.rules.len(),
            symptom_count = knowledge.labels.symptoms.len(),
            disease_count = knowledge.labels.diseases.len(),
            "knowledge base loaded"
        );
        Ok(knowledge)
    }

    pub fn from_readers<L: Read, R: Read>(
        label_reader: L,
        rule_reader: R,
    ) -> Result<Self, KnowledgeBaseError> {
        let labels = labels::parse_labels(label_reader)?;
        let rules = rules::parse_rules(rule_reader)?;
        let knowledge = Self { labels, rules };
        knowledge.warn_on_unlabelled_codes();
        Ok(knowledge)
    }

    pub fn labels(&self) -> &LabelDocument {
        &self.labels
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    fn warn_on_unlabelled_codes(&self) {
        if self.labels.symptoms.is_empty() && self.labels.diseases.is_empty() {
            return;
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if !self.labels.diseases.contains_key(&rule.conclusion) {
                warn!(rule = index, conclusion = %rule.conclusion, "rule concludes an unlabelled disease");
            }
            for premise in &rule.premises {
                if !self.labels.symptoms.contains_key(&premise.symptom) {
                    warn!(rule = index, symptom = %premise.symptom, "rule references an unlabelled symptom");
                }
            }
        }
    }
}

fn open(path: &Path, document: DocumentKind) -> Result<BufReader<File>, KnowledgeBaseError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| KnowledgeBaseError::Io {
            document,
            path: path.to_path_buf(),
            source,
        })
}

/// Which of the two knowledge documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Labels,
    Rules,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Labels => f.write_str("label"),
            DocumentKind::Rules => f.write_str("rule"),
        }
    }
}

/// Failure to load or validate a knowledge base.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeBaseError {
    #[error("failed to read {document} document at {path:?}: {source}")]
    Io {
        document: DocumentKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {document} document: {source}")]
    Json {
        document: DocumentKind,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    InvalidRule(#[from] RuleValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::Premise;

    #[test]
    fn new_rejects_invalid_rules_with_their_position() {
        let rules = vec![
            Rule::new(vec![Premise::new("G01", 0.8)], "P01", 0.9),
            Rule::new(Vec::new(), "P02", 0.9),
        ];

        let err = KnowledgeBase::new(LabelDocument::default(), rules).expect_err("invalid rule");
        match err {
            KnowledgeBaseError::InvalidRule(RuleValidationError { index, defect }) => {
                assert_eq!(index, 1);
                assert_eq!(defect, RuleDefect::EmptyPremises);
            }
            other => panic!("expected invalid rule, got {other:?}"),
        }
    }

    #[test]
    fn missing_files_name_the_document() {
        let err = KnowledgeBase::from_paths("does/not/exist.json", "also/missing.json")
            .expect_err("missing files");
        match err {
            KnowledgeBaseError::Io { document, path, .. } => {
                assert_eq!(document, DocumentKind::Labels);
                assert_eq!(path, PathBuf::from("does/not/exist.json"));
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn from_readers_accepts_empty_documents() {
        let knowledge = KnowledgeBase::from_readers("{}".as_bytes(), "[]".as_bytes())
            .expect("empty documents load");
        assert!(knowledge.rules().is_empty());
        assert_eq!(knowledge.labels().certainty_options.len(), 6);
    }
}
