use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::category::GrammaticalCategory;
use crate::feature::Feature;
use crate::morph_class::{self, MorphClass};

/// One candidate analysis of one input token, with every tag validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRecord {
    /// The surface token the analysis was produced for.
    pub original_token: String,
    pub category: GrammaticalCategory,
    /// Headword in Greek script, possibly carrying a homograph digit (e.g. `λέγω2`).
    pub lemma: String,
    pub features: BTreeSet<Feature>,
    pub morph_classes: BTreeSet<MorphClass>,
    pub definition: Option<String>,
}

impl AnalysisRecord {
    /// Lemma with any trailing homograph digits removed.
    pub fn base_lemma(&self) -> &str {
        strip_digit_suffix(&self.lemma)
    }

    /// True if the lemma carries a homograph digit suffix.
    pub fn has_digit_suffix(&self) -> bool {
        self.base_lemma().len() != self.lemma.len()
    }

    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    pub fn has_class(&self, class: MorphClass) -> bool {
        self.morph_classes.contains(&class)
    }

    /// Adjectives are recognised by class, whatever the category code says.
    pub fn is_adjective(&self) -> bool {
        morph_class::is_adjective(&self.morph_classes)
    }

    pub fn is_third_declension(&self) -> bool {
        morph_class::is_third_declension(&self.morph_classes)
    }
}

/// Strip trailing ASCII digits (`λόγος2` → `λόγος`).
pub fn strip_digit_suffix(lemma: &str) -> &str {
    lemma.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// A finished vocabulary list line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub lemma: String,
    /// Empty when no definition is known.
    #[serde(default)]
    pub definition: String,
    /// Category label, e.g. "noun", "verb", "proper noun".
    pub category_label: String,
    /// Headword notation, e.g. "ου, ὁ" or "(adv.)".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morphology: Option<String>,
}

impl VocabularyEntry {
    pub fn has_definition(&self) -> bool {
        !self.definition.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lemma: &str) -> AnalysisRecord {
        AnalysisRecord {
            original_token: "x".to_string(),
            category: GrammaticalCategory::Noun,
            lemma: lemma.to_string(),
            features: BTreeSet::new(),
            morph_classes: BTreeSet::new(),
            definition: None,
        }
    }

    #[test]
    fn test_base_lemma() {
        assert_eq!(record("λέγω2").base_lemma(), "λέγω");
        assert_eq!(record("λέγω").base_lemma(), "λέγω");
        assert_eq!(record("εἶμι12").base_lemma(), "εἶμι");
        assert!(record("λέγω2").has_digit_suffix());
        assert!(!record("λέγω").has_digit_suffix());
    }

    #[test]
    fn test_adjective_by_class() {
        let mut r = record("καλός");
        assert!(!r.is_adjective());
        r.morph_classes.insert(MorphClass::OsHOn);
        assert!(r.is_adjective());
    }

    #[test]
    fn test_entry_json_skips_missing_morphology() {
        let entry = VocabularyEntry {
            lemma: "καί".to_string(),
            definition: "and".to_string(),
            category_label: "conjunction".to_string(),
            morphology: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"lemma":"καί","definition":"and","category_label":"conjunction"}"#
        );
        let back: VocabularyEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
