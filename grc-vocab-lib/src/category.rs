// Part of speech codes from the first column of an analysis.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use once_cell::sync::Lazy;

use crate::feature::Feature;
use crate::tags::{build_table, TagError};

/// Grammatical category of an analysis.
///
/// Adjectives have no category of their own: the cruncher reports them as
/// nouns and they are recognised by morphological class instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GrammaticalCategory {
    Noun,
    /// Shares the `N` code with nouns; told apart by the `article` feature.
    Article,
    Verb,
    Participle,
    Adverb,
    Particle,
    Preposition,
    Pronoun,
    Conjunction,
    Interjection,
    Numeral,
    /// Ethnic designations and proper names.
    Ethnic,
}

const CODES: &[(&str, GrammaticalCategory)] = &[
    ("N", GrammaticalCategory::Noun),
    ("V", GrammaticalCategory::Verb),
    ("P", GrammaticalCategory::Participle),
    ("Adv", GrammaticalCategory::Adverb),
    ("Part", GrammaticalCategory::Particle),
    ("Prep", GrammaticalCategory::Preposition),
    ("Pron", GrammaticalCategory::Pronoun),
    ("Conj", GrammaticalCategory::Conjunction),
    ("Interj", GrammaticalCategory::Interjection),
    ("Num", GrammaticalCategory::Numeral),
    ("E", GrammaticalCategory::Ethnic),
];

static TABLE: Lazy<HashMap<&'static str, GrammaticalCategory>> =
    Lazy::new(|| build_table(CODES, &[]));

impl GrammaticalCategory {
    /// Classify a raw category code.
    pub fn classify(code: &str) -> Result<Self, TagError> {
        TABLE
            .get(code)
            .copied()
            .ok_or_else(|| TagError::UnknownCategory(code.to_string()))
    }

    /// Refine a code-derived category once the features are known: a
    /// noun-like code carrying the `article` feature is the article.
    pub fn refine(self, features: &BTreeSet<Feature>) -> Self {
        if self == GrammaticalCategory::Noun && features.contains(&Feature::Article) {
            GrammaticalCategory::Article
        } else {
            self
        }
    }

    /// Human-readable label used in vocabulary entries.
    pub fn label(self) -> &'static str {
        match self {
            GrammaticalCategory::Noun => "noun",
            GrammaticalCategory::Article => "article",
            GrammaticalCategory::Verb => "verb",
            GrammaticalCategory::Participle => "participle",
            GrammaticalCategory::Adverb => "adverb",
            GrammaticalCategory::Particle => "particle",
            GrammaticalCategory::Preposition => "preposition",
            GrammaticalCategory::Pronoun => "pronoun",
            GrammaticalCategory::Conjunction => "conjunction",
            GrammaticalCategory::Interjection => "interjection",
            GrammaticalCategory::Numeral => "numeral",
            GrammaticalCategory::Ethnic => "ethnic",
        }
    }

    /// Function words that never receive a headword notation.
    pub fn is_uninflected(self) -> bool {
        matches!(
            self,
            GrammaticalCategory::Particle
                | GrammaticalCategory::Conjunction
                | GrammaticalCategory::Preposition
                | GrammaticalCategory::Interjection
        )
    }
}

impl fmt::Display for GrammaticalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
