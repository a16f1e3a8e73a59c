// Grammatical features: person, number, gender, case, tense, mood, voice and
// the handful of lexical flags the cruncher prints alongside them.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;

use crate::tags::{build_table, tag_vocabulary, TagError};

tag_vocabulary! {
    /// A single grammatical feature.
    pub enum Feature {
        // Person.
        First => "1st",
        Second => "2nd",
        Third => "3rd",
        // Number.
        Singular => "sg",
        Plural => "pl",
        Dual => "dual",
        // Gender.
        Masculine => "masc",
        Feminine => "fem",
        Neuter => "neut",
        MascFem => "masc/fem",
        MascFemNeut => "masc/fem/neut",
        // Case.
        Nominative => "nom",
        Genitive => "gen",
        Dative => "dat",
        Accusative => "acc",
        Vocative => "voc",
        // Tense.
        Present => "pres",
        Imperfect => "impf",
        Future => "fut",
        Aorist => "aor",
        Perfect => "perf",
        Pluperfect => "plup",
        FuturePerfect => "futperf",
        // Mood.
        Indicative => "ind",
        Subjunctive => "subj",
        Optative => "opt",
        Imperative => "imptv",
        Infinitive => "inf",
        Participle => "part",
        // Voice.
        Active => "act",
        Middle => "mid",
        Passive => "pass",
        MedioPassive => "mp",
        // Degree.
        Comparative => "comp",
        Superlative => "superl",
        // Lexical flags.
        Article => "article",
        Proclitic => "proclitic",
        Enclitic => "enclitic",
        Indeclinable => "indeclform",
        Conjunction => "conj",
        Contracted => "contr",
        Indefinite => "indef",
        Adverbial => "adverbial",
        Demonstrative => "demonstr",
        RelativePronoun => "relative",
        PersonalPronoun => "personal",
        IndefiniteRelative => "indefrel",
        Interrogative => "interrog",
        Diminutive => "diminutive",
        // Dialect and register.
        Epic => "epic",
        Doric => "doric",
        Aeolic => "aeolic",
        Attic => "attic",
        Ionic => "ionic",
        Homeric => "homeric",
        Poetic => "poetic",
        Prose => "prose",
    }
}

/// Alternate spellings emitted by different cruncher builds.
const ALIASES: &[(&str, Feature)] = &[
    ("imperf", Feature::Imperfect),
    ("indecl", Feature::Indeclinable),
    ("adverb", Feature::Adverbial),
];

static TABLE: Lazy<HashMap<&'static str, Feature>> =
    Lazy::new(|| build_table(Feature::ALL, ALIASES));

impl Feature {
    /// Classify one feature token, resolving known aliases.
    pub fn classify(raw: &str) -> Result<Self, TagError> {
        TABLE
            .get(raw)
            .copied()
            .ok_or_else(|| TagError::UnknownFeature(raw.to_string()))
    }

    /// Classify every token; the first unknown token fails the whole list.
    pub fn classify_all<'a, I>(raw: I) -> Result<BTreeSet<Self>, TagError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        raw.into_iter().map(Self::classify).collect()
    }
}
