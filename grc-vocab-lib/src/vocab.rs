// Text-level processing: split a passage into words, analyze each one
// independently and merge the results into one sorted vocabulary list.

use indexmap::{IndexMap, IndexSet};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::analyzer::{Analyzer, AnalyzerFlags};
use crate::betacode::Transliterator;
use crate::blocks::parse_blocks;
use crate::classify::classify_all;
use crate::definitions::DefinitionLookup;
use crate::disambiguate::{disambiguate, Resolver, SelectAll};
use crate::greek::{bare, is_capitalized, sort_key, split_after_letters, strip_initial_breathing};
use crate::notation::vocabulary_entry;
use crate::types::{AnalysisRecord, VocabularyEntry};

// A Greek letter, then letters and combining marks, optionally closed by an
// elision mark.
static WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\p{Greek}(?:\p{Greek}|\p{Mn})*['’᾽]?").expect("word pattern is valid")
});

const ELISION_MARKS: &[char] = &['\u{1FBD}', '\u{1FBF}', '\u{2019}', '\''];

/// Preverbs tried by the root-stripping fallback: bare surface spelling and
/// the prefix restored on the root's lemma.
const PREVERBS: &[(&str, &str)] = &[
    ("αμφι", "ἀμφι"),
    ("ανα", "ἀνα"),
    ("αντι", "ἀντι"),
    ("απο", "ἀπο"),
    ("δια", "δια"),
    ("εισ", "εἰσ"),
    ("εκ", "ἐκ"),
    ("εξ", "ἐξ"),
    ("εν", "ἐν"),
    ("εμ", "ἐμ"),
    ("επι", "ἐπι"),
    ("κατα", "κατα"),
    ("μετα", "μετα"),
    ("παρα", "παρα"),
    ("περι", "περι"),
    ("προ", "προ"),
    ("προσ", "προσ"),
    ("συν", "συν"),
    ("συμ", "συμ"),
    ("συγ", "συγ"),
    ("συλ", "συλ"),
    ("ξυν", "συν"),
    ("ξυμ", "συμ"),
    ("ξυγ", "συγ"),
    ("ξυλ", "συλ"),
    ("υπερ", "ὑπερ"),
    ("υπο", "ὑπο"),
];

// Longest first so that e.g. προσ- is tried before προ-.
static PREVERBS_BY_LENGTH: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut v = PREVERBS.to_vec();
    v.sort_by_key(|(surface, _)| std::cmp::Reverse(surface.chars().count()));
    v
});

/// Remaining root must have at least this many letters.
const MIN_ROOT_LETTERS: usize = 2;

pub const PROPER_NOUN_LABEL: &str = "proper noun";

/// Every distinct Greek word in `text`, in order of first appearance.
pub fn extract_words(text: &str) -> Vec<String> {
    let words: IndexSet<&str> = WORD.find_iter(text).map(|m| m.as_str()).collect();
    words.into_iter().map(str::to_string).collect()
}

fn strip_elision(token: &str) -> Option<&str> {
    token
        .strip_suffix(ELISION_MARKS)
        .filter(|rest| !rest.is_empty())
}

// ---------------------------------------------------------------------------
// Configuration and results
// ---------------------------------------------------------------------------

/// Knobs for one pipeline run. Every fallback is on by default; resolution
/// is batch unless `interactive` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Consult the resolver when a token has several readings.
    pub interactive: bool,
    /// Retry capitalized tokens case-insensitively.
    pub retry_ignore_case: bool,
    pub retry_ignore_accents: bool,
    pub strip_elision: bool,
    pub strip_preverbs: bool,
    /// Turn capitalized leftovers into proper-name entries.
    pub proper_names: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            interactive: false,
            retry_ignore_case: true,
            retry_ignore_accents: true,
            strip_elision: true,
            strip_preverbs: true,
            proper_names: true,
        }
    }
}

impl PipelineConfig {
    /// No fallbacks at all: a token either analyzes directly or is unparsed.
    pub fn without_fallbacks() -> Self {
        PipelineConfig {
            interactive: false,
            retry_ignore_case: false,
            retry_ignore_accents: false,
            strip_elision: false,
            strip_preverbs: false,
            proper_names: false,
        }
    }
}

/// Proper names met while building a list, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProperNames(IndexSet<String>);

impl ProperNames {
    /// Returns false if the name was already recorded.
    pub fn insert(&mut self, name: &str) -> bool {
        self.0.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VocabularyReport {
    /// Sorted by diacritic-insensitive key, ties broken by the raw lemma.
    pub entries: Vec<VocabularyEntry>,
    pub proper_names: ProperNames,
    /// Tokens nothing could be made of, in order of appearance.
    pub unparsed: Vec<String>,
}

/// True if `new` should replace `old` for the same lemma.
fn is_better_entry(new: &VocabularyEntry, old: &VocabularyEntry) -> bool {
    if new.has_definition() != old.has_definition() {
        return new.has_definition();
    }
    old.morphology.is_none() && new.morphology.is_some()
}

fn insert_entry(seen: &mut IndexMap<String, VocabularyEntry>, entry: VocabularyEntry) {
    match seen.get_mut(&entry.lemma) {
        Some(old) => {
            if is_better_entry(&entry, old) {
                debug!("replacing entry for {}", entry.lemma);
                *old = entry;
            }
        }
        None => {
            seen.insert(entry.lemma.clone(), entry);
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

enum TokenOutcome {
    Analyzed(Vec<AnalysisRecord>),
    ProperName(VocabularyEntry),
    Unparsed,
}

/// Runs the whole pipeline over a passage with the given collaborators.
pub struct VocabularyBuilder<'a> {
    analyzer: &'a dyn Analyzer,
    translit: &'a dyn Transliterator,
    definitions: &'a dyn DefinitionLookup,
    config: PipelineConfig,
}

impl<'a> VocabularyBuilder<'a> {
    pub fn new(
        analyzer: &'a dyn Analyzer,
        translit: &'a dyn Transliterator,
        definitions: &'a dyn DefinitionLookup,
    ) -> Self {
        VocabularyBuilder {
            analyzer,
            translit,
            definitions,
            config: PipelineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build a vocabulary list for `text`. The resolver is consulted only in
    /// interactive mode; otherwise every reading is kept.
    pub fn build(&self, text: &str, resolver: &mut dyn Resolver) -> VocabularyReport {
        let mut batch = SelectAll;
        let resolver: &mut dyn Resolver = if self.config.interactive {
            resolver
        } else {
            &mut batch
        };

        let mut seen: IndexMap<String, VocabularyEntry> = IndexMap::new();
        let mut report = VocabularyReport::default();

        for token in extract_words(text) {
            match self.process_token(&token, &mut report.proper_names) {
                TokenOutcome::Analyzed(records) => {
                    for record in disambiguate(&token, records, resolver) {
                        insert_entry(&mut seen, vocabulary_entry(&record));
                    }
                }
                TokenOutcome::ProperName(entry) => insert_entry(&mut seen, entry),
                TokenOutcome::Unparsed => {
                    debug!("no analysis for {token:?}");
                    report.unparsed.push(token);
                }
            }
        }

        let mut entries: Vec<VocabularyEntry> = seen.into_values().collect();
        entries.sort_by_cached_key(|e| (sort_key(&e.lemma), e.lemma.clone()));
        info!(
            "{} entries, {} proper names, {} unparsed",
            entries.len(),
            report.proper_names.len(),
            report.unparsed.len()
        );
        report.entries = entries;
        report
    }

    /// Analyze one surface form with the given retry switches.
    fn lookup(&self, token: &str, flags: AnalyzerFlags) -> Vec<AnalysisRecord> {
        let raw = self.analyzer.analyze(&self.translit.to_working(token), flags);
        classify_all(token, &parse_blocks(&raw), self.translit, self.definitions)
    }

    /// Direct lookup followed by the case and accent retries.
    fn lookup_with_retries(&self, token: &str) -> Vec<AnalysisRecord> {
        let records = self.lookup(token, AnalyzerFlags::NONE);
        if !records.is_empty() {
            return records;
        }

        let ignore_case = self.config.retry_ignore_case && is_capitalized(token);
        if ignore_case {
            debug!("retrying {token:?} ignoring case");
            let records = self.lookup(
                token,
                AnalyzerFlags {
                    ignore_case: true,
                    ignore_accents: false,
                },
            );
            if !records.is_empty() {
                return records;
            }
        }

        if self.config.retry_ignore_accents {
            debug!("retrying {token:?} ignoring accents");
            return self.lookup(
                token,
                AnalyzerFlags {
                    ignore_case,
                    ignore_accents: true,
                },
            );
        }
        Vec::new()
    }

    /// Look the token up as a compound: preverb plus an analyzable root.
    fn lookup_compound(&self, token: &str) -> Vec<AnalysisRecord> {
        let bare_token = bare(token);
        for (surface, canonical) in PREVERBS_BY_LENGTH.iter() {
            if !bare_token.starts_with(surface) {
                continue;
            }
            let letters = surface.chars().count();
            let Some((_, root)) = split_after_letters(token, letters) else {
                continue;
            };
            if root.chars().filter(|c| c.is_alphabetic()).count() < MIN_ROOT_LETTERS {
                continue;
            }

            let records = self.lookup_with_retries(&root);
            if records.is_empty() {
                continue;
            }
            debug!("{token:?} analyzed as {canonical}- + {root:?}");
            return records
                .into_iter()
                .map(|mut r| {
                    r.lemma = format!("{canonical}{}", strip_initial_breathing(&r.lemma));
                    r.definition = self.definitions.lookup(&r.lemma);
                    r
                })
                .collect();
        }
        Vec::new()
    }

    fn process_token(&self, token: &str, proper_names: &mut ProperNames) -> TokenOutcome {
        let mut records = self.lookup_with_retries(token);

        if records.is_empty() && self.config.strip_elision {
            if let Some(stem) = strip_elision(token) {
                debug!("retrying {token:?} without elision mark");
                records = self.lookup_with_retries(stem);
            }
        }

        if records.is_empty() && self.config.strip_preverbs {
            records = self.lookup_compound(token);
        }

        if !records.is_empty() {
            for r in &mut records {
                r.original_token = token.to_string();
            }
            return TokenOutcome::Analyzed(records);
        }

        if self.config.proper_names && is_capitalized(token) {
            proper_names.insert(token);
            return TokenOutcome::ProperName(VocabularyEntry {
                lemma: token.to_string(),
                definition: self.definitions.lookup(token).unwrap_or_default(),
                category_label: PROPER_NOUN_LABEL.to_string(),
                morphology: None,
            });
        }
        TokenOutcome::Unparsed
    }
}
