// Reducing the candidate analyses of one token: collapse redundant records,
// then let a resolver pick among the readings that are genuinely different.
//
//   λέγω / verb / "to say"   ┐
//   λέγω2 / verb / "to say"  ┘→ λέγω / verb / "to say"
//   λέγω1 / verb / "to pick" ── kept apart (different definition)

use std::fmt;
use std::io::{BufRead, Write};

use indexmap::IndexMap;
use log::{debug, warn};
use thiserror::Error;

use crate::category::GrammaticalCategory;
use crate::types::AnalysisRecord;

// ---------------------------------------------------------------------------
// Collapse
// ---------------------------------------------------------------------------

type Signature = (String, String, GrammaticalCategory);

fn signature(record: &AnalysisRecord) -> Signature {
    (
        record.base_lemma().to_string(),
        record.definition.clone().unwrap_or_default(),
        record.category,
    )
}

/// True if `candidate` should replace `current` as a group's representative:
/// a lemma without a digit suffix wins, otherwise the smaller lemma.
fn is_better_representative(candidate: &AnalysisRecord, current: &AnalysisRecord) -> bool {
    match (candidate.has_digit_suffix(), current.has_digit_suffix()) {
        (false, true) => true,
        (true, false) => false,
        _ => candidate.lemma < current.lemma,
    }
}

/// Merge records that share base lemma, definition and category. Feature and
/// class differences are ignored. Groups keep first-seen order and every
/// surviving lemma has its digit suffix removed.
pub fn collapse(records: Vec<AnalysisRecord>) -> Vec<AnalysisRecord> {
    let before = records.len();
    let mut groups: IndexMap<Signature, AnalysisRecord> = IndexMap::new();

    for record in records {
        let key = signature(&record);
        match groups.get_mut(&key) {
            Some(current) => {
                if is_better_representative(&record, current) {
                    *current = record;
                }
            }
            None => {
                groups.insert(key, record);
            }
        }
    }

    let collapsed: Vec<AnalysisRecord> = groups
        .into_values()
        .map(|mut r| {
            r.lemma = r.base_lemma().to_string();
            r
        })
        .collect();

    if collapsed.len() != before {
        debug!("collapsed {before} analyses into {}", collapsed.len());
    }
    collapsed
}

// ---------------------------------------------------------------------------
// Resolve
// ---------------------------------------------------------------------------

/// One distinct (lemma, definition) pair offered to a resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub lemma: String,
    pub definition: Option<String>,
    /// Categories of the collapsed records sharing this pair.
    pub categories: Vec<GrammaticalCategory>,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lemma)?;
        if !self.categories.is_empty() {
            let labels: Vec<&str> = self.categories.iter().map(|c| c.label()).collect();
            write!(f, " ({})", labels.join(", "))?;
        }
        if let Some(def) = &self.definition {
            write!(f, ": {def}")?;
        }
        Ok(())
    }
}

/// Chooses which readings of an ambiguous token to keep.
pub trait Resolver {
    /// Return the 0-based indices of the readings to keep.
    fn choose(&mut self, token: &str, readings: &[Reading]) -> Vec<usize>;
}

/// Batch mode: every reading is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectAll;

impl Resolver for SelectAll {
    fn choose(&mut self, _token: &str, readings: &[Reading]) -> Vec<usize> {
        (0..readings.len()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{index} is not between 1 and {count}")]
    OutOfRange { index: usize, count: usize },
}

/// Parse a prompt response: empty means all, otherwise comma-separated
/// 1-based indices. Returns 0-based indices without duplicates.
pub fn parse_selection(input: &str, count: usize) -> Result<Vec<usize>, SelectionError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok((0..count).collect());
    }

    let mut selected = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        let index: usize = part
            .parse()
            .map_err(|_| SelectionError::NotANumber(part.to_string()))?;
        if index == 0 || index > count {
            return Err(SelectionError::OutOfRange { index, count });
        }
        if !selected.contains(&(index - 1)) {
            selected.push(index - 1);
        }
    }
    Ok(selected)
}

/// Prompts on `output` and reads answers from `input` until one parses.
pub struct InteractiveResolver<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveResolver<R, W> {
    pub fn new(input: R, output: W) -> Self {
        InteractiveResolver { input, output }
    }

    fn prompt(&mut self, token: &str, readings: &[Reading]) -> std::io::Result<Vec<usize>> {
        writeln!(self.output, "\nMultiple possibilities for '{token}':")?;
        for (i, reading) in readings.iter().enumerate() {
            writeln!(self.output, "{}. {reading}", i + 1)?;
        }

        loop {
            write!(
                self.output,
                "Enter number(s) of correct reading(s) (comma-separated) or press Enter for all: "
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // End of input: nothing more to ask.
                return Ok((0..readings.len()).collect());
            }
            match parse_selection(&line, readings.len()) {
                Ok(selected) => return Ok(selected),
                Err(e) => writeln!(self.output, "Invalid input ({e}). Please try again.")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Resolver for InteractiveResolver<R, W> {
    fn choose(&mut self, token: &str, readings: &[Reading]) -> Vec<usize> {
        match self.prompt(token, readings) {
            Ok(selected) => selected,
            Err(e) => {
                warn!("prompt failed for {token:?}, keeping all readings: {e}");
                (0..readings.len()).collect()
            }
        }
    }
}

/// Distinct (lemma, definition) pairs in first-seen order.
pub fn readings(records: &[AnalysisRecord]) -> Vec<Reading> {
    let mut by_pair: IndexMap<(&str, Option<&str>), Vec<GrammaticalCategory>> = IndexMap::new();
    for r in records {
        let categories = by_pair
            .entry((r.lemma.as_str(), r.definition.as_deref()))
            .or_default();
        if !categories.contains(&r.category) {
            categories.push(r.category);
        }
    }
    by_pair
        .into_iter()
        .map(|((lemma, definition), categories)| Reading {
            lemma: lemma.to_string(),
            definition: definition.map(str::to_string),
            categories,
        })
        .collect()
}

/// Collapse, then ask the resolver only if more than one reading remains.
pub fn disambiguate(
    token: &str,
    records: Vec<AnalysisRecord>,
    resolver: &mut dyn Resolver,
) -> Vec<AnalysisRecord> {
    let collapsed = collapse(records);
    let readings = readings(&collapsed);
    if readings.len() <= 1 {
        return collapsed;
    }

    let chosen: Vec<&Reading> = resolver
        .choose(token, &readings)
        .into_iter()
        .filter_map(|i| readings.get(i))
        .collect();

    collapsed
        .into_iter()
        .filter(|r| {
            chosen
                .iter()
                .any(|c| c.lemma == r.lemma && c.definition == r.definition)
        })
        .collect()
}
