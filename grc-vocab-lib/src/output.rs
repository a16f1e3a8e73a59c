// Plain-text rendering of vocabulary entries.

use crate::types::VocabularyEntry;

/// Render one entry as a vocabulary list line.
///
/// Format:
///   With notation:   `γέρων, οντος, ὁ: old man`
///   Parenthesized:   `καλῶς (adv.): well`
///   No notation:     `καί: and`
pub fn format_entry(entry: &VocabularyEntry) -> String {
    let lemma = &entry.lemma;
    let definition = &entry.definition;
    match entry.morphology.as_deref() {
        Some(notation) if notation.starts_with('(') => {
            format!("{lemma} {notation}: {definition}")
        }
        Some(notation) => format!("{lemma}, {notation}: {definition}"),
        None => format!("{lemma}: {definition}"),
    }
}

/// Invoke `callback` once per entry, in order.
pub fn render<F>(entries: &[VocabularyEntry], mut callback: F)
where
    F: FnMut(&VocabularyEntry),
{
    for entry in entries {
        callback(entry);
    }
}

/// The whole list as newline-separated plain lines.
pub fn to_plain(entries: &[VocabularyEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len());
    render(entries, |e| lines.push(format_entry(e)));
    lines.join("\n")
}
