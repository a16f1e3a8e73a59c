// Short English definitions keyed by headword.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::betacode::Transliterator;
use crate::types::strip_digit_suffix;

/// Something that can supply a short definition for a headword.
pub trait DefinitionLookup {
    fn lookup(&self, headword: &str) -> Option<String>;
}

/// Lookup that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefinitions;

impl DefinitionLookup for NoDefinitions {
    fn lookup(&self, _headword: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Error)]
pub enum DefinitionsError {
    #[error("cannot read definitions file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("line {line}: expected 'headword<TAB>definition'")]
    MissingTab { line: usize },
}

/// In-memory definitions table.
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    entries: HashMap<String, String>,
}

impl Definitions {
    /// Parse `headword<TAB>definition` lines, headwords in the working
    /// encoding. Each definition is stored under the native form of its
    /// headword and, when the headword carries a homograph digit, under the
    /// digit-stripped form too (first definition wins there).
    pub fn parse(text: &str, translit: &dyn Transliterator) -> Result<Self, DefinitionsError> {
        let mut entries = HashMap::new();

        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let (headword, definition) = line
                .split_once('\t')
                .ok_or(DefinitionsError::MissingTab { line: idx + 1 })?;
            let definition = definition.trim().to_string();
            // A headword without a gloss is as good as absent.
            if definition.is_empty() {
                debug!("line {}: empty definition for {:?}", idx + 1, headword.trim());
                continue;
            }
            let native = translit.to_native(headword.trim());

            let base = strip_digit_suffix(&native);
            if base.len() != native.len() {
                entries
                    .entry(base.to_string())
                    .or_insert_with(|| definition.clone());
            }
            entries.insert(native, definition);
        }

        debug!("loaded {} definition keys", entries.len());
        Ok(Definitions { entries })
    }

    pub fn from_path(
        path: impl AsRef<Path>,
        translit: &dyn Transliterator,
    ) -> Result<Self, DefinitionsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DefinitionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, translit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DefinitionLookup for Definitions {
    fn lookup(&self, headword: &str) -> Option<String> {
        self.entries
            .get(headword)
            .or_else(|| self.entries.get(strip_digit_suffix(headword)))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::betacode::BetaCode;

    const SAMPLE: &str = "lo/gos\tword, speech\n\
                          \n\
                          le/gw1\tto pick up\n\
                          le/gw2\tto say, speak\n\
                          a)/nqrwpos\tman, person\n";

    #[test]
    fn test_lookup_exact() {
        let defs = Definitions::parse(SAMPLE, &BetaCode).unwrap();
        assert_eq!(defs.lookup("λόγος").as_deref(), Some("word, speech"));
        assert_eq!(defs.lookup("ἄνθρωπος").as_deref(), Some("man, person"));
        assert_eq!(defs.lookup("λέγω2").as_deref(), Some("to say, speak"));
    }

    #[test]
    fn test_lookup_digit_stripped() {
        let defs = Definitions::parse(SAMPLE, &BetaCode).unwrap();
        // The bare headword resolves to the first homograph listed.
        assert_eq!(defs.lookup("λέγω").as_deref(), Some("to pick up"));
        // An unknown homograph number falls back to the bare headword.
        assert_eq!(defs.lookup("λόγος3").as_deref(), Some("word, speech"));
    }

    #[test]
    fn test_lookup_missing() {
        let defs = Definitions::parse(SAMPLE, &BetaCode).unwrap();
        assert_eq!(defs.lookup("ψυχή"), None);
        assert_eq!(NoDefinitions.lookup("λόγος"), None);
    }

    #[test]
    fn test_missing_tab_reports_line() {
        let err = Definitions::parse("lo/gos\tword\nbroken line\n", &BetaCode).unwrap_err();
        assert!(matches!(err, DefinitionsError::MissingTab { line: 2 }));
    }

    #[test]
    fn test_empty_definition_is_skipped() {
        let defs = Definitions::parse("lo/gos\tword\nkai/\t\nle/gw\tsay\r\n", &BetaCode).unwrap();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs.lookup("καί"), None);
        assert_eq!(defs.lookup("λέγω").as_deref(), Some("say"));
    }

    #[test]
    fn test_empty_text_loads_nothing() {
        let defs = Definitions::parse("\n\n", &BetaCode).unwrap();
        assert!(defs.is_empty());
    }

    #[test]
    fn test_unreadable_file() {
        let err = Definitions::from_path("/nonexistent/shortdefs", &BetaCode).unwrap_err();
        assert!(matches!(err, DefinitionsError::Io { .. }));
    }
}
