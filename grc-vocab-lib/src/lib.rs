pub mod analyzer;
pub mod betacode;
pub mod blocks;
pub mod category;
pub mod classify;
pub mod definitions;
pub mod disambiguate;
pub mod feature;
pub mod greek;
pub mod morph_class;
pub mod notation;
pub mod output;
mod tags;
pub mod types;
pub mod vocab;

pub use analyzer::{Analyzer, AnalyzerFlags, Cruncher};
pub use betacode::{BetaCode, Transliterator};
pub use category::GrammaticalCategory;
pub use definitions::{DefinitionLookup, Definitions, NoDefinitions};
pub use disambiguate::{collapse, InteractiveResolver, Resolver, SelectAll};
pub use feature::Feature;
pub use greek::sort_key;
pub use morph_class::MorphClass;
pub use notation::format_morphology;
pub use tags::TagError;
pub use types::{AnalysisRecord, VocabularyEntry};
pub use vocab::{extract_words, PipelineConfig, ProperNames, VocabularyBuilder, VocabularyReport};
