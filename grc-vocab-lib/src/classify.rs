// Turning parsed blocks into validated analysis records.

use log::warn;

use crate::betacode::Transliterator;
use crate::blocks::{canonical_lemma, RawAnalysis};
use crate::category::GrammaticalCategory;
use crate::definitions::DefinitionLookup;
use crate::feature::Feature;
use crate::morph_class::MorphClass;
use crate::tags::TagError;
use crate::types::AnalysisRecord;

/// Validate every column of one raw analysis. The lemma is canonicalized but
/// left in the working encoding; no definition is attached.
pub fn classify_raw(token: &str, raw: &RawAnalysis) -> Result<AnalysisRecord, TagError> {
    let features = Feature::classify_all(raw.features.iter().map(String::as_str))?;
    let category = GrammaticalCategory::classify(&raw.category_code)?.refine(&features);
    let morph_classes = MorphClass::classify_list(&raw.morph_classes)?;

    Ok(AnalysisRecord {
        original_token: token.to_string(),
        category,
        lemma: canonical_lemma(&raw.lemma).to_string(),
        features,
        morph_classes,
        definition: None,
    })
}

/// Classify all analyses of a token, converting lemmas to native script and
/// attaching definitions. Analyses with unknown tags are logged and dropped.
pub fn classify_all(
    token: &str,
    raws: &[RawAnalysis],
    translit: &dyn Transliterator,
    definitions: &dyn DefinitionLookup,
) -> Vec<AnalysisRecord> {
    raws.iter()
        .filter_map(|raw| match classify_raw(token, raw) {
            Ok(mut record) => {
                record.lemma = translit.to_native(&record.lemma);
                record.definition = definitions.lookup(&record.lemma);
                Some(record)
            }
            Err(e) => {
                warn!("discarding analysis of {token:?} ({} {}): {e}", raw.category_code, raw.lemma);
                None
            }
        })
        .collect()
}
