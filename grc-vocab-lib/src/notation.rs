// Dictionary-style headword notation.
//
//   λόγος     → ου, ὁ        (not printed: second declension needs no genitive)
//   γέρων     → οντος, ὁ
//   καλός     → ή, όν
//   ἐπίορκος  → ον
//   καλῶς     → (adv.)
//
// Rules are tried in order and the first applicable one decides, even when it
// produces nothing.

use crate::category::GrammaticalCategory;
use crate::feature::Feature;
use crate::greek::{bare_letter_from_end, ends_with_bare, is_final_syllable_accented};
use crate::morph_class::{MorphClass, PRONOUN_CLASSES};
use crate::types::{AnalysisRecord, VocabularyEntry};

// ---------------------------------------------------------------------------
// Literal paradigms
// ---------------------------------------------------------------------------

const IRREGULAR_ADJECTIVES: &[(&str, &str)] = &[
    ("πολύς", "πολύς, πολλή, πολύ"),
    ("μέγας", "μέγας, μεγάλη, μέγα"),
    ("πᾶς", "πᾶς, πᾶσα, πᾶν"),
    ("ἄλλος", "ἄλλη, ἄλλο"),
];

const IRREGULAR_PRONOUNS: &[(&str, &str)] = &[
    ("τίς", "τίς, τί"),
    ("τις", "τις, τι"),
    ("ὅστις", "ὅστις, ἥτις, ὅτι"),
    ("οὗτος", "οὗτος, αὕτη, τοῦτο"),
    ("ἐκεῖνος", "ἐκεῖνος, ἐκείνη, ἐκεῖνο"),
    ("ὅδε", "ὅδε, ἥδε, τόδε"),
    ("αὐτός", "αὐτός, αὐτή, αὐτό"),
    ("ὅς", "ὅς, ἥ, ὅ"),
];

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("ἀνήρ", "ἀνδρός, ὁ"),
    ("γυνή", "γυναικός, ἡ"),
    ("πατήρ", "πατρός, ὁ"),
    ("μήτηρ", "μητρός, ἡ"),
    ("θυγάτηρ", "θυγατρός, ἡ"),
    ("Ζεύς", "Διός, ὁ"),
    ("ναῦς", "νεώς, ἡ"),
    ("χείρ", "χειρός, ἡ"),
];

const ARTICLE: &str = "ὁ/ἡ/τό";
const ADVERB: &str = "(adv.)";

fn literal(table: &[(&str, &'static str)], lemma: &str) -> Option<&'static str> {
    table.iter().find(|(l, _)| *l == lemma).map(|(_, p)| *p)
}

// ---------------------------------------------------------------------------
// Adjective endings
// ---------------------------------------------------------------------------

/// Pick the accented or unaccented form of a synthesized ending.
fn accented(lemma: &str, with_accent: &'static str, without: &'static str) -> &'static str {
    if is_final_syllable_accented(lemma) {
        with_accent
    } else {
        without
    }
}

/// -ος, -η/-α, -ον: ε, ι or ρ before -ος takes the α feminine.
fn three_termination(lemma: &str) -> &'static str {
    let alpha = matches!(bare_letter_from_end(lemma, 2), Some('ε' | 'ι' | 'ρ'));
    match (alpha, is_final_syllable_accented(lemma)) {
        (true, true) => "ά, όν",
        (false, true) => "ή, όν",
        _ => "α, ον",
    }
}

fn two_termination(lemma: &str) -> &'static str {
    accented(lemma, "όν", "ον")
}

/// Endings given by the first adjective class that has a pattern.
fn class_endings(lemma: &str, classes: &[MorphClass]) -> Option<&'static str> {
    classes.iter().find_map(|class| {
        Some(match class {
            MorphClass::OsHOn | MorphClass::EosEhEon | MorphClass::OosOhOon => {
                three_termination(lemma)
            }
            MorphClass::OsOn | MorphClass::OosOon | MorphClass::WnOn | MorphClass::WnOnComp => {
                two_termination(lemma)
            }
            MorphClass::HsEs => accented(lemma, "ές", "ες"),
            MorphClass::UsEiaU => accented(lemma, "εῖα, ύ", "εια, υ"),
            MorphClass::AsAsaAn => accented(lemma, "ᾶσα, ᾶν", "ασα, αν"),
            MorphClass::AsAinaAn => accented(lemma, "αίνα, άν", "αινα, αν"),
            MorphClass::EisEssa => accented(lemma, "έσσα, έν", "εσσα, εν"),
            MorphClass::HnEinaEn => accented(lemma, "εῖνα, έν", "εινα, εν"),
            MorphClass::WnOusaOn => accented(lemma, "οῦσα, όν", "ουσα, ον"),
            MorphClass::OeisOessa => accented(lemma, "όεσσα, όεν", "οεσσα, οεν"),
            _ => return None,
        })
    })
}

/// Endings guessed from the lemma's last two letters.
fn suffix_endings(record: &AnalysisRecord, lemma: &str) -> Option<&'static str> {
    if ends_with_bare(lemma, "ος") {
        if record.has_feature(Feature::Feminine) {
            Some(three_termination(lemma))
        } else {
            Some(two_termination(lemma))
        }
    } else if ends_with_bare(lemma, "ης") {
        Some(accented(lemma, "ές", "ες"))
    } else if ends_with_bare(lemma, "υς") {
        Some(accented(lemma, "εῖα, ύ", "εια, υ"))
    } else if ends_with_bare(lemma, "ων") {
        Some(two_termination(lemma))
    } else {
        None
    }
}

fn adjective_notation(record: &AnalysisRecord, lemma: &str) -> Option<String> {
    if let Some(paradigm) = literal(IRREGULAR_ADJECTIVES, lemma) {
        return Some(paradigm.to_string());
    }
    let classes: Vec<MorphClass> = record.morph_classes.iter().copied().collect();
    class_endings(lemma, &classes)
        .or_else(|| suffix_endings(record, lemma))
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Pronouns
// ---------------------------------------------------------------------------

const PRONOUN_FEATURES: &[Feature] = &[
    Feature::Demonstrative,
    Feature::RelativePronoun,
    Feature::PersonalPronoun,
    Feature::IndefiniteRelative,
];

fn is_pronoun_like(record: &AnalysisRecord, lemma: &str) -> bool {
    PRONOUN_FEATURES.iter().any(|f| record.has_feature(*f))
        || PRONOUN_CLASSES.iter().any(|c| record.has_class(*c))
        || literal(IRREGULAR_PRONOUNS, lemma).is_some()
}

fn pronoun_notation(record: &AnalysisRecord, lemma: &str) -> Option<String> {
    if let Some(paradigm) = literal(IRREGULAR_PRONOUNS, lemma) {
        return Some(paradigm.to_string());
    }
    if !ends_with_bare(lemma, "ος") {
        return None;
    }
    if record.has_feature(Feature::Masculine) {
        Some(three_termination(lemma).to_string())
    } else if record.has_feature(Feature::MascFem) {
        Some(two_termination(lemma).to_string())
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Nouns
// ---------------------------------------------------------------------------

fn gender_article(record: &AnalysisRecord) -> Option<&'static str> {
    if record.has_feature(Feature::Masculine) {
        Some("ὁ")
    } else if record.has_feature(Feature::Feminine) {
        Some("ἡ")
    } else if record.has_feature(Feature::Neuter) {
        Some("τό")
    } else if record.has_feature(Feature::MascFem) {
        Some("ὁ, ἡ")
    } else {
        None
    }
}

/// Genitive singular ending of a third-declension noun.
fn genitive_ending(record: &AnalysisRecord, lemma: &str) -> &'static str {
    let has = |c| record.has_class(c);
    if ends_with_bare(lemma, "ις") && has(MorphClass::IsEws) {
        "εως"
    } else if ends_with_bare(lemma, "μα") && has(MorphClass::MaMatos) {
        "ματος"
    } else if ends_with_bare(lemma, "ηρ") && has(MorphClass::HrEros) {
        "ερος"
    } else if ends_with_bare(lemma, "ις") && has(MorphClass::IsIdosStem) {
        "ιδος"
    } else if ends_with_bare(lemma, "ων") && has(MorphClass::WnOnos) {
        "ονος"
    } else if ends_with_bare(lemma, "ων") {
        "οντος"
    } else if ends_with_bare(lemma, "ης") && has(MorphClass::HsEosStem) {
        "ους"
    } else if ends_with_bare(lemma, "ος")
        && (has(MorphClass::HsEosStem)
            || (record.has_feature(Feature::Neuter) && record.has_feature(Feature::Singular)))
    {
        "εος"
    } else {
        "ος"
    }
}

fn noun_notation(record: &AnalysisRecord, lemma: &str) -> Option<String> {
    if let Some(paradigm) = literal(IRREGULAR_NOUNS, lemma) {
        return Some(paradigm.to_string());
    }
    let article = gender_article(record);
    if record.has_feature(Feature::Indeclinable) || !record.is_third_declension() {
        return article.map(str::to_string);
    }
    let genitive = genitive_ending(record, lemma);
    Some(match article {
        Some(article) => format!("{genitive}, {article}"),
        None => genitive.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Headword notation for a resolved record, if its kind gets one.
pub fn format_morphology(record: &AnalysisRecord) -> Option<String> {
    let lemma = record.base_lemma();

    if record.has_feature(Feature::Adverbial) {
        return Some(ADVERB.to_string());
    }
    if is_pronoun_like(record, lemma) {
        return pronoun_notation(record, lemma);
    }
    if record.is_adjective() || literal(IRREGULAR_ADJECTIVES, lemma).is_some() {
        return adjective_notation(record, lemma);
    }
    match record.category {
        GrammaticalCategory::Noun => noun_notation(record, lemma),
        GrammaticalCategory::Article => Some(ARTICLE.to_string()),
        _ => None,
    }
}

/// Category label shown in the vocabulary list. Adjectives are labelled by
/// class since the analyzer reports them as nouns.
pub fn category_label(record: &AnalysisRecord) -> &'static str {
    if record.is_adjective() && !record.category.is_uninflected() {
        "adjective"
    } else {
        record.category.label()
    }
}

/// Build the vocabulary entry for a resolved record.
pub fn vocabulary_entry(record: &AnalysisRecord) -> VocabularyEntry {
    VocabularyEntry {
        lemma: record.base_lemma().to_string(),
        definition: record.definition.clone().unwrap_or_default(),
        category_label: category_label(record).to_string(),
        morphology: format_morphology(record),
    }
}
