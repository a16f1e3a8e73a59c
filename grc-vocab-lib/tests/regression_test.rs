// End-to-end runs over the opening of Aristophanes' Frogs with a canned
// analyzer standing in for the cruncher.

use std::collections::HashMap;
use std::io::Cursor;

use grc_vocab_lib::output::{format_entry, to_plain};
use grc_vocab_lib::{
    AnalyzerFlags, BetaCode, Definitions, InteractiveResolver, NoDefinitions, PipelineConfig,
    SelectAll, VocabularyBuilder, VocabularyEntry, VocabularyReport,
};

const PASSAGE: &str = "εἴπω τι τῶν εἰωθότων, ὦ δέσποτα, ἐφ᾽ οἷς ἀεὶ γελῶσιν οἱ θεώμενοι; \
                       Φρύνιχος";

const ANALYSES: &[(&str, &str)] = &[
    ("ei)/pw", "<NL>V ei)=pon  aor subj act 1st sg\taor2</NL>"),
    (
        "ti",
        "<NL>Pron tis  neut nom sg enclitic indef</NL>\
         <NL>Pron ti/s  neut nom sg interrog</NL>",
    ),
    ("tw=n", "<NL>N o(  masc gen pl article</NL>"),
    ("ei)wqo/twn", "<NL>P e)/qw  perf part act masc gen pl\tperf_act</NL>"),
    ("w)=", "<NL>Interj w)=  indeclform</NL>"),
    ("de/spota", "<NL>N despo/ths  masc voc sg\th_hs</NL>"),
    ("oi(=s", "<NL>Pron o(/s  masc dat pl relative</NL>"),
    ("a)ei\\", "<NL>Adv a)ei/  adverbial</NL>"),
    ("gelw=sin", "<NL>V gela/w  pres ind act 3rd pl\taw_pr,aw_denom</NL>"),
    ("oi(", "<NL>N o(  masc nom pl article</NL>"),
    ("qew/menoi", "<NL>P qea/omai  pres part mp masc nom pl\taw_pr</NL>"),
];

const DEFINITIONS: &str = "ei)=pon\tsay, speak\n\
                           tis\tsomeone, something\n\
                           ti/s\twho? which?\n\
                           o(\tthe\n\
                           despo/ths\tmaster, lord\n\
                           o(/s\twho, which\n\
                           a)ei/\talways\n\
                           gela/w\tlaugh\n\
                           qea/omai\tview, behold\n";

fn canned() -> impl Fn(&str, AnalyzerFlags) -> String {
    let table: HashMap<&str, &str> = ANALYSES.iter().copied().collect();
    move |token: &str, _flags: AnalyzerFlags| {
        table.get(token).map(|s| s.to_string()).unwrap_or_default()
    }
}

fn definitions() -> Definitions {
    Definitions::parse(DEFINITIONS, &BetaCode).unwrap()
}

fn batch_report() -> VocabularyReport {
    let analyzer = canned();
    let defs = definitions();
    VocabularyBuilder::new(&analyzer, &BetaCode, &defs).build(PASSAGE, &mut SelectAll)
}

fn find<'a>(report: &'a VocabularyReport, lemma: &str) -> &'a VocabularyEntry {
    report
        .entries
        .iter()
        .find(|e| e.lemma == lemma)
        .unwrap_or_else(|| panic!("no entry for {lemma}"))
}

#[test]
fn passage_entries_sorted_without_diacritics() {
    let report = batch_report();
    let lemmas: Vec<&str> = report.entries.iter().map(|e| e.lemma.as_str()).collect();
    assert_eq!(
        lemmas,
        vec![
            "ἀεί", "γελάω", "δεσπότης", "ἔθω", "εἶπον", "θεάομαι", "ὁ", "ὅς", "τίς", "τις",
            "Φρύνιχος", "ὦ",
        ]
    );
}

#[test]
fn repeated_article_yields_one_entry() {
    let report = batch_report();
    assert_eq!(report.entries.iter().filter(|e| e.lemma == "ὁ").count(), 1);
    let article = find(&report, "ὁ");
    assert_eq!(article.category_label, "article");
    assert_eq!(article.morphology.as_deref(), Some("ὁ/ἡ/τό"));
    assert_eq!(article.definition, "the");
}

#[test]
fn notations_per_kind() {
    let report = batch_report();
    assert_eq!(find(&report, "δεσπότης").morphology.as_deref(), Some("ὁ"));
    assert_eq!(find(&report, "ἀεί").morphology.as_deref(), Some("(adv.)"));
    assert_eq!(find(&report, "ὅς").morphology.as_deref(), Some("ὅς, ἥ, ὅ"));
    assert_eq!(find(&report, "τις").morphology.as_deref(), Some("τις, τι"));
    assert_eq!(find(&report, "τίς").morphology.as_deref(), Some("τίς, τί"));
    assert_eq!(find(&report, "γελάω").morphology, None);
    assert_eq!(find(&report, "ὦ").morphology, None);
}

#[test]
fn categories_and_definitions() {
    let report = batch_report();
    assert_eq!(find(&report, "θεάομαι").category_label, "participle");
    assert_eq!(find(&report, "θεάομαι").definition, "view, behold");
    assert_eq!(find(&report, "εἶπον").category_label, "verb");
    assert_eq!(find(&report, "ὦ").category_label, "interjection");
    assert_eq!(find(&report, "ἔθω").definition, "");
}

#[test]
fn proper_names_and_unparsed_tokens() {
    let report = batch_report();
    let names: Vec<&str> = report.proper_names.iter().collect();
    assert_eq!(names, vec!["Φρύνιχος"]);
    assert_eq!(find(&report, "Φρύνιχος").category_label, "proper noun");
    assert_eq!(report.unparsed, vec!["ἐφ᾽"]);
}

#[test]
fn plain_rendering() {
    let report = batch_report();
    assert_eq!(format_entry(find(&report, "ἀεί")), "ἀεί (adv.): always");
    assert_eq!(format_entry(find(&report, "δεσπότης")), "δεσπότης, ὁ: master, lord");
    assert_eq!(format_entry(find(&report, "γελάω")), "γελάω: laugh");
    let plain = to_plain(&report.entries);
    assert_eq!(plain.lines().count(), report.entries.len());
    assert!(plain.starts_with("ἀεί (adv.): always\n"));
}

#[test]
fn interactive_choice_narrows_ambiguous_token() {
    let analyzer = canned();
    let defs = definitions();
    let config = PipelineConfig {
        interactive: true,
        ..PipelineConfig::default()
    };
    let mut prompts = Vec::new();
    let mut resolver = InteractiveResolver::new(Cursor::new("1\n"), &mut prompts);
    let report = VocabularyBuilder::new(&analyzer, &BetaCode, &defs)
        .with_config(config)
        .build(PASSAGE, &mut resolver);

    assert!(report.entries.iter().any(|e| e.lemma == "τις"));
    assert!(!report.entries.iter().any(|e| e.lemma == "τίς"));

    let shown = String::from_utf8(prompts).unwrap();
    assert_eq!(shown.matches("Multiple possibilities").count(), 1);
    assert!(shown.contains("Multiple possibilities for 'τι':"));
    assert!(shown.contains("1. τις (pronoun): someone, something"));
    assert!(shown.contains("2. τίς (pronoun): who? which?"));
}

#[test]
fn batch_mode_ignores_resolver() {
    let analyzer = canned();
    // Would keep only the first reading if consulted.
    let mut resolver = InteractiveResolver::new(Cursor::new("1\n"), Vec::<u8>::new());
    let report =
        VocabularyBuilder::new(&analyzer, &BetaCode, &NoDefinitions).build(PASSAGE, &mut resolver);
    assert!(report.entries.iter().any(|e| e.lemma == "τίς"));
    assert!(report.entries.iter().any(|e| e.lemma == "τις"));
}

#[test]
fn report_serializes_to_json() {
    let report = batch_report();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["entries"].as_array().unwrap().len(), report.entries.len());
    assert_eq!(json["proper_names"][0], "Φρύνιχος");
    assert_eq!(json["unparsed"][0], "ἐφ᾽");
    assert_eq!(json["entries"][0]["lemma"], "ἀεί");
    assert_eq!(json["entries"][0]["morphology"], "(adv.)");
}
