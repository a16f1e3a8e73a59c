// Declension and conjugation classes reported in the trailing columns of an
// analysis (e.g. `os_h_on`, `aw_pr,aw_denom`, `nu_movable aor1`).

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;

use crate::tags::{build_table, tag_vocabulary, TagError};

tag_vocabulary! {
    /// A single morphological class tag.
    pub enum MorphClass {
        // Nominal declensions and adjective patterns.
        FirstDeclensionA => "a_as",
        FirstDeclensionH => "h_hs",
        AsA => "as_a",
        SecondDeclension => "os_ou",
        ThirdDeclension => "s_os",
        MasterDeclension => "hs_ou",
        IsEws => "is_ews",
        IrregDecl3 => "irreg_decl3",
        OsHOn => "os_h_on",
        HsEs => "hs_es",
        OsOn => "os_on",
        EisEssa => "eis_essa",
        ArticleAdjective => "art_adj",
        // Verb stems, contract classes and tense formations.
        Thematic => "w_stem",
        Athematic => "mi_stem",
        Contract => "ew_contract",
        Deponent => "dep",
        RegConj => "reg_conj",
        Conj3 => "conj3",
        Conj3io => "conj3io",
        Conj4 => "conj4",
        IrregMi => "irreg_mi",
        NuOmega => "nw",
        Azo => "azw",
        EuwPresent => "evw_pr",
        EuStem => "ev_stem",
        Allw => "allw",
        Illw => "illw",
        AvStem => "av_stem",
        AwPresent => "aw_pr",
        AwDenom => "aw_denom",
        EwPresent => "ew_pr",
        EwDenom => "ew_denom",
        OwPresent => "ow_pr",
        OwDenom => "ow_denom",
        IawDenom => "iaw_denom",
        AStem => "a_stem",
        AwFuture => "aw_fut",
        FirstAorist => "aor1",
        SecondAorist => "aor2",
        RootAorist => "aor_rt",
        AthematicWAorist => "ath_w_aor",
        AthematicUAorist => "ath_u_aor",
        AmiAorist => "ami_aor",
        PerfectActive => "perf_act",
        PerfpVow => "perfp_vow",
        // Special forms and pronominal classes.
        MovableNu => "nu_movable",
        Indeclinable => "indecl",
        Indefinite => "indef",
        SyllabicAugment => "syll_augment",
        Unaugmented => "unaugmented",
        APriv => "a_priv",
        PronAdj1 => "pron_adj1",
        PronAdj3 => "pron_adj3",
        // Stem classes and the long tail of patterns seen in cruncher output.
        SigmaStem => "ss",
        HsEosStem => "hs_eos",
        SDosStem => "s_dos",
        IsIdosStem => "is_idos",
        EisEnos => "eis_enos",
        ArAtos => "ar_atos",
        DoubledCons => "doubled_cons",
        IotaIntens => "iota_intens",
        SigToCi => "sig_to_ci",
        IrregComp => "irreg_comp",
        WnOn => "wn_on",
        UsEiaU => "us_eia_u",
        AthPrimary => "ath_primary",
        NoCircumflex => "no_circumflex",
        Euw => "euw",
        MaMatos => "ma_matos",
        AthHAor => "ath_h_aor",
        AthSecondary => "ath_secondary",
        Izw => "izw",
        Ptw => "ptw",
        Ainw => "ainw",
        Anw => "anw",
        CompOnly => "comp_only",
        KlehsKleous => "klehs_kleous",
        OosOou => "oos_oou",
        EhEhs => "eh_ehs",
        NNos => "n_nos",
        HrEros => "hr_eros",
        AHs => "a_hs",
        AmiShort => "ami_short",
        PresRedupl => "pres_redupl",
        AmiPr => "ami_pr",
        AorPass => "aor_pass",
        Contr => "contr",
        OStem => "o_stem",
        AdverbialEnding => "ws_adv",
        EStem => "e_stem",
        RegFut => "reg_fut",
        EasEa => "eas_ea",
        EhsEou => "ehs_eou",
        EusEws => "eus_ews",
        IrregAdj3 => "irreg_adj3",
        AsAinaAn => "as_aina_an",
        AsAntos => "as_antos",
        AsAos => "as_aos",
        AsAtos => "as_atos",
        Airw => "airw",
        Eirw => "eirw",
        WsW => "ws_w",
        AosAou => "aos_aou",
        WnOnComp => "wn_on_comp",
        ParadForm => "parad_form",
        EwFut => "ew_fut",
        IrregSuperl => "irreg_superl",
        ShortSubj => "short_subj",
        ESuppl => "e_suppl",
        Later => "later",
        WsWn => "ws_wn",
        NInfix => "n_infix",
        RawPreverb => "raw_preverb",
        ElidePreverb => "elide_preverb",
        EmiAorist => "emi_aor",
        AsAsaAn => "as_asa_an",
        IndeclinableForm => "indeclform",
        Ellw => "ellw",
        Adverb => "adverb",
        CKos => "c_kos",
        CGos => "c_gos",
        CKtos => "c_ktos",
        CXos => "c_xos",
        CGgos => "c_ggos",
        GcGos => "gc_gos",
        HcEkos => "hc_ekos",
        Poetic => "poetic",
        WsOos => "ws_oos",
        Aor2Pass => "aor2_pass",
        AhAhs => "ah_ahs",
        AjwPr => "ajw_pr",
        EmiPr => "emi_pr",
        EosEhEon => "eos_eh_eon",
        EosEou => "eos_eou",
        EwnEwnos => "ewn_ewnos",
        FutPerf => "fut_perf",
        HeisHessa => "heis_hessa",
        HnEinaEn => "hn_eina_en",
        HnEnos => "hn_enos",
        HrRos => "hr_ros",
        HsEntos => "hs_entos",
        RRos => "r_ros",
        RTos => "r_tos",
        SNos => "s_nos",
        STos => "s_tos",
        UsUos => "us_uos",
        UsEws => "us_ews",
        WnOnos => "wn_onos",
        WnOntos => "wn_ontos",
        WsWos => "ws_wos",
        WrOros => "wr_oros",
        YBos => "y_bos",
        YFos => "y_fos",
        YPos => "y_pos",
        QricTrixos => "qric_trixos",
        RRtos => "r_rtos",
        SNtos => "s_ntos",
        SQos => "s_qos",
        SRos => "s_ros",
        TTos => "t_tos",
        UlsUos => "uLs_uos",
        UmiPr => "umi_pr",
        UsU => "us_u",
        UsUos2 => "us_uos2",
        VerbAdj => "verb_adj",
        VerbAdj1 => "verb_adj1",
        VerbAdj2 => "verb_adj2",
        VhVhs => "vh_vhs",
        WOos => "w_oos",
        WcnWcntos => "wCn_wCntos",
        WnNos => "wn_nos",
        WnOusaOn => "wn_ousa_on",
        WsWLong => "ws_w_long",
        WsWnLong => "ws_wn_long",
        WwPr => "ww_pr",
        Numi => "numi",
        IsIcdos => "is_iCdos",
        IsIdosAdj => "is_idos_adj",
        IsIos => "is_ios",
        IsItos => "is_itos",
        IsItosAdj => "is_itos_adj",
        NNosAdj => "n_nos_adj",
        NNtos => "n_ntos",
        OeisOentos => "oeis_oentos",
        OeisOessa => "oeis_oessa",
        OmiAor => "omi_aor",
        OmiPr => "omi_pr",
        OosOhOon => "oos_oh_oon",
        OosOon => "oos_oon",
        OusOntos => "ous_ontos",
        Perf2Act => "perf2_act",
        PerfpD => "perfp_d",
        PerfpG => "perfp_g",
        PerfpGg => "perfp_gg",
        PerfpGx => "perfp_gx",
        PerfpL => "perfp_l",
        PerfpMp => "perfp_mp",
        PerfpN => "perfp_n",
        PerfpP => "perfp_p",
        PerfpR => "perfp_r",
        PerfpS => "perfp_s",
        PerfpUn => "perfp_un",
        PerfpV => "perfp_v",
        PousPodos => "pous_podos",
        GeogName => "geog_name",
    }
}

/// Classes whose presence marks a record as an adjective, whatever its
/// reported part of speech.
pub const ADJECTIVE_CLASSES: &[MorphClass] = &[
    MorphClass::OsHOn,
    MorphClass::OsOn,
    MorphClass::HsEs,
    MorphClass::WnOn,
    MorphClass::UsEiaU,
    MorphClass::IrregAdj3,
    MorphClass::WnOnComp,
    MorphClass::IrregComp,
    MorphClass::IrregSuperl,
    MorphClass::AsAsaAn,
    MorphClass::AsAinaAn,
    MorphClass::EisEssa,
    MorphClass::EosEhEon,
    MorphClass::HeisHessa,
    MorphClass::HnEinaEn,
    MorphClass::IsIdosAdj,
    MorphClass::IsItosAdj,
    MorphClass::NNosAdj,
    MorphClass::OeisOessa,
    MorphClass::OosOhOon,
    MorphClass::OosOon,
    MorphClass::VerbAdj,
    MorphClass::VerbAdj1,
    MorphClass::VerbAdj2,
    MorphClass::WnOusaOn,
    MorphClass::ArticleAdjective,
];

/// Classes that mark a noun as third declension (or irregular in its
/// declension), i.e. one whose genitive is worth printing.
pub const THIRD_DECLENSION_CLASSES: &[MorphClass] = &[
    MorphClass::ThirdDeclension,
    MorphClass::IrregDecl3,
    MorphClass::IsEws,
    MorphClass::SDosStem,
    MorphClass::IsIdosStem,
    MorphClass::HsEosStem,
    MorphClass::MaMatos,
    MorphClass::NNos,
    MorphClass::HrEros,
    MorphClass::WnOntos,
    MorphClass::WnOnos,
    MorphClass::STos,
];

/// Pronominal classes (demonstratives like τοῦτο and third-declension
/// pronouns).
pub const PRONOUN_CLASSES: &[MorphClass] = &[MorphClass::PronAdj1, MorphClass::PronAdj3];

static TABLE: Lazy<HashMap<&'static str, MorphClass>> =
    Lazy::new(|| build_table(MorphClass::ALL, &[]));

impl MorphClass {
    /// Classify one class tag.
    pub fn classify(raw: &str) -> Result<Self, TagError> {
        TABLE
            .get(raw)
            .copied()
            .ok_or_else(|| TagError::UnknownMorphClass(raw.to_string()))
    }

    /// Classify a raw class string that may hold one tag, a comma-separated
    /// list or a whitespace-separated list. Empty input is an empty set.
    pub fn classify_list(raw: &str) -> Result<BTreeSet<Self>, TagError> {
        raw.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(Self::classify)
            .collect()
    }

    pub fn is_adjective_class(self) -> bool {
        ADJECTIVE_CLASSES.contains(&self)
    }
}

/// True if any class in the set marks an adjective.
pub fn is_adjective(classes: &BTreeSet<MorphClass>) -> bool {
    classes.iter().any(|c| c.is_adjective_class())
}

/// True if any class in the set marks a third-declension noun.
pub fn is_third_declension(classes: &BTreeSet<MorphClass>) -> bool {
    classes.iter().any(|c| THIRD_DECLENSION_CLASSES.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_single() {
        assert_eq!(MorphClass::classify("os_h_on"), Ok(MorphClass::OsHOn));
        assert_eq!(MorphClass::classify("wCn_wCntos"), Ok(MorphClass::WcnWcntos));
    }

    #[test]
    fn test_classify_unknown_carries_token() {
        assert_eq!(
            MorphClass::classify("UNKNOWN"),
            Err(TagError::UnknownMorphClass("UNKNOWN".to_string()))
        );
    }

    #[test]
    fn test_classify_space_separated() {
        let classes = MorphClass::classify_list("nu_movable aor1").unwrap();
        assert_eq!(classes.len(), 2);
        assert!(classes.contains(&MorphClass::MovableNu));
        assert!(classes.contains(&MorphClass::FirstAorist));
    }

    #[test]
    fn test_classify_comma_separated() {
        let classes = MorphClass::classify_list("aw_pr,aw_denom").unwrap();
        assert_eq!(classes.len(), 2);
        assert!(classes.contains(&MorphClass::AwPresent));
        assert!(classes.contains(&MorphClass::AwDenom));
    }

    #[test]
    fn test_classify_mixed_separators() {
        let classes = MorphClass::classify_list("aw_pr, aw_denom nu_movable").unwrap();
        assert_eq!(classes.len(), 3);
    }

    #[test]
    fn test_classify_empty() {
        assert!(MorphClass::classify_list("").unwrap().is_empty());
        assert!(MorphClass::classify_list("   ").unwrap().is_empty());
    }

    #[test]
    fn test_one_bad_element_fails_the_list() {
        assert_eq!(
            MorphClass::classify_list("aw_pr,bogus_class"),
            Err(TagError::UnknownMorphClass("bogus_class".to_string()))
        );
    }

    #[test]
    fn test_canonical_strings_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (raw, _) in MorphClass::ALL {
            assert!(seen.insert(*raw), "duplicate class string {raw}");
        }
    }

    #[test]
    fn test_adjective_detection() {
        let adj: BTreeSet<_> = [MorphClass::OsOn, MorphClass::SecondDeclension].into();
        assert!(is_adjective(&adj));
        let noun: BTreeSet<_> = [MorphClass::SecondDeclension].into();
        assert!(!is_adjective(&noun));
        assert!(!is_adjective(&BTreeSet::new()));
    }
}
