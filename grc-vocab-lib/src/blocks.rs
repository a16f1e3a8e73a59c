// Splitting raw cruncher output into per-analysis token groups.
//
// The cruncher wraps each analysis in `<NL>` ... `</NL>`:
//
//   <NL>N lo/gos  masc nom sg	os_ou</NL>
//   <NL>V le/gw  pres ind act 3rd sg	w_stem,reg_conj</NL>
//
// Column 0 is the category code, column 1 the lemma; the rest are feature
// tokens followed by class tokens. Class tags always contain `_` or `,`,
// features never do, so the first token of that shape starts the class region.

use log::debug;

const OPEN: &str = "<NL>";
const CLOSE: &str = "</NL>";

/// One analysis group split into its columns, not yet classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnalysis {
    pub category_code: String,
    /// Lemma with any trailing comma removed, still in the analyzer's encoding.
    pub lemma: String,
    pub features: Vec<String>,
    /// Class tokens rejoined with single spaces; empty if there are none.
    pub morph_classes: String,
}

/// Extract every analysis group from raw cruncher output.
///
/// Groups with fewer than three tokens are skipped. An unterminated trailing
/// group is ignored.
pub fn parse_blocks(raw_output: &str) -> Vec<RawAnalysis> {
    let mut result = Vec::new();
    let mut rest = raw_output;

    while let Some(open) = rest.find(OPEN) {
        rest = &rest[open + OPEN.len()..];
        let close = match rest.find(CLOSE) {
            Some(c) => c,
            None => break,
        };
        let inner = &rest[..close];
        rest = &rest[close + CLOSE.len()..];

        match parse_group(inner) {
            Some(analysis) => result.push(analysis),
            None => debug!("skipping malformed analysis block {inner:?}"),
        }
    }

    result
}

/// Partition one group's tokens into columns.
pub fn parse_group(group: &str) -> Option<RawAnalysis> {
    let parts: Vec<&str> = group.split_whitespace().collect();
    if parts.len() < 3 {
        return None;
    }

    let lemma = parts[1].strip_suffix(',').unwrap_or(parts[1]);

    let split = parts[2..]
        .iter()
        .position(|p| p.contains('_') || p.contains(','))
        .map_or(parts.len(), |i| i + 2);

    Some(RawAnalysis {
        category_code: parts[0].to_string(),
        lemma: lemma.to_string(),
        features: parts[2..split].iter().map(|s| s.to_string()).collect(),
        morph_classes: parts[split..].join(" "),
    })
}

/// Pick the standard variant of a lemma that lists dialect forms separated
/// by commas: the second element if there is one, otherwise the only one.
pub fn canonical_lemma(lemma: &str) -> &str {
    let mut variants = lemma.split(',').map(str::trim).filter(|v| !v.is_empty());
    let first = variants.next().unwrap_or(lemma);
    variants.next().unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_block() {
        let out = "<NL>N a)/nqrwpos  masc nom sg\tos_ou</NL>";
        let blocks = parse_blocks(out);
        assert_eq!(blocks.len(), 1);
        let b = &blocks[0];
        assert_eq!(b.category_code, "N");
        assert_eq!(b.lemma, "a)/nqrwpos");
        assert_eq!(b.features, vec!["masc", "nom", "sg"]);
        assert_eq!(b.morph_classes, "os_ou");
    }

    #[test]
    fn test_multiple_blocks_and_noise() {
        let out = "a)/nqrwpos\n<NL>N a)/nqrwpos  masc nom sg\tos_ou</NL>\n\
                   <NL>V le/gw  pres ind act 3rd sg\tw_stem,reg_conj</NL>\n";
        let blocks = parse_blocks(out);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].morph_classes, "w_stem,reg_conj");
    }

    #[test]
    fn test_class_region_rejoined_with_spaces() {
        let b = parse_group("V di/dwmi  aor ind act 3rd sg   nu_movable    aor1").unwrap();
        assert_eq!(b.features, vec!["aor", "ind", "act", "3rd", "sg"]);
        assert_eq!(b.morph_classes, "nu_movable aor1");
    }

    #[test]
    fn test_no_class_region() {
        let b = parse_group("Conj kai/  indeclform conj").unwrap();
        assert_eq!(b.features, vec!["indeclform", "conj"]);
        assert_eq!(b.morph_classes, "");
    }

    #[test]
    fn test_trailing_comma_stripped_from_lemma() {
        let b = parse_group("N o(,  masc nom sg article").unwrap();
        assert_eq!(b.lemma, "o(");
    }

    #[test]
    fn test_short_group_skipped() {
        assert!(parse_group("N lo/gos").is_none());
        assert!(parse_blocks("<NL>N lo/gos</NL><NL></NL>").is_empty());
    }

    #[test]
    fn test_unterminated_block_ignored() {
        let out = "<NL>N lo/gos masc nom sg os_ou</NL><NL>N broken masc";
        assert_eq!(parse_blocks(out).len(), 1);
    }

    #[test]
    fn test_empty_output() {
        assert!(parse_blocks("").is_empty());
        assert!(parse_blocks("no analyses here").is_empty());
    }

    #[test]
    fn test_canonical_lemma() {
        assert_eq!(canonical_lemma("lo/gos"), "lo/gos");
        assert_eq!(canonical_lemma("ce/nos,ce/inos"), "ce/inos");
        assert_eq!(canonical_lemma("a,b,c"), "b");
    }
}
