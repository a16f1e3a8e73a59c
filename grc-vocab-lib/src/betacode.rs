// Beta Code transliteration, the ASCII encoding the cruncher reads and writes.
//
//   lo/gos      ↔ λόγος
//   *)aqh=nai   ↔ Ἀθῆναι
//   a)ll'       ↔ ἀλλ᾽
//
// Lowercase letters are followed by their diacritics; a capital is written
// `*`, then its diacritics, then the letter.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Conversion between native script and the analyzer's working encoding.
pub trait Transliterator {
    /// Native script → working encoding.
    fn to_working(&self, native: &str) -> String;
    /// Working encoding → native script (NFC).
    fn to_native(&self, working: &str) -> String;
}

const LETTERS: &[(char, char)] = &[
    ('a', 'α'),
    ('b', 'β'),
    ('g', 'γ'),
    ('d', 'δ'),
    ('e', 'ε'),
    ('v', 'ϝ'),
    ('z', 'ζ'),
    ('h', 'η'),
    ('q', 'θ'),
    ('i', 'ι'),
    ('k', 'κ'),
    ('l', 'λ'),
    ('m', 'μ'),
    ('n', 'ν'),
    ('c', 'ξ'),
    ('o', 'ο'),
    ('p', 'π'),
    ('r', 'ρ'),
    ('s', 'σ'),
    ('t', 'τ'),
    ('u', 'υ'),
    ('f', 'φ'),
    ('x', 'χ'),
    ('y', 'ψ'),
    ('w', 'ω'),
];

const DIACRITICS: &[(char, char)] = &[
    (')', '\u{0313}'),
    ('(', '\u{0314}'),
    ('/', '\u{0301}'),
    ('\\', '\u{0300}'),
    ('=', '\u{0342}'),
    ('+', '\u{0308}'),
    ('|', '\u{0345}'),
];

const ELISION: char = '\u{1FBD}';
// Apostrophe look-alikes found in digitized texts.
const ELISION_VARIANTS: &[char] = &['\u{1FBD}', '\u{1FBF}', '\u{2019}', '\u{02BC}', '\''];

static TO_GREEK: Lazy<HashMap<char, char>> = Lazy::new(|| LETTERS.iter().copied().collect());
static FROM_GREEK: Lazy<HashMap<char, char>> = Lazy::new(|| {
    LETTERS
        .iter()
        .map(|&(b, g)| (g, b))
        .chain([('ς', 's'), ('ϲ', 's')])
        .collect()
});
static MARK_TO_GREEK: Lazy<HashMap<char, char>> =
    Lazy::new(|| DIACRITICS.iter().copied().collect());
static MARK_FROM_GREEK: Lazy<HashMap<char, char>> =
    Lazy::new(|| DIACRITICS.iter().map(|&(b, g)| (g, b)).collect());

/// The Beta Code convention used by Morpheus.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetaCode;

impl Transliterator for BetaCode {
    fn to_working(&self, native: &str) -> String {
        let mut out = String::with_capacity(native.len());
        let mut chars = native.nfd().peekable();

        while let Some(c) = chars.next() {
            if ELISION_VARIANTS.contains(&c) {
                out.push('\'');
                continue;
            }
            let lower = c.to_lowercase().next().unwrap_or(c);
            let letter = match FROM_GREEK.get(&lower) {
                Some(&b) => b,
                None => {
                    out.push(MARK_FROM_GREEK.get(&c).copied().unwrap_or(c));
                    continue;
                }
            };

            let mut marks = String::new();
            while let Some(&m) = chars.peek() {
                if !is_combining_mark(m) {
                    break;
                }
                if let Some(&b) = MARK_FROM_GREEK.get(&m) {
                    marks.push(b);
                }
                chars.next();
            }

            if c != lower {
                out.push('*');
                out.push_str(&marks);
                out.push(letter);
            } else {
                out.push(letter);
                out.push_str(&marks);
            }
        }
        out
    }

    fn to_native(&self, working: &str) -> String {
        let chars: Vec<char> = working.chars().collect();
        let mut out = String::with_capacity(working.len() * 2);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if c == '*' {
                // Capital: diacritics come before the letter.
                let mut j = i + 1;
                while j < chars.len() && MARK_TO_GREEK.contains_key(&chars[j]) {
                    j += 1;
                }
                match chars.get(j).and_then(|l| TO_GREEK.get(&l.to_ascii_lowercase())) {
                    Some(&g) => {
                        out.extend(g.to_uppercase());
                        out.extend(chars[i + 1..j].iter().filter_map(|m| MARK_TO_GREEK.get(m)));
                        i = j + 1;
                    }
                    None => {
                        out.push(c);
                        i += 1;
                    }
                }
                continue;
            }

            let lower = c.to_ascii_lowercase();
            if let Some(&g) = TO_GREEK.get(&lower) {
                if g == 'σ' && is_word_final(&chars, i + 1) {
                    out.push('ς');
                } else {
                    out.push(g);
                }
            } else if let Some(&m) = MARK_TO_GREEK.get(&c) {
                out.push(m);
            } else if c == '\'' {
                out.push(ELISION);
            } else {
                out.push(c);
            }
            i += 1;
        }
        out.nfc().collect()
    }
}

/// True if no letter follows position `from` once trailing diacritics are
/// skipped.
fn is_word_final(chars: &[char], from: usize) -> bool {
    chars[from.min(chars.len())..]
        .iter()
        .find(|c| !MARK_TO_GREEK.contains_key(*c))
        .map_or(true, |c| {
            !(*c == '*' || TO_GREEK.contains_key(&c.to_ascii_lowercase()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_native_basic() {
        assert_eq!(BetaCode.to_native("lo/gos"), "λόγος");
        assert_eq!(BetaCode.to_native("a)/nqrwpos"), "ἄνθρωπος");
        assert_eq!(BetaCode.to_native("tw=|"), "τῷ");
    }

    #[test]
    fn test_to_native_capital() {
        assert_eq!(BetaCode.to_native("*)aqh=nai"), "Ἀθῆναι");
        assert_eq!(BetaCode.to_native("*zeu/s"), "Ζεύς");
    }

    #[test]
    fn test_final_sigma() {
        assert_eq!(BetaCode.to_native("sofo/s"), "σοφός");
        // A homograph digit does not stop the sigma being final.
        assert_eq!(BetaCode.to_native("lo/gos2"), "λόγος2");
        assert_eq!(BetaCode.to_native("ei)s a)gora/n"), "εἰς ἀγοράν");
    }

    #[test]
    fn test_elision() {
        assert_eq!(BetaCode.to_native("a)ll'"), "ἀλλ᾽");
        assert_eq!(BetaCode.to_working("ἀλλ᾽"), "a)ll'");
        assert_eq!(BetaCode.to_working("ἀλλ’"), "a)ll'");
    }

    #[test]
    fn test_to_working() {
        assert_eq!(BetaCode.to_working("λόγος"), "lo/gos");
        assert_eq!(BetaCode.to_working("Ἀθῆναι"), "*)aqh=nai");
        assert_eq!(BetaCode.to_working("τῷ"), "tw=|");
        assert_eq!(BetaCode.to_working("ἄνθρωπος"), "a)/nqrwpos");
    }

    #[test]
    fn test_round_trip() {
        for word in ["ἀλλότριος", "Ἡρακλῆς", "ξυμμαχία", "ψυχή", "προϊέναι", "ἐκεῖνος"] {
            assert_eq!(BetaCode.to_native(&BetaCode.to_working(word)), word);
        }
    }

    #[test]
    fn test_non_greek_passes_through() {
        assert_eq!(BetaCode.to_working("123 ."), "123 .");
        assert_eq!(BetaCode.to_native("123 ."), "123 .");
    }
}
