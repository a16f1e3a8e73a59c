// Polytonic Greek text helpers: sort keys, diacritic stripping and accent
// position.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const ACUTE: char = '\u{0301}';
const GRAVE: char = '\u{0300}';
const CIRCUMFLEX: char = '\u{0342}';
const DIAERESIS: char = '\u{0308}';
const SMOOTH_BREATHING: char = '\u{0313}';
const ROUGH_BREATHING: char = '\u{0314}';

const VOWELS: &[char] = &['α', 'ε', 'η', 'ι', 'ο', 'υ', 'ω'];

// Second element must not carry a diaeresis for these to form one syllable.
const DIPHTHONGS: &[&str] = &["αι", "ει", "οι", "υι", "αυ", "ευ", "ου", "ηυ"];

/// Alphabetical sort key: canonical decomposition, lowercased, with every
/// combining mark removed. Breathings, accents, iota subscript and diaeresis
/// do not affect ordering.
pub fn sort_key(text: &str) -> String {
    text.nfd()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Lowercase base letters only, final sigma folded to σ.
pub fn bare(text: &str) -> String {
    sort_key(text)
        .chars()
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

/// True if the word's bare letters end with `suffix` (given in bare form,
/// e.g. `"ος"`, `"ηρ"`). Accents and final sigma are ignored.
pub fn ends_with_bare(word: &str, suffix: &str) -> bool {
    bare(word).ends_with(&bare(suffix))
}

/// Bare letter `n` positions from the end (0 = last letter).
pub fn bare_letter_from_end(word: &str, n: usize) -> Option<char> {
    bare(word).chars().rev().nth(n)
}

/// True if the first letter is an uppercase Greek letter.
pub fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// Remove smooth and rough breathing from the first letter, keeping other
/// marks. Used when a root lemma is glued behind a prefix.
pub fn strip_initial_breathing(word: &str) -> String {
    let mut decomposed = word.nfd().peekable();
    let mut out = String::with_capacity(word.len());
    if let Some(first) = decomposed.next() {
        out.push(first);
        while let Some(&c) = decomposed.peek() {
            if !is_combining_mark(c) {
                break;
            }
            if c != SMOOTH_BREATHING && c != ROUGH_BREATHING {
                out.push(c);
            }
            decomposed.next();
        }
    }
    out.extend(decomposed);
    out.nfc().collect()
}

/// Split a word after its first `n` letters, each letter keeping its marks.
/// Both halves are returned in NFC; `None` if the word is shorter than `n`.
pub fn split_after_letters(word: &str, n: usize) -> Option<(String, String)> {
    let mut chars = word.nfd().peekable();
    let mut head = String::new();
    for _ in 0..n {
        head.push(chars.next()?);
        while let Some(&m) = chars.peek() {
            if !is_combining_mark(m) {
                break;
            }
            head.push(m);
            chars.next();
        }
    }
    let tail: String = chars.collect();
    Some((head.nfc().collect(), tail.nfc().collect()))
}

/// A vowel nucleus found while scanning a word left to right.
struct Nucleus {
    accented: bool,
}

/// Decompose into (bare lowercase letter, marks) clusters.
fn clusters(word: &str) -> Vec<(char, Vec<char>)> {
    let mut out: Vec<(char, Vec<char>)> = Vec::new();
    for c in word.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = out.last_mut() {
                last.1.push(c);
            }
        } else {
            out.push((c.to_lowercase().next().unwrap_or(c), Vec::new()));
        }
    }
    out
}

fn has_accent(marks: &[char]) -> bool {
    marks.iter().any(|m| matches!(*m, ACUTE | GRAVE | CIRCUMFLEX))
}

fn nuclei(word: &str) -> Vec<Nucleus> {
    let letters = clusters(word);
    let mut out = Vec::new();
    let mut i = 0;
    while i < letters.len() {
        let (letter, marks) = &letters[i];
        if !VOWELS.contains(letter) {
            i += 1;
            continue;
        }
        if let Some((next, next_marks)) = letters.get(i + 1) {
            let pair: String = [*letter, *next].iter().collect();
            if DIPHTHONGS.contains(&pair.as_str()) && !next_marks.contains(&DIAERESIS) {
                out.push(Nucleus {
                    accented: has_accent(marks) || has_accent(next_marks),
                });
                i += 2;
                continue;
            }
        }
        out.push(Nucleus {
            accented: has_accent(marks),
        });
        i += 1;
    }
    out
}

/// True if the final syllable (last vowel, or last diphthong) carries an
/// acute, grave or circumflex accent.
pub fn is_final_syllable_accented(word: &str) -> bool {
    nuclei(word).last().is_some_and(|n| n.accented)
}
