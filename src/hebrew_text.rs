//! Normalized Hebrew text.
//!
//! Verse strings arrive with cantillation marks (taamim, including meteg and
//! paseq), the sof pasuq verse
//! terminator and editorial brackets. All of those are dropped once, when a
//! [`NormalizedWord`] is built. Vowel points and the dagesh are kept: they take
//! part in equality, and only suffix matching ignores the dagesh.

use serde::Serialize;
use std::fmt;

/// Dot inside a letter (dagesh / mappiq / shuruk dot).
pub const DAGESH: char = '\u{05BC}';
/// Hebrew hyphen joining words into one prosodic unit.
pub const MAQAF: char = '\u{05BE}';
/// Verse terminator `׃`.
pub const SOF_PASUQ: char = '\u{05C3}';
/// Meteg, which doubles as the siluq accent on the last word of a verse.
pub const METEG: char = '\u{05BD}';
/// Paseq `׀`, a free-standing accent between words.
pub const PASEQ: char = '\u{05C0}';

const BRACKETS: &[char] = &['[', ']', '(', ')'];

fn is_cantillation(c: char) -> bool {
    ('\u{0591}'..='\u{05AF}').contains(&c) || c == METEG || c == PASEQ
}

fn is_stripped(c: char) -> bool {
    is_cantillation(c) || c == SOF_PASUQ || BRACKETS.contains(&c)
}

/// Vowel points and the consonant-modifying dots (dagesh, shin/sin dots, rafe).
fn is_niqqud(c: char) -> bool {
    matches!(
        c,
        '\u{05B0}'..='\u{05BC}' | '\u{05BF}' | '\u{05C1}' | '\u{05C2}' | '\u{05C4}' | '\u{05C5}' | '\u{05C7}'
    )
}

fn is_word_separator(c: char) -> bool {
    c == MAQAF || c == ' '
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedWord {
    value: String,
}

impl NormalizedWord {
    /// Builds the canonical form of `raw`. Normalizing an already normalized
    /// value returns an equal value.
    pub fn normalize(raw: &str) -> Self {
        Self {
            value: raw.chars().filter(|c| !is_stripped(*c)).collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Splits on maqaf and space, left to right. Adjacent separators yield
    /// empty tokens, as a plain split does.
    pub fn tokenize(&self) -> impl Iterator<Item = &str> {
        self.value.split(is_word_separator)
    }

    /// Suffix test that ignores every dagesh on both sides.
    pub fn ends_with(&self, suffix: &NormalizedWord) -> bool {
        let mut word = self.value.chars().rev().filter(|c| *c != DAGESH);
        suffix
            .value
            .chars()
            .rev()
            .filter(|c| *c != DAGESH)
            .all(|expected| word.next() == Some(expected))
    }

    /// Re-joins the tokens with single spaces, wrapping every token equal to
    /// `word` in `**`.
    pub fn with_highlighted(&self, word: &str) -> String {
        self.tokenize()
            .map(|token| {
                if token == word {
                    format!("**{token}**")
                } else {
                    token.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Consonantal skeleton, used for ordering only.
    pub fn sort_key(&self) -> String {
        self.value.chars().filter(|c| !is_niqqud(*c)).collect()
    }
}

impl From<&str> for NormalizedWord {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}

impl fmt::Display for NormalizedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
