use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RhymeError};

// Book name runs up to the last space, so "I Samuel 3:4" keeps its full title.
static LOCATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+) ([0-9]+):([0-9]+)$").unwrap());

/// Verse address. Chapter and verse are 0-based; the text form is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub book: String,
    pub chapter: usize,
    pub verse: usize,
}

impl Location {
    pub fn new(book: impl Into<String>, chapter: usize, verse: usize) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }

    /// Parses `"<book> <chapter>:<verse>"` with 1-based, positive numbers.
    pub fn parse(text: &str) -> Result<Self> {
        let format_error = || RhymeError::Format(text.to_string());

        let captures = LOCATION_REGEX.captures(text).ok_or_else(format_error)?;
        let chapter: usize = captures[2].parse().map_err(|_| format_error())?;
        let verse: usize = captures[3].parse().map_err(|_| format_error())?;

        if chapter == 0 || verse == 0 {
            return Err(format_error());
        }

        Ok(Self::new(&captures[1], chapter - 1, verse - 1))
    }
}

impl FromStr for Location {
    type Err = RhymeError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter + 1, self.verse + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_converts_to_zero_based() {
        let loc = Location::parse("Genesis 1:1").unwrap();
        assert_eq!(loc, Location::new("Genesis", 0, 0));

        let loc: Location = "Psalms 119:176".parse().unwrap();
        assert_eq!(loc, Location::new("Psalms", 118, 175));
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["Genesis 1:1", "Exodus 20:13", "I Samuel 3:4", "Song of Songs 8:14"] {
            let loc = Location::parse(text).unwrap();
            assert_eq!(loc.to_string(), text);
            assert_eq!(Location::parse(&loc.to_string()).unwrap(), loc);
        }
    }

    #[test]
    fn test_multi_word_book() {
        let loc = Location::parse("I Samuel 3:4").unwrap();
        assert_eq!(loc.book, "I Samuel");
        assert_eq!((loc.chapter, loc.verse), (2, 3));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in [
            "",
            "Genesis",
            "Genesis 1",
            "Genesis 1:",
            "Genesis :1",
            "Genesis 0:1",
            "Genesis 1:0",
            "Genesis -1:1",
            "Genesis 1:1 ",
            "Genesis a:b",
            " 1:1",
            "Genesis 99999999999999999999999:1",
        ] {
            let result = Location::parse(text);
            assert!(
                matches!(result, Err(RhymeError::Format(_))),
                "expected format error for {text:?}"
            );
        }
    }

    #[test]
    fn test_serialize_shape() {
        let value = serde_json::to_value(Location::new("Genesis", 0, 2)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"book": "Genesis", "chapter": 0, "verse": 2})
        );
    }
}
