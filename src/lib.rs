//! Rhyme index over a corpus of pointed Hebrew texts.
//!
//! A [`Corpus`] of books is loaded once from JSON files, a [`Lexicon`] maps
//! every normalized word to the verses containing it, and a [`Rhymer`] answers
//! "which words end like this" queries with the verses rendered around them.
//!
//! - **`hebrew_text`**: normalization, tokenizing and suffix matching.
//! - **`location`**: `Book C:V` verse addresses.
//! - **`verse_text`** / **`corpus`**: loading books from disk.
//! - **`lexicon`**: the inverted index.
//! - **`rhymer`**: the query engine and its serializable report.
//! - **`rhyme_index`**: corpus and lexicon bundled for serving.
//! - **`web_server`**: JSON HTTP API.

pub mod config;
pub mod corpus;
pub mod error;
pub mod hebrew_text;
pub mod lexicon;
pub mod location;
pub mod logging;
pub mod nikkud;
pub mod rhyme_index;
pub mod rhymer;
pub mod verse_text;
pub mod web_server;

pub use corpus::Corpus;
pub use error::{ConfigError, Result, RhymeError};
pub use hebrew_text::NormalizedWord;
pub use lexicon::Lexicon;
pub use location::Location;
pub use rhyme_index::RhymeIndex;
pub use rhymer::{RhymeEntry, RhymePage, Rhymer, VerseEntry};
pub use verse_text::VerseText;
