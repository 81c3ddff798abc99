use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::Path;

use crate::corpus::Corpus;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::rhymer::Rhymer;

/// Corpus plus the lexicon built from it. Immutable once constructed.
pub struct RhymeIndex {
    corpus: Corpus,
    lexicon: Lexicon,
    loaded_at: DateTime<Local>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub books: usize,
    pub verses: usize,
    pub words: usize,
    pub occurrences: usize,
    pub loaded_at: DateTime<Local>,
}

impl RhymeIndex {
    pub fn new(corpus: Corpus) -> Self {
        let lexicon = Lexicon::build(&corpus);
        Self {
            corpus,
            lexicon,
            loaded_at: Local::now(),
        }
    }

    pub fn load(folder_path: impl AsRef<Path>) -> Result<Self> {
        let corpus = Corpus::load(folder_path)?;
        Ok(Self::new(corpus))
    }

    pub fn rhymer(&self) -> Rhymer<'_> {
        Rhymer::new(&self.lexicon, &self.corpus)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn get_stats(&self) -> IndexStats {
        IndexStats {
            books: self.corpus.book_count(),
            verses: self.corpus.verse_count(),
            words: self.lexicon.len(),
            occurrences: self.lexicon.occurrence_count(),
            loaded_at: self.loaded_at,
        }
    }
}
