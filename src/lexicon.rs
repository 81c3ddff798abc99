use std::collections::HashMap;

use crate::corpus::Corpus;
use crate::error::{Result, RhymeError};
use crate::hebrew_text::NormalizedWord;
use crate::location::Location;

/// Inverted index: normalized word -> distinct verse locations.
///
/// Words keep the order in which the corpus first yields them, and each word's
/// locations keep corpus order.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Vec<NormalizedWord>,
    locations: Vec<Vec<Location>>,
    word_to_idx: HashMap<NormalizedWord, usize>,
}

#[derive(Default)]
struct LexiconBuilder {
    lexicon: Lexicon,
}

impl LexiconBuilder {
    fn insert(&mut self, word: NormalizedWord, location: Location) {
        let lexicon = &mut self.lexicon;

        match lexicon.word_to_idx.get(&word) {
            Some(&idx) => {
                // Tokens of one verse arrive together, so a repeat within the
                // same verse can only be the last entry.
                let entry = &mut lexicon.locations[idx];
                if entry.last() != Some(&location) {
                    entry.push(location);
                }
            }
            None => {
                lexicon.word_to_idx.insert(word.clone(), lexicon.words.len());
                lexicon.words.push(word);
                lexicon.locations.push(vec![location]);
            }
        }
    }

    fn finish(self) -> Lexicon {
        self.lexicon
    }
}

impl Lexicon {
    /// Indexes every non-empty token of the corpus. Empty tokens are skipped,
    /// so `""` is never a word and an empty-ending query returns every word
    /// except the empty one.
    pub fn build(corpus: &Corpus) -> Self {
        let mut builder = LexiconBuilder::default();

        for (location, token) in corpus.iter_words() {
            let word = NormalizedWord::normalize(token);
            if word.is_empty() {
                continue;
            }
            builder.insert(word, location);
        }

        let lexicon = builder.finish();
        log::info!(
            "lexicon built: {} words, {} word/verse entries",
            lexicon.len(),
            lexicon.occurrence_count()
        );
        lexicon
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word_to_idx.contains_key(&NormalizedWord::normalize(word))
    }

    pub fn locations_of(&self, word: &str) -> Result<&[Location]> {
        self.word_to_idx
            .get(&NormalizedWord::normalize(word))
            .map(|&idx| self.locations[idx].as_slice())
            .ok_or_else(|| RhymeError::UnknownWord(word.to_string()))
    }

    pub fn all_words(&self) -> impl Iterator<Item = &NormalizedWord> {
        self.words.iter()
    }

    /// Words paired with their locations, in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&NormalizedWord, &[Location])> {
        self.words
            .iter()
            .zip(self.locations.iter().map(Vec::as_slice))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn occurrence_count(&self) -> usize {
        self.locations.iter().map(Vec::len).sum()
    }
}
