use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Result, RhymeError};
use crate::hebrew_text::NormalizedWord;
use crate::location::Location;

// Sefaria exports carry the title on the first available version and the text
// on the first version; hand-made files may use a flat layout instead.
#[derive(Deserialize)]
#[serde(untagged)]
enum SourceDocument {
    Sefaria {
        available_versions: Vec<VersionTitle>,
        versions: Vec<VersionText>,
    },
    Flat {
        title: String,
        text: Vec<Vec<String>>,
    },
}

#[derive(Deserialize)]
struct VersionTitle {
    title: String,
}

#[derive(Deserialize)]
struct VersionText {
    text: Vec<Vec<String>>,
}

impl SourceDocument {
    fn into_parts(self) -> std::result::Result<(String, Vec<Vec<String>>), &'static str> {
        match self {
            SourceDocument::Sefaria {
                available_versions,
                versions,
            } => {
                let title = available_versions
                    .into_iter()
                    .next()
                    .ok_or("`available_versions` is empty")?
                    .title;
                let text = versions.into_iter().next().ok_or("`versions` is empty")?.text;
                Ok((title, text))
            }
            SourceDocument::Flat { title, text } => Ok((title, text)),
        }
    }
}

/// One book: chapters of verses, normalized at load time.
#[derive(Debug, Clone)]
pub struct VerseText {
    title: String,
    chapters: Vec<Vec<NormalizedWord>>,
}

impl VerseText {
    pub fn from_chapters<S: AsRef<str>>(title: impl Into<String>, chapters: Vec<Vec<S>>) -> Self {
        let chapters = chapters
            .iter()
            .map(|verses| {
                verses
                    .iter()
                    .map(|verse| NormalizedWord::normalize(verse.as_ref()))
                    .collect()
            })
            .collect();

        Self {
            title: title.into(),
            chapters,
        }
    }

    /// Reads one JSON book. Nothing is returned unless the whole document parses.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| RhymeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::with_capacity(1024 * 1024, file);

        let document: SourceDocument =
            serde_json::from_reader(reader).map_err(|e| RhymeError::CorpusFormat {
                path: path.to_path_buf(),
                reason: format!("expected a title and chapters of verse strings ({e})"),
            })?;

        let (title, chapters) = document.into_parts().map_err(|reason| RhymeError::CorpusFormat {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        })?;

        if title.trim().is_empty() {
            return Err(RhymeError::CorpusFormat {
                path: path.to_path_buf(),
                reason: "empty title".to_string(),
            });
        }

        let text = Self::from_chapters(title, chapters);
        log::debug!(
            "loaded `{}` from {}: {} chapters, {} verses",
            text.title,
            path.display(),
            text.chapter_count(),
            text.verse_count()
        );
        Ok(text)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn verse_count(&self) -> usize {
        self.chapters.iter().map(Vec::len).sum()
    }

    pub fn get(&self, loc: &Location) -> Result<&NormalizedWord> {
        if loc.book != self.title {
            return Err(RhymeError::LocationMismatch {
                location: loc.clone(),
                book: self.title.clone(),
            });
        }

        self.chapters
            .get(loc.chapter)
            .and_then(|verses| verses.get(loc.verse))
            .ok_or_else(|| RhymeError::OutOfRange(loc.clone()))
    }

    pub fn get_highlighted(&self, loc: &Location, word: &str) -> Result<NormalizedWord> {
        let verse = self.get(loc)?;
        Ok(NormalizedWord::normalize(&verse.with_highlighted(word)))
    }

    /// Every verse in chapter/verse order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &NormalizedWord)> {
        self.chapters.iter().enumerate().flat_map(move |(chapter, verses)| {
            verses
                .iter()
                .enumerate()
                .map(move |(verse, text)| (Location::new(self.title.as_str(), chapter, verse), text))
        })
    }
}
