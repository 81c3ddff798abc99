use rayon::prelude::*;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, RhymeError};
use crate::hebrew_text::NormalizedWord;
use crate::location::Location;
use crate::verse_text::VerseText;

/// All loaded books, kept in load order and addressable by title.
#[derive(Debug, Clone)]
pub struct Corpus {
    books: Vec<VerseText>,
    by_title: HashMap<String, usize>,
}

impl Corpus {
    pub fn from_books(books: Vec<VerseText>) -> Result<Self> {
        let mut by_title = HashMap::with_capacity(books.len());

        for (idx, book) in books.iter().enumerate() {
            if by_title.insert(book.title().to_string(), idx).is_some() {
                return Err(RhymeError::DuplicateBook(book.title().to_string()));
            }
        }

        Ok(Self { books, by_title })
    }

    /// Loads every `*.json` file directly inside `folder_path`, in file name
    /// order. The first failure aborts the whole load.
    pub fn load(folder_path: impl AsRef<Path>) -> Result<Self> {
        let folder = folder_path.as_ref();

        if !folder.is_dir() {
            return Err(RhymeError::Io {
                path: folder.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "corpus folder does not exist"),
            });
        }

        log::info!("scanning corpus folder {}", folder.display());

        let mut paths = Vec::new();
        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| RhymeError::Io {
                path: folder.to_path_buf(),
                source: io::Error::from(e),
            })?;

            if Self::is_source_file(&entry) {
                paths.push(entry.into_path());
            }
        }

        let books = paths
            .par_iter()
            .map(|path| VerseText::load(path))
            .collect::<Result<Vec<_>>>()?;

        let corpus = Self::from_books(books)?;
        log::info!(
            "loaded {} books ({} verses) from {}",
            corpus.book_count(),
            corpus.verse_count(),
            folder.display()
        );
        Ok(corpus)
    }

    fn is_source_file(entry: &DirEntry) -> bool {
        if !entry.file_type().is_file() {
            return false;
        }

        // editor swap files, .DS_Store and the like
        if let Some(file_name) = entry.file_name().to_str() {
            if file_name.starts_with('.') {
                return false;
            }
        }

        entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    pub fn get(&self, title: &str) -> Result<&VerseText> {
        self.by_title
            .get(title)
            .map(|&idx| &self.books[idx])
            .ok_or_else(|| RhymeError::UnknownBook(title.to_string()))
    }

    pub fn book_titles(&self) -> impl Iterator<Item = &str> {
        self.books.iter().map(VerseText::title)
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn verse_count(&self) -> usize {
        self.books.iter().map(VerseText::verse_count).sum()
    }

    pub fn iter_verses(&self) -> impl Iterator<Item = (Location, &NormalizedWord)> {
        self.books.iter().flat_map(|book| book.iter())
    }

    pub fn iter_words(&self) -> impl Iterator<Item = (Location, &str)> {
        self.iter_verses().flat_map(|(location, verse)| {
            verse.tokenize().map(move |token| (location.clone(), token))
        })
    }
}
