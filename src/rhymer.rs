//! Suffix ("rhyme") queries over a frozen lexicon.
//!
//! A [`Rhymer`] is a borrowed view over a [`Lexicon`] and the [`Corpus`] it
//! was built from. Every query starts from scratch, so a single value can be
//! shared between threads and queried concurrently.

use serde::Serialize;

use crate::corpus::Corpus;
use crate::hebrew_text::NormalizedWord;
use crate::lexicon::Lexicon;
use crate::location::Location;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerseEntry {
    pub location: Location,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RhymeEntry {
    pub word: String,
    pub verses: Vec<VerseEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RhymePage {
    pub total_count: usize,
    pub offset: usize,
    pub results: Vec<RhymeEntry>,
}

pub type RenderedVerse<'a> = (&'a Location, NormalizedWord);

#[derive(Debug, Clone, Copy)]
pub struct Rhymer<'a> {
    lexicon: &'a Lexicon,
    corpus: &'a Corpus,
}

impl<'a> Rhymer<'a> {
    pub fn new(lexicon: &'a Lexicon, corpus: &'a Corpus) -> Self {
        Self { lexicon, corpus }
    }

    fn matching_entries(&self, ending: &str) -> impl Iterator<Item = (&'a NormalizedWord, &'a [Location])> + use<'a> {
        let ending = NormalizedWord::normalize(ending);
        self.lexicon
            .entries()
            .filter(move |(word, _)| word.ends_with(&ending))
    }

    /// Every lexicon word ending with `ending`, in first-seen order.
    pub fn matches(&self, ending: &str) -> impl Iterator<Item = &'a NormalizedWord> + use<'a> {
        self.matching_entries(ending).map(|(word, _)| word)
    }

    /// Matches sorted by consonantal skeleton. Equal skeletons keep lexicon
    /// order, which follows corpus load order.
    pub fn ordered_matches(&self, ending: &str) -> Vec<&'a NormalizedWord> {
        self.ordered_entries(ending)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }

    pub fn matches_with_locations(&self, ending: &str) -> Vec<(&'a NormalizedWord, &'a [Location])> {
        self.ordered_entries(ending)
    }

    pub fn matches_with_verses(
        &self,
        ending: &str,
    ) -> Vec<(&'a NormalizedWord, Vec<RenderedVerse<'a>>)> {
        self.ordered_entries(ending)
            .into_iter()
            .map(|(word, locations)| (word, self.render_verses(word, locations)))
            .collect()
    }

    pub fn report(&self, ending: &str) -> Vec<RhymeEntry> {
        self.ordered_entries(ending)
            .into_iter()
            .map(|(word, locations)| self.report_entry(word, locations))
            .collect()
    }

    /// One page of [`Rhymer::report`]. Verses are rendered for the returned
    /// slice only.
    pub fn report_page(&self, ending: &str, offset: usize, limit: usize) -> RhymePage {
        let entries = self.ordered_entries(ending);
        let results = entries
            .iter()
            .skip(offset)
            .take(limit)
            .map(|&(word, locations)| self.report_entry(word, locations))
            .collect();

        RhymePage {
            total_count: entries.len(),
            offset,
            results,
        }
    }

    fn ordered_entries(&self, ending: &str) -> Vec<(&'a NormalizedWord, &'a [Location])> {
        let mut entries: Vec<_> = self.matching_entries(ending).collect();
        // stable
        entries.sort_by_cached_key(|(word, _)| word.sort_key());
        entries
    }

    fn report_entry(&self, word: &NormalizedWord, locations: &'a [Location]) -> RhymeEntry {
        RhymeEntry {
            word: word.to_string(),
            verses: self
                .render_verses(word, locations)
                .into_iter()
                .map(|(location, text)| VerseEntry {
                    location: location.clone(),
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    fn render_verses(&self, word: &NormalizedWord, locations: &'a [Location]) -> Vec<RenderedVerse<'a>> {
        locations
            .iter()
            .map(|location| {
                let verse = self
                    .corpus
                    .get(&location.book)
                    .and_then(|book| book.get_highlighted(location, word.as_str()))
                    .unwrap_or_else(|e| {
                        panic!("lexicon entry `{word}` at {location} does not resolve in its corpus: {e}")
                    });
                (location, verse)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hebrew_text::DAGESH;
    use crate::verse_text::VerseText;

    const BERESHIT: &str = "בְּרֵאשִׁית";
    const BARA: &str = "בָּרָא";

    fn genesis() -> (Corpus, Lexicon) {
        let corpus = Corpus::from_books(vec![VerseText::from_chapters(
            "Genesis",
            vec![vec![format!("{BERESHIT} {BARA}")]],
        )])
        .unwrap();
        let lexicon = Lexicon::build(&corpus);
        (corpus, lexicon)
    }

    fn psalms() -> (Corpus, Lexicon) {
        let corpus = Corpus::from_books(vec![
            VerseText::from_chapters(
                "Genesis",
                vec![vec![format!("{BERESHIT} {BARA} אֱלֹהִים"), "וַיִּקְרָא אֱלֹהִים לָאוֹר".to_string()]],
            ),
            VerseText::from_chapters(
                "Psalms",
                vec![vec!["קָרָא בָרָא נִקְרָא".to_string(), "שִׁיר שִׁיר".to_string()]],
            ),
        ])
        .unwrap();
        let lexicon = Lexicon::build(&corpus);
        (corpus, lexicon)
    }

    #[test]
    fn test_verse_final_siluq_and_paseq() {
        let corpus = Corpus::from_books(vec![VerseText::from_chapters(
            "Genesis",
            vec![vec![
                "וְאֵ\u{05A5}ת הָאָ\u{05BD}רֶץ\u{05C3}",
                "וְהָאָ\u{0597}רֶץ הָיְתָ\u{05A5}ה",
                "מִן \u{05C0} הָאָרֶץ",
            ]],
        )])
        .unwrap();
        let lexicon = Lexicon::build(&corpus);
        let rhymer = Rhymer::new(&lexicon, &corpus);

        let words: Vec<&str> = rhymer
            .ordered_matches("אָרֶץ")
            .into_iter()
            .map(NormalizedWord::as_str)
            .collect();
        assert_eq!(words, vec!["הָאָרֶץ", "וְהָאָרֶץ"]);
        assert_eq!(
            lexicon.locations_of("הָאָרֶץ").unwrap(),
            &[Location::new("Genesis", 0, 0), Location::new("Genesis", 0, 2)]
        );

        assert_eq!(rhymer.matches("").count(), 5);
        assert!(!lexicon.contains("\u{05C0}"));
    }

    #[test]
    fn test_matches_single_word() {
        let (corpus, lexicon) = genesis();
        let rhymer = Rhymer::new(&lexicon, &corpus);

        let words: Vec<&str> = rhymer.matches("רָא").map(NormalizedWord::as_str).collect();
        assert_eq!(words, vec![BARA]);
    }

    #[test]
    fn test_matches_with_verses_highlights_word() {
        let (corpus, lexicon) = genesis();
        let rhymer = Rhymer::new(&lexicon, &corpus);

        let results = rhymer.matches_with_verses("רָא");
        assert_eq!(results.len(), 1);

        let (word, verses) = &results[0];
        assert_eq!(word.as_str(), BARA);
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].0, &Location::new("Genesis", 0, 0));
        assert_eq!(verses[0].1.as_str(), format!("{BERESHIT} **{BARA}**"));
    }

    #[test]
    fn test_no_match_is_empty() {
        let (corpus, lexicon) = genesis();
        let rhymer = Rhymer::new(&lexicon, &corpus);

        assert_eq!(rhymer.matches("תּוֹ").count(), 0);
        assert!(rhymer.report("תּוֹ").is_empty());
    }

    #[test]
    fn test_empty_ending_returns_every_word_once() {
        let (corpus, lexicon) = psalms();
        let rhymer = Rhymer::new(&lexicon, &corpus);

        let matches = rhymer.ordered_matches("");
        assert_eq!(matches.len(), lexicon.len());

        let mut seen: Vec<&str> = matches.iter().map(|word| word.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), lexicon.len());
    }

    #[test]
    fn test_ordered_matches_sorted_by_skeleton() {
        let (corpus, lexicon) = psalms();
        let rhymer = Rhymer::new(&lexicon, &corpus);

        let matches = rhymer.ordered_matches("רָא");
        let keys: Vec<String> = matches.iter().map(|word| word.sort_key()).collect();
        assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(keys, vec!["ברא", "ברא", "ויקרא", "נקרא", "קרא"]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let (corpus, lexicon) = psalms();
        let rhymer = Rhymer::new(&lexicon, &corpus);

        let matches = rhymer.ordered_matches("רָא");
        // the Genesis spelling with dagesh is indexed before the Psalms one
        assert_eq!(matches[0].as_str(), BARA);
        assert_eq!(matches[1].as_str(), "בָרָא");
    }

    #[test]
    fn test_ending_ignores_dagesh() {
        let (corpus, lexicon) = psalms();
        let rhymer = Rhymer::new(&lexicon, &corpus);

        let with_dagesh = rhymer.ordered_matches(&format!("ב{DAGESH}ָרָא"));
        let without_dagesh = rhymer.ordered_matches("בָרָא");
        assert_eq!(with_dagesh, without_dagesh);
        assert_eq!(with_dagesh.len(), 2);
    }

    #[test]
    fn test_matches_with_locations_dedups_verse() {
        let (corpus, lexicon) = psalms();
        let rhymer = Rhymer::new(&lexicon, &corpus);

        let results = rhymer.matches_with_locations("שִׁיר");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1, &[Location::new("Psalms", 0, 1)]);
    }

    #[test]
    fn test_highlights_every_repeat() {
        let (corpus, lexicon) = psalms();
        let rhymer = Rhymer::new(&lexicon, &corpus);

        let report = rhymer.report("שִׁיר");
        assert_eq!(report[0].verses[0].text, "**שִׁיר** **שִׁיר**");
    }

    #[test]
    fn test_report_json_shape() {
        let (corpus, lexicon) = genesis();
        let rhymer = Rhymer::new(&lexicon, &corpus);

        let value = serde_json::to_value(rhymer.report("רָא")).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "word": BARA,
                "verses": [{
                    "location": {"book": "Genesis", "chapter": 0, "verse": 0},
                    "text": format!("{BERESHIT} **{BARA}**"),
                }],
            }])
        );
    }

    #[test]
    fn test_report_page() {
        let (corpus, lexicon) = psalms();
        let rhymer = Rhymer::new(&lexicon, &corpus);

        let full = rhymer.report("רָא");
        let page = rhymer.report_page("רָא", 1, 2);
        assert_eq!(page.total_count, full.len());
        assert_eq!(page.offset, 1);
        assert_eq!(page.results, full[1..3].to_vec());

        let past_end = rhymer.report_page("רָא", 10, 30);
        assert_eq!(past_end.total_count, 5);
        assert!(past_end.results.is_empty());
    }

    #[test]
    fn test_queries_do_not_change_lexicon() {
        let (corpus, lexicon) = psalms();
        let before: Vec<NormalizedWord> = lexicon.all_words().cloned().collect();

        let rhymer = Rhymer::new(&lexicon, &corpus);
        let first = rhymer.report("א");
        let second = rhymer.report("א");

        assert_eq!(first, second);
        assert_eq!(lexicon.all_words().cloned().collect::<Vec<_>>(), before);
    }

    #[test]
    #[should_panic(expected = "does not resolve")]
    fn test_foreign_lexicon_is_fatal() {
        let (_, lexicon) = genesis();
        let other = Corpus::from_books(vec![VerseText::from_chapters("Exodus", vec![vec!["בָּרָא"]])])
            .unwrap();

        Rhymer::new(&lexicon, &other).report("רָא");
    }
}
