//! The spell-analysis pipeline.
//!
//! raw text -> [`normalize_for`] -> [`extract_check_words`] -> dictionary
//! lookup -> candidate speller -> morphological simplification -> flagged
//! words.
//!
//! A [`SpellChecker`] bundles the read-only state (dictionary, speller,
//! depth bound). Build it once and share it by reference; analyses are
//! independent and never mutate it.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use log::{debug, warn};
use rayon::prelude::*;
use serde::Serialize;

use crate::dictionary::Dictionary;
use crate::error::{Result, SpellError};
use crate::morphology::simplify_with_depth;
use crate::normalize::normalize_for;
use crate::settings::{DEFAULT_MAX_DEPTH, Language, Settings};
use crate::speller::Speller;
use crate::stopwords::stop_words;
use crate::tokenize::extract_check_words;

/// Structured result of analyzing one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Text after the normalization stages
    pub normalized: String,
    /// Words judged misspelled, lowercase
    pub misspelled: BTreeSet<String>,
    /// Lexicographically smallest token that produced each misspelled word
    pub surface_forms: BTreeMap<String, String>,
    /// Lowercase proper nouns excluded from checking
    pub proper_nouns: BTreeSet<String>,
    /// Known words one edit away from each misspelled word
    pub suggestions: BTreeMap<String, BTreeSet<String>>,
}

/// Outcome of the article spelling check handed back to the caller layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub found: bool,
    pub message: String,
    pub misspelled_words: Vec<String>,
}

fn lowercase_set<S: AsRef<str>>(words: &[S]) -> HashSet<String> {
    words
        .iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Run the full pipeline over `raw_text`.
///
/// Never fails: text with no checkable words yields an empty analysis.
pub fn analyze<S: AsRef<str>>(
    raw_text: &str,
    language: Language,
    dictionary: &Dictionary,
    speller: &Speller,
    custom_known_words: &[S],
    max_depth: usize,
) -> Analysis {
    let known = lowercase_set(custom_known_words);
    let dictionary = dictionary.with_custom(&known);

    let normalized = normalize_for(raw_text, language);
    let words = extract_check_words(&normalized, stop_words(language), &dictionary, &known, max_depth);
    debug!(">> proper_nouns: {:?}", words.proper_nouns);
    debug!(">> check_words: {:?}", words.candidates);

    let mut analysis = Analysis { normalized, proper_nouns: words.proper_nouns, ..Default::default() };

    for word in &words.candidates {
        let lower = word.to_lowercase();
        if dictionary.contains(&lower) {
            continue;
        }
        if speller.is_known(&lower) {
            debug!("{word}: known to speller");
            continue;
        }
        let simplified = simplify_with_depth(&lower, &dictionary, max_depth);
        if dictionary.contains(&simplified) {
            debug!("{word}: simplified to {simplified}");
            continue;
        }
        analysis.suggestions.entry(simplified.clone()).or_insert_with(|| speller.candidates(&lower));
        analysis.surface_forms.entry(simplified.clone()).or_insert_with(|| word.clone());
        analysis.misspelled.insert(simplified);
    }

    debug!(">> misspelled: {:?}", analysis.misspelled);
    analysis
}

/// Misspelled words in `raw_text`. Only an unsupported language code, or
/// one the speller was not built for, is an error.
pub fn get_misspelled_words<S: AsRef<str>>(
    raw_text: &str,
    language_code: &str,
    dictionary: &Dictionary,
    speller: &Speller,
    custom_known_words: &[S],
) -> Result<BTreeSet<String>> {
    let language = Language::from_code(language_code)?;
    if language != speller.language() {
        warn!("No {} speller loaded (have {})", language, speller.language());
        return Err(SpellError::UnsupportedLanguage(language_code.to_string()));
    }
    Ok(analyze(raw_text, language, dictionary, speller, custom_known_words, DEFAULT_MAX_DEPTH).misspelled)
}

/// Human-readable summary of a set of flagged words.
pub fn summarize(misspelled: &[String]) -> String {
    if misspelled.is_empty() {
        "No misspellings found".to_string()
    } else {
        format!("Found {} misspelling(s): \"{}\"", misspelled.len(), misspelled.join("\", \""))
    }
}

/// Shared, immutable handle for spell analysis in one language.
#[derive(Debug)]
pub struct SpellChecker {
    dictionary: Dictionary,
    speller: Speller,
    max_depth: usize,
}

impl SpellChecker {
    pub fn new(dictionary: Dictionary, speller: Speller) -> Self {
        Self { dictionary, speller, max_depth: DEFAULT_MAX_DEPTH }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Load the dictionary and speller for `language` from `dict_dir`.
    pub fn load(dict_dir: &Path, language: Language) -> Result<Self> {
        let dictionary = Dictionary::load(dict_dir, language)?;
        let speller = Speller::load(dict_dir, language)?;
        Ok(Self::new(dictionary, speller))
    }

    pub fn language(&self) -> Language {
        self.speller.language()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn speller(&self) -> &Speller {
        &self.speller
    }

    pub fn normalize(&self, text: &str) -> String {
        normalize_for(text, self.language())
    }

    pub fn simplify(&self, word: &str) -> String {
        simplify_with_depth(&word.to_lowercase(), &self.dictionary, self.max_depth)
    }

    pub fn analyze<S: AsRef<str>>(&self, raw_text: &str, custom_known_words: &[S]) -> Analysis {
        analyze(
            raw_text,
            self.language(),
            &self.dictionary,
            &self.speller,
            custom_known_words,
            self.max_depth,
        )
    }

    pub fn get_misspelled_words<S: AsRef<str>>(&self, raw_text: &str, custom_known_words: &[S]) -> BTreeSet<String> {
        self.analyze(raw_text, custom_known_words).misspelled
    }

    /// Analyze independent texts in parallel, one result per text.
    pub fn analyze_batch<T, S>(&self, texts: &[T], custom_known_words: &[S]) -> Vec<Analysis>
    where
        T: AsRef<str> + Sync,
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref(), custom_known_words))
            .collect()
    }

    /// Check an article's title and body with the caller's settings.
    pub fn check_article(&self, title: &str, body: &str, settings: &Settings) -> Result<CheckOutcome> {
        let language = settings.language()?;
        if language != self.language() {
            return Err(SpellError::UnsupportedLanguage(settings.lang.clone()));
        }

        if body.trim().is_empty() {
            return Ok(CheckOutcome { found: false, message: "No article found".to_string(), misspelled_words: Vec::new() });
        }

        let raw_text = format!("{title}. {body}");
        let misspelled: Vec<String> = analyze(
            &raw_text,
            language,
            &self.dictionary,
            &self.speller,
            &settings.known_words,
            settings.max_depth,
        )
        .misspelled
        .into_iter()
        .collect();

        Ok(CheckOutcome { found: !misspelled.is_empty(), message: summarize(&misspelled), misspelled_words: misspelled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 8] = ["guide", "write", "wrote", "visit", "today", "later", "catalog", "recipe"];

    fn checker() -> SpellChecker {
        SpellChecker::new(Dictionary::english(WORDS), Speller::from_words(Language::En, WORDS))
    }

    const NONE: [&str; 0] = [];

    #[test]
    fn test_garbage_is_flagged() {
        let misspelled = checker().get_misspelled_words("asdl238() 29UDUDJS asdflkjd", &NONE);
        assert!(!misspelled.is_empty());
        assert!(misspelled.contains("asdflkjd"));
        assert!(misspelled.contains("asdl238"));
    }

    #[test]
    fn test_empty_text_is_not_an_error() {
        assert!(checker().get_misspelled_words("", &NONE).is_empty());
        assert!(checker().get_misspelled_words(" \n\t ", &NONE).is_empty());
    }

    #[test]
    fn test_surface_forms_and_suggestions() {
        let analysis = checker().analyze("Today we visit the gide.", &NONE);
        assert_eq!(analysis.misspelled.iter().collect::<Vec<_>>(), vec!["gide"]);
        assert_eq!(analysis.surface_forms["gide"], "gide");
        assert!(analysis.suggestions["gide"].contains("guide"));
    }

    #[test]
    fn test_surface_form_is_smallest_token() {
        let analysis = checker().analyze("gide then gIde", &NONE);
        assert_eq!(analysis.misspelled.iter().collect::<Vec<_>>(), vec!["gide"]);
        assert_eq!(analysis.surface_forms["gide"], "gIde");
    }

    #[test]
    fn test_speller_rescues_dictionary_miss() {
        let checker = SpellChecker::new(
            Dictionary::english(["guide"]),
            Speller::from_words(Language::En, ["guide", "colour"]),
        );
        assert!(checker.get_misspelled_words("guide colour", &NONE).is_empty());
        assert_eq!(checker.get_misspelled_words("guide colur", &NONE).into_iter().collect::<Vec<_>>(), vec!["colur"]);
    }

    #[test]
    fn test_custom_known_words_count_as_roots() {
        let checker = checker();
        assert!(checker.get_misspelled_words("sitecomber", &NONE).contains("sitecomber"));
        assert!(checker.get_misspelled_words("sitecomber sitecombers", &["Sitecomber"]).is_empty());
    }

    #[test]
    fn test_get_misspelled_words_language_errors() {
        let dict = Dictionary::english(WORDS);
        let speller = Speller::from_words(Language::En, WORDS);
        assert!(get_misspelled_words("visit", "en", &dict, &speller, &NONE).unwrap().is_empty());
        assert!(matches!(
            get_misspelled_words("visit", "xx", &dict, &speller, &NONE),
            Err(SpellError::UnsupportedLanguage(_))
        ));
        assert!(matches!(
            get_misspelled_words("visit", "fr", &dict, &speller, &NONE),
            Err(SpellError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn test_summarize() {
        assert_eq!(summarize(&[]), "No misspellings found");
        assert_eq!(summarize(&["gide".to_string(), "wrk".to_string()]), "Found 2 misspelling(s): \"gide\", \"wrk\"");
    }

    #[test]
    fn test_check_article() {
        let checker = checker();
        let settings = Settings::default();

        let clean = checker.check_article("Guide", "Today we visit.", &settings).unwrap();
        assert!(!clean.found);
        assert_eq!(clean.message, "No misspellings found");

        let flagged = checker.check_article("A gide", "Today we visit.", &settings).unwrap();
        assert!(flagged.found);
        assert_eq!(flagged.misspelled_words, vec!["gide"]);
        assert_eq!(flagged.message, "Found 1 misspelling(s): \"gide\"");

        let empty = checker.check_article("Guide", "   ", &settings).unwrap();
        assert_eq!(empty.message, "No article found");
    }

    #[test]
    fn test_capitalized_unknown_word_is_a_proper_noun() {
        let analysis = checker().analyze("Gide wrote the guide.", &NONE);
        assert!(analysis.misspelled.is_empty());
        assert!(analysis.proper_nouns.contains("gide"));
    }

    #[test]
    fn test_analyze_batch_matches_sequential() {
        let checker = checker();
        let texts = ["Today we visit.", "a gide", "asdflkjd recipe", ""];
        let batch = checker.analyze_batch(&texts, &NONE);
        assert_eq!(batch.len(), texts.len());
        for (text, analysis) in texts.iter().zip(&batch) {
            assert_eq!(analysis, &checker.analyze(text, &NONE));
        }
    }

    #[test]
    fn test_check_article_rejects_language() {
        let settings = Settings::from_json(r#"{"lang": "de"}"#).unwrap();
        assert!(matches!(
            checker().check_article("Guide", "Today", &settings),
            Err(SpellError::UnsupportedLanguage(lang)) if lang == "de"
        ));
    }
}
