//! Splitting normalized text into words worth checking.
//!
//! Capitalized tokens that cannot be simplified to a dictionary word are
//! taken to be proper nouns for the current document and excluded
//! everywhere they appear, capitalized or not.

use std::collections::{BTreeSet, HashSet};

use crate::dictionary::Dictionary;
use crate::morphology::find_root;

/// Candidate words and the proper nouns removed from them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckWords {
    /// Unique tokens, original case kept
    pub candidates: BTreeSet<String>,
    /// Lowercase forms of inferred proper nouns
    pub proper_nouns: BTreeSet<String>,
}

/// Non-empty tokens of space-separated text.
pub fn split_tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|token| !token.is_empty())
}

/// Trim ASCII punctuation from both ends.
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_ascii_punctuation())
}

/// Whether a capitalized token has no dictionary root.
pub fn is_proper_noun(token: &str, dictionary: &Dictionary, max_depth: usize) -> bool {
    let capitalized = token.chars().next().is_some_and(char::is_uppercase);
    capitalized && find_root(&token.to_lowercase(), dictionary, max_depth).is_none()
}

/// Words to check: stop words, numeric tokens, proper nouns and the
/// caller's known words removed. `custom_known_words` must be lowercase.
pub fn extract_check_words(
    normalized: &str,
    stop_words: &HashSet<&str>,
    dictionary: &Dictionary,
    custom_known_words: &HashSet<String>,
    max_depth: usize,
) -> CheckWords {
    let words: Vec<&str> = split_tokens(normalized)
        .map(strip_punctuation)
        .filter(|word| !word.is_empty())
        .filter(|word| !stop_words.contains(word.to_lowercase().as_str()))
        .filter(|word| !word.chars().next().is_some_and(char::is_numeric))
        .collect();

    let proper_nouns: BTreeSet<String> = words
        .iter()
        .filter(|word| is_proper_noun(word, dictionary, max_depth))
        .map(|word| word.to_lowercase())
        .collect();

    let candidates = words
        .into_iter()
        .filter(|word| {
            let lower = word.to_lowercase();
            !proper_nouns.contains(&lower) && !custom_known_words.contains(&lower)
        })
        .map(str::to_string)
        .collect();

    CheckWords { candidates, proper_nouns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{DEFAULT_MAX_DEPTH, Language};
    use crate::stopwords::stop_words;

    fn dictionary() -> Dictionary {
        Dictionary::english(["doctor", "think", "mindful", "catalog", "fun", "rock"])
    }

    fn extract(text: &str, known: &[&str]) -> CheckWords {
        let known: HashSet<String> = known.iter().map(|w| w.to_string()).collect();
        extract_check_words(text, stop_words(Language::En), &dictionary(), &known, DEFAULT_MAX_DEPTH)
    }

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("\"great\"!"), "great");
        assert_eq!(strip_punctuation("(doctor),"), "doctor");
        assert_eq!(strip_punctuation("..."), "");
        assert_eq!(strip_punctuation("naïve."), "naïve");
    }

    #[test]
    fn test_proper_nouns_excluded() {
        let words = extract(
            "Dr. Marelle Jazdin, a doctor. Marelle Jazdin is a doctor. Jazdin thinks you should be mindful.",
            &[],
        );
        assert_eq!(words.proper_nouns, set(&["dr", "jazdin", "marelle"]));
        assert_eq!(words.candidates, set(&["doctor", "mindful", "thinks"]));
    }

    #[test]
    fn test_proper_noun_excluded_in_lowercase_too() {
        let words = extract("Jazdin said jazdin twice", &[]);
        assert!(words.proper_nouns.contains("jazdin"));
        assert_eq!(words.candidates, set(&["said", "twice"]));
    }

    #[test]
    fn test_capitalized_common_word_is_not_proper_noun() {
        let words = extract("Cataloging is fun.", &[]);
        assert!(words.proper_nouns.is_empty());
        assert_eq!(words.candidates, set(&["Cataloging", "fun"]));
    }

    #[test]
    fn test_stop_words_numbers_and_empties_dropped() {
        let words = extract("The, and (555) 42nd 3rd ... rocks", &[]);
        assert_eq!(words.candidates, set(&["rocks"]));
    }

    #[test]
    fn test_custom_known_words_dropped() {
        let words = extract("sitecomber rocks", &["sitecomber"]);
        assert_eq!(words.candidates, set(&["rocks"]));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract("", &[]), CheckWords::default());
        assert_eq!(extract(" ", &[]), CheckWords::default());
    }
}
