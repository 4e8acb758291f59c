//! Contraction expansion ("don't" -> "do not").
//!
//! Runs on text whose typographic apostrophes are already straight quotes.
//! Irregular forms come from a lookup table; regular endings ("n't", "'ll",
//! "'re", "'ve", "'d", "'m") are expanded by rule afterwards.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::settings::Language;

const ENGLISH_CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "am not"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("can't've", "cannot have"),
    ("could've", "could have"),
    ("couldn't", "could not"),
    ("couldn't've", "could not have"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'd", "he would"),
    ("he'll", "he will"),
    ("he's", "he is"),
    ("how'd", "how did"),
    ("how'll", "how will"),
    ("how's", "how is"),
    ("i'd", "I would"),
    ("i'll", "I will"),
    ("i'm", "I am"),
    ("i've", "I have"),
    ("isn't", "is not"),
    ("it'd", "it would"),
    ("it'll", "it will"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("ma'am", "madam"),
    ("mightn't", "might not"),
    ("might've", "might have"),
    ("mustn't", "must not"),
    ("must've", "must have"),
    ("needn't", "need not"),
    ("o'clock", "of the clock"),
    ("shan't", "shall not"),
    ("she'd", "she would"),
    ("she'll", "she will"),
    ("she's", "she is"),
    ("should've", "should have"),
    ("shouldn't", "should not"),
    ("that'd", "that would"),
    ("that's", "that is"),
    ("there'd", "there would"),
    ("there's", "there is"),
    ("they'd", "they would"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("wasn't", "was not"),
    ("we'd", "we would"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what's", "what is"),
    ("what've", "what have"),
    ("when's", "when is"),
    ("where'd", "where did"),
    ("where's", "where is"),
    ("who'd", "who would"),
    ("who'll", "who will"),
    ("who's", "who is"),
    ("who've", "who have"),
    ("why's", "why is"),
    ("won't", "will not"),
    ("would've", "would have"),
    ("wouldn't", "would not"),
    ("y'all", "you all"),
    ("you'd", "you would"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
];

lazy_static! {
    static ref ENGLISH_TABLE: HashMap<&'static str, &'static str> = ENGLISH_CONTRACTIONS.iter().copied().collect();

    // Longest first so "can't've" wins over "can't".
    static ref ENGLISH_PATTERN: Regex = {
        let mut keys: Vec<&str> = ENGLISH_CONTRACTIONS.iter().map(|(k, _)| *k).collect();
        keys.sort_by_key(|k| std::cmp::Reverse(k.len()));
        let alternation = keys.iter().map(|k| regex::escape(k)).collect::<Vec<_>>().join("|");
        Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
    };

    static ref REGULAR_ENDINGS: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)\b(\w+)n't\b").unwrap(), "${1} not"),
        (Regex::new(r"(?i)\b(\w+)'ll\b").unwrap(), "${1} will"),
        (Regex::new(r"(?i)\b(\w+)'re\b").unwrap(), "${1} are"),
        (Regex::new(r"(?i)\b(\w+)'ve\b").unwrap(), "${1} have"),
        (Regex::new(r"(?i)\b(\w+)'d\b").unwrap(), "${1} would"),
        (Regex::new(r"(?i)\b(\w+)'m\b").unwrap(), "${1} am"),
    ];
}

/// Expand contractions for `language`. Languages without a table pass
/// through unchanged.
pub fn expand_contractions(input: &str, language: Language) -> String {
    match language {
        Language::En => expand_english(input),
        _ => input.to_string(),
    }
}

fn expand_english(input: &str) -> String {
    let irregular = ENGLISH_PATTERN.replace_all(input, |caps: &Captures| {
        let matched = &caps[0];
        match ENGLISH_TABLE.get(matched.to_lowercase().as_str()) {
            Some(expansion) => match_case(matched, expansion),
            None => matched.to_string(),
        }
    });

    let mut result = irregular.into_owned();
    for (pattern, replacement) in REGULAR_ENDINGS.iter() {
        if pattern.is_match(&result) {
            result = pattern.replace_all(&result, *replacement).into_owned();
        }
    }
    result
}

/// Carry the case of the contraction over to its expansion.
fn match_case(original: &str, expansion: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return expansion.to_uppercase();
    }
    match (original.chars().next(), expansion.chars().next()) {
        (Some(first), Some(exp_first)) if first.is_uppercase() => {
            let mut out: String = exp_first.to_uppercase().collect();
            out.push_str(&expansion[exp_first.len_utf8()..]);
            out
        }
        _ => expansion.to_string(),
    }
}
