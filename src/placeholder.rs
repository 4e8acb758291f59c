//! Placeholder text scan ("lorem", "ipsum", "TK", "TODO").
//!
//! A whole-word, case-insensitive search that reports each surface
//! occurrence. Substrings inside other words ("klorem", "batkite") do not
//! count.

use log::debug;
use regex::RegexBuilder;
use serde::Serialize;

/// Result of a placeholder scan over one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderOutcome {
    pub found: bool,
    pub message: String,
    pub placeholder_words_searched: Vec<String>,
    pub placeholder_words_found: Vec<String>,
}

/// Occurrences of each term, term by term, in text order within a term.
pub fn find_placeholder_words<S: AsRef<str>>(text: &str, placeholder_words: &[S]) -> Vec<String> {
    let mut found = Vec::new();
    for term in placeholder_words {
        let term = term.as_ref().trim();
        if term.is_empty() {
            continue;
        }
        let pattern = format!(r"\b{}\b", regex::escape(term));
        let Ok(matcher) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
            continue;
        };
        found.extend(matcher.find_iter(text).map(|m| m.as_str().to_string()));
    }
    found
}

/// Scan an article's title and body.
pub fn check_placeholders<S: AsRef<str>>(title: &str, body: &str, placeholder_words: &[S]) -> PlaceholderOutcome {
    let searched: Vec<String> = placeholder_words.iter().map(|w| w.as_ref().to_string()).collect();
    let found = find_placeholder_words(&format!("{title} {body}"), searched.as_slice());
    debug!(">> placeholder words found: {:?}", found);

    let message = if found.is_empty() {
        format!("No placeholder text \"{}\" found.", searched.join("\", \""))
    } else {
        format!("Found placeholder word(s): \"{}\"", found.join("\", \""))
    };

    PlaceholderOutcome {
        found: !found.is_empty(),
        message,
        placeholder_words_searched: searched,
        placeholder_words_found: found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERMS: [&str; 4] = ["lorem", "ipsum", "tk", "todo"];

    #[test]
    fn test_whole_words_only() {
        let text = "This is an example sentence with lorem Notsum Lorem and TODO and now klorem bipsum batkite";
        assert_eq!(find_placeholder_words(text, &TERMS[..]), vec!["lorem", "Lorem", "TODO"]);
    }

    #[test]
    fn test_terms_are_escaped() {
        assert_eq!(find_placeholder_words("cost a.b and axb", &["a.b"][..]), vec!["a.b"]);
        assert!(find_placeholder_words("anything", &["", "  "][..]).is_empty());
    }

    #[test]
    fn test_check_placeholders_messages() {
        let outcome = check_placeholders("Draft TK", "lorem ipsum", &TERMS[..]);
        assert!(outcome.found);
        assert_eq!(outcome.placeholder_words_found, vec!["lorem", "ipsum", "TK"]);
        assert_eq!(outcome.message, "Found placeholder word(s): \"lorem\", \"ipsum\", \"TK\"");

        let clean = check_placeholders("Title", "Real words", &TERMS[..]);
        assert!(!clean.found);
        assert_eq!(clean.message, "No placeholder text \"lorem\", \"ipsum\", \"tk\", \"todo\" found.");
        assert_eq!(clean.placeholder_words_searched.len(), 4);
    }
}
