//! Word dictionary used to decide whether a word is correctly spelled.
//!
//! A dictionary is the union of a large base word list, curated additions
//! for the language (modern technical/social terms and adopted loanwords)
//! and any custom words the caller knows to be valid. It is immutable once
//! built; per-run custom words are layered on top without copying the base.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use crate::error::{Result, SpellError};
use crate::settings::Language;

/// Single letters that are words on their own.
const SINGLE_LETTER_WORDS: [char; 3] = ['a', 'i', 'o'];

const MODERN_TECHNICAL_TERMINOLOGY: &[&str] = &[
    "blog", "blogger", "website", "webpage", "homepage", "inbox", "inboxes", "hashtag", "email",
    "outsource", "timeline", "airfare", "paycheck", "timeout", "ipad", "iphone", "ebay", "instagram",
    "facebook", "twitter", "whiteboard", "podcast", "livestream", "smartphone", "upload", "download",
    "listserv", "screensaver", "telecommute",
];

const MODERN_SOCIAL_TERMINOLOGY: &[&str] = &[
    "who'd", "mom", "bandana", "transgender", "cisgender", "transvaginal", "anxious", "handwash",
    "restroom", "sanitizer", "misappropriate", "dystopian", "scrunchy", "rehab", "veggie", "prep",
    "indoctrinate", "attune", "upcycling", "sedate", "badass", "pushback", "inundate", "overshare",
    "cilantro", "reframing", "midcentury", "flatline",
];

const ADOPTED_WORDS: &[&str] = &[
    "reiki", "mâché", "guac", "queso", "quesadilla", "mitzvah", "naïve", "fiancée", "à",
];

/// Curated additions applied on top of a language's base word list.
pub fn domain_additions(language: Language) -> Vec<&'static str> {
    match language {
        Language::En => MODERN_TECHNICAL_TERMINOLOGY
            .iter()
            .chain(MODERN_SOCIAL_TERMINOLOGY)
            .chain(ADOPTED_WORDS)
            .copied()
            .collect(),
        _ => Vec::new(),
    }
}

/// Immutable, case-insensitive set of valid words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Arc<HashSet<String>>,
    custom: HashSet<String>,
}

impl Dictionary {
    /// Union a base word list, curated additions and caller-supplied words.
    /// Every entry is stored lowercase.
    pub fn build<B, A, C>(base: B, additions: A, custom: C) -> Self
    where
        B: IntoIterator,
        B::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let words: HashSet<String> = base
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .chain(additions.into_iter().map(|w| w.as_ref().trim().to_lowercase()))
            .chain(custom.into_iter().map(|w| w.as_ref().trim().to_lowercase()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words: Arc::new(words), custom: HashSet::new() }
    }

    /// Base list plus the curated additions for `language`.
    pub fn with_additions<B>(language: Language, base: B) -> Self
    where
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        Self::build(base, domain_additions(language), std::iter::empty::<&str>())
    }

    /// Base list plus the curated English additions.
    pub fn english<B>(base: B) -> Self
    where
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        Self::with_additions(Language::En, base)
    }

    /// Load `<dir>/<lang>_words.txt` and apply the language's additions.
    pub fn load(dict_dir: &Path, language: Language) -> Result<Self> {
        if !dict_dir.exists() {
            return Err(SpellError::DictionaryNotFound(dict_dir.to_path_buf()));
        }
        let words = load_wordlist(&wordlist_path(dict_dir, language))?;
        let dict = Self::with_additions(language, words);
        info!("Loaded {} dictionary: {}", language, dict.stats());
        Ok(dict)
    }

    /// Layer per-run custom words on top of this dictionary. The base set is
    /// shared, not copied.
    pub fn with_custom<C>(&self, custom: C) -> Self
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let mut layered = self.custom.clone();
        layered.extend(
            custom
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        Self { words: Arc::clone(&self.words), custom: layered }
    }

    /// Check membership, ignoring case. Single letters are only valid when
    /// they are "a", "i" or "o".
    pub fn contains(&self, word: &str) -> bool {
        let mut chars = word.chars();
        match (chars.next(), chars.next()) {
            (None, _) => false,
            (Some(c), None) => c.to_lowercase().any(|l| SINGLE_LETTER_WORDS.contains(&l)),
            _ => {
                let lower = word.to_lowercase();
                self.words.contains(&lower) || self.custom.contains(&lower)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.words.len() + self.custom.iter().filter(|w| !self.words.contains(*w)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> String {
        format!("base={}, custom={}", self.words.len(), self.custom.len())
    }
}

pub(crate) fn wordlist_path(dict_dir: &Path, language: Language) -> std::path::PathBuf {
    dict_dir.join(format!("{}_words.txt", language.code()))
}

/// Read a newline-delimited word list, skipping blank lines and `#` comments.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        warn!("Word list not found: {}", path.display());
        return Err(SpellError::DictionaryNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect();
    info!("Loaded word list {}: {} words", path.display(), words.len());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> Dictionary {
        Dictionary::english(["Hello", "world", "catalog", "x"])
    }

    #[test]
    fn test_membership_ignores_case() {
        let dict = sample();
        assert!(dict.contains("hello"));
        assert!(dict.contains("HELLO"));
        assert!(dict.contains("World"));
        assert!(!dict.contains("asdfgh"));
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_single_letters() {
        let dict = sample();
        assert!(dict.contains("a"));
        assert!(dict.contains("I"));
        assert!(dict.contains("o"));
        // In the list, but single letters other than a/i/o are never words.
        assert!(!dict.contains("x"));
    }

    #[test]
    fn test_english_additions_present() {
        let dict = sample();
        for word in ["blog", "hashtag", "quesadilla", "naïve", "indoctrinate", "attune", "fiancée"] {
            assert!(dict.contains(word), "missing {word}");
        }
    }

    #[test]
    fn test_other_languages_have_no_additions() {
        assert!(domain_additions(Language::Fr).is_empty());
        let dict = Dictionary::with_additions(Language::Fr, ["bonjour"]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_with_custom_shares_base() {
        let dict = sample();
        let layered = dict.with_custom(["Sitecomber", " "]);
        assert!(layered.contains("sitecomber"));
        assert!(layered.contains("hello"));
        assert!(!dict.contains("sitecomber"));
        assert_eq!(layered.len(), dict.len() + 1);
    }

    #[test]
    fn test_load_wordlist_skips_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = wordlist_path(dir.path(), Language::En);
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "# comment\napple\n\n  banana  \n").unwrap();

        let words = load_wordlist(&path).unwrap();
        assert_eq!(words, vec!["apple", "banana"]);

        let dict = Dictionary::load(dir.path(), Language::En).unwrap();
        assert!(dict.contains("banana"));
        assert!(dict.contains("podcast"));

        let additions = domain_additions(Language::En).len();
        assert_eq!(dict.stats(), format!("base={}, custom=0", additions + 2));
        assert_eq!(dict.with_custom(["sitecomber"]).stats(), format!("base={}, custom=1", additions + 2));
    }

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Dictionary::load(&dir.path().join("nope"), Language::En),
            Err(SpellError::DictionaryNotFound(_))
        ));
        assert!(matches!(
            Dictionary::load(dir.path(), Language::En),
            Err(SpellError::DictionaryNotFound(_))
        ));
    }
}
