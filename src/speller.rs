//! Candidate speller: a second opinion on words the dictionary misses.
//!
//! The speller has its own corpus, either a Hunspell affix/dictionary pair
//! compiled with zspell or a plain word list. A word only goes on to
//! morphological simplification when both the dictionary and the speller
//! fail to recognize it. One-edit neighbours known to the corpus are
//! reported as suggestions.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::dictionary::{load_wordlist, wordlist_path};
use crate::error::{Result, SpellError};
use crate::settings::Language;

/// Edit distance budget for suggestions.
pub const MAX_EDIT_DISTANCE: usize = 1;

enum Corpus {
    WordList(HashSet<String>),
    Hunspell(Box<zspell::Dictionary>),
}

pub struct Speller {
    language: Language,
    corpus: Corpus,
}

impl fmt::Debug for Speller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let corpus = match &self.corpus {
            Corpus::WordList(words) => format!("WordList({} words)", words.len()),
            Corpus::Hunspell(_) => "Hunspell".to_string(),
        };
        f.debug_struct("Speller")
            .field("language", &self.language)
            .field("corpus", &corpus)
            .finish()
    }
}

impl Speller {
    /// Speller backed by a plain word list.
    pub fn from_words<I>(language: Language, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { language, corpus: Corpus::WordList(words) }
    }

    /// Speller backed by Hunspell `.aff` and `.dic` contents.
    pub fn from_hunspell(language: Language, aff_content: &str, dic_content: &str) -> Result<Self> {
        let dict = zspell::builder()
            .config_str(aff_content)
            .dict_str(dic_content)
            .build()
            .map_err(|e| SpellError::SpellerBuild { language: language.to_string(), reason: e.to_string() })?;
        Ok(Self { language, corpus: Corpus::Hunspell(Box::new(dict)) })
    }

    /// Load `<dir>/<locale>.aff` + `.dic`, falling back to the language's
    /// word list when no Hunspell pair is present.
    pub fn load(dict_dir: &Path, language: Language) -> Result<Self> {
        if !dict_dir.exists() {
            return Err(SpellError::DictionaryNotFound(dict_dir.to_path_buf()));
        }
        let aff_path = dict_dir.join(format!("{}.aff", language.locale()));
        let dic_path = dict_dir.join(format!("{}.dic", language.locale()));

        if aff_path.exists() && dic_path.exists() {
            let aff_content = fs::read_to_string(&aff_path)?;
            let dic_content = fs::read_to_string(&dic_path)?;
            let speller = Self::from_hunspell(language, &aff_content, &dic_content)?;
            info!("Loaded Hunspell speller: {}", language.locale());
            return Ok(speller);
        }

        warn!("Hunspell files not found for {}, using word list", language.locale());
        let words = load_wordlist(&wordlist_path(dict_dir, language))?;
        Ok(Self::from_words(language, words))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Whether the corpus knows `word`, ignoring case.
    pub fn is_known(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        match &self.corpus {
            Corpus::WordList(words) => words.contains(&lower),
            Corpus::Hunspell(dict) => dict.check_word(word) || (lower != word && dict.check_word(&lower)),
        }
    }

    pub fn looks_unknown(&self, word: &str) -> bool {
        !self.is_known(word)
    }

    /// Lowercased words the corpus does not know.
    pub fn unknown<I>(&self, words: I) -> BTreeSet<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| self.looks_unknown(w))
            .collect()
    }

    /// Known words within [`MAX_EDIT_DISTANCE`] edits of `word`.
    pub fn candidates(&self, word: &str) -> BTreeSet<String> {
        let lower = word.to_lowercase();
        let mut frontier = HashSet::from([lower.clone()]);
        let mut reachable = HashSet::new();
        for _ in 0..MAX_EDIT_DISTANCE {
            frontier = frontier
                .iter()
                .flat_map(|w| edits1(w, self.language.alphabet()))
                .filter(|w| !reachable.contains(w))
                .collect();
            reachable.extend(frontier.iter().cloned());
        }
        reachable
            .into_iter()
            .filter(|candidate| candidate != &lower && self.is_known(candidate))
            .collect()
    }
}

/// Every string one delete, transpose, replace or insert away from `word`.
fn edits1(word: &str, alphabet: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let letters: Vec<char> = alphabet.chars().collect();
    let mut edits = HashSet::new();

    for i in 0..=chars.len() {
        let (left, right) = chars.split_at(i);
        let left: String = left.iter().collect();

        if let Some((_, rest)) = right.split_first() {
            let rest: String = rest.iter().collect();
            edits.insert(format!("{left}{rest}"));
            for &c in &letters {
                edits.insert(format!("{left}{c}{rest}"));
            }
        }
        if right.len() > 1 {
            let tail: String = right[2..].iter().collect();
            edits.insert(format!("{left}{}{}{tail}", right[1], right[0]));
        }
        let right: String = right.iter().collect();
        for &c in &letters {
            edits.insert(format!("{left}{c}{right}"));
        }
    }
    edits
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn speller() -> Speller {
        Speller::from_words(Language::En, ["hello", "world", "spelling", "Example"])
    }

    #[test]
    fn test_known_words_ignore_case() {
        let speller = speller();
        assert!(speller.is_known("Hello"));
        assert!(speller.is_known("example"));
        assert!(speller.looks_unknown("speling"));
        assert!(speller.looks_unknown("asdflkjd"));
    }

    #[test]
    fn test_unknown_batch() {
        let unknown = speller().unknown(["Hello", "ASDF", "world", "speling"]);
        assert_eq!(unknown.into_iter().collect::<Vec<_>>(), vec!["asdf", "speling"]);
    }

    #[test]
    fn test_candidates_within_one_edit() {
        let speller = speller();
        assert!(speller.candidates("speling").contains("spelling"));
        assert_eq!(speller.candidates("helo").into_iter().collect::<Vec<_>>(), vec!["hello"]);
        assert_eq!(speller.candidates("wrold").into_iter().collect::<Vec<_>>(), vec!["world"]);
        assert!(speller.candidates("asdflkjd").is_empty());
        // a known word is not its own suggestion
        assert!(!speller.candidates("hello").contains("hello"));
    }

    #[test]
    fn test_candidates_respect_edit_budget() {
        let speller = speller();
        assert_eq!(MAX_EDIT_DISTANCE, 1);
        assert!(speller.candidates("hllo").contains("hello"));
        // two edits away
        assert!(speller.candidates("hlo").is_empty());
        assert!(speller.candidates("wrlod").is_empty());
    }

    #[test]
    fn test_edits1_shapes() {
        let edits = edits1("ab", "ab");
        assert!(edits.contains("a"));
        assert!(edits.contains("ba"));
        assert!(edits.contains("bb"));
        assert!(edits.contains("aab"));
        assert!(edits.contains("abb"));
        assert!(!edits.contains(""));
    }

    #[test]
    fn test_load_falls_back_to_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(wordlist_path(dir.path(), Language::En)).unwrap();
        writeln!(file, "apple\nbanana").unwrap();

        let speller = Speller::load(dir.path(), Language::En).unwrap();
        assert_eq!(speller.language(), Language::En);
        assert!(speller.is_known("Banana"));
        assert!(speller.looks_unknown("cherry"));
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Speller::load(&dir.path().join("missing"), Language::En),
            Err(SpellError::DictionaryNotFound(_))
        ));
        assert!(matches!(Speller::load(dir.path(), Language::Fr), Err(SpellError::DictionaryNotFound(_))));
    }
}
