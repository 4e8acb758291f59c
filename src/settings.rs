//! Per-run configuration handed over by the caller layer.

use std::fmt;

use serde::Deserialize;

use crate::error::{Result, SpellError};

/// Languages the candidate speller has corpora for.
///
/// Only English carries stop words and a contraction table. The others are
/// checked with their dictionary and speller alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    De,
    Es,
    Fr,
    It,
    Nl,
    Pt,
}

impl Language {
    /// Parse a language code such as `"en"` or `"EN"`.
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "de" => Ok(Language::De),
            "es" => Ok(Language::Es),
            "fr" => Ok(Language::Fr),
            "it" => Ok(Language::It),
            "nl" => Ok(Language::Nl),
            "pt" => Ok(Language::Pt),
            _ => Err(SpellError::UnsupportedLanguage(code.to_string())),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::It => "it",
            Language::Nl => "nl",
            Language::Pt => "pt",
        }
    }

    /// Hunspell locale name used for `<locale>.aff` / `<locale>.dic`.
    pub fn locale(&self) -> &'static str {
        match self {
            Language::En => "en_US",
            Language::De => "de_DE",
            Language::Es => "es_ES",
            Language::Fr => "fr_FR",
            Language::It => "it_IT",
            Language::Nl => "nl_NL",
            Language::Pt => "pt_PT",
        }
    }

    /// Letters tried when generating one-edit speller candidates.
    pub fn alphabet(&self) -> &'static str {
        match self {
            Language::En => "abcdefghijklmnopqrstuvwxyz",
            Language::De => "abcdefghijklmnopqrstuvwxyzäöüß",
            Language::Es => "abcdefghijklmnopqrstuvwxyzáéíñóúü",
            Language::Fr => "abcdefghijklmnopqrstuvwxyzàâæçéèêëîïôœùûüÿ",
            Language::It => "abcdefghijklmnopqrstuvwxyzàèéìòù",
            Language::Nl => "abcdefghijklmnopqrstuvwxyzéëïóöü",
            Language::Pt => "abcdefghijklmnopqrstuvwxyzáâãàçéêíóôõú",
        }
    }

    /// Whether stop words and contraction expansion are available.
    pub fn is_fully_supported(&self) -> bool {
        matches!(self, Language::En)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_MAX_DEPTH: usize = 3;
pub const DEFAULT_PLACEHOLDER_WORDS: [&str; 4] = ["lorem", "ipsum", "tk", "todo"];

/// Settings for one analysis run.
///
/// Every field is optional in the JSON form:
///
/// ```rust
/// use rust_article_spell::Settings;
///
/// let settings = Settings::from_json(r#"{"known_words": ["Sitecomber"]}"#).unwrap();
/// assert_eq!(settings.lang, "en");
/// assert_eq!(settings.known_words, vec!["Sitecomber".to_string()]);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language code of the article text
    pub lang: String,
    /// Words never flagged, in addition to the dictionary
    pub known_words: Vec<String>,
    /// Terms searched for by the placeholder scan
    pub placeholder_words: Vec<String>,
    /// Recursion bound for the morphological simplifier
    pub max_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANGUAGE.to_string(),
            known_words: Vec::new(),
            placeholder_words: DEFAULT_PLACEHOLDER_WORDS.iter().map(|w| w.to_string()).collect(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the configured language code.
    pub fn language(&self) -> Result<Language> {
        Language::from_code(&self.lang)
    }
}
