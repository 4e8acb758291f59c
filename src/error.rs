//! Error types for spelling analysis.
//!
//! Only configuration and loading can fail. Text that is empty or full of
//! noise is never an error: it simply yields zero candidate words.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dictionary loading and analysis configuration.
#[derive(Error, Debug)]
pub enum SpellError {
    /// The requested language code has no speller support.
    #[error("Language \"{0}\" not supported")]
    UnsupportedLanguage(String),

    /// The dictionary directory or a required word list is missing.
    #[error("Dictionary not found: {0}")]
    DictionaryNotFound(PathBuf),

    /// Wraps I/O failures while reading word lists and Hunspell files.
    #[error("Failed to read dictionary data: {0}")]
    Io(#[from] std::io::Error),

    /// The Hunspell affix/dictionary pair could not be compiled.
    #[error("Failed to build {language} speller: {reason}")]
    SpellerBuild { language: String, reason: String },

    /// The caller's settings blob is not valid JSON for [`crate::Settings`].
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),
}

/// Result type alias for [`SpellError`].
pub type Result<T> = std::result::Result<T, SpellError>;
