//! Python bindings, built with the `python` feature.
//!
//! The module keeps one process-wide [`SpellChecker`], set once by
//! `init_checker` and shared by every later call.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use log::warn;
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::SpellError;
use crate::pipeline::SpellChecker;
use crate::placeholder;
use crate::settings::{Language, Settings};

static CHECKER: OnceLock<SpellChecker> = OnceLock::new();

impl From<SpellError> for PyErr {
    fn from(err: SpellError) -> PyErr {
        match err {
            SpellError::UnsupportedLanguage(_) | SpellError::InvalidSettings(_) => {
                PyValueError::new_err(err.to_string())
            }
            SpellError::DictionaryNotFound(_) | SpellError::Io(_) => PyIOError::new_err(err.to_string()),
            SpellError::SpellerBuild { .. } => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

fn checker() -> PyResult<&'static SpellChecker> {
    CHECKER
        .get()
        .ok_or_else(|| PyRuntimeError::new_err("Spell checker not initialized, call init_checker first"))
}

/// Load the dictionary and speller for `lang` from `dict_dir`.
/// Returns false if a checker was already initialized.
#[pyfunction]
#[pyo3(signature = (dict_dir, lang = "en"))]
fn init_checker(dict_dir: &str, lang: &str) -> PyResult<bool> {
    if CHECKER.get().is_some() {
        warn!("Spell checker already initialized");
        return Ok(false);
    }
    let language = Language::from_code(lang)?;
    let checker = SpellChecker::load(Path::new(dict_dir), language)?;
    Ok(CHECKER.set(checker).is_ok())
}

#[pyfunction]
fn normalize_text(text: &str) -> PyResult<String> {
    Ok(checker()?.normalize(text))
}

#[pyfunction]
fn simplify_word(word: &str) -> PyResult<String> {
    Ok(checker()?.simplify(word))
}

#[pyfunction]
#[pyo3(signature = (text, known_words = Vec::new()))]
fn get_misspelled_words(text: &str, known_words: Vec<String>) -> PyResult<BTreeSet<String>> {
    Ok(checker()?.get_misspelled_words(text, &known_words))
}

/// Check an article. `settings_json` is the caller's settings blob.
/// Returns: (found, message, misspelled_words)
#[pyfunction]
#[pyo3(signature = (title, body, settings_json = "{}"))]
fn check_spelling(title: &str, body: &str, settings_json: &str) -> PyResult<(bool, String, Vec<String>)> {
    let settings = Settings::from_json(settings_json)?;
    let outcome = checker()?.check_article(title, body, &settings)?;
    Ok((outcome.found, outcome.message, outcome.misspelled_words))
}

#[pyfunction]
#[pyo3(signature = (text, placeholder_words = None))]
fn find_placeholder_words(text: &str, placeholder_words: Option<Vec<String>>) -> PyResult<Vec<String>> {
    let terms = placeholder_words.unwrap_or_else(|| Settings::default().placeholder_words);
    Ok(placeholder::find_placeholder_words(text, &terms))
}

#[pymodule]
fn rust_article_spell(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_checker, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_text, m)?)?;
    m.add_function(wrap_pyfunction!(simplify_word, m)?)?;
    m.add_function(wrap_pyfunction!(get_misspelled_words, m)?)?;
    m.add_function(wrap_pyfunction!(check_spelling, m)?)?;
    m.add_function(wrap_pyfunction!(find_placeholder_words, m)?)?;
    Ok(())
}
