//! Spelling analysis for article text.
//!
//! Text is normalized (URLs, e-mail addresses, phone numbers and acronyms
//! stripped, contractions expanded), split into words, filtered for stop
//! words and inferred proper nouns, and checked against a dictionary, a
//! candidate speller and a morphological simplifier. What survives all
//! three is reported as misspelled.
//!
//! ```no_run
//! use std::path::Path;
//! use rust_article_spell::{Language, SpellChecker};
//!
//! let checker = SpellChecker::load(Path::new("dictionaries"), Language::En)?;
//! let misspelled = checker.get_misspelled_words("Teh article", &["sitecomber"]);
//! # Ok::<(), rust_article_spell::SpellError>(())
//! ```

pub mod contractions;
pub mod dictionary;
pub mod error;
pub mod morphology;
pub mod normalize;
pub mod pipeline;
pub mod placeholder;
pub mod settings;
pub mod speller;
pub mod stopwords;
pub mod tokenize;

#[cfg(feature = "python")]
mod python;

pub use dictionary::Dictionary;
pub use error::{Result, SpellError};
pub use morphology::{TransformationRule, find_root, simplify, simplify_with_depth};
pub use normalize::{normalize, normalize_for};
pub use pipeline::{Analysis, CheckOutcome, SpellChecker, analyze, get_misspelled_words};
pub use placeholder::{PlaceholderOutcome, check_placeholders, find_placeholder_words};
pub use settings::{Language, Settings};
pub use speller::Speller;
