//! Text normalization ahead of spell checking.
//!
//! Raw article text is run through a fixed, ordered list of [`Stage`]s that
//! strip structural noise (links, addresses, phone numbers, hashtags,
//! acronyms) and canonicalize typography, leaving space-separated words.
//!
//! Order matters. Each stage assumes the ones before it already ran:
//!
//! 1. URLs go before emails, otherwise `user@host.com` leaves `host.com` text.
//! 2. Typography is translated before hyphen splitting so em dashes split too.
//! 3. Contractions are expanded before possessives are removed, so "it's"
//!    becomes "it is" instead of "it".
//! 4. Hyphens are removed again after expansion.
//! 5. Acronyms are removed only once hyphens are spaces, so "A-B-C" never
//!    joins into one token.
//!
//! Phone number and URL detection is best-effort. Alphanumeric phone numbers
//! ("1-800-FLOWERS") and mixed digit/letter forms are not recognized, and a
//! run of seven digits is taken to be a phone number.

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::contractions::expand_contractions;
use crate::settings::Language;

lazy_static! {
    static ref FULL_URL: Regex = Regex::new(
        r"(?:https?|ftp|telnet)://[\w-]+(?:\.[\w-]+)+(?:[\w.,@?^=%&:/~+#-]*[\w@?^=%&/~+#-])?"
    ).unwrap();
    static ref PARTIAL_URL: Regex =
        Regex::new(r"[\w.]+\.(?:com|org|net|us|co|edu|gov|uk)[^,\s]*").unwrap();
    static ref SCHEME_LINK: Regex = Regex::new(r"(?:mailto:|(?:news|(?:ht|f)tps?)://)\S+").unwrap();
    static ref IPV4: Regex = Regex::new(r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b").unwrap();
    static ref TEL_INTERNATIONAL: Regex =
        Regex::new(r"tel:(?:\+[0-9]+\s*)?(?:\([0-9]+\))?[\s0-9-]+[0-9]+").unwrap();
    static ref TEL_US: Regex = Regex::new(
        r"tel:(?:\d{3}[-.\s]??\d{3}[-.\s]??\d{4}|\(\d{3}\)\s*\d{3}[-.\s]??\d{4}|\d{3}[-.\s]??\d{4})"
    ).unwrap();
    static ref FILENAME: Regex =
        Regex::new(r"[\w.-]+\.(?:pdf|PDF|docx|DOCX|doc|DOC|zip|ZIP|xlsx|XLSX|csv|CSV)").unwrap();

    static ref EMAIL: Regex = Regex::new(r"\S*@\S*\s?").unwrap();
    static ref HASHTAG: Regex = Regex::new(r"#\w+").unwrap();

    static ref PHONE_INTERNATIONAL: Regex = Regex::new(&with_phone_separators(
        r"\+\d{1,3}<sep>?(?:\(\d{1,4}\)<sep>?)?\d{1,4}(?:<sep>?\d{2,4}){1,4}"
    )).unwrap();
    static ref PHONE_US: Regex = Regex::new(&with_phone_separators(
        r"(?:\d{1,3}<sep>??)?\d{3}<sep>??\d{3}<sep>??\d{4}|\(\d{3}\)\s*\d{3}<sep>??\d{4}|\d{3}<sep>??\d{4}"
    )).unwrap();

    static ref POSSESSIVE: Regex = Regex::new(r"(?:'s)+ ").unwrap();
    static ref ACRONYM: Regex = Regex::new(r"\b[A-Z.]{2,}s?\b").unwrap();
    static ref HORIZONTAL_SPACE: Regex = Regex::new("[ \t\u{200B}]+").unwrap();
}

/// Hyphen, period, whitespace, and the Unicode dashes and minus sign.
const PHONE_SEPARATOR: &str = r"[-.\s\x{2010}-\x{2015}\x{2212}]";

/// Passes over [`STAGES`] allowed before giving up on a fixed point.
const MAX_PASSES: usize = 4;

fn with_phone_separators(template: &str) -> String {
    template.replace("<sep>", PHONE_SEPARATOR)
}

/// One named, pure rewrite step of the pipeline.
#[derive(Clone, Copy)]
pub struct Stage {
    pub name: &'static str,
    run: fn(&str, Language) -> String,
}

impl Stage {
    pub fn apply(&self, input: &str, language: Language) -> String {
        (self.run)(input, language)
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

/// The pipeline, in the order it must run.
pub const STAGES: [Stage; 12] = [
    Stage { name: "urls", run: |s, _| remove_urls(s) },
    Stage { name: "emails", run: |s, _| remove_emails(s) },
    Stage { name: "hashtags", run: |s, _| remove_hashes(s) },
    Stage { name: "phone_numbers", run: |s, _| remove_phone_numbers(s) },
    Stage { name: "typography", run: |s, _| translate_typography(s) },
    Stage { name: "hyphens_and_slashes", run: |s, _| split_hyphens_and_slashes(s) },
    Stage { name: "newlines", run: |s, _| collapse_newlines(s) },
    Stage { name: "contractions", run: expand_contractions },
    Stage { name: "possessives", run: |s, _| remove_possessives(s) },
    Stage { name: "hyphens", run: |s, _| remove_hyphens(s) },
    Stage { name: "acronyms", run: |s, _| remove_acronyms(s) },
    Stage { name: "whitespace", run: |s, _| collapse_whitespace(s) },
];

/// Normalize English text.
pub fn normalize(text: &str) -> String {
    normalize_for(text, Language::En)
}

/// Normalize text, using `language` for contraction expansion.
///
/// A later stage can expose noise for an earlier one: dropping an acronym
/// between two digit groups leaves a phone number behind. The stages rerun
/// until a pass changes nothing, so the result is a fixed point.
pub fn normalize_for(text: &str, language: Language) -> String {
    let mut current = text.to_string();
    for pass in 1..=MAX_PASSES {
        let next = run_stages(&current, language, pass);
        if next == current {
            return current;
        }
        current = next;
    }
    warn!("Normalization still changing after {} passes", MAX_PASSES);
    current
}

fn run_stages(text: &str, language: Language, pass: usize) -> String {
    let mut current = text.to_string();
    for stage in STAGES.iter() {
        current = stage.apply(&current, language);
        debug!(">> pass {} after {}: {}", pass, stage.name, current);
    }
    current
}

/// Full links, bare domains, scheme links, IPv4 addresses, `tel:` links and
/// document filenames.
pub fn remove_urls(input: &str) -> String {
    let mut result = FULL_URL.replace_all(input, " ").into_owned();
    for pattern in [&*PARTIAL_URL, &*SCHEME_LINK, &*IPV4, &*TEL_INTERNATIONAL, &*TEL_US, &*FILENAME] {
        result = pattern.replace_all(&result, " ").into_owned();
    }
    result
}

/// Anything with an `@` in it, plus one trailing whitespace character.
pub fn remove_emails(input: &str) -> String {
    EMAIL.replace_all(input, " ").into_owned()
}

pub fn remove_hashes(input: &str) -> String {
    HASHTAG.replace_all(input, " ").into_owned()
}

pub fn remove_phone_numbers(input: &str) -> String {
    let international = PHONE_INTERNATIONAL.replace_all(input, " ");
    PHONE_US.replace_all(&international, " ").into_owned()
}

/// Recompose to NFC, then map typographic punctuation to ASCII.
pub fn translate_typography(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.nfc() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{00B4}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2013}' | '\u{2014}' | '\u{2012}' | '\u{2043}' | '\u{2010}' | '\u{2011}' | '\u{00AD}' => {
                out.push('-')
            }
            '\u{2026}' => out.push_str("..."),
            // bullets and the like end up as separators
            '\u{25CF}' | '\u{2022}' | '\u{2219}' | '\u{00B7}' | '\u{00A9}' => out.push('-'),
            _ => out.push(c),
        }
    }
    out
}

pub fn split_hyphens_and_slashes(input: &str) -> String {
    input.replace(['-', '/'], " ")
}

pub fn collapse_newlines(input: &str) -> String {
    input.replace(['\n', '\r'], " ")
}

pub fn remove_possessives(input: &str) -> String {
    POSSESSIVE.replace_all(input, " ").into_owned()
}

pub fn remove_hyphens(input: &str) -> String {
    input.replace('-', " ")
}

/// Runs of two or more capitals/periods, optionally plural: "NASA", "A.B.C.Ds".
pub fn remove_acronyms(input: &str) -> String {
    ACRONYM.replace_all(input, "").into_owned()
}

/// Spaces, tabs and zero-width spaces collapse to one space.
pub fn collapse_whitespace(input: &str) -> String {
    HORIZONTAL_SPACE.replace_all(input, " ").into_owned()
}
