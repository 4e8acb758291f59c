//! Morphological simplification.
//!
//! An unrecognized word is reduced towards a dictionary root by stripping or
//! replacing prefixes and suffixes ("cataloging" -> "catalog",
//! "moisterizers" -> "moisterizer" -> "moist"). English morphology is
//! irregular, so no single strip is enough: "-ing" sometimes drops an "e",
//! "-pping" undoes a doubled consonant. The rules form a small
//! nondeterministic rewrite system that is searched depth-first.
//!
//! The search runs with an increasing depth limit (1, 2, ... `max_depth`),
//! so a one-step reduction always beats a deeper one. Within a depth the
//! first rule in table order wins. Every replacement is shorter than the
//! pattern it replaces, so candidates strictly shrink.

use log::trace;

use crate::dictionary::Dictionary;
use crate::settings::DEFAULT_MAX_DEPTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Prefix,
    Suffix,
}

/// Strip `pattern` from one end of a word and put `replacement` in its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformationRule {
    pub kind: RuleKind,
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl TransformationRule {
    const fn prefix(pattern: &'static str, replacement: &'static str) -> Self {
        Self { kind: RuleKind::Prefix, pattern, replacement }
    }

    const fn suffix(pattern: &'static str, replacement: &'static str) -> Self {
        Self { kind: RuleKind::Suffix, pattern, replacement }
    }

    pub fn matches(&self, word: &str) -> bool {
        match self.kind {
            RuleKind::Prefix => word.starts_with(self.pattern),
            RuleKind::Suffix => word.ends_with(self.pattern),
        }
    }

    /// The rewritten word, or `None` when the pattern does not match.
    pub fn apply(&self, word: &str) -> Option<String> {
        match self.kind {
            RuleKind::Prefix => word
                .strip_prefix(self.pattern)
                .map(|rest| format!("{}{}", self.replacement, rest)),
            RuleKind::Suffix => word
                .strip_suffix(self.pattern)
                .map(|stem| format!("{}{}", stem, self.replacement)),
        }
    }
}

use TransformationRule as R;

/// Longest pattern first.
pub const PREFIX_RULES: &[TransformationRule] = &[
    R::prefix("under", ""),
    R::prefix("super", ""),
    R::prefix("socio", ""),
    R::prefix("retro", ""),
    R::prefix("penta", ""),
    R::prefix("neuro", ""),
    R::prefix("multi", ""),
    R::prefix("micro", ""),
    R::prefix("macro", ""),
    R::prefix("inter", ""),
    R::prefix("hyper", ""),
    R::prefix("extra", ""),
    R::prefix("tran", ""),
    R::prefix("semi", ""),
    R::prefix("quad", ""),
    R::prefix("post", ""),
    R::prefix("poly", ""),
    R::prefix("over", ""),
    R::prefix("omni", ""),
    R::prefix("mono", ""),
    R::prefix("mini", ""),
    R::prefix("mega", ""),
    R::prefix("auto", ""),
    R::prefix("anti", ""),
    R::prefix("ante", ""),
    R::prefix("uni", ""),
    R::prefix("tri", ""),
    R::prefix("sub", ""),
    R::prefix("pro", ""),
    R::prefix("pre", ""),
    R::prefix("per", ""),
    R::prefix("non", ""),
    R::prefix("neo", ""),
    R::prefix("mis", ""),
    R::prefix("mal", ""),
    R::prefix("dis", ""),
    R::prefix("bis", ""),
    R::prefix("bio", ""),
    R::prefix("un", ""),
    R::prefix("re", ""),
    R::prefix("ir", ""),
    R::prefix("in", ""),
    R::prefix("im", ""),
    R::prefix("ig", ""),
    R::prefix("ex", ""),
    R::prefix("en", ""),
    R::prefix("de", ""),
    R::prefix("co", ""),
    R::prefix("bi", ""),
];

/// Longest pattern first. Where one pattern has several replacements the
/// restoring replacement ("ing" -> "e") is tried before the bare strip.
pub const SUFFIX_RULES: &[TransformationRule] = &[
    R::suffix("ologist", "ology"),
    R::suffix("ologist", ""),
    R::suffix("worthy", ""),
    R::suffix("erizer", ""),
    R::suffix("bility", "ble"),
    R::suffix("bility", ""),
    R::suffix("wards", ""),
    R::suffix("pping", "p"),
    R::suffix("pping", ""),
    R::suffix("iness", "y"),
    R::suffix("iness", ""),
    R::suffix("esque", ""),
    R::suffix("wise", ""),
    R::suffix("wide", ""),
    R::suffix("ward", ""),
    R::suffix("tted", "t"),
    R::suffix("tted", ""),
    R::suffix("tize", "t"),
    R::suffix("tize", "ty"),
    R::suffix("tize", ""),
    R::suffix("tion", "te"),
    R::suffix("tion", ""),
    R::suffix("sion", ""),
    R::suffix("ness", ""),
    R::suffix("ment", ""),
    R::suffix("mate", ""),
    R::suffix("long", ""),
    R::suffix("like", ""),
    R::suffix("less", ""),
    R::suffix("izer", ""),
    R::suffix("ious", ""),
    R::suffix("iest", "y"),
    R::suffix("iest", ""),
    R::suffix("ical", ""),
    R::suffix("ible", ""),
    R::suffix("hood", ""),
    R::suffix("ence", "e"),
    R::suffix("ence", ""),
    R::suffix("ance", ""),
    R::suffix("able", ""),
    R::suffix("red", "re"),
    R::suffix("red", ""),
    R::suffix("ped", ""),
    R::suffix("ous", ""),
    R::suffix("ize", ""),
    R::suffix("ive", ""),
    R::suffix("ity", "y"),
    R::suffix("ity", ""),
    R::suffix("ist", ""),
    R::suffix("ism", ""),
    R::suffix("ish", ""),
    R::suffix("ise", ""),
    R::suffix("ing", "e"),
    R::suffix("ing", ""),
    R::suffix("ily", ""),
    R::suffix("ify", ""),
    R::suffix("ies", "y"),
    R::suffix("ies", ""),
    R::suffix("ier", "y"),
    R::suffix("ier", ""),
    R::suffix("ied", "y"),
    R::suffix("ied", ""),
    R::suffix("ful", ""),
    R::suffix("est", ""),
    R::suffix("dom", ""),
    R::suffix("bio", ""),
    R::suffix("ate", ""),
    R::suffix("acy", ""),
    R::suffix("ty", ""),
    R::suffix("ly", ""),
    R::suffix("ic", ""),
    R::suffix("fy", ""),
    R::suffix("es", "e"),
    R::suffix("es", ""),
    R::suffix("er", "e"),
    R::suffix("er", ""),
    R::suffix("en", "e"),
    R::suffix("en", ""),
    R::suffix("ee", ""),
    R::suffix("ed", "e"),
    R::suffix("ed", ""),
    R::suffix("al", ""),
    R::suffix("y", ""),
    R::suffix("s", ""),
];

/// Every rule that applies to `word`: prefixes first, then suffixes.
pub fn matching_rules(word: &str) -> impl Iterator<Item = &'static TransformationRule> + '_ {
    PREFIX_RULES
        .iter()
        .chain(SUFFIX_RULES.iter())
        .filter(move |rule| rule.matches(word))
}

/// Reduce `word` to a dictionary form, or return it unchanged.
///
/// Callers pass lowercase words; the rule patterns are lowercase.
pub fn simplify(word: &str, dictionary: &Dictionary) -> String {
    simplify_with_depth(word, dictionary, DEFAULT_MAX_DEPTH)
}

pub fn simplify_with_depth(word: &str, dictionary: &Dictionary, max_depth: usize) -> String {
    find_root(word, dictionary, max_depth).unwrap_or_else(|| word.to_string())
}

/// The shallowest dictionary form reachable within `max_depth` rewrites.
/// A word that is already valid is its own root.
pub fn find_root(word: &str, dictionary: &Dictionary, max_depth: usize) -> Option<String> {
    if dictionary.contains(word) {
        return Some(word.to_string());
    }
    (1..=max_depth).find_map(|limit| descend(word, dictionary, limit))
}

fn descend(word: &str, dictionary: &Dictionary, remaining: usize) -> Option<String> {
    for rule in matching_rules(word) {
        let Some(candidate) = rule.apply(word) else { continue };
        if candidate.is_empty() {
            continue;
        }
        trace!("{word}: {:?} {} -> {}", rule.kind, rule.pattern, candidate);
        if dictionary.contains(&candidate) {
            return Some(candidate);
        }
        if remaining > 1
            && let Some(root) = descend(&candidate, dictionary, remaining - 1)
        {
            return Some(root);
        }
    }
    None
}
