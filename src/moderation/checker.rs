// Safety checker — the synchronous gate run on every keystroke.
//
// For each registry term, three checks in order, first hit wins:
//   1. whole word in the lowercased text
//   2. whole word in the accent-folded text (folded term)
//   3. substring of the ultra-cleaned text, only for folded terms longer
//      than 3 chars (short terms would match by accident once word
//      boundaries are gone: "ass" in "passed")
//
// Word boundaries are ASCII word boundaries (regex-lite `\b`), so an
// accented letter counts as a boundary. That is why check 2 exists.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use super::normalize::{fold_accents, NormalizedText};
use super::registry::unified_terms;

/// Folded terms at or below this length never use the substring check.
pub const SHORT_TERM_MAX_LEN: usize = 3;

/// Which of the three checks caught the term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Whole word in the lowercased input
    WholeWord,
    /// Whole word after accent folding
    AccentFolded,
    /// Substring of the input with all separators removed
    Obfuscated,
}

impl MatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::WholeWord => "whole-word",
            MatchStrategy::AccentFolded => "accent-folded",
            MatchStrategy::Obfuscated => "obfuscated",
        }
    }
}

/// A registry term found in the input. Internal diagnostics only;
/// user-facing code shows a fixed message instead of `term`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetyMatch {
    pub term: &'static str,
    pub strategy: MatchStrategy,
}

/// A registry term with everything the checks need, prepared once.
struct CompiledTerm {
    term: &'static str,
    folded: String,
    word: Option<Regex>,
    folded_word: Option<Regex>,
    /// Eligible for the ultra-cleaned substring check
    obfuscation_eligible: bool,
}

fn word_pattern(term: &str) -> Option<Regex> {
    match Regex::new(&format!(r"\b{}\b", regex_lite::escape(term))) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!(term, error = %e, "Could not compile word pattern; whole-word check skipped");
            None
        }
    }
}

static COMPILED_TERMS: LazyLock<Vec<CompiledTerm>> = LazyLock::new(|| {
    let compiled: Vec<CompiledTerm> = unified_terms()
        .iter()
        .map(|&term| {
            let folded = fold_accents(term);
            CompiledTerm {
                term,
                word: word_pattern(term),
                folded_word: word_pattern(&folded),
                obfuscation_eligible: folded.chars().count() > SHORT_TERM_MAX_LEN,
                folded,
            }
        })
        .collect();
    debug!(terms = compiled.len(), "Compiled term patterns");
    compiled
});

impl CompiledTerm {
    // A whole-word match implies a plain substring match, so the cheap
    // `contains` runs first and most terms never reach the regex.
    fn strategy_for(&self, text: &NormalizedText) -> Option<MatchStrategy> {
        if text.lower.contains(self.term)
            && self.word.as_ref().is_some_and(|re| re.is_match(&text.lower))
        {
            return Some(MatchStrategy::WholeWord);
        }
        if text.folded.contains(self.folded.as_str())
            && self
                .folded_word
                .as_ref()
                .is_some_and(|re| re.is_match(&text.folded))
        {
            return Some(MatchStrategy::AccentFolded);
        }
        if self.obfuscation_eligible && text.cleaned.contains(self.folded.as_str()) {
            return Some(MatchStrategy::Obfuscated);
        }
        None
    }
}

/// Check text against the registry, reporting which term matched and how.
pub fn check_safety_detailed(text: &str) -> Option<SafetyMatch> {
    if text.is_empty() {
        return None;
    }

    let normalized = NormalizedText::new(text);
    let hit = COMPILED_TERMS.iter().find_map(|compiled| {
        compiled.strategy_for(&normalized).map(|strategy| SafetyMatch {
            term: compiled.term,
            strategy,
        })
    });

    if let Some(m) = &hit {
        debug!(strategy = m.strategy.as_str(), "Unsafe term matched");
    }
    hit
}

/// Return the first registry term found in `text`, or `None` if it is clear.
///
/// Pure and deterministic. Callers treat `Some` as "unsafe" and must not
/// show the returned term to the end user.
pub fn check_safety(text: &str) -> Option<&'static str> {
    check_safety_detailed(text).map(|m| m.term)
}

/// Same as [`check_safety`], with a missing value treated as empty.
pub fn check_optional(text: Option<&str>) -> Option<&'static str> {
    text.and_then(check_safety)
}
