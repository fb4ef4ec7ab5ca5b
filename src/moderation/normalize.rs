// Text normalization for matching.
//
// Three views of the same input: plain lowercase, accent-folded, and an
// "ultra-clean" form that keeps only ASCII letters and digits so spaced or
// punctuated obfuscation ("m.e.r.d.a") collapses back into a word.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical decomposition, combining marks dropped, then lowercased.
/// "MIÉRDA" -> "mierda", "ñ" -> "n".
pub fn fold_accents(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Keep only ASCII alphanumerics from an already-folded string.
pub fn ultra_clean(folded: &str) -> String {
    folded.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// All three normalized forms of one input, computed once per check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    pub lower: String,
    pub folded: String,
    pub cleaned: String,
}

impl NormalizedText {
    pub fn new(text: &str) -> Self {
        let folded = fold_accents(text);
        let cleaned = ultra_clean(&folded);
        Self {
            lower: text.to_lowercase(),
            folded,
            cleaned,
        }
    }
}
