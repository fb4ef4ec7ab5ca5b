// Screener trait — the seam between form integration and the matcher.
//
// Form code only needs "is this text unsafe, and if so what caught it".
// PatternScreener is the registry-backed implementation; tests can swap in
// their own to exercise gate logic in isolation.

use super::checker::{check_safety_detailed, SafetyMatch};

/// Anything that can screen a piece of free text for unsafe content.
pub trait TextScreener: Send + Sync {
    /// Screen a single text. `None` means the text is clear.
    fn screen(&self, text: &str) -> Option<SafetyMatch>;

    fn is_unsafe(&self, text: &str) -> bool {
        self.screen(text).is_some()
    }
}

/// The registry-backed screener used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternScreener;

impl TextScreener for PatternScreener {
    fn screen(&self, text: &str) -> Option<SafetyMatch> {
        check_safety_detailed(text)
    }
}
