// Output formatting — terminal display and JSON reports for the CLI.

pub mod terminal;

use serde::Serialize;

use crate::form::SafetyMessage;
use crate::moderation::SafetyMatch;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Counts characters, not bytes, so accented letters and emoji never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Machine-readable result of `storyguard check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub safe: bool,
    /// Fixed user-facing message, only when unsafe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    /// Matched term and strategy, only with --reveal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<SafetyMatch>,
}

impl CheckReport {
    pub fn new(found: Option<SafetyMatch>, message: SafetyMessage, reveal: bool) -> Self {
        Self {
            safe: found.is_none(),
            message: found.map(|_| message.inline),
            diagnostics: found.filter(|_| reveal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moderation::registry::Language;
    use crate::moderation::MatchStrategy;

    fn hit() -> SafetyMatch {
        SafetyMatch {
            term: "merda",
            strategy: MatchStrategy::Obfuscated,
        }
    }

    #[test]
    fn report_hides_term_unless_revealed() {
        let msg = SafetyMessage::for_language(Language::English);
        let json = serde_json::to_string(&CheckReport::new(Some(hit()), msg, false)).unwrap();
        assert!(!json.contains("merda"));
        assert!(json.contains("kind and magical"));

        let json = serde_json::to_string(&CheckReport::new(Some(hit()), msg, true)).unwrap();
        assert!(json.contains("\"term\":\"merda\""));
        assert!(json.contains("\"strategy\":\"obfuscated\""));
    }

    #[test]
    fn clean_report_has_no_message() {
        let msg = SafetyMessage::for_language(Language::French);
        let report = CheckReport::new(None, msg, true);
        assert!(report.safe);
        assert!(report.message.is_none());
        assert!(report.diagnostics.is_none());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("Chloé", 10), "Chloé");
        assert_eq!(truncate_chars("ééééé", 3), "ééé...");
    }
}
