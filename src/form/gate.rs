// Form integration — the live inline check and the submission gate.
//
// The inline check runs on every change and remembers which fields are
// flagged so the UI can highlight them. The gate re-screens every field from
// scratch at submission time and never trusts the inline flags: pasted text,
// restored drafts and programmatic submissions all skip keystroke handlers.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info};

use super::messages::SafetyMessage;
use crate::moderation::registry::Language;
use crate::moderation::traits::{PatternScreener, TextScreener};

/// The free-text fields that feed story generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    ChildName,
    FriendNames,
    Keywords,
}

impl FormField {
    /// Fields in the order the gate screens them.
    pub const ALL: [FormField; 3] = [
        FormField::ChildName,
        FormField::FriendNames,
        FormField::Keywords,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::ChildName => "child name",
            FormField::FriendNames => "friend names",
            FormField::Keywords => "keywords",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Personalization input collected before story generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryForm {
    pub child_name: String,
    /// One entry per friend; each name is screened on its own
    pub friend_names: Vec<String>,
    pub keywords: String,
}

impl StoryForm {
    /// The separately screened texts behind a field.
    pub fn texts(&self, field: FormField) -> Vec<&str> {
        match field {
            FormField::ChildName => vec![self.child_name.as_str()],
            FormField::FriendNames => self.friend_names.iter().map(String::as_str).collect(),
            FormField::Keywords => vec![self.keywords.as_str()],
        }
    }
}

/// Result of an inline check on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldStatus {
    pub field: FormField,
    pub flagged: bool,
    /// Fixed localized message, present only when flagged
    pub message: Option<&'static str>,
}

/// Whether generation may proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GateDecision {
    Allowed,
    Blocked {
        /// First field that failed screening
        field: FormField,
        title: &'static str,
        message: &'static str,
    },
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allowed)
    }
}

/// Screen every field of the form, independent of any inline state.
pub fn gate(form: &StoryForm, screener: &dyn TextScreener, language: Language) -> GateDecision {
    for field in FormField::ALL {
        if form.texts(field).into_iter().any(|text| screener.is_unsafe(text)) {
            let msg = SafetyMessage::for_language(language);
            info!(field = field.as_str(), "Submission blocked by safety gate");
            return GateDecision::Blocked {
                field,
                title: msg.modal_title,
                message: msg.modal_body,
            };
        }
    }
    GateDecision::Allowed
}

/// Per-form screening state: inline flags plus the submission gate.
pub struct FormGuard<S: TextScreener = PatternScreener> {
    screener: S,
    language: Language,
    flagged: HashSet<FormField>,
}

impl FormGuard<PatternScreener> {
    pub fn new(language: Language) -> Self {
        Self::with_screener(PatternScreener, language)
    }
}

impl<S: TextScreener> FormGuard<S> {
    pub fn with_screener(screener: S, language: Language) -> Self {
        Self {
            screener,
            language,
            flagged: HashSet::new(),
        }
    }

    /// Inline check for a single field change. Updates the field's flag.
    pub fn on_change(&mut self, field: FormField, text: &str) -> FieldStatus {
        self.on_change_all(field, &[text])
    }

    /// Inline check for a field holding several entries (friend names).
    /// Entries are screened one at a time, never joined.
    pub fn on_change_all<T: AsRef<str>>(&mut self, field: FormField, texts: &[T]) -> FieldStatus {
        let flagged = texts.iter().any(|text| self.screener.is_unsafe(text.as_ref()));
        if flagged {
            self.flagged.insert(field);
            debug!(field = field.as_str(), "Field flagged by inline check");
        } else {
            self.flagged.remove(&field);
        }

        FieldStatus {
            field,
            flagged,
            message: flagged.then(|| SafetyMessage::for_language(self.language).inline),
        }
    }

    pub fn is_flagged(&self, field: FormField) -> bool {
        self.flagged.contains(&field)
    }

    pub fn any_flagged(&self) -> bool {
        !self.flagged.is_empty()
    }

    /// Gate check before generation. Always re-screens the whole form; a
    /// blocked field is also marked flagged so the UI can highlight it.
    pub fn submit(&mut self, form: &StoryForm) -> GateDecision {
        let decision = gate(form, &self.screener, self.language);
        if let GateDecision::Blocked { field, .. } = decision {
            self.flagged.insert(field);
        }
        decision
    }
}
