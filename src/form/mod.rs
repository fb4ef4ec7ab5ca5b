// Form integration — how input screens consume the safety checker.

pub mod gate;
pub mod messages;

pub use gate::{gate, FieldStatus, FormField, FormGuard, GateDecision, StoryForm};
pub use messages::SafetyMessage;
