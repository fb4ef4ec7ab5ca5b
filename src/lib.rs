// Storyguard: content-safety screening for children's story personalization
//
// This is the library root. `moderation` is the pattern-based checker,
// `form` is how input screens consume it, and `output` formats results
// for the CLI.

pub mod config;
pub mod form;
pub mod moderation;
pub mod output;

pub use moderation::{check_optional, check_safety, check_safety_detailed};
