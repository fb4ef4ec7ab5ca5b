// Content-safety moderation — registry, normalization, and matching.
//
// Everything here is synchronous and pure. The registry and the compiled
// term patterns are built once on first use and shared read-only.

pub mod checker;
pub mod normalize;
pub mod registry;
pub mod traits;

pub use checker::{check_optional, check_safety, check_safety_detailed, MatchStrategy, SafetyMatch};
pub use traits::{PatternScreener, TextScreener};
