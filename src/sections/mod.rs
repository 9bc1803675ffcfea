//! Password evaluation sections
//!
//! Each section checks one rule and reports how many changes it needs.

mod length;
mod pattern;
mod variety;

pub use length::{length_deficiency, length_section};
pub use pattern::{pattern_analysis_section, repeated_runs};
pub use variety::{character_variety_section, missing_classes};

/// A failed rule: how many changes it needs and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deficiency {
    pub count: usize,
    pub reason: String,
}

/// Result type for section evaluation functions.
/// - `Some(deficiency)` - Section failed
/// - `None` - Section passed
pub type SectionResult = Option<Deficiency>;
