//! Character variety section - checks for uppercase, lowercase and digits.

use secrecy::{ExposeSecret, SecretString};
use super::{Deficiency, SectionResult};
use crate::policy::Policy;

fn missing_labels(password: &str) -> Vec<&'static str> {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    vec![
        if !has_upper { Some("uppercase") } else { None },
        if !has_lower { Some("lowercase") } else { None },
        if !has_digit { Some("numbers") } else { None },
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Counts the required ASCII classes (uppercase, lowercase, digit) absent
/// from `password`. Other characters never satisfy a class.
pub fn missing_classes(password: &str) -> usize {
    missing_labels(password).len()
}

/// Checks if the password contains every required character class.
///
/// # Returns
/// - `Some(deficiency)` listing the missing classes
/// - `None` if all classes are present
pub fn character_variety_section(password: &SecretString, _policy: &Policy) -> SectionResult {
    let missing = missing_labels(password.expose_secret());
    if missing.is_empty() {
        return None;
    }
    Some(Deficiency {
        count: missing.len(),
        reason: format!("Missing: {}", missing.join(", ")),
    })
}
