//! Length section - checks password length against the policy bounds.

use secrecy::{ExposeSecret, SecretString};
use super::{Deficiency, SectionResult};
use crate::policy::Policy;

/// Returns how many characters must be added or removed to bring
/// `password` within `min_length..=max_length`.
///
/// Length is counted in characters, not bytes. Bounds with
/// `min_length > max_length` are not rejected: the short check runs first.
pub fn length_deficiency(password: &str, min_length: usize, max_length: usize) -> usize {
    let len = password.chars().count();
    if len < min_length {
        min_length - len
    } else if len > max_length {
        len - max_length
    } else {
        0
    }
}

/// Checks if the password length is within the policy bounds.
///
/// # Returns
/// - `Some(deficiency)` if password is too short or too long
/// - `None` if password length is within bounds
pub fn length_section(password: &SecretString, policy: &Policy) -> SectionResult {
    let len = password.expose_secret().chars().count();
    if len < policy.min_length() {
        return Some(Deficiency {
            count: policy.min_length() - len,
            reason: format!("Password must be at least {} characters", policy.min_length()),
        });
    }
    if len > policy.max_length() {
        return Some(Deficiency {
            count: len - policy.max_length(),
            reason: format!("Password must be at most {} characters", policy.max_length()),
        });
    }
    None
}
