//! Password policy check library
//!
//! Counts how many changes a password needs before it satisfies three rules:
//! its length is within bounds (6 to 20 characters by default), it contains
//! an ASCII uppercase letter, a lowercase letter and a digit, and it has no
//! run of three identical consecutive characters.
//!
//! # Features
//!
//! - `async` (default): Enables async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate, evaluate_password_strength, Policy};
//! use secrecy::SecretString;
//!
//! // Plain count
//! assert_eq!(evaluate("aaaa1Bccc", 6, 20), 2);
//!
//! // Detailed evaluation with reasons
//! let password = SecretString::new("aaaa1Bccc".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_password_strength(&password, &Policy::default(), None);
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_password_strength(&password, &Policy::default());
//!
//! assert_eq!(evaluation.changes, Some(2));
//! println!("{}", evaluation.verdict());
//! ```

// Internal modules
mod evaluator;
mod policy;
mod sections;
mod types;

// Public API
pub use evaluator::{evaluate, evaluate_default, evaluate_password_strength};
pub use policy::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, Policy, PolicyError, REPEAT_RUN_LENGTH};
pub use sections::{length_deficiency, missing_classes, repeated_runs};
pub use types::{StrengthEvaluation, Verdict};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_password_strength_tx};
