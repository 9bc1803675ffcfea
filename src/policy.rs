//! Policy parameters for the length check.

use thiserror::Error;

/// Default minimum number of characters.
pub const DEFAULT_MIN_LENGTH: usize = 6;

/// Default maximum number of characters.
pub const DEFAULT_MAX_LENGTH: usize = 20;

/// Number of identical consecutive characters that makes one repeated run.
pub const REPEAT_RUN_LENGTH: usize = 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid length bounds: min_length {min_length} is greater than max_length {max_length}")]
    InvalidBounds { min_length: usize, max_length: usize },
}

/// Length bounds a password must fall within.
///
/// Build one with [`Policy::new`] to have the bounds validated, or use
/// [`Policy::default`] for 6..=20.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Policy {
    min_length: usize,
    max_length: usize,
}

impl Policy {
    /// Creates a policy with the given bounds.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidBounds`] if `min_length > max_length`.
    pub fn new(min_length: usize, max_length: usize) -> Result<Self, PolicyError> {
        if min_length > max_length {
            #[cfg(feature = "tracing")]
            tracing::warn!(min_length, max_length, "Rejected policy with inverted bounds");
            return Err(PolicyError::InvalidBounds {
                min_length,
                max_length,
            });
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}
