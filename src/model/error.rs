//! Errors raised while building widget actions

use std::fmt;

/// Reasons a progress action can be rejected at construction time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// The `loaded` counter was not reported
    MissingLoaded,
    /// The `total` counter was not reported
    MissingTotal,
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::MissingLoaded => write!(f, "Progress payload is missing the loaded byte count"),
            ActionError::MissingTotal => write!(f, "Progress payload is missing the total byte count"),
        }
    }
}

impl std::error::Error for ActionError {}

/// Result type for action construction
pub type ActionResult<T> = Result<T, ActionError>;
