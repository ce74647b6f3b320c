//! Error types for component operations

use std::error::Error;
use std::fmt;

use crate::component::props::PropValidationError;

/// Errors that can occur during component operations
#[derive(Debug)]
pub enum ComponentError {
    /// Props failed validation
    InvalidProps(PropValidationError),

    /// Error acquiring lock
    LockError(String),
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProps(err) => write!(f, "Invalid props: {err}"),
            Self::LockError(msg) => write!(f, "Lock error: {msg}"),
        }
    }
}

impl Error for ComponentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidProps(err) => Some(err),
            Self::LockError(_) => None,
        }
    }
}

impl From<PropValidationError> for ComponentError {
    fn from(error: PropValidationError) -> Self {
        ComponentError::InvalidProps(error)
    }
}
