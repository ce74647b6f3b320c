//! Props validation for kit components

use std::fmt::{self, Display};

/// Error indicating validation problems with props
#[derive(Debug, Clone, PartialEq)]
pub enum PropValidationError {
    /// A required property was missing
    MissingRequired(String),
    /// A property had an invalid value
    InvalidValue {
        /// Name of the property
        name: String,
        /// Description of the validation error
        reason: String,
    },
    /// Multiple validation errors
    Multiple(Vec<PropValidationError>),
}

impl PropValidationError {
    /// Shorthand for an [`PropValidationError::InvalidValue`]
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        PropValidationError::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Collapse a list of errors: none is `Ok`, one is returned as-is
    pub fn collect(mut errors: Vec<PropValidationError>) -> Result<(), PropValidationError> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(PropValidationError::Multiple(errors)),
        }
    }
}

impl Display for PropValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValidationError::MissingRequired(name) => {
                write!(f, "Missing required property: {name}")
            }
            PropValidationError::InvalidValue { name, reason } => {
                write!(f, "Invalid value for property {name}: {reason}")
            }
            PropValidationError::Multiple(errors) => {
                writeln!(f, "Multiple validation errors:")?;
                for (i, error) in errors.iter().enumerate() {
                    writeln!(f, "  {}. {}", i + 1, error)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for PropValidationError {}

/// Trait for props validation
pub trait PropValidator<P> {
    /// Validate the props
    fn validate(&self, props: &P) -> Result<(), PropValidationError>;
}

/// Validates that a string prop is present and non-empty
#[derive(Debug, Clone, Copy)]
pub struct RequiredText(pub &'static str);

impl PropValidator<Option<String>> for RequiredText {
    fn validate(&self, props: &Option<String>) -> Result<(), PropValidationError> {
        match props.as_deref() {
            Some(text) if !text.trim().is_empty() => Ok(()),
            _ => Err(PropValidationError::MissingRequired(self.0.to_string())),
        }
    }
}

impl PropValidator<String> for RequiredText {
    fn validate(&self, props: &String) -> Result<(), PropValidationError> {
        if props.trim().is_empty() {
            Err(PropValidationError::MissingRequired(self.0.to_string()))
        } else {
            Ok(())
        }
    }
}
