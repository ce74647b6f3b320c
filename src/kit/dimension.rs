//! Width and size values accepted by kit components
//!
//! A dimension is either one of the kit's size tokens (`1`-`9` and a fixed
//! set of percentages), a raw CSS length, or a responsive list with one entry
//! per breakpoint.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::component::{PropValidationError, PropValidator};

/// Size tokens understood by the kit
pub const DIMENSION_TOKENS: [u16; 23] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 20, 25, 30, 33, 34, 40, 50, 60, 70, 75, 80, 90, 100,
];

/// Maximum number of breakpoints in a responsive dimension
pub const MAX_BREAKPOINTS: usize = 4;

/// A width/size prop value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Numeric size token
    Token(u16),
    /// Size token written as a string, or a raw CSS length
    Size(String),
    /// One value per breakpoint, smallest first
    Responsive(Vec<Dimension>),
}

impl Dimension {
    /// Build a responsive dimension from per-breakpoint values
    pub fn responsive<I, D>(values: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Dimension>,
    {
        Dimension::Responsive(values.into_iter().map(Into::into).collect())
    }

    /// Whether the value is accepted by the kit
    pub fn is_valid(&self) -> bool {
        self.check("width").is_ok()
    }

    fn check(&self, prop: &str) -> Result<(), PropValidationError> {
        match self {
            Dimension::Token(token) => {
                if is_token(*token) {
                    Ok(())
                } else {
                    Err(PropValidationError::invalid(
                        prop,
                        format!("{token} is not a size token"),
                    ))
                }
            }
            Dimension::Size(size) => {
                if is_size_string(size) {
                    Ok(())
                } else {
                    Err(PropValidationError::invalid(
                        prop,
                        format!("{size:?} is neither a size token nor a CSS length"),
                    ))
                }
            }
            Dimension::Responsive(values) => {
                if values.is_empty() {
                    return Err(PropValidationError::invalid(prop, "responsive value is empty"));
                }
                if values.len() > MAX_BREAKPOINTS {
                    return Err(PropValidationError::invalid(
                        prop,
                        format!(
                            "responsive value has {} entries, at most {MAX_BREAKPOINTS} allowed",
                            values.len()
                        ),
                    ));
                }
                let mut errors = Vec::new();
                for value in values {
                    if matches!(value, Dimension::Responsive(_)) {
                        errors.push(PropValidationError::invalid(
                            prop,
                            "responsive values cannot be nested",
                        ));
                    } else if let Err(err) = value.check(prop) {
                        errors.push(err);
                    }
                }
                PropValidationError::collect(errors)
            }
        }
    }
}

impl From<u16> for Dimension {
    fn from(token: u16) -> Self {
        Dimension::Token(token)
    }
}

impl From<&str> for Dimension {
    fn from(size: &str) -> Self {
        Dimension::Size(size.to_string())
    }
}

impl From<String> for Dimension {
    fn from(size: String) -> Self {
        Dimension::Size(size)
    }
}

/// Validates dimension props, reporting errors under the given prop name
#[derive(Debug, Clone, Copy)]
pub struct DimensionValidator(pub &'static str);

impl PropValidator<Dimension> for DimensionValidator {
    fn validate(&self, props: &Dimension) -> Result<(), PropValidationError> {
        props.check(self.0)
    }
}

impl PropValidator<Option<Dimension>> for DimensionValidator {
    fn validate(&self, props: &Option<Dimension>) -> Result<(), PropValidationError> {
        match props {
            Some(dimension) => dimension.check(self.0),
            None => Ok(()),
        }
    }
}

fn is_token(token: u16) -> bool {
    DIMENSION_TOKENS.contains(&token)
}

fn is_size_string(size: &str) -> bool {
    let size = size.trim();
    if let Ok(token) = size.parse::<u16>() {
        return is_token(token);
    }
    css_length().is_match(size)
}

fn css_length() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(auto|none|(\d+(\.\d+)?|\.\d+)(px|rem|em|%|vw|vh|ch))$")
            .expect("css length pattern is valid")
    })
}
