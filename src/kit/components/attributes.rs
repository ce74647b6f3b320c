// Presentation attributes shared by the kit's input components

use serde::{Deserialize, Serialize};

use crate::component::{Callback, PropValidationError, PropValidator};
use crate::kit::dimension::{Dimension, DimensionValidator};

/// Input size variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Text input types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Email,
    Password,
    Search,
    Tel,
    #[default]
    Text,
    Url,
}

/// Attributes passed straight through to an input component
#[derive(Debug, Clone, Default)]
pub struct InputAttributes {
    /// Element id
    pub id: Option<String>,
    /// Extra class names
    pub class_name: Option<String>,
    /// Input label
    pub label: Option<String>,
    /// Visually hide the label
    pub hide_label: bool,
    /// Helper text shown under the input
    pub help_text: Option<String>,
    /// Input placeholder
    pub placeholder: Option<String>,
    /// Whether the input is disabled
    pub disabled: bool,
    /// Whether the input is required
    pub required: bool,
    /// Read-only inputs show the value but do not accept edits
    pub is_read_only: bool,
    /// Focus the input when it mounts
    pub auto_focus: bool,
    /// Input size
    pub size: Option<InputSize>,
    /// Input width
    pub width: Option<Dimension>,
    /// Upper bound, as the HTML `max` attribute
    pub max: Option<String>,
    /// Lower bound, as the HTML `min` attribute
    pub min: Option<String>,
    /// Maximum length of the entry
    pub max_length: Option<usize>,
    /// Minimum length of the entry
    pub min_length: Option<usize>,
    /// Regular expression the entry must match
    pub pattern: Option<String>,
    /// Text displayed before the value
    pub prefix: Option<String>,
    /// Text displayed after the value
    pub suffix: Option<String>,
    /// Focus handler
    pub on_focus: Option<Callback<()>>,
}

impl InputAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn length_bounds(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Check the attributes a component cannot work with
    pub fn validate(&self) -> Result<(), PropValidationError> {
        let mut errors = Vec::new();
        if let Err(err) = DimensionValidator("width").validate(&self.width) {
            errors.push(err);
        }
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                errors.push(PropValidationError::invalid(
                    "min_length",
                    format!("{min} is greater than max_length {max}"),
                ));
            }
        }
        if let Some(pattern) = &self.pattern {
            if let Err(err) = regex::Regex::new(pattern) {
                errors.push(PropValidationError::invalid("pattern", err.to_string()));
            }
        }
        PropValidationError::collect(errors)
    }
}
