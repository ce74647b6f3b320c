// Debounced text field component for OrbitKit

use std::time::Duration;

use serde_json::Value;

use super::attributes::{InputAttributes, InputType};
use super::prop_component;
use crate::component::{Callback, PropValidationError};

/// Text field that reports its value only after typing pauses
#[derive(Debug)]
pub struct FieldTextDebounce {
    props: FieldTextDebounceProps,
}

/// Debounced text field props
#[derive(Debug, Clone)]
pub struct FieldTextDebounceProps {
    /// Field name
    pub name: String,
    /// Current text
    pub value: String,
    /// Input type (text, password, email, etc.)
    pub input_type: InputType,
    /// Quiet period before `on_debounce` fires
    pub debounce: Duration,
    /// Entries shorter than this never fire `on_debounce`
    pub minimum_characters: usize,
    /// Show the field as invalid
    pub is_invalid: bool,
    /// Message shown under an invalid field
    pub validation_text: Option<String>,
    /// Called with the settled text
    pub on_debounce: Option<Callback<Value>>,
    /// Called when the field loses focus
    pub on_blur: Option<Callback<()>>,
    /// Called when the field gains focus
    pub on_focus: Option<Callback<()>>,
    /// Handler for the clear button; no button when unset
    pub clear_button: Option<Callback<()>>,
    /// Presentation attributes
    pub attributes: InputAttributes,
}

impl Default for FieldTextDebounceProps {
    fn default() -> Self {
        Self {
            name: String::new(),
            value: String::new(),
            input_type: InputType::default(),
            debounce: Duration::from_millis(500),
            minimum_characters: 0,
            is_invalid: false,
            validation_text: None,
            on_debounce: None,
            on_blur: None,
            on_focus: None,
            clear_button: None,
            attributes: InputAttributes::default(),
        }
    }
}

impl FieldTextDebounceProps {
    pub fn validate(&self) -> Result<(), PropValidationError> {
        self.attributes.validate()
    }
}

prop_component!(FieldTextDebounce, FieldTextDebounceProps);
