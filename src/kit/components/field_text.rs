// Text field component for OrbitKit

use serde_json::Value;

use super::attributes::{InputAttributes, InputType};
use super::prop_component;
use crate::component::{Callback, PropValidationError};

/// Text field component
#[derive(Debug)]
pub struct FieldText {
    props: FieldTextProps,
}

/// Text field props
#[derive(Debug, Clone, Default)]
pub struct FieldTextProps {
    /// Field name
    pub name: String,
    /// Current text
    pub value: String,
    /// Input type (text, password, email, etc.)
    pub input_type: InputType,
    /// Accept several comma separated values
    pub multiple: bool,
    /// Disable the browser spell checker
    pub ignore_spell_check: bool,
    /// Show the field as invalid
    pub is_invalid: bool,
    /// Message shown under an invalid field
    pub validation_text: Option<String>,
    /// Called with the new text on every edit
    pub on_change: Option<Callback<Value>>,
    /// Called when the field loses focus
    pub on_blur: Option<Callback<()>>,
    /// Called when the field gains focus
    pub on_focus: Option<Callback<()>>,
    /// Handler for the clear button; no button when unset
    pub clear_button: Option<Callback<()>>,
    /// Presentation attributes
    pub attributes: InputAttributes,
}

impl FieldTextProps {
    pub fn validate(&self) -> Result<(), PropValidationError> {
        self.attributes.validate()
    }
}

prop_component!(FieldText, FieldTextProps);
