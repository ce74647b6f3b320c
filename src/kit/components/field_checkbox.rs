// Checkbox and toggle component for OrbitKit

use serde_json::Value;

use super::attributes::InputAttributes;
use super::prop_component;
use crate::component::{Callback, PropValidationError};

/// Checkbox component, rendered as a switch when `toggle` is set
#[derive(Debug)]
pub struct FieldCheckbox {
    props: FieldCheckboxProps,
}

/// Checkbox props
#[derive(Debug, Clone, Default)]
pub struct FieldCheckboxProps {
    /// Field name
    pub name: String,
    /// Value submitted for a checked box
    pub value: String,
    /// Whether the box is checked
    pub is_selected: bool,
    /// Render as a toggle switch
    pub toggle: bool,
    /// Show the field as invalid
    pub is_invalid: bool,
    /// Message shown under an invalid field
    pub validation_text: Option<String>,
    /// Called with the new checked state
    pub on_change: Option<Callback<Value>>,
    /// Presentation attributes
    pub attributes: InputAttributes,
}

impl FieldCheckboxProps {
    pub fn validate(&self) -> Result<(), PropValidationError> {
        self.attributes.validate()
    }
}

prop_component!(FieldCheckbox, FieldCheckboxProps);
