// Select component for OrbitKit

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::attributes::InputAttributes;
use super::prop_component;
use crate::component::{Callback, PropValidationError};

/// One entry of a select menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: Value,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Select component
#[derive(Debug)]
pub struct FieldSelect {
    props: FieldSelectProps,
}

/// Select props
#[derive(Debug, Clone)]
pub struct FieldSelectProps {
    /// Field name
    pub name: String,
    /// Selected option value, or an array of them for multi-selects
    pub value: Value,
    /// Menu entries
    pub options: Vec<SelectOption>,
    /// Allow selecting several options
    pub multi_select: bool,
    /// Show a button clearing the selection
    pub is_clearable: bool,
    /// Close the menu after a selection
    pub close_menu_on_select: bool,
    /// Render a checkbox next to each option
    pub show_checkbox: bool,
    /// Show the loading indicator
    pub loading: bool,
    /// Show the field as invalid
    pub is_invalid: bool,
    /// Message shown under an invalid field
    pub validation_text: Option<String>,
    /// Called with the selected value(s)
    pub on_change: Option<Callback<Value>>,
    /// Called when the field loses focus
    pub on_blur: Option<Callback<()>>,
    /// Called when the field gains focus
    pub on_focus: Option<Callback<()>>,
    /// Presentation attributes
    pub attributes: InputAttributes,
}

impl Default for FieldSelectProps {
    fn default() -> Self {
        Self {
            name: String::new(),
            value: Value::Null,
            options: Vec::new(),
            multi_select: false,
            is_clearable: false,
            close_menu_on_select: true,
            show_checkbox: false,
            loading: false,
            is_invalid: false,
            validation_text: None,
            on_change: None,
            on_blur: None,
            on_focus: None,
            attributes: InputAttributes::default(),
        }
    }
}

impl FieldSelectProps {
    pub fn validate(&self) -> Result<(), PropValidationError> {
        self.attributes.validate()
    }
}

prop_component!(FieldSelect, FieldSelectProps);
