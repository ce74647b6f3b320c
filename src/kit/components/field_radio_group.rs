// Radio group component for OrbitKit

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::attributes::InputAttributes;
use super::prop_component;
use crate::component::{Callback, PropValidationError};

/// One radio button of a group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioOption {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
}

impl RadioOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
        }
    }
}

/// Radio group component
#[derive(Debug)]
pub struct FieldRadioGroup {
    props: FieldRadioGroupProps,
}

/// Radio group props
#[derive(Debug, Clone, Default)]
pub struct FieldRadioGroupProps {
    /// Name applied to every radio
    pub name: String,
    /// Value of the checked radio
    pub value: Value,
    /// The radios, in display order
    pub radios: Vec<RadioOption>,
    /// Show the group as invalid
    pub is_invalid: bool,
    /// Message shown under an invalid group
    pub validation_text: Option<String>,
    /// Called with the value of the checked radio
    pub on_change: Option<Callback<Value>>,
    /// Presentation attributes
    pub attributes: InputAttributes,
}

impl FieldRadioGroupProps {
    pub fn validate(&self) -> Result<(), PropValidationError> {
        let mut errors = Vec::new();
        if self.radios.is_empty() {
            errors.push(PropValidationError::MissingRequired("radios".to_string()));
        }
        if let Err(err) = self.attributes.validate() {
            errors.push(err);
        }
        PropValidationError::collect(errors)
    }
}

prop_component!(FieldRadioGroup, FieldRadioGroupProps);
