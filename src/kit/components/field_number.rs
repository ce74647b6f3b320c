// Numeric field component for OrbitKit

use serde_json::Value;

use super::attributes::InputAttributes;
use super::prop_component;
use crate::component::{Callback, PropValidationError};

/// Numeric field component
#[derive(Debug)]
pub struct FieldNumber {
    props: FieldNumberProps,
}

/// Numeric field props
#[derive(Debug, Clone, Default)]
pub struct FieldNumberProps {
    /// Field name
    pub name: String,
    /// Current entry, empty when unset. Text that is not a number is shown
    /// as typed.
    pub value: String,
    /// Show the field as invalid
    pub is_invalid: bool,
    /// Message shown under an invalid field
    pub validation_text: Option<String>,
    /// Called with the raw entry on every edit
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

impl FieldNumberProps {
    pub fn validate(&self) -> Result<(), PropValidationError> {
        let mut errors = Vec::new();
        if let (Some(min), Some(max)) = (&self.attributes.min, &self.attributes.max) {
            match (min.parse::<f64>(), max.parse::<f64>()) {
                (Ok(min), Ok(max)) if min > max => errors.push(PropValidationError::invalid(
                    "min",
                    format!("{min} is greater than max {max}"),
                )),
                (Err(_), _) => errors.push(PropValidationError::invalid("min", "not a number")),
                (_, Err(_)) => errors.push(PropValidationError::invalid("max", "not a number")),
                _ => {}
            }
        }
        if let Err(err) = self.attributes.validate() {
            errors.push(err);
        }
        PropValidationError::collect(errors)
    }
}

prop_component!(FieldNumber, FieldNumberProps);
