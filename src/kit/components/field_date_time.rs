// Date picker component for OrbitKit

use serde_json::Value;

use super::attributes::InputAttributes;
use super::prop_component;
use crate::component::{Callback, PropValidationError};

/// Date and time picker component
#[derive(Debug)]
pub struct FieldDateTime {
    props: FieldDateTimeProps,
}

/// Date picker props
#[derive(Debug, Clone, Default)]
pub struct FieldDateTimeProps {
    /// Field name
    pub name: String,
    /// Selected date, as stored in the form
    pub value: Value,
    /// Display format for the date part
    pub date_format: Option<String>,
    /// Display format for the time part
    pub time_format: Option<String>,
    /// Only pick a date
    pub exclude_time: bool,
    /// Show a button clearing the selection
    pub is_clearable: bool,
    /// Earliest selectable date
    pub min_date: Option<String>,
    /// Latest selectable date
    pub max_date: Option<String>,
    /// Report the selection in local time instead of UTC
    pub select_local_date_time: bool,
    /// Show the field as invalid
    pub is_invalid: bool,
    /// Message shown under an invalid field
    pub validation_text: Option<String>,
    /// Called with the selected date
    pub on_change: Option<Callback<Value>>,
    /// Presentation attributes
    pub attributes: InputAttributes,
}

impl FieldDateTimeProps {
    pub fn validate(&self) -> Result<(), PropValidationError> {
        self.attributes.validate()
    }
}

prop_component!(FieldDateTime, FieldDateTimeProps);
