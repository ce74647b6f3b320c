// Date/time picker adapter

use serde_json::Value;

use super::FieldAdapter;
use crate::component::Callback;
use crate::form::change::on_change_adapter;
use crate::form::handle::FormHandle;
use crate::form::validity::Validity;
use crate::kit::components::{FieldDateTime, FieldDateTimeProps, InputAttributes};

/// Binds a date picker. The picker's value is stored unchanged.
#[derive(Debug, Clone, Default)]
pub struct FieldDateTimeAdapter {
    pub name: String,
    pub date_format: Option<String>,
    pub time_format: Option<String>,
    pub exclude_time: bool,
    pub is_clearable: bool,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub select_local_date_time: bool,
    pub on_change: Option<Callback<Value>>,
    pub attributes: InputAttributes,
}

impl FieldDateTimeAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn exclude_time(mut self, exclude_time: bool) -> Self {
        self.exclude_time = exclude_time;
        self
    }

    pub fn date_range(mut self, min: Option<String>, max: Option<String>) -> Self {
        self.min_date = min;
        self.max_date = max;
        self
    }

    pub fn on_change(mut self, on_change: Callback<Value>) -> Self {
        self.on_change = Some(on_change);
        self
    }

    pub fn attributes(mut self, attributes: InputAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

impl FieldAdapter for FieldDateTimeAdapter {
    type Component = FieldDateTime;
    type Props = FieldDateTimeProps;

    fn name(&self) -> &str {
        &self.name
    }

    fn bind<F: FormHandle + Clone + 'static>(&self, form: &F) -> FieldDateTimeProps {
        let validity = Validity::observe(form, &self.name);
        FieldDateTimeProps {
            name: self.name.clone(),
            value: form.value(&self.name).unwrap_or(Value::Null),
            date_format: self.date_format.clone(),
            time_format: self.time_format.clone(),
            exclude_time: self.exclude_time,
            is_clearable: self.is_clearable,
            min_date: self.min_date.clone(),
            max_date: self.max_date.clone(),
            select_local_date_time: self.select_local_date_time,
            is_invalid: validity.is_invalid,
            validation_text: validity.validation_text,
            on_change: Some(on_change_adapter(form, &self.name, self.on_change.clone())),
            attributes: self.attributes.clone(),
        }
    }
}
