// Radio group adapter

use serde_json::Value;

use super::FieldAdapter;
use crate::form::change::on_change_adapter;
use crate::form::handle::FormHandle;
use crate::form::validity::Validity;
use crate::kit::components::{FieldRadioGroup, FieldRadioGroupProps, InputAttributes, RadioOption};

#[derive(Debug, Clone, Default)]
pub struct FieldRadioGroupAdapter {
    pub name: String,
    pub radios: Vec<RadioOption>,
    pub attributes: InputAttributes,
}

impl FieldRadioGroupAdapter {
    pub fn new(name: impl Into<String>, radios: Vec<RadioOption>) -> Self {
        Self {
            name: name.into(),
            radios,
            attributes: InputAttributes::default(),
        }
    }

    pub fn attributes(mut self, attributes: InputAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

impl FieldAdapter for FieldRadioGroupAdapter {
    type Component = FieldRadioGroup;
    type Props = FieldRadioGroupProps;

    fn name(&self) -> &str {
        &self.name
    }

    fn bind<F: FormHandle + Clone + 'static>(&self, form: &F) -> FieldRadioGroupProps {
        let validity = Validity::observe(form, &self.name);
        FieldRadioGroupProps {
            name: self.name.clone(),
            value: form.value(&self.name).unwrap_or(Value::Null),
            radios: self.radios.clone(),
            is_invalid: validity.is_invalid,
            validation_text: validity.validation_text,
            on_change: Some(on_change_adapter(form, &self.name, None)),
            attributes: self.attributes.clone(),
        }
    }
}
