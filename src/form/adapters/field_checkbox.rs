// Checkbox adapter

use serde_json::Value;

use super::FieldAdapter;
use crate::component::Callback;
use crate::form::change::on_change_adapter;
use crate::form::handle::FormHandle;
use crate::form::path::is_truthy;
use crate::form::validity::Validity;
use crate::kit::components::{FieldCheckbox, FieldCheckboxProps, InputAttributes};

/// Binds a single checkbox to a boolean-like field
#[derive(Debug, Clone, Default)]
pub struct FieldCheckboxAdapter {
    pub name: String,
    /// Value attribute of the checkbox element
    pub value: String,
    pub toggle: bool,
    pub on_change: Option<Callback<Value>>,
    pub attributes: InputAttributes,
}

impl FieldCheckboxAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
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

impl FieldAdapter for FieldCheckboxAdapter {
    type Component = FieldCheckbox;
    type Props = FieldCheckboxProps;

    fn name(&self) -> &str {
        &self.name
    }

    fn bind<F: FormHandle + Clone + 'static>(&self, form: &F) -> FieldCheckboxProps {
        let validity = Validity::observe(form, &self.name);
        FieldCheckboxProps {
            name: self.name.clone(),
            value: self.value.clone(),
            is_selected: form.value(&self.name).as_ref().is_some_and(is_truthy),
            toggle: self.toggle,
            is_invalid: validity.is_invalid,
            validation_text: validity.validation_text,
            on_change: Some(on_change_adapter(form, &self.name, self.on_change.clone())),
            attributes: self.attributes.clone(),
        }
    }
}
