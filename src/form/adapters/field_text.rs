// Text field adapter

use serde_json::Value;

use super::{text_value, FieldAdapter};
use crate::component::Callback;
use crate::form::change::{on_blur_adapter, on_change_adapter};
use crate::form::handle::FormHandle;
use crate::form::validity::Validity;
use crate::kit::components::{FieldText, FieldTextProps, InputAttributes, InputType};

/// Binds a text field to the form
#[derive(Debug, Clone, Default)]
pub struct FieldTextAdapter {
    pub name: String,
    pub input_type: InputType,
    /// Render a textarea instead of a single line
    pub multiple: bool,
    pub ignore_spell_check: bool,
    /// Called after the form has been updated
    pub on_change: Option<Callback<Value>>,
    /// Called after the field has been marked touched
    pub on_blur: Option<Callback<()>>,
    pub on_focus: Option<Callback<()>>,
    pub clear_button: Option<Callback<()>>,
    pub attributes: InputAttributes,
}

impl FieldTextAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn on_change(mut self, on_change: Callback<Value>) -> Self {
        self.on_change = Some(on_change);
        self
    }

    pub fn clear_button(mut self, on_clear: Callback<()>) -> Self {
        self.clear_button = Some(on_clear);
        self
    }

    pub fn on_blur(mut self, on_blur: Callback<()>) -> Self {
        self.on_blur = Some(on_blur);
        self
    }

    pub fn on_focus(mut self, on_focus: Callback<()>) -> Self {
        self.on_focus = Some(on_focus);
        self
    }

    pub fn attributes(mut self, attributes: InputAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

impl FieldAdapter for FieldTextAdapter {
    type Component = FieldText;
    type Props = FieldTextProps;

    fn name(&self) -> &str {
        &self.name
    }

    fn bind<F: FormHandle + Clone + 'static>(&self, form: &F) -> FieldTextProps {
        let validity = Validity::observe(form, &self.name);
        FieldTextProps {
            name: self.name.clone(),
            value: text_value(form.value(&self.name).as_ref()),
            input_type: self.input_type,
            multiple: self.multiple,
            ignore_spell_check: self.ignore_spell_check,
            is_invalid: validity.is_invalid,
            validation_text: validity.validation_text,
            on_change: Some(on_change_adapter(form, &self.name, self.on_change.clone())),
            on_blur: Some(on_blur_adapter(form, &self.name, self.on_blur.clone())),
            on_focus: self.on_focus.clone(),
            clear_button: self.clear_button.clone(),
            attributes: self.attributes.clone(),
        }
    }
}
