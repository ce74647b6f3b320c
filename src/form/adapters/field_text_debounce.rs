// Debounced text field adapter

use std::time::Duration;

use serde_json::Value;

use super::{text_value, FieldAdapter};
use crate::component::Callback;
use crate::form::change::{on_blur_adapter, on_debounce_adapter};
use crate::form::handle::FormHandle;
use crate::form::validity::Validity;
use crate::kit::components::{FieldTextDebounce, FieldTextDebounceProps, InputAttributes, InputType};

/// Binds a debounced text field to the form.
///
/// The form only sees a value once the component's delay and minimum length
/// have been satisfied.
#[derive(Debug, Clone)]
pub struct FieldTextDebounceAdapter {
    pub name: String,
    pub input_type: InputType,
    pub debounce: Duration,
    pub minimum_characters: usize,
    pub on_debounce: Option<Callback<Value>>,
    /// Called after the field has been marked touched
    pub on_blur: Option<Callback<()>>,
    pub on_focus: Option<Callback<()>>,
    pub clear_button: Option<Callback<()>>,
    pub attributes: InputAttributes,
}

impl Default for FieldTextDebounceAdapter {
    fn default() -> Self {
        let defaults = FieldTextDebounceProps::default();
        Self {
            name: String::new(),
            input_type: defaults.input_type,
            debounce: defaults.debounce,
            minimum_characters: defaults.minimum_characters,
            on_debounce: None,
            on_blur: None,
            on_focus: None,
            clear_button: None,
            attributes: InputAttributes::default(),
        }
    }
}

impl FieldTextDebounceAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn minimum_characters(mut self, minimum: usize) -> Self {
        self.minimum_characters = minimum;
        self
    }

    pub fn on_debounce(mut self, on_debounce: Callback<Value>) -> Self {
        self.on_debounce = Some(on_debounce);
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

impl FieldAdapter for FieldTextDebounceAdapter {
    type Component = FieldTextDebounce;
    type Props = FieldTextDebounceProps;

    fn name(&self) -> &str {
        &self.name
    }

    fn bind<F: FormHandle + Clone + 'static>(&self, form: &F) -> FieldTextDebounceProps {
        let validity = Validity::observe(form, &self.name);
        FieldTextDebounceProps {
            name: self.name.clone(),
            value: text_value(form.value(&self.name).as_ref()),
            input_type: self.input_type,
            debounce: self.debounce,
            minimum_characters: self.minimum_characters,
            is_invalid: validity.is_invalid,
            validation_text: validity.validation_text,
            on_debounce: Some(on_debounce_adapter(form, &self.name, self.on_debounce.clone())),
            on_blur: Some(on_blur_adapter(form, &self.name, self.on_blur.clone())),
            on_focus: self.on_focus.clone(),
            clear_button: self.clear_button.clone(),
            attributes: self.attributes.clone(),
        }
    }
}
