// Select adapter

use serde_json::Value;

use super::FieldAdapter;
use crate::component::Callback;
use crate::form::change::{on_blur_adapter, on_change_adapter};
use crate::form::handle::FormHandle;
use crate::form::validity::Validity;
use crate::kit::components::{FieldSelect, FieldSelectProps, InputAttributes, SelectOption};

/// Binds a select to the form. The selected value is stored as-is.
#[derive(Debug, Clone)]
pub struct FieldSelectAdapter {
    pub name: String,
    pub options: Vec<SelectOption>,
    pub multi_select: bool,
    pub is_clearable: bool,
    pub close_menu_on_select: bool,
    pub show_checkbox: bool,
    pub loading: bool,
    pub on_change: Option<Callback<Value>>,
    /// Called after the field has been marked touched
    pub on_blur: Option<Callback<()>>,
    pub on_focus: Option<Callback<()>>,
    pub attributes: InputAttributes,
}

impl Default for FieldSelectAdapter {
    fn default() -> Self {
        Self {
            name: String::new(),
            options: Vec::new(),
            multi_select: false,
            is_clearable: false,
            close_menu_on_select: true,
            show_checkbox: false,
            loading: false,
            on_change: None,
            on_blur: None,
            on_focus: None,
            attributes: InputAttributes::default(),
        }
    }
}

impl FieldSelectAdapter {
    pub fn new(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            name: name.into(),
            options,
            ..Default::default()
        }
    }

    pub fn multi_select(mut self, multi_select: bool) -> Self {
        self.multi_select = multi_select;
        self
    }

    pub fn clearable(mut self, is_clearable: bool) -> Self {
        self.is_clearable = is_clearable;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn on_change(mut self, on_change: Callback<Value>) -> Self {
        self.on_change = Some(on_change);
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

impl FieldAdapter for FieldSelectAdapter {
    type Component = FieldSelect;
    type Props = FieldSelectProps;

    fn name(&self) -> &str {
        &self.name
    }

    fn bind<F: FormHandle + Clone + 'static>(&self, form: &F) -> FieldSelectProps {
        let validity = Validity::observe(form, &self.name);
        FieldSelectProps {
            name: self.name.clone(),
            value: form.value(&self.name).unwrap_or(Value::Null),
            options: self.options.clone(),
            multi_select: self.multi_select,
            is_clearable: self.is_clearable,
            close_menu_on_select: self.close_menu_on_select,
            show_checkbox: self.show_checkbox,
            loading: self.loading,
            is_invalid: validity.is_invalid,
            validation_text: validity.validation_text,
            on_change: Some(on_change_adapter(form, &self.name, self.on_change.clone())),
            on_blur: Some(on_blur_adapter(form, &self.name, self.on_blur.clone())),
            on_focus: self.on_focus.clone(),
            attributes: self.attributes.clone(),
        }
    }
}
