// Number field adapter

use serde_json::{Number, Value};

use super::{text_value, FieldAdapter};
use crate::component::Callback;
use crate::form::change::on_blur_adapter;
use crate::form::handle::FormHandle;
use crate::form::validity::Validity;
use crate::kit::components::{FieldNumber, FieldNumberProps, InputAttributes};

/// Binds a number field. Numeric entries are stored as JSON numbers.
#[derive(Debug, Clone, Default)]
pub struct FieldNumberAdapter {
    pub name: String,
    /// Called after the field has been marked touched
    pub on_blur: Option<Callback<()>>,
    pub on_focus: Option<Callback<()>>,
    pub clear_button: Option<Callback<()>>,
    pub attributes: InputAttributes,
}

impl FieldNumberAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
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

/// Raw entry to stored value: blank is `null`, numeric text is a number,
/// anything else is kept for the validator to reject
pub(crate) fn parse_entry(entry: Value) -> Value {
    match entry {
        Value::String(text) if text.trim().is_empty() => Value::Null,
        Value::String(text) => {
            let trimmed = text.trim();
            let number = trimmed
                .parse::<i64>()
                .map(Number::from)
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(Number::from_f64));
            match number {
                Some(number) => Value::Number(number),
                None => Value::String(text),
            }
        }
        other => other,
    }
}

impl FieldAdapter for FieldNumberAdapter {
    type Component = FieldNumber;
    type Props = FieldNumberProps;

    fn name(&self) -> &str {
        &self.name
    }

    fn bind<F: FormHandle + Clone + 'static>(&self, form: &F) -> FieldNumberProps {
        let validity = Validity::observe(form, &self.name);
        let writer = form.clone();
        let path = self.name.clone();

        FieldNumberProps {
            name: self.name.clone(),
            value: text_value(form.value(&self.name).as_ref()),
            is_invalid: validity.is_invalid,
            validation_text: validity.validation_text,
            on_change: Some(Callback::new(move |entry: Value| {
                writer.set_field_value(&path, parse_entry(entry));
            })),
            on_blur: Some(on_blur_adapter(form, &self.name, self.on_blur.clone())),
            on_focus: self.on_focus.clone(),
            clear_button: self.clear_button.clone(),
            attributes: self.attributes.clone(),
        }
    }
}
