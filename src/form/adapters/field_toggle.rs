// Toggle adapter

use serde_json::Value;

use super::{FieldAdapter, FieldCheckboxAdapter};
use crate::component::Callback;
use crate::form::handle::FormHandle;
use crate::kit::components::{FieldCheckbox, FieldCheckboxProps, InputAttributes};

/// A checkbox rendered as a switch
#[derive(Debug, Clone)]
pub struct FieldToggleAdapter {
    checkbox: FieldCheckboxAdapter,
}

impl FieldToggleAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            checkbox: FieldCheckboxAdapter {
                toggle: true,
                ..FieldCheckboxAdapter::new(name)
            },
        }
    }

    pub fn on_change(mut self, on_change: Callback<Value>) -> Self {
        self.checkbox.on_change = Some(on_change);
        self
    }

    pub fn attributes(mut self, attributes: InputAttributes) -> Self {
        self.checkbox.attributes = attributes;
        self
    }
}

impl FieldAdapter for FieldToggleAdapter {
    type Component = FieldCheckbox;
    type Props = FieldCheckboxProps;

    fn name(&self) -> &str {
        self.checkbox.name()
    }

    fn bind<F: FormHandle + Clone + 'static>(&self, form: &F) -> FieldCheckboxProps {
        self.checkbox.bind(form)
    }
}
