// Adapter for a checkbox that is one option of a multi-select group

use serde_json::Value;

use super::FieldAdapter;
use crate::component::Callback;
use crate::form::change::{current_selection, on_group_toggle};
use crate::form::handle::FormHandle;
use crate::form::validity::Validity;
use crate::kit::components::{FieldCheckbox, FieldCheckboxProps, InputAttributes};

/// Binds one checkbox of a group.
///
/// The field at `name` holds the list of selected values; checking the box
/// adds `value` to it. Errors set on `group_name` mark every member invalid.
#[derive(Debug, Clone, Default)]
pub struct FieldCheckboxInAGroupAdapter {
    pub name: String,
    pub group_name: String,
    pub value: String,
    pub toggle: bool,
    pub attributes: InputAttributes,
}

impl FieldCheckboxInAGroupAdapter {
    pub fn new(name: impl Into<String>, group_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group_name: group_name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn toggle(mut self, toggle: bool) -> Self {
        self.toggle = toggle;
        self
    }

    pub fn attributes(mut self, attributes: InputAttributes) -> Self {
        self.attributes = attributes;
        self
    }
}

impl FieldAdapter for FieldCheckboxInAGroupAdapter {
    type Component = FieldCheckbox;
    type Props = FieldCheckboxProps;

    fn name(&self) -> &str {
        &self.name
    }

    fn bind<F: FormHandle + Clone + 'static>(&self, form: &F) -> FieldCheckboxProps {
        let validity = Validity::observe_group(form, &self.name, &self.group_name);
        let selection = current_selection(form.value(&self.name).as_ref());
        let on_toggle = on_group_toggle(form, &self.name, &self.group_name, &self.value);

        FieldCheckboxProps {
            name: self.name.clone(),
            value: self.value.clone(),
            is_selected: selection.contains(&self.value),
            toggle: self.toggle,
            is_invalid: validity.is_invalid,
            validation_text: validity.validation_text,
            // The checkbox reports its own state; the group only needs the click
            on_change: Some(Callback::new(move |_checked: Value| on_toggle.call(()))),
            attributes: self.attributes.clone(),
        }
    }
}
