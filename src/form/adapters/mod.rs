//! Field adapters
//!
//! Each adapter holds the static configuration of one field and turns the
//! form's current state into props for the matching kit component: the
//! field's value, its validity and a change handler writing back to the form.
//!
//! ```
//! use orbit_forms::form::adapters::{FieldAdapter, FieldTextAdapter};
//! use orbit_forms::form::{FormHandle, MemoryForm};
//! use serde_json::json;
//!
//! let form = MemoryForm::new(json!({ "email": "" }));
//! let adapter = FieldTextAdapter::new("email");
//!
//! let props = adapter.bind(&form);
//! props.on_change.unwrap().call(json!("ada@example.com"));
//!
//! assert_eq!(adapter.bind(&form).value, "ada@example.com");
//! assert!(form.dirty());
//! ```

use std::fmt::Debug;

use log::warn;
use serde_json::Value;

use super::handle::FormHandle;
use crate::component::{self, Component, Context};
use crate::Error;

mod field_checkbox;
mod field_checkbox_in_a_group;
mod field_date_time;
mod field_number;
mod field_radio_group;
mod field_select;
mod field_text;
mod field_text_debounce;
mod field_toggle;

pub use field_checkbox::FieldCheckboxAdapter;
pub use field_checkbox_in_a_group::FieldCheckboxInAGroupAdapter;
pub use field_date_time::FieldDateTimeAdapter;
pub use field_number::FieldNumberAdapter;
pub use field_radio_group::FieldRadioGroupAdapter;
pub use field_select::FieldSelectAdapter;
pub use field_text::FieldTextAdapter;
pub use field_text_debounce::FieldTextDebounceAdapter;
pub use field_toggle::FieldToggleAdapter;

/// Binds one form field to a kit component
pub trait FieldAdapter {
    /// Kit component the field renders with
    type Component: Component<Props = Self::Props>;

    /// Props handed to the component
    type Props: Clone + Send + Sync + 'static;

    /// Path of the field in the form values
    fn name(&self) -> &str;

    /// Props for the form's current state
    fn bind<F: FormHandle + Clone + 'static>(&self, form: &F) -> Self::Props;

    /// Bind and check the resulting props
    fn bind_validated<F: FormHandle + Clone + 'static>(&self, form: &F) -> crate::Result<Self::Props> {
        let props = self.bind(form);
        Self::Component::validate_props(&props)?;
        Ok(props)
    }

    /// Bind against the form provided by an enclosing context
    fn bind_from_context<F>(&self, context: &Context) -> crate::Result<Self::Props>
    where
        F: FormHandle + Clone + Debug + 'static,
    {
        match context.consume::<F>() {
            Some(form) => Ok(self.bind(&form)),
            None => {
                warn!("No form in context for field {}", self.name());
                Err(Error::MissingForm(self.name().to_string()))
            }
        }
    }

    /// Create the component for the form's current state
    fn mount<F: FormHandle + Clone + 'static>(&self, form: &F, context: Context) -> crate::Result<Self::Component> {
        Ok(component::mount(self.bind(form), context)?)
    }

    /// Push the form's current state into a mounted component
    fn refresh<F: FormHandle + Clone + 'static>(
        &self,
        form: &F,
        mounted: &mut Self::Component,
    ) -> crate::Result<()> {
        Ok(component::apply_props(mounted, self.bind(form))?)
    }
}

/// Text shown for a field value; missing and `null` values are empty
pub(crate) fn text_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
