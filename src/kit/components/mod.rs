// OrbitKit component module organization

/// Implements [`Component`](crate::component::Component) for a kit component
/// that stores its props as-is and validates them before each update.
macro_rules! prop_component {
    ($component:ident, $props:ty) => {
        impl $crate::component::Component for $component {
            type Props = $props;

            fn create(props: Self::Props, _context: $crate::component::Context) -> Self {
                Self { props }
            }

            fn validate_props(
                props: &Self::Props,
            ) -> Result<(), $crate::component::ComponentError> {
                props.validate().map_err(Into::into)
            }

            fn update(
                &mut self,
                props: Self::Props,
            ) -> Result<(), $crate::component::ComponentError> {
                self.props = props;
                Ok(())
            }

            fn props(&self) -> &Self::Props {
                &self.props
            }
        }
    };
}

pub(crate) use prop_component;

// Shared input attributes
pub mod attributes;

// Input components
pub mod button;
pub mod field_checkbox;
pub mod field_date_time;
pub mod field_number;
pub mod field_radio_group;
pub mod field_select;
pub mod field_text;
pub mod field_text_debounce;

// Layout components
pub mod card;
pub mod layout;

// Re-export commonly used components
pub use attributes::{InputAttributes, InputSize, InputType};
pub use button::{Button, ButtonProps, ButtonType, ButtonVariant};
pub use card::{Card, CardProps};
pub use field_checkbox::{FieldCheckbox, FieldCheckboxProps};
pub use field_date_time::{FieldDateTime, FieldDateTimeProps};
pub use field_number::{FieldNumber, FieldNumberProps};
pub use field_radio_group::{FieldRadioGroup, FieldRadioGroupProps, RadioOption};
pub use field_select::{FieldSelect, FieldSelectProps, SelectOption};
pub use field_text::{FieldText, FieldTextProps};
pub use field_text_debounce::{FieldTextDebounce, FieldTextDebounceProps};
pub use layout::{Alignment, Direction, Justification, Layout, LayoutProps};
