// Button component for OrbitKit

use super::attributes::InputSize;
use super::prop_component;
use crate::component::{Callback, PropValidationError};

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    Primary,
    #[default]
    Secondary,
    Link,
}

/// What a button does inside a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

/// Button component that follows Orbit's design system
///
/// Form footers use one `Reset` and one `Submit` button:
///
/// ```
/// use orbit_forms::kit::components::{ButtonProps, ButtonType, ButtonVariant};
///
/// let save = ButtonProps {
///     content: "Save".to_string(),
///     button_type: ButtonType::Submit,
///     variant: ButtonVariant::Primary,
///     ..Default::default()
/// };
/// assert!(save.validate().is_ok());
/// ```
#[derive(Debug)]
pub struct Button {
    props: ButtonProps,
}

/// Properties for the Button component
#[derive(Debug, Clone, Default)]
pub struct ButtonProps {
    /// Text content of the button
    pub content: String,
    /// Form role of the button
    pub button_type: ButtonType,
    /// Visual style variant of the button
    pub variant: ButtonVariant,
    /// Size variant of the button
    pub size: InputSize,
    /// Whether the button is disabled
    pub disabled: bool,
    /// Show a spinner instead of the content
    pub loading: bool,
    /// Click event handler
    pub on_click: Option<Callback<()>>,
}

impl ButtonProps {
    pub fn validate(&self) -> Result<(), PropValidationError> {
        if self.content.is_empty() {
            return Err(PropValidationError::MissingRequired("content".to_string()));
        }
        Ok(())
    }
}

prop_component!(Button, ButtonProps);
