// Card component for OrbitKit

use super::prop_component;
use crate::component::PropValidationError;

/// Card component
#[derive(Debug)]
pub struct Card {
    props: CardProps,
}

/// Card props
#[derive(Debug, Clone, Default)]
pub struct CardProps {
    /// Card title
    pub title: Option<String>,
    /// Split children into padded sections
    pub sectioned: bool,
    /// Let content such as menus overflow the card
    pub overflow_visible: bool,
    /// Extra class names
    pub class_name: Option<String>,
}

impl CardProps {
    pub fn validate(&self) -> Result<(), PropValidationError> {
        Ok(())
    }
}

prop_component!(Card, CardProps);
