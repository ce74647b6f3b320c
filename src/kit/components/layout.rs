// Layout components for OrbitKit

use super::prop_component;
use crate::component::{PropValidationError, PropValidator};
use crate::kit::dimension::{Dimension, DimensionValidator};

/// Layout block component
#[derive(Debug)]
pub struct Layout {
    props: LayoutProps,
}

/// Layout props
#[derive(Debug, Clone, Default)]
pub struct LayoutProps {
    /// Layout direction, one entry per breakpoint
    pub direction: Vec<Direction>,
    /// Layout alignment
    pub align: Alignment,
    /// Layout justification
    pub justify: Justification,
    /// Spacing between children
    pub item_spacing: Option<Dimension>,
    /// Horizontal padding
    pub padding_horizontal: Option<Dimension>,
    /// Vertical padding
    pub padding_vertical: Option<Dimension>,
    /// Background color name
    pub background: Option<String>,
}

impl LayoutProps {
    pub fn validate(&self) -> Result<(), PropValidationError> {
        let mut errors = Vec::new();
        for (name, value) in [
            ("item_spacing", &self.item_spacing),
            ("padding_horizontal", &self.padding_horizontal),
            ("padding_vertical", &self.padding_vertical),
        ] {
            if let Err(err) = DimensionValidator(name).validate(value) {
                errors.push(err);
            }
        }
        PropValidationError::collect(errors)
    }
}

/// Layout direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Horizontal layout
    #[default]
    Row,
    /// Vertical layout
    Column,
}

/// Layout alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Align items at the start
    #[default]
    Start,
    /// Align items at the center
    Center,
    /// Align items at the end
    End,
    /// Stretch items to fill the container
    Stretch,
}

/// Layout justification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    /// Justify items at the start
    #[default]
    Start,
    /// Justify items at the center
    Center,
    /// Justify items at the end
    End,
    /// Space between items
    SpaceBetween,
}

prop_component!(Layout, LayoutProps);
