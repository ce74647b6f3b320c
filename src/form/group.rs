//! Form group
//!
//! A titled section of a form, optionally collapsible, with validation
//! messages shown under its fields.

use crate::kit::components::{Alignment, Direction, LayoutProps};
use crate::kit::dimension::Dimension;

/// Messages attached to a whole group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrors {
    One(String),
    Many(Vec<String>),
}

/// How group messages are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationMarkup {
    Text(String),
    List(Vec<String>),
}

pub fn validation_markup(errors: Option<&ValidationErrors>) -> Option<ValidationMarkup> {
    match errors? {
        ValidationErrors::One(message) => Some(ValidationMarkup::Text(message.clone())),
        ValidationErrors::Many(messages) if !messages.is_empty() => {
            Some(ValidationMarkup::List(messages.clone()))
        }
        ValidationErrors::Many(_) => None,
    }
}

#[derive(Debug, Clone)]
pub struct FormGroupOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub background: String,
    pub bottom_border: bool,
    pub child_direction: Direction,
    pub collapsible: bool,
    pub collapsible_label: Option<String>,
    pub collapsible_top_border: bool,
    pub item_spacing: Dimension,
    pub padding: Dimension,
    pub validation_errors: Option<ValidationErrors>,
}

impl Default for FormGroupOptions {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            background: "white".to_string(),
            bottom_border: true,
            child_direction: Direction::Column,
            collapsible: false,
            collapsible_label: None,
            collapsible_top_border: false,
            item_spacing: Dimension::responsive([3u16, 4, 5]),
            padding: Dimension::from(5),
            validation_errors: None,
        }
    }
}

impl FormGroupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn collapsible(mut self, label: impl Into<String>) -> Self {
        self.collapsible = true;
        self.collapsible_label = Some(label.into());
        self
    }

    pub fn with_child_direction(mut self, direction: Direction) -> Self {
        self.child_direction = direction;
        self
    }

    pub fn with_validation_errors(mut self, errors: ValidationErrors) -> Self {
        self.validation_errors = Some(errors);
        self
    }
}

/// A form group and its panel state
#[derive(Debug, Clone)]
pub struct FormGroup {
    options: FormGroupOptions,
    is_open: bool,
}

impl FormGroup {
    pub fn new(options: FormGroupOptions) -> Self {
        Self {
            options,
            is_open: true,
        }
    }

    pub fn options(&self) -> &FormGroupOptions {
        &self.options
    }

    /// Always open unless collapsible and collapsed
    pub fn is_open(&self) -> bool {
        !self.options.collapsible || self.is_open
    }

    pub fn toggle_panel(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Whether the title/description column is shown
    pub fn shows_description(&self) -> bool {
        self.options.title.is_some() || self.options.description.is_some()
    }

    pub fn validation_markup(&self) -> Option<ValidationMarkup> {
        validation_markup(self.options.validation_errors.as_ref())
    }

    /// Outer block holding the description and the fields
    pub fn container_layout(&self) -> LayoutProps {
        LayoutProps {
            direction: vec![Direction::Column, Direction::Column, Direction::Row],
            align: Alignment::Start,
            item_spacing: Some(Dimension::from(5)),
            padding_horizontal: Some(self.options.padding.clone()),
            padding_vertical: Some(self.options.padding.clone()),
            background: Some(self.options.background.clone()),
            ..Default::default()
        }
    }

    /// Block holding the group's fields
    pub fn fields_layout(&self) -> LayoutProps {
        LayoutProps {
            direction: vec![self.options.child_direction],
            item_spacing: Some(self.options.item_spacing.clone()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_markup() {
        assert_eq!(
            validation_markup(Some(&ValidationErrors::One("pick one".to_string()))),
            Some(ValidationMarkup::Text("pick one".to_string()))
        );
        assert_eq!(
            validation_markup(Some(&ValidationErrors::Many(vec!["a".to_string(), "b".to_string()]))),
            Some(ValidationMarkup::List(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(validation_markup(Some(&ValidationErrors::Many(Vec::new()))), None);
        assert_eq!(validation_markup(None), None);
    }

    #[test]
    fn test_collapsible_panel() {
        let mut plain = FormGroup::new(FormGroupOptions::new());
        plain.toggle_panel();
        assert!(plain.is_open());

        let mut panel = FormGroup::new(FormGroupOptions::new().collapsible("Advanced"));
        assert!(panel.is_open());
        panel.toggle_panel();
        assert!(!panel.is_open());
        panel.toggle_panel();
        assert!(panel.is_open());
    }

    #[test]
    fn test_layouts_are_valid() {
        let group = FormGroup::new(FormGroupOptions::new().with_title("Contact"));
        assert!(group.shows_description());
        assert!(group.container_layout().validate().is_ok());
        assert!(group.fields_layout().validate().is_ok());
        assert_eq!(group.fields_layout().direction, vec![Direction::Column]);
    }
}
