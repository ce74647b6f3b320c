//! Form card
//!
//! Wraps a form in a kit [`Card`](crate::kit::components::Card) with a footer
//! holding the error summary, the success message and the reset/submit
//! buttons. Also decides when leaving the page needs a confirmation.

use std::fmt::Debug;

use log::debug;
use serde_json::Value;

use super::handle::FormHandle;
use super::path::is_truthy;
use super::status::{FormStatus, SubmitError};
use super::submit::{SubmitController, SubmitHandler, SubmitOptions};
use super::summary::ErrorSummary;
use crate::component::{Callback, Context};
use crate::kit::components::{
    Alignment, ButtonProps, ButtonType, ButtonVariant, CardProps, Direction, Justification,
    LayoutProps,
};
use crate::kit::dimension::Dimension;

pub const DEFAULT_PROMPT_MESSAGE: &str = "You have unsaved changes. Are you sure you want to leave?";

/// Location the user is navigating to or from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub pathname: String,
}

impl NavigationRequest {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
        }
    }
}

/// Outcome of a navigation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptDecision {
    Allow,
    /// Ask the user to confirm with this message
    Confirm(String),
}

/// Confirmation shown when leaving a dirty form
#[derive(Debug, Clone)]
pub enum NavigationPrompt {
    Disabled,
    Message(String),
    /// Called with `(next, current)`
    Custom(Callback<(NavigationRequest, NavigationRequest), PromptDecision>),
}

impl Default for NavigationPrompt {
    fn default() -> Self {
        NavigationPrompt::Message(DEFAULT_PROMPT_MESSAGE.to_string())
    }
}

/// Form card options
#[derive(Debug)]
pub struct FormCardOptions<F> {
    pub submit: SubmitOptions<F>,
    pub reset_content: String,
    pub submit_content: String,
    /// Shown next to the buttons after a successful save
    pub submit_success_message: Option<String>,
    pub prompt: NavigationPrompt,
    pub sectioned: bool,
    pub class_name: Option<String>,
    /// Reset the form when it is handed new initial values
    pub enable_reinitialize: bool,
    /// Called after the form has been reset
    pub on_reset: Option<Callback<()>>,
}

impl<F> Default for FormCardOptions<F> {
    fn default() -> Self {
        Self {
            submit: SubmitOptions::default(),
            reset_content: "Reset".to_string(),
            submit_content: "Save".to_string(),
            submit_success_message: Some("Saved".to_string()),
            prompt: NavigationPrompt::default(),
            sectioned: false,
            class_name: None,
            enable_reinitialize: true,
            on_reset: None,
        }
    }
}

impl<F> FormCardOptions<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_submit_options(mut self, submit: SubmitOptions<F>) -> Self {
        self.submit = submit;
        self
    }

    pub fn with_reset_content(mut self, content: impl Into<String>) -> Self {
        self.reset_content = content.into();
        self
    }

    pub fn with_submit_content(mut self, content: impl Into<String>) -> Self {
        self.submit_content = content.into();
        self
    }

    pub fn with_success_message(mut self, message: Option<String>) -> Self {
        self.submit_success_message = message;
        self
    }

    pub fn with_prompt(mut self, prompt: NavigationPrompt) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn sectioned(mut self, sectioned: bool) -> Self {
        self.sectioned = sectioned;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_reinitialize(mut self, enable: bool) -> Self {
        self.enable_reinitialize = enable;
        self
    }

    pub fn on_reset(mut self, callback: Callback<()>) -> Self {
        self.on_reset = Some(callback);
        self
    }
}

/// Everything the footer renders
#[derive(Debug, Clone)]
pub struct FooterModel {
    pub layout: LayoutProps,
    pub summary: Option<ErrorSummary>,
    pub success_message: Option<String>,
    pub reset_button: ButtonProps,
    pub submit_button: ButtonProps,
}

/// A form card bound to one submit handler
#[derive(Debug)]
pub struct FormCard<F> {
    controller: SubmitController<F>,
    reset_content: String,
    submit_content: String,
    submit_success_message: Option<String>,
    prompt: NavigationPrompt,
    sectioned: bool,
    class_name: Option<String>,
    enable_reinitialize: bool,
    on_reset: Option<Callback<()>>,
}

impl<F> FormCard<F>
where
    F: FormHandle + Clone + 'static,
{
    pub fn new<H: SubmitHandler + 'static>(handler: H, options: FormCardOptions<F>) -> Self {
        let FormCardOptions {
            submit,
            reset_content,
            submit_content,
            submit_success_message,
            prompt,
            sectioned,
            class_name,
            enable_reinitialize,
            on_reset,
        } = options;

        Self {
            controller: SubmitController::with_options(handler, submit),
            reset_content,
            submit_content,
            submit_success_message,
            prompt,
            sectioned,
            class_name,
            enable_reinitialize,
            on_reset,
        }
    }

    pub fn controller(&self) -> &SubmitController<F> {
        &self.controller
    }

    pub fn initial_status(&self) -> &FormStatus {
        &self.controller.options().initial_status
    }

    pub fn card_props(&self) -> CardProps {
        CardProps {
            title: None,
            sectioned: self.sectioned,
            overflow_visible: true,
            class_name: Some(match &self.class_name {
                Some(extra) => format!("bg-neutral-100 {extra}"),
                None => "bg-neutral-100".to_string(),
            }),
        }
    }

    pub fn footer(&self, form: &F) -> FooterModel {
        let status = form.status();
        let errors = form.errors();
        let touched = form.touched();
        let dirty = form.dirty();
        let is_submitting = form.is_submitting() || self.controller.is_submitting();

        let touched_error = errors
            .as_object()
            .is_some_and(|map| map.keys().any(|key| touched.get(key).is_some_and(is_truthy)));
        let justify = if status.error().is_some() || touched_error {
            Justification::SpaceBetween
        } else {
            Justification::End
        };

        let success_message = if status.is_success() && !dirty {
            self.submit_success_message.clone()
        } else {
            None
        };

        FooterModel {
            layout: LayoutProps {
                direction: vec![Direction::Column, Direction::Row],
                align: Alignment::End,
                justify,
                item_spacing: Some(Dimension::from(3)),
                padding_horizontal: Some(Dimension::responsive([4u16, 5])),
                padding_vertical: Some(Dimension::from(4)),
                background: Some("white".to_string()),
            },
            summary: ErrorSummary::from_form(form),
            success_message,
            reset_button: ButtonProps {
                content: self.reset_content.clone(),
                button_type: ButtonType::Reset,
                disabled: !dirty || is_submitting,
                ..Default::default()
            },
            submit_button: ButtonProps {
                content: self.submit_content.clone(),
                button_type: ButtonType::Submit,
                variant: ButtonVariant::Primary,
                loading: is_submitting,
                ..Default::default()
            },
        }
    }

    /// Whether leaving the page should be checked at all
    pub fn prompt_active(&self, form: &F) -> bool {
        !matches!(self.prompt, NavigationPrompt::Disabled)
            && !form.is_submitting()
            && !self.controller.is_submitting()
            && form.dirty()
    }

    /// Decide whether navigating from `current` to `next` needs confirmation
    pub fn navigation_prompt(
        &self,
        form: &F,
        current: &NavigationRequest,
        next: &NavigationRequest,
    ) -> PromptDecision {
        if !self.prompt_active(form) || next.pathname == current.pathname {
            return PromptDecision::Allow;
        }
        match &self.prompt {
            NavigationPrompt::Disabled => PromptDecision::Allow,
            NavigationPrompt::Message(message) => PromptDecision::Confirm(message.clone()),
            NavigationPrompt::Custom(decide) => decide.call((next.clone(), current.clone())),
        }
    }

    pub async fn submit(&self, form: &F) -> Result<Value, SubmitError> {
        self.controller.submit(form).await
    }

    /// Discard edits: back to the baseline values and the initial status
    pub fn reset(&self, form: &F) {
        self.controller.cancel_pending_reset();
        form.reset_form(form.initial_values(), self.initial_status().clone());
        if let Some(on_reset) = &self.on_reset {
            on_reset.call(());
        }
    }

    /// Adopt new initial values. Returns whether the form was reset.
    pub fn reinitialize(&self, form: &F, values: Value) -> bool {
        if !self.enable_reinitialize || values == form.initial_values() {
            return false;
        }
        debug!("Reinitializing form with new initial values");
        self.controller.cancel_pending_reset();
        form.reset_form(values, self.initial_status().clone());
        true
    }

    /// Context carrying the form, for adapters bound through
    /// [`FieldAdapter::bind_from_context`](super::adapters::FieldAdapter::bind_from_context)
    pub fn context(&self, form: &F) -> crate::Result<Context>
    where
        F: Debug,
    {
        let context = Context::new();
        context.provide(form.clone())?;
        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{MemoryForm, SubmitRequest};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    async fn echo(request: SubmitRequest) -> Result<Value, SubmitError> {
        Ok(request.values)
    }

    fn card(options: FormCardOptions<MemoryForm>) -> FormCard<MemoryForm> {
        FormCard::new(echo, options)
    }

    #[test]
    fn test_footer_defaults() {
        let form = MemoryForm::new(json!({ "name": "" }));
        let footer = card(FormCardOptions::new()).footer(&form);

        assert_eq!(footer.layout.justify, Justification::End);
        assert!(footer.summary.is_none());
        assert!(footer.success_message.is_none());
        assert!(footer.reset_button.disabled);
        assert_eq!(footer.reset_button.content, "Reset");
        assert_eq!(footer.submit_button.content, "Save");
        assert_eq!(footer.submit_button.variant, ButtonVariant::Primary);
        assert!(!footer.submit_button.loading);
    }

    #[test]
    fn test_footer_with_touched_error() {
        let form = MemoryForm::new(json!({ "name": "" }));
        form.set_field_value("name", json!("x"));
        form.set_field_touched("name", true, true);
        form.set_errors(serde_json::Map::from_iter([("name".to_string(), json!("too short"))]));

        let footer = card(FormCardOptions::new()).footer(&form);
        assert_eq!(footer.layout.justify, Justification::SpaceBetween);
        assert_eq!(footer.summary.unwrap().field_errors, vec!["too short"]);
        assert!(!footer.reset_button.disabled);
    }

    #[tokio::test]
    async fn test_success_message_after_save() {
        let form = MemoryForm::new(json!({ "name": "" }));
        let card = card(FormCardOptions::new());
        form.set_field_value("name", json!("Ada"));

        card.submit(&form).await.unwrap();

        let footer = card.footer(&form);
        assert_eq!(footer.success_message.as_deref(), Some("Saved"));
        assert!(footer.reset_button.disabled);
    }

    #[test]
    fn test_navigation_prompt() {
        let form = MemoryForm::new(json!({ "name": "" }));
        let card = card(FormCardOptions::new());
        let here = NavigationRequest::new("/users/1");
        let there = NavigationRequest::new("/users");

        assert_eq!(card.navigation_prompt(&form, &here, &there), PromptDecision::Allow);

        form.set_field_value("name", json!("Ada"));
        assert_eq!(
            card.navigation_prompt(&form, &here, &there),
            PromptDecision::Confirm(DEFAULT_PROMPT_MESSAGE.to_string())
        );
        assert_eq!(card.navigation_prompt(&form, &here, &here), PromptDecision::Allow);
    }

    #[test]
    fn test_custom_prompt() {
        let form = MemoryForm::new(json!({ "name": "" }));
        form.set_field_value("name", json!("Ada"));
        let prompt = NavigationPrompt::Custom(Callback::new(
            |(next, _current): (NavigationRequest, NavigationRequest)| {
                if next.pathname.starts_with("/users") {
                    PromptDecision::Allow
                } else {
                    PromptDecision::Confirm("Leave?".to_string())
                }
            },
        ));
        let card = card(FormCardOptions::new().with_prompt(prompt));
        let here = NavigationRequest::new("/users/1");

        assert_eq!(
            card.navigation_prompt(&form, &here, &NavigationRequest::new("/users/2")),
            PromptDecision::Allow
        );
        assert_eq!(
            card.navigation_prompt(&form, &here, &NavigationRequest::new("/home")),
            PromptDecision::Confirm("Leave?".to_string())
        );
    }

    #[test]
    fn test_reset_and_reinitialize() {
        let resets = Arc::new(AtomicUsize::new(0));
        let counter = resets.clone();
        let card = card(FormCardOptions::new().on_reset(Callback::new(move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        })));
        let form = MemoryForm::new(json!({ "name": "" }));

        form.set_field_value("name", json!("Ada"));
        card.reset(&form);
        assert_eq!(form.values(), json!({ "name": "" }));
        assert_eq!(resets.load(Ordering::SeqCst), 1);

        assert!(!card.reinitialize(&form, json!({ "name": "" })));
        assert!(card.reinitialize(&form, json!({ "name": "Grace" })));
        assert_eq!(form.values(), json!({ "name": "Grace" }));

        let fixed = FormCard::<MemoryForm>::new(echo, FormCardOptions::new().with_reinitialize(false));
        assert!(!fixed.reinitialize(&form, json!({ "name": "Linus" })));
    }

    #[test]
    fn test_context_carries_form() {
        let form = MemoryForm::new(json!({ "name": "Ada" }));
        let context = card(FormCardOptions::new()).context(&form).unwrap();
        let bound: MemoryForm = context.consume().unwrap();
        assert_eq!(bound.value("name"), Some(json!("Ada")));
    }
}
