//! Submission lifecycle
//!
//! A [`SubmitController`] calls the caller's submit handler with the form's
//! values, records the outcome in the form status and schedules the status
//! to clear again after a configurable delay.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use serde_json::Value;

use super::handle::FormHandle;
use super::status::{FormStatus, SubmitError};
use super::timer::ResetTimer;
use crate::component::Callback;

/// What the submit handler receives
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub values: Value,
    pub initial_values: Value,
}

/// External submit function
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    async fn submit(&self, request: SubmitRequest) -> Result<Value, SubmitError>;
}

#[async_trait]
impl<H, Fut> SubmitHandler for H
where
    H: Fn(SubmitRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, SubmitError>> + Send + 'static,
{
    async fn submit(&self, request: SubmitRequest) -> Result<Value, SubmitError> {
        (self)(request).await
    }
}

/// Passed to the success callback
#[derive(Debug, Clone)]
pub struct SubmitSuccess<F> {
    pub result: Value,
    /// Values at the time of submission
    pub values: Value,
    pub form: F,
}

/// Passed to the error callback
#[derive(Debug, Clone)]
pub struct SubmitFailure<F> {
    pub error: SubmitError,
    /// Values at the time of submission
    pub values: Value,
    pub form: F,
}

/// Submission options
#[derive(Debug)]
pub struct SubmitOptions<F> {
    /// How long a success status stays; zero keeps it
    pub success_timeout: Duration,
    /// How long an error status stays; zero keeps it
    pub error_timeout: Duration,
    /// Status restored when a timer fires or the form is reset
    pub initial_status: FormStatus,
    /// Receives the result instead of resetting the form to it
    pub set_init_value: Option<Callback<Value>>,
    pub success_callback: Option<Callback<SubmitSuccess<F>>>,
    pub error_callback: Option<Callback<SubmitFailure<F>>>,
}

impl<F> Default for SubmitOptions<F> {
    fn default() -> Self {
        Self {
            success_timeout: Duration::from_millis(5000),
            error_timeout: Duration::ZERO,
            initial_status: FormStatus::Idle,
            set_init_value: None,
            success_callback: None,
            error_callback: None,
        }
    }
}

impl<F> SubmitOptions<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_success_timeout(mut self, timeout: Duration) -> Self {
        self.success_timeout = timeout;
        self
    }

    pub fn with_error_timeout(mut self, timeout: Duration) -> Self {
        self.error_timeout = timeout;
        self
    }

    pub fn with_initial_status(mut self, status: FormStatus) -> Self {
        self.initial_status = status;
        self
    }

    pub fn with_set_init_value(mut self, hook: Callback<Value>) -> Self {
        self.set_init_value = Some(hook);
        self
    }

    pub fn on_success(mut self, callback: Callback<SubmitSuccess<F>>) -> Self {
        self.success_callback = Some(callback);
        self
    }

    pub fn on_error(mut self, callback: Callback<SubmitFailure<F>>) -> Self {
        self.error_callback = Some(callback);
        self
    }
}

/// Lifecycle phase of a form's submissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Drives submissions for one form
pub struct SubmitController<F> {
    handler: Arc<dyn SubmitHandler>,
    options: SubmitOptions<F>,
    timer: ResetTimer,
    in_flight: AtomicUsize,
}

impl<F> std::fmt::Debug for SubmitController<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmitController")
            .field("success_timeout", &self.options.success_timeout)
            .field("error_timeout", &self.options.error_timeout)
            .field("in_flight", &self.in_flight.load(Ordering::SeqCst))
            .field("timer", &self.timer)
            .finish()
    }
}

struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<F> SubmitController<F>
where
    F: FormHandle + Clone + 'static,
{
    /// Controller with default options
    pub fn new<H: SubmitHandler + 'static>(handler: H) -> Self {
        Self::with_options(handler, SubmitOptions::default())
    }

    pub fn with_options<H: SubmitHandler + 'static>(handler: H, options: SubmitOptions<F>) -> Self {
        Self {
            handler: Arc::new(handler),
            options,
            timer: ResetTimer::new(),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn options(&self) -> &SubmitOptions<F> {
        &self.options
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn phase(&self, form: &F) -> SubmitPhase {
        if self.is_submitting() {
            return SubmitPhase::Submitting;
        }
        match form.status() {
            FormStatus::Idle => SubmitPhase::Idle,
            FormStatus::Success { .. } => SubmitPhase::Success,
            FormStatus::Failed { .. } => SubmitPhase::Failed,
        }
    }

    pub fn has_pending_reset(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn cancel_pending_reset(&self) -> bool {
        self.timer.cancel()
    }

    /// Cancel the pending timer and restore the initial status
    pub fn reset(&self, form: &F) {
        self.timer.cancel();
        form.set_status(self.options.initial_status.clone());
    }

    /// Submit the form's current values and record the outcome.
    ///
    /// The outcome is returned as well; the form status already reflects it.
    pub async fn submit(&self, form: &F) -> Result<Value, SubmitError> {
        self.timer.cancel();
        let _guard = InFlight::enter(&self.in_flight);

        let values = form.values();
        let request = SubmitRequest {
            values: values.clone(),
            initial_values: form.initial_values(),
        };
        debug!("Submitting form");

        match self.handler.submit(request).await {
            Ok(result) => {
                info!("Form submitted");
                self.on_success(form, values, result.clone());
                Ok(result)
            }
            Err(error) => {
                info!("Form submission failed: {error}");
                self.on_failure(form, values, error.clone());
                Err(error)
            }
        }
    }

    fn on_success(&self, form: &F, values: Value, result: Value) {
        let status = FormStatus::Success {
            result: result.clone(),
        };
        match &self.options.set_init_value {
            Some(hook) => {
                hook.call(result.clone());
                form.set_status(status);
            }
            None => form.reset_form(result.clone(), status),
        }

        self.schedule_reset(form, self.options.success_timeout);

        if let Some(callback) = &self.options.success_callback {
            callback.call(SubmitSuccess {
                result,
                values,
                form: form.clone(),
            });
        }
    }

    fn on_failure(&self, form: &F, values: Value, error: SubmitError) {
        form.set_status(FormStatus::Failed {
            error: error.clone(),
        });

        self.schedule_reset(form, self.options.error_timeout);

        if let Some(params) = &error.params {
            form.set_errors(params.clone());
        }

        if let Some(callback) = &self.options.error_callback {
            callback.call(SubmitFailure {
                error,
                values,
                form: form.clone(),
            });
        }
    }

    fn schedule_reset(&self, form: &F, delay: Duration) {
        if delay.is_zero() {
            return;
        }
        let form = form.clone();
        let status = self.options.initial_status.clone();
        self.timer.schedule(delay, move || form.set_status(status));
    }
}
