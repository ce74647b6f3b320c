//! In-memory form-state provider

use std::sync::{Arc, Mutex, PoisonError};

use serde_json::{Map, Value};

use super::handle::FormHandle;
use super::path::set_nested_value;
use super::status::{FormStatus, SubmitError};
use super::submit::SubmitController;

/// Plain data behind a [`MemoryForm`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormSnapshot {
    pub values: Value,
    pub initial_values: Value,
    pub touched: Value,
    pub errors: Value,
    pub status: FormStatus,
    pub submit_count: u32,
    pub is_submitting: bool,
}

/// Shared in-memory form state.
///
/// Clones share the same state. There is no validation engine: errors are
/// whatever was last passed to [`FormHandle::set_errors`].
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    inner: Arc<Mutex<FormSnapshot>>,
}

impl MemoryForm {
    pub fn new(initial_values: Value) -> Self {
        Self::with_status(initial_values, FormStatus::Idle)
    }

    pub fn with_status(initial_values: Value, status: FormStatus) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FormSnapshot {
                values: initial_values.clone(),
                initial_values,
                touched: Value::Object(Map::new()),
                errors: Value::Object(Map::new()),
                status,
                submit_count: 0,
                is_submitting: false,
            })),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> FormSnapshot {
        self.read(Clone::clone)
    }

    /// Run a submission the way a form provider does: count the attempt and
    /// keep `is_submitting` set while the controller works.
    pub async fn handle_submit(&self, controller: &SubmitController<Self>) -> Result<Value, SubmitError> {
        self.update(|state| {
            state.submit_count += 1;
            state.is_submitting = true;
        });
        let outcome = controller.submit(self).await;
        self.update(|state| state.is_submitting = false);
        outcome
    }

    fn read<R>(&self, f: impl FnOnce(&FormSnapshot) -> R) -> R {
        let state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn update(&self, f: impl FnOnce(&mut FormSnapshot)) {
        let mut state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state);
    }
}

impl FormHandle for MemoryForm {
    fn values(&self) -> Value {
        self.read(|state| state.values.clone())
    }

    fn initial_values(&self) -> Value {
        self.read(|state| state.initial_values.clone())
    }

    fn touched(&self) -> Value {
        self.read(|state| state.touched.clone())
    }

    fn errors(&self) -> Value {
        self.read(|state| state.errors.clone())
    }

    fn status(&self) -> FormStatus {
        self.read(|state| state.status.clone())
    }

    fn submit_count(&self) -> u32 {
        self.read(|state| state.submit_count)
    }

    fn is_submitting(&self) -> bool {
        self.read(|state| state.is_submitting)
    }

    fn set_field_value(&self, path: &str, value: Value) {
        self.update(|state| set_nested_value(&mut state.values, path, value));
    }

    fn set_field_touched(&self, path: &str, touched: bool, _should_validate: bool) {
        self.update(|state| set_nested_value(&mut state.touched, path, Value::Bool(touched)));
    }

    fn set_status(&self, status: FormStatus) {
        self.update(|state| state.status = status);
    }

    fn set_errors(&self, errors: Map<String, Value>) {
        self.update(|state| state.errors = Value::Object(errors));
    }

    fn reset_form(&self, values: Value, status: FormStatus) {
        self.update(|state| {
            state.values = values.clone();
            state.initial_values = values;
            state.touched = Value::Object(Map::new());
            state.errors = Value::Object(Map::new());
            state.status = status;
            state.submit_count = 0;
            state.is_submitting = false;
        });
    }
}
