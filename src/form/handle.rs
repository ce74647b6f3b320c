//! The form-state provider contract

use serde_json::{Map, Value};

use super::path::{get_nested_value, lookup_error, resolve_touched};
use super::status::FormStatus;

/// Handle to a form-state provider.
///
/// The provider owns values, touched flags, errors and the submission
/// counters; adapters only read snapshots and issue updates through it.
/// Implementations use interior mutability so a handle can be shared with
/// callbacks and timer tasks.
pub trait FormHandle: Send + Sync {
    /// Current values
    fn values(&self) -> Value;

    /// Baseline values the form was last reset to
    fn initial_values(&self) -> Value;

    /// Touched flags, shaped like the values
    fn touched(&self) -> Value;

    /// Validation errors keyed by field path
    fn errors(&self) -> Value;

    fn status(&self) -> FormStatus;

    /// Number of submission attempts since the last reset
    fn submit_count(&self) -> u32;

    fn is_submitting(&self) -> bool;

    /// Whether the values differ from the baseline
    fn dirty(&self) -> bool {
        self.values() != self.initial_values()
    }

    /// Value of a single field, `None` when absent
    fn value(&self, path: &str) -> Option<Value> {
        get_nested_value(&self.values(), path).cloned()
    }

    fn set_field_value(&self, path: &str, value: Value);

    fn set_field_touched(&self, path: &str, touched: bool, should_validate: bool);

    fn set_status(&self, status: FormStatus);

    /// Replace the error tree with the given entries
    fn set_errors(&self, errors: Map<String, Value>);

    /// Reset values and baseline to `values`, clear touched flags and errors
    fn reset_form(&self, values: Value, status: FormStatus);
}

/// Observed state of one field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub name: String,
    pub value: Option<Value>,
    pub touched: bool,
    pub error: Option<String>,
}

impl FieldState {
    /// Read the current state of `path` from the form
    pub fn observe<F: FormHandle + ?Sized>(form: &F, path: &str) -> Self {
        Self {
            name: path.to_string(),
            value: form.value(path),
            touched: resolve_touched(&form.touched(), path),
            error: lookup_error(&form.errors(), path),
        }
    }
}
