//! Field validity
//!
//! A field shows its error only once the user has interacted with it or the
//! form has been submitted at least once. Every adapter goes through
//! [`derive_validity`] so the rule is the same for all components.

use serde_json::Value;

use super::handle::FormHandle;
use super::path::{lookup_error, resolve_touched};

/// Display validity of one field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Validity {
    pub is_invalid: bool,
    /// Set only when `is_invalid`
    pub validation_text: Option<String>,
}

impl Validity {
    /// Validity of `path` in the form's current state
    pub fn observe<F: FormHandle + ?Sized>(form: &F, path: &str) -> Self {
        derive_validity(&form.errors(), &form.touched(), path, form.submit_count())
    }

    /// Validity of a checkbox belonging to the group `group_name`
    pub fn observe_group<F: FormHandle + ?Sized>(form: &F, path: &str, group_name: &str) -> Self {
        derive_group_validity(
            &form.errors(),
            &form.touched(),
            path,
            group_name,
            form.submit_count(),
        )
    }
}

pub fn derive_validity(errors: &Value, touched: &Value, path: &str, submit_count: u32) -> Validity {
    let error = classify(errors, touched, path, submit_count);
    Validity {
        is_invalid: error.is_some(),
        validation_text: error,
    }
}

/// Validity of a grouped field.
///
/// Invalid when the field itself is, or when the group has an error and the
/// group was touched or the form submitted. The text is the field's own.
pub fn derive_group_validity(
    errors: &Value,
    touched: &Value,
    path: &str,
    group_name: &str,
    submit_count: u32,
) -> Validity {
    let own = classify(errors, touched, path, submit_count);
    let group = classify(errors, touched, group_name, submit_count);
    Validity {
        is_invalid: own.is_some() || group.is_some(),
        validation_text: own,
    }
}

/// The error of `path` if it should be displayed
pub(crate) fn classify(errors: &Value, touched: &Value, path: &str, submit_count: u32) -> Option<String> {
    let error = lookup_error(errors, path)?;
    (submit_count > 0 || resolve_touched(touched, path)).then_some(error)
}
