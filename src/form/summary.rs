//! Error summary shown in a form footer

use serde::Serialize;
use serde_json::Value;

use super::handle::FormHandle;
use super::path::resolve_touched;
use super::status::SubmitError;

/// Heading of the summary popover
pub const SUMMARY_HEADING: &str = "Validation Errors";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitErrorSummary {
    pub message: String,
    pub request_id: Option<String>,
}

/// Submission error plus the messages of touched fields
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorSummary {
    pub submit_error: Option<SubmitErrorSummary>,
    pub field_errors: Vec<String>,
}

impl ErrorSummary {
    /// Summary of the form's current state
    pub fn from_form<F: FormHandle + ?Sized>(form: &F) -> Option<Self> {
        let status = form.status();
        aggregate(status.error(), &form.errors(), &form.touched())
    }

    pub fn is_empty(&self) -> bool {
        self.submit_error.is_none() && self.field_errors.is_empty()
    }
}

/// Merge a submission error with the errors of touched fields.
///
/// Field errors keep the order of the error tree. `None` when there is
/// nothing to show.
pub fn aggregate(submit_error: Option<&SubmitError>, errors: &Value, touched: &Value) -> Option<ErrorSummary> {
    let mut field_errors = Vec::new();
    collect_touched(errors, None, touched, &mut field_errors);

    let summary = ErrorSummary {
        submit_error: submit_error.map(|error| SubmitErrorSummary {
            message: error.message().to_string(),
            request_id: error.request_id.clone(),
        }),
        field_errors,
    };
    (!summary.is_empty()).then_some(summary)
}

fn collect_touched(errors: &Value, prefix: Option<&str>, touched: &Value, out: &mut Vec<String>) {
    let join = |key: &str| match prefix {
        Some(prefix) => format!("{prefix}.{key}"),
        None => key.to_string(),
    };

    match errors {
        Value::Object(map) => {
            for (key, entry) in map {
                visit(entry, &join(key), touched, out);
            }
        }
        Value::Array(items) => {
            for (index, entry) in items.iter().enumerate() {
                visit(entry, &join(&index.to_string()), touched, out);
            }
        }
        _ => {}
    }
}

fn visit(entry: &Value, path: &str, touched: &Value, out: &mut Vec<String>) {
    match entry {
        Value::String(message) if !message.is_empty() => {
            if resolve_touched(touched, path) {
                out.push(message.clone());
            }
        }
        Value::Object(_) | Value::Array(_) => collect_touched(entry, Some(path), touched, out),
        _ => {}
    }
}
