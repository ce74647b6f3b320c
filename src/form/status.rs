//! Form status and submission errors

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Out-of-band form status carrying the last submission outcome
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum FormStatus {
    #[default]
    Idle,
    Success {
        result: Value,
    },
    Failed {
        error: SubmitError,
    },
}

impl FormStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, FormStatus::Success { .. })
    }

    /// The submission error, if the last submission failed
    pub fn error(&self) -> Option<&SubmitError> {
        match self {
            FormStatus::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// The submission result, if the last submission succeeded
    pub fn result(&self) -> Option<&Value> {
        match self {
            FormStatus::Success { result } => Some(result),
            _ => None,
        }
    }
}

/// Error returned by a submit handler.
///
/// Mirrors the API error body: a message, the id of the failed request and
/// optional per-field messages in `params`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, rename = "requestID", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Field path to message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
}

impl SubmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error_message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Attach a message for one field
    pub fn with_param(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(Map::new)
            .insert(path.into(), Value::String(message.into()));
        self
    }

    pub fn message(&self) -> &str {
        self.error_message.as_deref().unwrap_or("")
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error_message, &self.request_id) {
            (Some(message), Some(request_id)) => write!(f, "{message} (request id: {request_id})"),
            (Some(message), None) => write!(f, "{message}"),
            (None, Some(request_id)) => write!(f, "submission failed (request id: {request_id})"),
            (None, None) => write!(f, "submission failed"),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<anyhow::Error> for SubmitError {
    fn from(error: anyhow::Error) -> Self {
        // Handlers may wrap a structured error in anyhow context
        match error.downcast::<SubmitError>() {
            Ok(submit_error) => submit_error,
            Err(other) => SubmitError::new(format!("{other:#}")),
        }
    }
}
