// Error message block shown for a failed submission

use super::status::SubmitError;

/// Props of the error message block
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorMessageProps {
    pub message: String,
    pub request_id: String,
    /// Compact variant used inside popovers
    pub small: bool,
}

impl ErrorMessageProps {
    pub fn from_error(error: &SubmitError) -> Self {
        Self {
            message: error.message().to_string(),
            request_id: error.request_id.clone().unwrap_or_default(),
            small: false,
        }
    }

    pub fn small(mut self) -> Self {
        self.small = true;
        self
    }

    /// Text of the request id line
    pub fn request_line(&self) -> String {
        format!("request id: {}", self.request_id)
    }
}
