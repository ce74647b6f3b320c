// Form bindings for OrbitKit
//
// Binds a form-state provider to the kit's field components: validity
// derivation, change handlers, the submission lifecycle and the form card.
pub mod component;
pub mod form;
pub mod kit;

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export of common types for convenience
pub mod prelude {
    pub use crate::component::{
        callback, Callback, Component, ComponentError, Context, PropValidationError,
        PropValidator, Props,
    };
    pub use crate::form::adapters::{
        FieldAdapter, FieldCheckboxAdapter, FieldCheckboxInAGroupAdapter, FieldDateTimeAdapter,
        FieldNumberAdapter, FieldRadioGroupAdapter, FieldSelectAdapter, FieldTextAdapter,
        FieldTextDebounceAdapter, FieldToggleAdapter,
    };
    pub use crate::form::{
        FormCard, FormCardOptions, FormHandle, FormStatus, MemoryForm, SubmitController,
        SubmitError, SubmitOptions, SubmitRequest, Validity,
    };
    pub use crate::kit::prelude::*;
}

/// Errors that can occur in the form bindings
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No form in context for field {0}")]
    MissingForm(String),

    #[error("Component error: {0}")]
    Component(#[from] component::ComponentError),

    #[error("Submission failed: {0}")]
    Submit(#[from] form::SubmitError),
}

/// Result type for the form bindings
pub type Result<T> = std::result::Result<T, Error>;
