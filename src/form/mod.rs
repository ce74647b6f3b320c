//! Form bindings
//!
//! Connects a form-state provider ([`FormHandle`]) to the kit components:
//! field validity, change handlers, the submission lifecycle and the
//! card/group/summary pieces built around them.

pub mod adapters;
pub mod card;
pub mod change;
pub mod error_message;
pub mod group;
pub mod handle;
pub mod path;
pub mod status;
pub mod store;
pub mod submit;
pub mod summary;
pub mod timer;
pub mod validity;

pub use adapters::FieldAdapter;
pub use card::{FooterModel, FormCard, FormCardOptions, NavigationPrompt, NavigationRequest, PromptDecision};
pub use error_message::ErrorMessageProps;
pub use group::{FormGroup, FormGroupOptions, ValidationErrors, ValidationMarkup};
pub use handle::{FieldState, FormHandle};
pub use status::{FormStatus, SubmitError};
pub use store::{FormSnapshot, MemoryForm};
pub use submit::{
    SubmitController, SubmitFailure, SubmitHandler, SubmitOptions, SubmitPhase, SubmitRequest,
    SubmitSuccess,
};
pub use summary::{aggregate, ErrorSummary, SubmitErrorSummary};
pub use timer::ResetTimer;
pub use validity::{derive_group_validity, derive_validity, Validity};
