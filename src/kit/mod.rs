// OrbitKit components targeted by the form bindings

pub mod components;
pub mod dimension;

/// Re-export of common components for convenience
pub mod prelude {
    pub use crate::kit::components::{
        Button, Card, FieldCheckbox, FieldDateTime, FieldNumber, FieldRadioGroup, FieldSelect,
        FieldText, FieldTextDebounce, InputAttributes, Layout,
    };
    pub use crate::kit::dimension::Dimension;
}
