//! Component model for the OrbitKit form bindings
//!
//! Kit components are typed prop holders. The host framework owns rendering;
//! the form bindings only produce props and feed them through `create` and
//! `update`.

mod context;
mod error;
pub mod props;


pub use context::{callback, Callback, ContextProvider};
pub use error::ComponentError;
pub use props::{PropValidationError, PropValidator};

/// Props trait - implemented by all component props types
pub trait Props: 'static + Clone + Send + Sync {}

impl<T: 'static + Clone + Send + Sync> Props for T {}

/// Component trait - implemented by all kit components
pub trait Component: Send + Sync + 'static {
    /// The props type for this component
    type Props: Props;

    /// Create a new component instance
    fn create(props: Self::Props, context: Context) -> Self
    where
        Self: Sized;

    /// Check props before they are used to create or update the component
    fn validate_props(_props: &Self::Props) -> Result<(), ComponentError>
    where
        Self: Sized,
    {
        Ok(())
    }

    /// Called before component updates with new props
    fn before_update(&mut self, new_props: &Self::Props) -> Result<(), ComponentError>
    where
        Self: Sized,
    {
        Self::validate_props(new_props)
    }

    /// Update component with new props
    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError>;

    /// Current props of the component
    fn props(&self) -> &Self::Props;
}

/// Validate props and create the component from them
pub fn mount<C: Component>(props: C::Props, context: Context) -> Result<C, ComponentError> {
    C::validate_props(&props)?;
    Ok(C::create(props, context))
}

/// Apply new props to a component, running `before_update` first
pub fn apply_props<C: Component>(component: &mut C, props: C::Props) -> Result<(), ComponentError> {
    component.before_update(&props)?;
    component.update(props)
}

/// Context passed to components, carrying values provided by ancestors
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// Context provider for parent-child communication
    context_provider: ContextProvider,
}

impl Context {
    /// Create a new context
    pub fn new() -> Self {
        Self {
            context_provider: ContextProvider::new(),
        }
    }

    /// Create a new context with a parent context provider
    pub fn with_parent(parent: &Context) -> Self {
        Self {
            context_provider: ContextProvider::with_parent(parent.context_provider.clone()),
        }
    }

    /// Provide a value to this context and its children
    pub fn provide<T: Clone + Send + Sync + std::fmt::Debug + 'static>(
        &self,
        value: T,
    ) -> Result<(), ComponentError> {
        self.context_provider
            .provide(value)
            .map_err(ComponentError::LockError)
    }

    /// Look up a value provided here or by an ancestor
    pub fn consume<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
        self.context_provider.consume::<T>()
    }

    /// Get the underlying context provider
    pub fn provider(&self) -> &ContextProvider {
        &self.context_provider
    }
}
