//! Context passing and callback props

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};

/// A type-erased value that can be stored in a context
pub trait ContextValue: Any + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn debug_string(&self) -> String;
}

impl<T: Any + Clone + Send + Sync + Debug + 'static> ContextValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn debug_string(&self) -> String {
        format!("{self:?}")
    }
}

/// Provider for component context
#[derive(Clone, Default)]
pub struct ContextProvider {
    /// Parent context provider
    parent: Option<Box<ContextProvider>>,
    values: Arc<RwLock<HashMap<TypeId, Box<dyn ContextValue>>>>,
}

impl Debug for ContextProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self
            .values
            .read()
            .map(|values| values.values().map(|value| value.debug_string()).collect())
            .unwrap_or_default();
        f.debug_struct("ContextProvider")
            .field("parent", &self.parent.is_some())
            .field("values", &values)
            .finish()
    }
}

impl ContextProvider {
    /// Create a new context provider
    pub fn new() -> Self {
        Self {
            parent: None,
            values: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a context provider with a parent
    pub fn with_parent(parent: ContextProvider) -> Self {
        Self {
            parent: Some(Box::new(parent)),
            values: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Set a value in the context
    pub fn provide<T: Clone + Send + Sync + Debug + 'static>(&self, value: T) -> Result<(), String> {
        let type_id = TypeId::of::<T>();
        if let Ok(mut values) = self.values.write() {
            values.insert(type_id, Box::new(value));
            Ok(())
        } else {
            Err("Failed to acquire write lock for context values".to_string())
        }
    }

    /// Get a value from the context, falling back to the parent chain
    pub fn consume<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
        let type_id = TypeId::of::<T>();

        let result = self.values.read().ok().and_then(|values| {
            values
                .get(&type_id)
                .and_then(|value| value.as_any().downcast_ref::<T>().cloned())
        });

        if result.is_some() {
            return result;
        }

        self.parent.as_ref().and_then(|parent| parent.consume::<T>())
    }
}

/// A callback function that can be passed as a prop
pub struct Callback<Args, Ret = ()> {
    /// The function to call
    func: Arc<dyn Fn(Args) -> Ret + Send + Sync>,
}

impl<Args: 'static, Ret: 'static> Clone for Callback<Args, Ret> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
        }
    }
}

impl<Args, Ret> Debug for Callback<Args, Ret> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Callback")
    }
}

impl<Args, Ret> Callback<Args, Ret> {
    /// Create a new callback
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(Args) -> Ret + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Call the callback with the given arguments
    pub fn call(&self, args: Args) -> Ret {
        (self.func)(args)
    }
}

/// Convenience function for creating a callback
pub fn callback<F, Args, Ret>(func: F) -> Callback<Args, Ret>
where
    F: Fn(Args) -> Ret + Send + Sync + 'static,
{
    Callback::new(func)
}
