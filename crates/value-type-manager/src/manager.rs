//! The type registry: a shared, cloneable handle over a name → type map.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::builtin::register_builtin_types;
use crate::error::TypeError;
use crate::result::TypeCheckResult;
use crate::value_type::{TypeInfo, ValueType};

/// The capability contract consumed by schema layers.
///
/// Implementations must never panic on unknown type names or malformed
/// input; every outcome is a [`TypeCheckResult`].
pub trait TypeRegistry: Send + Sync {
    /// Whether `name` is a registered type.
    fn has(&self, name: &str) -> bool;

    /// Projection metadata for a registered type, if any.
    fn info(&self, name: &str) -> Option<TypeInfo>;

    /// Validate (and optionally coerce) `input` as type `name`.
    fn value(
        &self,
        name: &str,
        input: &Value,
        params: Option<&Value>,
        format: Option<bool>,
    ) -> TypeCheckResult;
}

/// Inner state of a manager (type map).
#[derive(Default)]
struct ValueTypeManagerInner {
    types: HashMap<String, ValueType>,
}

/// A registry of named value types.
///
/// Cloning the manager clones a handle to shared state, so a handle stored
/// inside a schema layer observes types registered later.
#[derive(Clone, Default)]
pub struct ValueTypeManager {
    inner: Arc<RwLock<ValueTypeManagerInner>>,
}

impl std::fmt::Debug for ValueTypeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read().unwrap();
        f.debug_struct("ValueTypeManager")
            .field("types", &inner.types.len())
            .finish()
    }
}

impl ValueTypeManager {
    /// An empty manager with no registered types.
    pub fn new() -> Self {
        Self::default()
    }

    /// A manager pre-loaded with the built-in structural types.
    pub fn with_builtins() -> Self {
        let manager = Self::new();
        register_builtin_types(&manager);
        manager
    }

    /// Register a type under `name`, replacing any previous entry.
    pub fn register(&self, name: impl Into<String>, value_type: ValueType) -> &Self {
        let mut inner = self.inner.write().unwrap();
        inner.types.insert(name.into(), value_type);
        self
    }

    /// Look up a registered type.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::NotFound`] when `name` was never registered.
    pub fn get(&self, name: &str) -> Result<ValueType, TypeError> {
        let inner = self.inner.read().unwrap();
        inner
            .types
            .get(name)
            .cloned()
            .ok_or_else(|| TypeError::NotFound(name.to_string()))
    }
}

impl TypeRegistry for ValueTypeManager {
    fn has(&self, name: &str) -> bool {
        let inner = self.inner.read().unwrap();
        inner.types.contains_key(name)
    }

    fn info(&self, name: &str) -> Option<TypeInfo> {
        let inner = self.inner.read().unwrap();
        inner.types.get(name).map(|t| t.info().clone())
    }

    fn value(
        &self,
        name: &str,
        input: &Value,
        params: Option<&Value>,
        format: Option<bool>,
    ) -> TypeCheckResult {
        match self.get(name) {
            Ok(value_type) => value_type.value(input, params, format),
            Err(_) => {
                TypeCheckResult::failure(format!("unknown type \"{}\"", name), input.clone())
            }
        }
    }
}
