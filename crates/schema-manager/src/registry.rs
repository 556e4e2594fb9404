//! The schema registry: a shared, cloneable handle over a name → schema map.

use serde_json::Value;
use std::sync::{Arc, RwLock};

use value_type_manager::{TypeRegistry, ValueTypeManager};

use crate::error::SchemaError;
use crate::field::FieldDefinition;
use crate::result::{fold_array_elements, CheckResult};
use crate::schema::Schema;
use crate::type_name::parse_type_name;

/// Construction-time configuration.
#[derive(Default)]
pub struct SchemaRegistryOptions {
    /// The primitive-type capability. When absent, the registry owns a
    /// [`ValueTypeManager`] pre-loaded with the built-in types.
    pub types: Option<Arc<dyn TypeRegistry>>,
    /// When true, every validation path stops accumulating further
    /// sibling/element errors after the first failure at that nesting level.
    pub abort_early: bool,
}

#[derive(Default)]
struct RegistryInner {
    /// Insertion-ordered; re-registering a name replaces the entry in place.
    schemas: Vec<(String, Schema)>,
}

/// Registry of named schemas plus the primitive-type capability.
///
/// Cloning produces a handle to shared state. Schemas hold such a handle
/// back to their owning registry, which is what makes forward references
/// legal: a field may name a schema registered later, as long as the name
/// exists by the time validation runs.
#[derive(Clone)]
pub struct SchemaRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    types: Arc<dyn TypeRegistry>,
    abort_early: bool,
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new(SchemaRegistryOptions::default())
    }
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read().unwrap();
        f.debug_struct("SchemaRegistry")
            .field(
                "schemas",
                &inner
                    .schemas
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>(),
            )
            .field("abort_early", &self.abort_early)
            .finish()
    }
}

impl SchemaRegistry {
    pub fn new(options: SchemaRegistryOptions) -> Self {
        let types = options
            .types
            .unwrap_or_else(|| Arc::new(ValueTypeManager::with_builtins()));
        Self {
            inner: Arc::new(RwLock::new(RegistryInner::default())),
            types,
            abort_early: options.abort_early,
        }
    }

    /// The primitive-type capability this registry consults for leaf values.
    pub fn types(&self) -> &Arc<dyn TypeRegistry> {
        &self.types
    }

    pub fn is_abort_early(&self) -> bool {
        self.abort_early
    }

    /// Build a schema bound to this registry and store it under `name`,
    /// overwriting any prior entry. Returns `&self` for chaining.
    pub fn register<N, K, F>(&self, name: N, fields: F) -> &Self
    where
        N: Into<String>,
        K: Into<String>,
        F: IntoIterator<Item = (K, FieldDefinition)>,
    {
        let name = name.into();
        let schema = Schema::new(self.clone(), collect_fields(fields), name.clone());
        let mut inner = self.inner.write().unwrap();
        match inner.schemas.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = schema,
            None => inner.schemas.push((name, schema)),
        }
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Clone the named schema's handle out of the lock, so no guard is held
    /// across recursive validation.
    pub(crate) fn lookup(&self, name: &str) -> Option<Schema> {
        let inner = self.inner.read().unwrap();
        inner
            .schemas
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, schema)| schema.clone())
    }

    /// Look up a registered schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotFound`] when `name` was never registered.
    /// This is the programmer-error channel; guard with [`has`](Self::has)
    /// when absence is expected.
    pub fn get(&self, name: &str) -> Result<Schema, SchemaError> {
        self.lookup(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))
    }

    /// Build an anonymous schema bound to this registry without storing it.
    pub fn create<K, F>(&self, fields: F) -> Schema
    where
        K: Into<String>,
        F: IntoIterator<Item = (K, FieldDefinition)>,
    {
        Schema::new(self.clone(), collect_fields(fields), String::new())
    }

    /// Build a named schema bound to this registry without storing it.
    pub fn create_named<N, K, F>(&self, name: N, fields: F) -> Schema
    where
        N: Into<String>,
        K: Into<String>,
        F: IntoIterator<Item = (K, FieldDefinition)>,
    {
        Schema::new(self.clone(), collect_fields(fields), name.into())
    }

    /// Visit registered schemas in insertion order.
    pub fn for_each(&self, mut visitor: impl FnMut(&str, &Schema)) {
        let entries: Vec<(String, Schema)> = {
            let inner = self.inner.read().unwrap();
            inner.schemas.clone()
        };
        for (name, schema) in &entries {
            visitor(name, schema);
        }
    }

    /// Top-level validation entry point.
    ///
    /// `type_ref` naming a registered schema (array-suffixed or not)
    /// dispatches to that schema; anything else goes down the primitive
    /// path, whose failures are decorated with empty diagnostic arrays so
    /// both paths can be consumed uniformly.
    pub fn validate(&self, type_ref: &str, input: &Value) -> CheckResult {
        let parsed = parse_type_name(type_ref);
        if let Some(schema) = self.lookup(parsed.name) {
            return schema.validate_value(input, parsed.is_array);
        }
        let ret = self.validate_primitive(parsed.name, parsed.is_array, input, None, None);
        if ret.ok {
            ret
        } else {
            ret.with_empty_diagnostics()
        }
    }

    /// Validate a primitive leaf (or homogeneous array of leaves) through
    /// the type capability.
    pub fn validate_primitive(
        &self,
        name: &str,
        is_array: bool,
        input: &Value,
        params: Option<&Value>,
        format: Option<bool>,
    ) -> CheckResult {
        if !is_array {
            return self.types.value(name, input, params, format).into();
        }
        let Some(items) = input.as_array() else {
            return CheckResult::failure(
                format!("expected an {} array but got {}", name, input),
                input.clone(),
            );
        };
        fold_array_elements(items, self.abort_early, |element| {
            self.types.value(name, element, params, format).into()
        })
    }
}

fn collect_fields<K, F>(fields: F) -> Vec<(String, FieldDefinition)>
where
    K: Into<String>,
    F: IntoIterator<Item = (K, FieldDefinition)>,
{
    fields
        .into_iter()
        .map(|(name, def)| (name.into(), def))
        .collect()
}
