//! Schema registration and validation — port of `@gz/schema-manager`.
//!
//! # Overview
//!
//! A [`SchemaRegistry`] maps schema names to [`Schema`] values. A schema is
//! an ordered set of field definitions; validating an input walks the fields
//! in declaration order, applies defaults, checks required fields, and
//! delegates leaf values to a pluggable
//! [`TypeRegistry`](value_type_manager::TypeRegistry) capability. Nested
//! schemas (embedded or referenced by name, `[]`-suffixed for arrays) are
//! validated recursively, with every failure re-wrapped with its path
//! context.
//!
//! Validation never fails with an error: the outcome is always a
//! [`CheckResult`] record carrying a success flag, a newline-joined message
//! trace, structured diagnostics, and the (possibly partial) collected
//! output value.
//!
//! # Example
//!
//! ```
//! use schema_manager::{FieldDefinition, SchemaRegistry};
//! use serde_json::json;
//!
//! let registry = SchemaRegistry::default();
//! registry.register(
//!     "user",
//!     [
//!         ("name", FieldDefinition::new("String").required(true)),
//!         ("age", FieldDefinition::new("Integer").default_value(json!(18))),
//!     ],
//! );
//!
//! let ret = registry.validate("user", &json!({ "name": "Alice" }));
//! assert!(ret.ok);
//! assert_eq!(ret.value, json!({ "name": "Alice", "age": 18 }));
//!
//! let ret = registry.validate("user", &json!({}));
//! assert!(!ret.ok);
//! assert_eq!(ret.message, "missing required paramater name");
//! ```
//!
//! # Notes
//!
//! All operations are synchronous and deterministic; there is no I/O.
//! Registry handles may be cloned and shared, but registration happening
//! concurrently with validation must be serialized by the caller. Recursion
//! depth follows schema nesting depth: a pathological self-referential
//! schema graph will overflow the stack rather than fail gracefully.

pub mod error;
pub mod field;
pub mod registry;
pub mod result;
pub mod schema;
pub mod swagger;
pub mod type_name;

// Re-export the core public API
pub use error::SchemaError;
pub use field::{FieldDefinition, FieldType};
pub use registry::{SchemaRegistry, SchemaRegistryOptions};
pub use result::CheckResult;
pub use schema::Schema;
pub use swagger::{describe, SwaggerSchema};
pub use type_name::{parse_type_name, ParsedTypeName};

// Companion capability crate, re-exported for convenience (the upstream
// package re-exports its value-type-manager the same way).
pub use value_type_manager::{
    register_builtin_types, TypeCheckResult, TypeError, TypeInfo, TypeRegistry, ValueType,
    ValueTypeManager,
};
