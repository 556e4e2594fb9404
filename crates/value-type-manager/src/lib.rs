//! Pluggable primitive value type registry — port of `@tuzhanai/value-type-manager`.
//!
//! # Overview
//!
//! A [`ValueTypeManager`] maps type names to [`ValueType`] entries, each of
//! which pairs a checker closure (is this JSON value acceptable?) with an
//! optional formatter closure (coerce/normalize the accepted value). Checking
//! a value never fails with an error; the outcome is always a
//! [`TypeCheckResult`] record.
//!
//! The [`TypeRegistry`] trait is the consumer-facing capability contract:
//! schema layers validate leaf values through it without knowing anything
//! about how individual types are implemented.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use value_type_manager::{TypeRegistry, ValueTypeManager};
//!
//! let types = ValueTypeManager::with_builtins();
//! let ret = types.value("Integer", &json!(42), None, None);
//! assert!(ret.ok);
//! assert_eq!(ret.value, json!(42));
//!
//! let ret = types.value("Integer", &json!("nope"), None, None);
//! assert!(!ret.ok);
//! ```

pub mod builtin;
pub mod error;
pub mod manager;
pub mod result;
pub mod value_type;

// Re-export the core public API
pub use builtin::register_builtin_types;
pub use error::TypeError;
pub use manager::{TypeRegistry, ValueTypeManager};
pub use result::TypeCheckResult;
pub use value_type::{CheckFn, FormatFn, TypeInfo, ValueType};
