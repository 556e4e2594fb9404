//! Built-in structural types.
//!
//! Only JSON shape checks live here. Semantic formats (email addresses,
//! URLs, domains, ...) are the host application's business: register them as
//! custom types with [`ValueTypeManager::register`].

use serde_json::{json, Value};

use crate::manager::ValueTypeManager;
use crate::value_type::ValueType;

fn is_integer(v: &Value) -> bool {
    v.is_i64() || v.is_u64()
}

/// Register the built-in type set on `manager`.
pub fn register_builtin_types(manager: &ValueTypeManager) {
    manager
        .register(
            "Boolean",
            ValueType::new(|v, _| v.is_boolean())
                .description("boolean")
                .swagger_type("boolean"),
        )
        .register(
            "String",
            ValueType::new(|v, _| v.is_string())
                .description("UTF-8 string")
                .swagger_type("string"),
        )
        .register(
            "TrimString",
            ValueType::new(|v, _| v.is_string())
                .formatter(|v, _| json!(v.as_str().unwrap_or_default().trim()))
                .format_by_default(true)
                .description("string with surrounding whitespace trimmed")
                .swagger_type("string"),
        )
        .register(
            "NotEmptyString",
            ValueType::new(|v, _| v.as_str().map(|s| !s.is_empty()).unwrap_or(false))
                .description("non-empty string")
                .swagger_type("string"),
        )
        .register(
            "NullableString",
            ValueType::new(|v, _| v.is_string() || v.is_null())
                .description("string or null")
                .swagger_type("string"),
        )
        .register(
            "Number",
            ValueType::new(|v, _| v.is_number())
                .description("number")
                .swagger_type("number"),
        )
        .register(
            "Integer",
            ValueType::new(|v, _| is_integer(v))
                .description("64-bit integer")
                .swagger_type("integer"),
        )
        .register(
            "NullableInteger",
            ValueType::new(|v, _| is_integer(v) || v.is_null())
                .description("64-bit integer or null")
                .swagger_type("integer"),
        )
        .register(
            "Float",
            ValueType::new(|v, _| v.is_number())
                .description("floating point number")
                .swagger_type("number"),
        )
        .register(
            "Object",
            ValueType::new(|v, _| v.is_object())
                .description("JSON object")
                .swagger_type("object"),
        )
        .register(
            "Array",
            ValueType::new(|v, _| v.is_array())
                .description("JSON array")
                .swagger_type("array"),
        )
        .register(
            "JSON",
            ValueType::new(|_, _| true)
                .description("any JSON value")
                .swagger_type("object"),
        )
        .register(
            "Any",
            ValueType::new(|_, _| true)
                .description("any value")
                .swagger_type("object"),
        )
        .register(
            "ENUM",
            ValueType::new(|v, params| {
                params
                    .and_then(Value::as_array)
                    .map(|allowed| allowed.contains(v))
                    .unwrap_or(false)
            })
            .description("one of the values listed in params")
            .swagger_type("string"),
        );
}
