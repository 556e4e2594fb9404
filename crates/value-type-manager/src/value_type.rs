//! A single registered value type: checker + optional formatter.

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::result::TypeCheckResult;

/// Checker function: receives the input value and the field's type params,
/// returns whether the input is acceptable.
pub type CheckFn = Arc<dyn Fn(&Value, Option<&Value>) -> bool + Send + Sync>;

/// Formatter function: coerces/normalizes an already-accepted value.
pub type FormatFn = Arc<dyn Fn(&Value, Option<&Value>) -> Value + Send + Sync>;

/// Display/projection metadata for a registered type.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The OpenAPI/Swagger primitive type this maps to ("string", "integer", ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swagger_type: Option<String>,
}

/// A registered value type.
///
/// Built with chained setters:
///
/// ```
/// use serde_json::json;
/// use value_type_manager::ValueType;
///
/// let even = ValueType::new(|v, _| v.as_i64().map(|n| n % 2 == 0).unwrap_or(false))
///     .message("expected an even integer")
///     .swagger_type("integer");
///
/// assert!(even.value(&json!(4), None, None).ok);
/// assert_eq!(even.value(&json!(3), None, None).message, "expected an even integer");
/// ```
#[derive(Clone)]
pub struct ValueType {
    checker: CheckFn,
    formatter: Option<FormatFn>,
    /// Message reported when the checker rejects the input.
    message: String,
    /// Whether the formatter runs when the caller passes no format flag.
    default_format: bool,
    info: TypeInfo,
}

impl std::fmt::Debug for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueType")
            .field("message", &self.message)
            .field("default_format", &self.default_format)
            .field("has_formatter", &self.formatter.is_some())
            .field("info", &self.info)
            .finish()
    }
}

impl ValueType {
    pub fn new(checker: impl Fn(&Value, Option<&Value>) -> bool + Send + Sync + 'static) -> Self {
        Self {
            checker: Arc::new(checker),
            formatter: None,
            message: "failure".to_string(),
            default_format: false,
            info: TypeInfo::default(),
        }
    }

    pub fn formatter(
        mut self,
        formatter: impl Fn(&Value, Option<&Value>) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn format_by_default(mut self, yes: bool) -> Self {
        self.default_format = yes;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.info.description = Some(description.into());
        self
    }

    pub fn swagger_type(mut self, swagger_type: impl Into<String>) -> Self {
        self.info.swagger_type = Some(swagger_type.into());
        self
    }

    pub fn info(&self) -> &TypeInfo {
        &self.info
    }

    /// Check `input`, applying the formatter when `format` (or this type's
    /// default) asks for coercion.
    pub fn value(
        &self,
        input: &Value,
        params: Option<&Value>,
        format: Option<bool>,
    ) -> TypeCheckResult {
        if !(self.checker)(input, params) {
            return TypeCheckResult::failure(self.message.clone(), input.clone());
        }
        let apply = format.unwrap_or(self.default_format);
        let value = match (&self.formatter, apply) {
            (Some(formatter), true) => formatter(input, params),
            _ => input.clone(),
        };
        TypeCheckResult::success(value)
    }
}
