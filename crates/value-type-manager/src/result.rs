use serde::Serialize;
use serde_json::Value;

/// Outcome of checking a single value against a registered type.
///
/// `value` is always populated: the (possibly formatted) value on success,
/// the raw input on failure, so callers can inspect what was collected
/// either way.
#[derive(Debug, Clone, Serialize)]
pub struct TypeCheckResult {
    pub ok: bool,
    pub message: String,
    pub value: Value,
}

impl TypeCheckResult {
    pub fn success(value: Value) -> Self {
        Self {
            ok: true,
            message: "success".to_string(),
            value,
        }
    }

    pub fn failure(message: impl Into<String>, value: Value) -> Self {
        Self {
            ok: false,
            message: message.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_message() {
        let ret = TypeCheckResult::success(json!(1));
        assert!(ret.ok);
        assert_eq!(ret.message, "success");
        assert_eq!(ret.value, json!(1));
    }

    #[test]
    fn test_failure_keeps_value() {
        let ret = TypeCheckResult::failure("failure", json!("raw"));
        assert!(!ret.ok);
        assert_eq!(ret.value, json!("raw"));
    }
}
