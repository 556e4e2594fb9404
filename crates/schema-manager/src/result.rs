//! The validation outcome record and result-merging helpers.

use serde::Serialize;
use serde_json::Value;
use std::ops::ControlFlow;

use value_type_manager::TypeCheckResult;

/// Structured outcome of a schema validation call.
///
/// `value` is always populated: the collected output on success, the
/// best-effort partial output on failure. `message` is the newline-joined
/// trace of every failure location in depth-first, field-declaration order
/// (or only the first, under the abort-early policy).
///
/// The three diagnostic arrays are present on schema-validation failures,
/// present-but-empty on the registry's primitive fall-through failures, and
/// absent otherwise.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub ok: bool,
    pub message: String,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_parameters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_parameters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_parameter_types: Option<Vec<String>>,
}

impl CheckResult {
    pub fn success(value: Value) -> Self {
        Self {
            ok: true,
            message: "success".to_string(),
            value,
            missing_parameters: None,
            invalid_parameters: None,
            invalid_parameter_types: None,
        }
    }

    pub fn failure(message: impl Into<String>, value: Value) -> Self {
        Self {
            ok: false,
            message: message.into(),
            value,
            missing_parameters: None,
            invalid_parameters: None,
            invalid_parameter_types: None,
        }
    }

    /// Attach empty diagnostic arrays, so primitive-path results carry the
    /// same shape as schema-path results.
    pub fn with_empty_diagnostics(mut self) -> Self {
        self.missing_parameters = Some(Vec::new());
        self.invalid_parameters = Some(Vec::new());
        self.invalid_parameter_types = Some(Vec::new());
        self
    }
}

impl From<TypeCheckResult> for CheckResult {
    fn from(ret: TypeCheckResult) -> Self {
        Self {
            ok: ret.ok,
            message: ret.message,
            value: ret.value,
            missing_parameters: None,
            invalid_parameters: None,
            invalid_parameter_types: None,
        }
    }
}

#[derive(Default)]
struct ElementOutcome {
    messages: Vec<String>,
    values: Vec<Value>,
}

/// Walk array elements through `check`, collecting `at array index {i}:`
/// failure lines.
///
/// The element outcome (success value or best-effort failure value) is
/// always appended before an abort-early break, so a truncated partial
/// array ends exactly at the failing index.
pub(crate) fn fold_array_elements(
    items: &[Value],
    abort_early: bool,
    check: impl Fn(&Value) -> CheckResult,
) -> CheckResult {
    let folded = items
        .iter()
        .enumerate()
        .try_fold(ElementOutcome::default(), |mut acc, (i, element)| {
            let ret = check(element);
            let failed = !ret.ok;
            if failed {
                acc.messages.push(format!("at array index {}: {}", i, ret.message));
            }
            acc.values.push(ret.value);
            if failed && abort_early {
                ControlFlow::Break(acc)
            } else {
                ControlFlow::Continue(acc)
            }
        });
    let outcome = match folded {
        ControlFlow::Continue(acc) | ControlFlow::Break(acc) => acc,
    };
    if outcome.messages.is_empty() {
        CheckResult::success(Value::Array(outcome.values))
    } else {
        CheckResult::failure(outcome.messages.join("\n"), Value::Array(outcome.values))
    }
}
