//! The schema validation engine.

use serde_json::{Map, Value};
use std::ops::ControlFlow;
use std::sync::Arc;

use crate::field::{FieldDefinition, FieldType};
use crate::registry::SchemaRegistry;
use crate::result::{fold_array_elements, CheckResult};
use crate::type_name::parse_type_name;

struct SchemaInner {
    name: String,
    /// Field declaration order drives validation order, error order, and
    /// output-map order.
    fields: Vec<(String, FieldDefinition)>,
    /// Back-reference to the owning registry: resolves type names that
    /// refer to other registered schemas and carries the abort-early policy.
    registry: SchemaRegistry,
}

/// A named, ordered set of field definitions.
///
/// Cheap-clone handle; immutable after creation. The structural transforms
/// ([`pick`](Schema::pick), [`partial`](Schema::partial),
/// [`required`](Schema::required)) always build new `Schema` values.
#[derive(Clone)]
pub struct Schema {
    inner: Arc<SchemaInner>,
}

impl std::fmt::Debug for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.inner.name)
            .field(
                "fields",
                &self
                    .inner
                    .fields
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Accumulator for one scalar-mode field walk.
#[derive(Default)]
struct FieldOutcome {
    messages: Vec<String>,
    missing: Vec<String>,
    invalid: Vec<String>,
    invalid_types: Vec<String>,
    values: Map<String, Value>,
}

impl Schema {
    pub(crate) fn new(
        registry: SchemaRegistry,
        fields: Vec<(String, FieldDefinition)>,
        name: String,
    ) -> Self {
        Self {
            inner: Arc::new(SchemaInner {
                name,
                fields,
                registry,
            }),
        }
    }

    /// Display name, used only for diagnostics and derived naming. Empty
    /// for anonymous (ad-hoc) schemas.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Field definitions in declaration order.
    pub fn fields(&self) -> &[(String, FieldDefinition)] {
        &self.inner.fields
    }

    /// The owning registry.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.inner.registry
    }

    /// Validate `input` against this schema.
    pub fn validate(&self, input: &Value) -> CheckResult {
        self.validate_value(input, false)
    }

    /// Validate `input` as an array of values each matching this schema.
    pub fn validate_array(&self, input: &Value) -> CheckResult {
        self.validate_value(input, true)
    }

    pub(crate) fn validate_value(&self, input: &Value, is_array: bool) -> CheckResult {
        if is_array {
            self.validate_elements(input)
        } else {
            self.validate_fields(input)
        }
    }

    fn validate_elements(&self, input: &Value) -> CheckResult {
        let Some(items) = input.as_array() else {
            return CheckResult::failure(
                format!("expected an {} array but got {}", self.name(), input),
                input.clone(),
            );
        };
        fold_array_elements(items, self.inner.registry.is_abort_early(), |element| {
            self.validate(element)
        })
    }

    /// The scalar-mode core: walk declared fields in order, substituting
    /// defaults, recording missing required fields, and delegating present
    /// values to the resolved validator.
    fn validate_fields(&self, input: &Value) -> CheckResult {
        let abort_early = self.inner.registry.is_abort_early();
        let empty = Map::new();
        // Non-object input carries no fields; defaults and required checks
        // still apply.
        let object = input.as_object().unwrap_or(&empty);

        let folded = self
            .inner
            .fields
            .iter()
            .try_fold(FieldOutcome::default(), |mut acc, (name, field)| {
                let effective = object.get(name).cloned().or_else(|| field.default.clone());
                let Some(value) = effective else {
                    if field.required {
                        acc.messages.push(format!("missing required paramater {}", name));
                        acc.missing.push(name.clone());
                        if abort_early {
                            return ControlFlow::Break(acc);
                        }
                    }
                    return ControlFlow::Continue(acc);
                };

                let ret = self.check_field(field, &value);
                let failed = !ret.ok;
                if failed {
                    acc.messages.push(format!("at paramater {}: {}", name, ret.message));
                    acc.invalid.push(name.clone());
                    acc.invalid_types.push(field.type_ref.display_name());
                }
                acc.values.insert(name.clone(), ret.value);
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
            CheckResult::success(Value::Object(outcome.values))
        } else {
            CheckResult {
                ok: false,
                message: outcome.messages.join("\n"),
                value: Value::Object(outcome.values),
                missing_parameters: Some(outcome.missing),
                invalid_parameters: Some(outcome.invalid),
                invalid_parameter_types: Some(outcome.invalid_types),
            }
        }
    }

    /// Resolve a field's validator and run it. Resolution happens on every
    /// call, never cached, so registry contents may change between calls
    /// and forward references stay legal.
    fn check_field(&self, field: &FieldDefinition, value: &Value) -> CheckResult {
        match &field.type_ref {
            FieldType::Embedded(schema) => schema.validate(value),
            FieldType::Named(type_ref) => {
                let parsed = parse_type_name(type_ref);
                match self.inner.registry.lookup(parsed.name) {
                    Some(schema) => schema.validate_value(value, parsed.is_array),
                    None => self.inner.registry.validate_primitive(
                        parsed.name,
                        parsed.is_array,
                        value,
                        field.params.as_ref(),
                        field.format,
                    ),
                }
            }
        }
    }

    /// A new schema containing only the requested fields.
    ///
    /// Names are sorted lexicographically (this affects only the derived
    /// display name); names absent from this schema are skipped.
    pub fn pick(&self, names: &[&str]) -> Schema {
        let mut names: Vec<&str> = names.to_vec();
        names.sort_unstable();
        let fields = names
            .iter()
            .filter_map(|picked| {
                self.inner
                    .fields
                    .iter()
                    .find(|(name, _)| name == picked)
                    .cloned()
            })
            .collect();
        let name = if self.inner.name.is_empty() {
            String::new()
        } else {
            let list = names
                .iter()
                .map(|n| format!("\"{}\"", n))
                .collect::<Vec<_>>()
                .join(" | ");
            format!("Pick<{}, {}>", self.inner.name, list)
        };
        Schema::new(self.inner.registry.clone(), fields, name)
    }

    /// A new schema with every field optional.
    pub fn partial(&self) -> Schema {
        self.with_required(false, "Partial")
    }

    /// A new schema with every field required.
    pub fn required(&self) -> Schema {
        self.with_required(true, "Required")
    }

    fn with_required(&self, required: bool, wrapper: &str) -> Schema {
        let fields = self
            .inner
            .fields
            .iter()
            .map(|(name, def)| {
                let mut def = def.clone();
                def.required = required;
                (name.clone(), def)
            })
            .collect();
        let name = if self.inner.name.is_empty() {
            String::new()
        } else {
            format!("{}<{}>", wrapper, self.inner.name)
        };
        Schema::new(self.inner.registry.clone(), fields, name)
    }
}
