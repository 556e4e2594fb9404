//! Field definitions: the type reference, requiredness, defaults, and
//! type-specific parameters for one schema field.

use serde_json::Value;

use crate::schema::Schema;

/// What a field's value is validated against.
///
/// A tagged variant rather than runtime type inspection: either a type-name
/// string (possibly `[]`-suffixed, resolved against the owning registry at
/// validation time) or an embedded [`Schema`] shared by handle.
#[derive(Debug, Clone)]
pub enum FieldType {
    Named(String),
    Embedded(Schema),
}

impl FieldType {
    /// The name recorded in `invalid_parameter_types` diagnostics: the
    /// type-ref string as written, or the embedded schema's display name.
    pub fn display_name(&self) -> String {
        match self {
            FieldType::Named(name) => name.clone(),
            FieldType::Embedded(schema) => schema.name().to_string(),
        }
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        FieldType::Named(name.to_string())
    }
}

impl From<String> for FieldType {
    fn from(name: String) -> Self {
        FieldType::Named(name)
    }
}

impl From<Schema> for FieldType {
    fn from(schema: Schema) -> Self {
        FieldType::Embedded(schema)
    }
}

/// One entry in a schema.
///
/// Built with chained setters:
///
/// ```
/// use schema_manager::FieldDefinition;
/// use serde_json::json;
///
/// let field = FieldDefinition::new("String")
///     .comment("display name")
///     .required(true)
///     .default_value(json!("anonymous"));
/// assert!(field.required);
/// ```
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    pub type_ref: FieldType,
    /// Display-only description, surfaced by the documentation projection.
    pub comment: Option<String>,
    /// Whether the type registry should coerce/normalize the value rather
    /// than only validate it. `None` defers to the type's own default.
    pub format: Option<bool>,
    /// Substituted when the field is absent from input.
    pub default: Option<Value>,
    pub required: bool,
    /// Type-specific parameter payload (e.g. the ENUM value list),
    /// forwarded verbatim to the type registry.
    pub params: Option<Value>,
}

impl FieldDefinition {
    pub fn new(type_ref: impl Into<FieldType>) -> Self {
        Self {
            type_ref: type_ref.into(),
            comment: None,
            format: None,
            default: None,
            required: false,
            params: None,
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn format(mut self, format: bool) -> Self {
        self.format = Some(format);
        self
    }

    pub fn default_value(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }
}
