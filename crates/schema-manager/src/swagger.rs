//! Swagger/OpenAPI projection — a read-only walk over a schema's fields
//! producing a property/required-list structure for documentation
//! generators. No validation semantics live here.

use serde::Serialize;
use serde_json::{json, Map, Value};

use value_type_manager::TypeRegistry;

use crate::error::SchemaError;
use crate::field::{FieldDefinition, FieldType};
use crate::schema::Schema;
use crate::type_name::parse_type_name;

/// Expanded object description: the required-field list plus one property
/// spec per field, in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct SwaggerSchema {
    pub required: Vec<String>,
    pub properties: Map<String, Value>,
}

impl Schema {
    /// Convenience wrapper around [`describe`].
    pub fn describe(&self) -> Result<SwaggerSchema, SchemaError> {
        describe(self)
    }
}

/// Expand `schema` into its Swagger/OpenAPI object description,
/// recursively inlining embedded and registered schema references.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownType`] when a field names a primitive type
/// the capability registry does not know: a programmer error, matching
/// [`SchemaRegistry::get`](crate::SchemaRegistry::get) semantics.
pub fn describe(schema: &Schema) -> Result<SwaggerSchema, SchemaError> {
    let mut required = Vec::new();
    let mut properties = Map::new();

    for (name, field) in schema.fields() {
        let spec = match &field.type_ref {
            FieldType::Embedded(embedded) => {
                let sub = describe(embedded)?;
                json!({
                    "type": "object",
                    "required": sub.required,
                    "properties": sub.properties,
                })
            }
            FieldType::Named(type_ref) => {
                let parsed = parse_type_name(type_ref);
                match schema.registry().lookup(parsed.name) {
                    Some(referenced) => {
                        let sub = describe(&referenced)?;
                        let comment = field.comment.clone().unwrap_or_default();
                        if parsed.is_array {
                            json!({
                                "type": "array",
                                "description": comment,
                                "items": {
                                    "type": "object",
                                    "required": sub.required,
                                    "properties": sub.properties,
                                },
                            })
                        } else {
                            json!({
                                "type": "object",
                                "required": sub.required,
                                "description": comment,
                                "properties": sub.properties,
                            })
                        }
                    }
                    None => {
                        if field.required {
                            required.push(name.clone());
                        }
                        primitive_spec(schema, parsed.name, parsed.is_array, field)?
                    }
                }
            }
        };
        properties.insert(name.clone(), spec);
    }

    Ok(SwaggerSchema {
        required,
        properties,
    })
}

fn primitive_spec(
    schema: &Schema,
    name: &str,
    is_array: bool,
    field: &FieldDefinition,
) -> Result<Value, SchemaError> {
    let info = schema
        .registry()
        .types()
        .info(name)
        .ok_or_else(|| SchemaError::UnknownType(name.to_string()))?;
    let swagger_type = info.swagger_type.unwrap_or_else(|| "string".to_string());
    let enum_values = field.params.clone().unwrap_or_else(|| json!([]));

    let mut spec = if is_array {
        json!({
            "type": "array",
            "enum": enum_values,
            "items": { "type": swagger_type },
        })
    } else {
        json!({
            "type": swagger_type,
            "enum": enum_values,
        })
    };
    if let Some(comment) = &field.comment {
        spec["description"] = json!(comment);
    }
    if let Some(default) = &field.default {
        spec["default"] = default.clone();
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SchemaRegistry;
    use serde_json::json;

    #[test]
    fn test_primitive_fields() {
        let registry = SchemaRegistry::default();
        let schema = registry.create([
            (
                "name",
                FieldDefinition::new("String").comment("display name").required(true),
            ),
            (
                "age",
                FieldDefinition::new("Integer").default_value(json!(18)),
            ),
        ]);

        let spec = describe(&schema).unwrap();
        assert_eq!(spec.required, vec!["name"]);
        assert_eq!(spec.properties["name"]["type"], json!("string"));
        assert_eq!(spec.properties["name"]["description"], json!("display name"));
        assert_eq!(spec.properties["age"]["type"], json!("integer"));
        assert_eq!(spec.properties["age"]["default"], json!(18));
    }

    #[test]
    fn test_primitive_array_and_enum() {
        let registry = SchemaRegistry::default();
        let schema = registry.create([
            ("tags", FieldDefinition::new("String[]")),
            (
                "color",
                FieldDefinition::new("ENUM").params(json!(["red", "green"])),
            ),
        ]);

        let spec = describe(&schema).unwrap();
        assert_eq!(spec.properties["tags"]["type"], json!("array"));
        assert_eq!(spec.properties["tags"]["items"]["type"], json!("string"));
        assert_eq!(spec.properties["color"]["enum"], json!(["red", "green"]));
    }

    #[test]
    fn test_registered_and_embedded_references_inline() {
        let registry = SchemaRegistry::default();
        registry.register(
            "address",
            [("city", FieldDefinition::new("String").required(true))],
        );
        let contact = registry.create([("phone", FieldDefinition::new("String"))]);
        let schema = registry.create([
            ("home", FieldDefinition::new("address").comment("home address")),
            ("offices", FieldDefinition::new("address[]")),
            ("contact", FieldDefinition::new(contact)),
        ]);

        let spec = describe(&schema).unwrap();
        assert_eq!(spec.properties["home"]["type"], json!("object"));
        assert_eq!(spec.properties["home"]["required"], json!(["city"]));
        assert_eq!(spec.properties["home"]["description"], json!("home address"));
        assert_eq!(spec.properties["offices"]["type"], json!("array"));
        assert_eq!(
            spec.properties["offices"]["items"]["properties"]["city"]["type"],
            json!("string")
        );
        assert_eq!(spec.properties["contact"]["type"], json!("object"));
        // Schema references never feed the parent required list.
        assert_eq!(spec.required, Vec::<String>::new());
    }

    #[test]
    fn test_unknown_primitive_type_is_an_error() {
        let registry = SchemaRegistry::default();
        let schema = registry.create([("x", FieldDefinition::new("Ghost"))]);
        assert_eq!(
            describe(&schema).unwrap_err(),
            SchemaError::UnknownType("Ghost".to_string())
        );
    }
}
