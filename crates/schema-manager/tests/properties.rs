//! Property tests for the parser and the validation algebra.

use proptest::prelude::*;
use schema_manager::{parse_type_name, FieldDefinition, SchemaRegistry};
use serde_json::{json, Value};

proptest! {
    /// The parser is total and lossless: stripping the `[]` suffix and
    /// putting it back reconstructs the input.
    #[test]
    fn parse_type_name_roundtrips(type_ref in "[A-Za-z0-9\\[\\]]{0,12}") {
        let parsed = parse_type_name(&type_ref);
        if parsed.is_array {
            prop_assert_eq!(format!("{}[]", parsed.name), type_ref);
        } else {
            prop_assert_eq!(parsed.name, type_ref.as_str());
        }
    }

    /// Validated output is itself valid input, and revalidating it is a
    /// fixed point.
    #[test]
    fn validated_output_is_idempotent(
        s in proptest::option::of("[a-z]{0,8}"),
        n in proptest::option::of(prop_oneof![
            any::<i64>().prop_map(|n| json!(n)),
            "[a-z]{0,4}".prop_map(|s| json!(s)),
        ]),
    ) {
        let registry = SchemaRegistry::default();
        registry.register(
            "thing",
            [
                (
                    "s",
                    FieldDefinition::new("String").required(true).default_value(json!("Hello")),
                ),
                ("n", FieldDefinition::new("Number").required(true)),
            ],
        );

        let mut input = serde_json::Map::new();
        if let Some(s) = s {
            input.insert("s".to_string(), Value::from(s));
        }
        if let Some(n) = n {
            input.insert("n".to_string(), n);
        }

        let first = registry.validate("thing", &Value::Object(input));
        if first.ok {
            let second = registry.validate("thing", &first.value);
            prop_assert!(second.ok);
            prop_assert_eq!(second.value, first.value);
        }
    }

    /// `partial()` never reports missing-required errors, whatever subset of
    /// fields the input carries.
    #[test]
    fn partial_never_reports_missing(present in proptest::collection::vec(any::<bool>(), 3)) {
        let registry = SchemaRegistry::default();
        let schema = registry.create_named(
            "all-required",
            [
                ("a", FieldDefinition::new("Integer").required(true)),
                ("b", FieldDefinition::new("Integer").required(true)),
                ("c", FieldDefinition::new("Integer").required(true)),
            ],
        );

        let mut input = serde_json::Map::new();
        for (flag, name) in present.iter().zip(["a", "b", "c"]) {
            if *flag {
                input.insert(name.to_string(), json!(1));
            }
        }

        let ret = schema.partial().validate(&Value::Object(input));
        prop_assert!(ret.ok);
    }
}
