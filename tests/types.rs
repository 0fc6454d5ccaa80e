use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use dbal_types::{
    names, BindingType, ColumnDefinition, Error, Platform, Type, TypeRegistry, Types, Value,
};

#[derive(Debug)]
struct MockPlatform;

impl Platform for MockPlatform {
    fn name(&self) -> &str {
        "mock"
    }
}

/// A dialect with native GUID and JSON column types and integer booleans.
#[derive(Debug)]
struct NativePlatform;

impl Platform for NativePlatform {
    fn name(&self) -> &str {
        "native"
    }

    fn has_native_guid_type(&self) -> bool {
        true
    }

    fn has_native_json_type(&self) -> bool {
        true
    }

    fn convert_boolean_to_database_value(&self, value: bool) -> Value {
        Value::Int(i32::from(value))
    }
}

#[test]
fn null_maps_to_null_for_every_builtin() {
    let mut registry = TypeRegistry::with_builtins();

    for name in Types::types_map().keys() {
        let ty = registry.get_type(name).unwrap();
        assert_eq!(
            ty.convert_to_database_value(&Value::Null, &MockPlatform).unwrap(),
            Value::Null,
            "{name}"
        );
        assert_eq!(
            ty.convert_to_host_value(&Value::Null, &MockPlatform).unwrap(),
            Value::Null,
            "{name}"
        );
    }
}

#[test]
fn boolean_uses_the_platform_database_representation() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::BOOLEAN).unwrap();

    assert_eq!(
        ty.convert_to_database_value(&Value::Boolean(true), &MockPlatform).unwrap(),
        Value::Boolean(true)
    );
    assert_eq!(
        ty.convert_to_database_value(&Value::Boolean(true), &NativePlatform).unwrap(),
        Value::Int(1)
    );
}

#[test]
fn boolean_accepts_common_wire_spellings() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::BOOLEAN).unwrap();

    for (wire, expected) in [
        (Value::Int(1), true),
        (Value::Int(0), false),
        (Value::String("t".to_owned()), true),
        (Value::String("false".to_owned()), false),
        (Value::String("0".to_owned()), false),
    ] {
        assert_eq!(
            ty.convert_to_host_value(&wire, &MockPlatform).unwrap(),
            Value::Boolean(expected)
        );
    }
}

#[test]
fn boolean_rejects_non_boolean_host_values() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::BOOLEAN).unwrap();

    let err = ty
        .convert_to_database_value(&Value::String("yes".to_owned()), &MockPlatform)
        .unwrap_err();
    let Error::InvalidType { expected, .. } = err else {
        panic!("expected InvalidType, got {err:?}");
    };
    assert_eq!(expected, vec!["null", "bool"]);
}

#[test]
fn integers_narrow_and_parse_on_the_host_direction() {
    let mut registry = TypeRegistry::with_builtins();

    let integer = registry.get_type(names::INTEGER).unwrap();
    assert_eq!(
        integer.convert_to_host_value(&Value::BigInt(70_000), &MockPlatform).unwrap(),
        Value::Int(70_000)
    );
    assert_eq!(
        integer
            .convert_to_host_value(&Value::String("42".to_owned()), &MockPlatform)
            .unwrap(),
        Value::Int(42)
    );

    let smallint = registry.get_type(names::SMALLINT).unwrap();
    let err = smallint
        .convert_to_host_value(&Value::Int(70_000), &MockPlatform)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidFormat { .. }));

    let bigint = registry.get_type(names::BIGINT).unwrap();
    assert_eq!(
        bigint.convert_to_host_value(&Value::SmallInt(7), &MockPlatform).unwrap(),
        Value::BigInt(7)
    );
    let err = bigint
        .convert_to_host_value(&Value::String("not a number".to_owned()), &MockPlatform)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidFormat { .. }));
}

#[test]
fn float_parses_textual_wire_values() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::FLOAT).unwrap();

    assert_eq!(
        ty.convert_to_host_value(&Value::String("3.25".to_owned()), &MockPlatform).unwrap(),
        Value::Float(3.25)
    );
    assert_eq!(
        ty.convert_to_host_value(&Value::Int(2), &MockPlatform).unwrap(),
        Value::Float(2.0)
    );
}

#[test]
fn decimal_round_trips_through_text() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::DECIMAL).unwrap();

    let host = Value::Decimal(Decimal::new(1234, 2));
    let wire = ty.convert_to_database_value(&host, &MockPlatform).unwrap();
    assert_eq!(wire, Value::String("12.34".to_owned()));

    assert_eq!(ty.convert_to_host_value(&wire, &MockPlatform).unwrap(), host);
}

#[test]
fn string_declarations_respect_length_and_fixed() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::STRING).unwrap();

    assert_eq!(
        ty.sql_declaration(&ColumnDefinition::new(), &MockPlatform).unwrap(),
        "VARCHAR(255)"
    );
    assert_eq!(
        ty.sql_declaration(&ColumnDefinition::new().length(10).fixed(true), &MockPlatform)
            .unwrap(),
        "CHAR(10)"
    );
}

#[test]
fn text_coerces_raw_bytes_to_string() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::TEXT).unwrap();

    assert_eq!(
        ty.sql_declaration(&ColumnDefinition::new(), &MockPlatform).unwrap(),
        "TEXT"
    );
    assert_eq!(
        ty.convert_to_host_value(&Value::Bytes(b"lorem".to_vec()), &MockPlatform).unwrap(),
        Value::String("lorem".to_owned())
    );
}

#[test]
fn binary_kinds_pass_bytes_through() {
    let mut registry = TypeRegistry::with_builtins();

    for name in [names::BINARY, names::BLOB] {
        let ty = registry.get_type(name).unwrap();
        assert_eq!(
            ty.convert_to_host_value(&Value::Bytes(vec![0xDE, 0xAD]), &MockPlatform).unwrap(),
            Value::Bytes(vec![0xDE, 0xAD]),
            "{name}"
        );
        assert_eq!(
            ty.convert_to_host_value(&Value::String("ab".to_owned()), &MockPlatform).unwrap(),
            Value::Bytes(b"ab".to_vec()),
            "{name}"
        );
    }
}

#[test]
fn binding_types_follow_the_kind() {
    let mut registry = TypeRegistry::with_builtins();

    for (name, expected) in [
        (names::BOOLEAN, BindingType::Boolean),
        (names::SMALLINT, BindingType::Integer),
        (names::INTEGER, BindingType::Integer),
        (names::BIGINT, BindingType::Integer),
        (names::STRING, BindingType::String),
        (names::DATE, BindingType::String),
        (names::BINARY, BindingType::Binary),
        (names::BLOB, BindingType::LargeObject),
    ] {
        let ty = registry.get_type(name).unwrap();
        assert_eq!(ty.binding_type(), expected, "{name}");
    }
}

#[test]
fn guid_comment_hint_depends_on_native_support() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::GUID).unwrap();

    assert!(ty.requires_sql_comment_hint(&MockPlatform));
    assert!(!ty.requires_sql_comment_hint(&NativePlatform));
}

#[test]
fn guid_converts_between_uuid_and_text() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::GUID).unwrap();

    let uuid = Uuid::parse_str("6fa459ea-ee8a-3ca4-894e-db77e160355e").unwrap();

    let wire = ty.convert_to_database_value(&Value::Uuid(uuid), &MockPlatform).unwrap();
    assert_eq!(
        wire,
        Value::String("6fa459ea-ee8a-3ca4-894e-db77e160355e".to_owned())
    );

    assert_eq!(
        ty.convert_to_host_value(&wire, &MockPlatform).unwrap(),
        Value::Uuid(uuid)
    );

    let err = ty
        .convert_to_host_value(&Value::String("not a uuid".to_owned()), &MockPlatform)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidFormat { .. }));
}

#[test]
fn guid_validates_and_normalizes_textual_input() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::GUID).unwrap();

    let wire = ty
        .convert_to_database_value(
            &Value::String("6FA459EA-EE8A-3CA4-894E-DB77E160355E".to_owned()),
            &MockPlatform,
        )
        .unwrap();
    assert_eq!(
        wire,
        Value::String("6fa459ea-ee8a-3ca4-894e-db77e160355e".to_owned())
    );

    let err = ty
        .convert_to_database_value(&Value::String("not a uuid".to_owned()), &MockPlatform)
        .unwrap_err();
    let Error::InvalidFormat { source, .. } = err else {
        panic!("expected InvalidFormat, got {err:?}");
    };
    assert!(source.is_some());
}

#[test]
fn guid_declaration_defaults_to_a_fixed_char_column() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::GUID).unwrap();

    assert_eq!(
        ty.sql_declaration(&ColumnDefinition::new(), &MockPlatform).unwrap(),
        "CHAR(36)"
    );
}

#[test]
fn json_round_trips_structured_values() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::JSON).unwrap();

    let host = Value::Json(json!({"a": 1, "b": [true, null]}));
    let wire = ty.convert_to_database_value(&host, &MockPlatform).unwrap();
    let Value::String(_) = &wire else {
        panic!("expected JSON text, got {wire:?}");
    };

    assert_eq!(ty.convert_to_host_value(&wire, &MockPlatform).unwrap(), host);
}

#[test]
fn json_empty_string_decodes_to_null() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::JSON).unwrap();

    assert_eq!(
        ty.convert_to_host_value(&Value::String(String::new()), &MockPlatform).unwrap(),
        Value::Null
    );
}

#[test]
fn json_comment_hint_depends_on_native_support() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::JSON).unwrap();

    assert!(ty.requires_sql_comment_hint(&MockPlatform));
    assert!(!ty.requires_sql_comment_hint(&NativePlatform));
}

#[test]
fn json_array_empty_string_decodes_to_empty_array() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::JSON_ARRAY).unwrap();

    assert_eq!(
        ty.convert_to_host_value(&Value::String(String::new()), &MockPlatform).unwrap(),
        Value::Json(json!([]))
    );
    assert!(ty.requires_sql_comment_hint(&NativePlatform));
}

#[test]
fn undecodable_stored_json_is_a_conversion_failure() {
    let mut registry = TypeRegistry::with_builtins();

    for name in [names::JSON, names::ARRAY, names::OBJECT] {
        let ty = registry.get_type(name).unwrap();
        let err = ty
            .convert_to_host_value(&Value::String("{not json".to_owned()), &MockPlatform)
            .unwrap_err();
        let Error::InvalidFormat { source, .. } = err else {
            panic!("expected InvalidFormat for {name}, got {err:?}");
        };
        assert!(source.is_some(), "{name}");
    }
}

#[test]
fn array_and_object_store_json_text_in_a_clob() {
    let mut registry = TypeRegistry::with_builtins();

    for name in [names::ARRAY, names::OBJECT] {
        let ty = registry.get_type(name).unwrap();
        assert_eq!(
            ty.sql_declaration(&ColumnDefinition::new(), &MockPlatform).unwrap(),
            "TEXT",
            "{name}"
        );
        assert!(ty.requires_sql_comment_hint(&MockPlatform), "{name}");

        let host = Value::Json(json!(["x", 1]));
        let wire = ty.convert_to_database_value(&host, &MockPlatform).unwrap();
        assert_eq!(ty.convert_to_host_value(&wire, &MockPlatform).unwrap(), host, "{name}");
    }
}

#[test]
fn simple_array_joins_and_splits_on_commas() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::SIMPLE_ARRAY).unwrap();

    let host = Value::Array(vec![
        Value::String("a".to_owned()),
        Value::Int(1),
        Value::String("b".to_owned()),
    ]);

    let wire = ty.convert_to_database_value(&host, &MockPlatform).unwrap();
    assert_eq!(wire, Value::String("a,1,b".to_owned()));

    assert_eq!(
        ty.convert_to_host_value(&wire, &MockPlatform).unwrap(),
        Value::Array(vec![
            Value::String("a".to_owned()),
            Value::String("1".to_owned()),
            Value::String("b".to_owned()),
        ])
    );
}

#[test]
fn simple_array_stores_empty_lists_as_null() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::SIMPLE_ARRAY).unwrap();

    assert_eq!(
        ty.convert_to_database_value(&Value::Array(Vec::new()), &MockPlatform).unwrap(),
        Value::Null
    );
    assert_eq!(
        ty.convert_to_host_value(&Value::String(String::new()), &MockPlatform).unwrap(),
        Value::Array(Vec::new())
    );
}

#[test]
fn sql_conversion_hooks_default_to_identity() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::STRING).unwrap();

    assert!(!ty.can_require_sql_conversion());
    assert_eq!(ty.convert_to_database_value_sql("?", &MockPlatform), "?");
    assert_eq!(ty.convert_to_host_value_sql("col", &MockPlatform), "col");
    assert!(ty.mapped_database_types(&MockPlatform).is_empty());
}
