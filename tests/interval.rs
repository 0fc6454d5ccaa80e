use dbal_types::{
    names, ColumnDefinition, Error, Interval, Platform, Type, TypeRegistry, Value,
};

#[derive(Debug)]
struct MockPlatform;

impl Platform for MockPlatform {
    fn name(&self) -> &str {
        "mock"
    }
}

#[test]
fn interval_round_trips_through_the_duration_string() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::DATEINTERVAL).unwrap();

    let host = Value::Interval(Interval::new(1, 2, 3, 4, 5, 6));

    let wire = ty.convert_to_database_value(&host, &MockPlatform).unwrap();
    assert_eq!(wire, Value::String("P1Y2M3DT4H5M6S".to_owned()));

    assert_eq!(ty.convert_to_host_value(&wire, &MockPlatform).unwrap(), host);
}

#[test]
fn zero_components_are_always_written() {
    let interval = Interval::new(0, 0, 10, 0, 0, 0);
    assert_eq!(interval.to_string(), "P0Y0M10DT0H0M0S");
}

#[test]
fn parsing_accepts_omitted_designators() {
    assert_eq!("P4D".parse::<Interval>().unwrap(), Interval::new(0, 0, 4, 0, 0, 0));
    assert_eq!("PT30S".parse::<Interval>().unwrap(), Interval::new(0, 0, 0, 0, 0, 30));
    assert_eq!("P1YT5M".parse::<Interval>().unwrap(), Interval::new(1, 0, 0, 0, 5, 0));
}

#[test]
fn weeks_fold_into_days() {
    assert_eq!("P2W".parse::<Interval>().unwrap(), Interval::new(0, 0, 14, 0, 0, 0));
    assert_eq!("P1W3D".parse::<Interval>().unwrap(), Interval::new(0, 0, 10, 0, 0, 0));
}

#[test]
fn malformed_strings_fail_to_parse() {
    for input in ["", "P", "1Y", "P1", "PTT1S", "P1S", "PT1D", "P1X"] {
        assert!(input.parse::<Interval>().is_err(), "{input:?}");
    }
}

#[test]
fn oversized_components_fail_to_parse_instead_of_wrapping() {
    // week folding multiplies, repeated designators accumulate; neither
    // may overflow the component
    for input in ["P613566757W", "P4294967295Y1Y", "PT4294967295S1S"] {
        assert!(input.parse::<Interval>().is_err(), "{input:?}");
    }
}

#[test]
fn oversized_stored_value_is_a_conversion_failure_with_a_cause() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::DATEINTERVAL).unwrap();

    let err = ty
        .convert_to_host_value(&Value::String("P613566757W".to_owned()), &MockPlatform)
        .unwrap_err();
    let Error::InvalidFormat { source, .. } = err else {
        panic!("expected InvalidFormat, got {err:?}");
    };
    assert!(source.is_some());
}

#[test]
fn malformed_stored_value_is_a_conversion_failure_with_a_cause() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::DATEINTERVAL).unwrap();

    let err = ty
        .convert_to_host_value(&Value::String("not an interval".to_owned()), &MockPlatform)
        .unwrap_err();
    let Error::InvalidFormat { expected_format, source, .. } = err else {
        panic!("expected InvalidFormat, got {err:?}");
    };
    assert_eq!(expected_format, "P%YY%MM%DDT%HH%IM%SS");
    assert!(source.is_some());
}

#[test]
fn non_interval_host_values_are_rejected() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::DATEINTERVAL).unwrap();

    let err = ty
        .convert_to_database_value(&Value::Int(42), &MockPlatform)
        .unwrap_err();
    let Error::InvalidType { expected, .. } = err else {
        panic!("expected InvalidType, got {err:?}");
    };
    assert_eq!(expected, vec!["null", "Interval"]);
}

#[test]
fn declares_a_fixed_character_column() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::DATEINTERVAL).unwrap();

    assert_eq!(
        ty.sql_declaration(&ColumnDefinition::new(), &MockPlatform).unwrap(),
        "CHAR(255)"
    );
}

#[test]
fn interval_values_always_need_a_comment_hint() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::DATEINTERVAL).unwrap();

    assert!(ty.requires_sql_comment_hint(&MockPlatform));
}

#[test]
fn null_maps_to_null_in_both_directions() {
    let mut registry = TypeRegistry::with_builtins();
    let ty = registry.get_type(names::DATEINTERVAL).unwrap();

    assert_eq!(
        ty.convert_to_database_value(&Value::Null, &MockPlatform).unwrap(),
        Value::Null
    );
    assert_eq!(
        ty.convert_to_host_value(&Value::Null, &MockPlatform).unwrap(),
        Value::Null
    );
}
