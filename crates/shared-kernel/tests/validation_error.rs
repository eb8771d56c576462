// crates/shared-kernel/tests/validation_error.rs
use multab_shared_kernel::{DomainError, Field, MultabError, ValidationError};

#[test]
fn displays_message_only() {
    let err = ValidationError::new(Field::ColumnEnd, "Value must be at most 50");
    assert_eq!(err.to_string(), "Value must be at most 50");
}

#[test]
fn domain_wrapper_is_transparent() {
    let err: MultabError = ValidationError::combined("Range between start and end values cannot exceed 100.").into();
    assert_eq!(err.to_string(), "Range between start and end values cannot exceed 100.");
    assert!(matches!(err, MultabError::Domain(DomainError::Validation(ref v)) if v.field.is_none()));
}

#[test]
fn serializes_field_in_camel_case() {
    let err = ValidationError::new(Field::ColumnStart, "Please enter a valid number");
    let value = serde_json::to_value(&err).expect("serializes");
    assert_eq!(value["field"], "columnStart");
    assert_eq!(value["message"], "Please enter a valid number");
}
