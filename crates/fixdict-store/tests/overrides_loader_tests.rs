// Integration tests for override directory loading

#![allow(clippy::unwrap_used, clippy::expect_used)]

use fixdict_core::ExErrorKind;
use fixdict_store::load_overrides;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_files_leave_categories_unset() {
    // Given: An override directory with only enum names
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("EnumName.yaml"),
        "schema_version: 0\nrows:\n  - {tag: '54', value: '1', name: Buy}\n",
    )
    .unwrap();

    // When: We load it
    let overrides = load_overrides(dir.path()).unwrap();

    // Then: Enum names are present, everything else is absent
    let names = overrides.enum_names.unwrap();
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].name, "Buy");
    assert!(overrides.message_descriptions.is_none());
    assert!(overrides.component_descriptions.is_none());
    assert!(overrides.enum_descriptions.is_none());
    assert!(overrides.glossary.is_none());
}

#[test]
fn test_glossary_value_name_optional() {
    // Given: A glossary with a heading-only entry
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Glossary.yaml"),
        "schema_version: 0\nrows:\n  - {label: 'Order types'}\n  - {label: 'Side [Side]', value_name: Buy, description: Buying}\n",
    )
    .unwrap();

    // When: We load it
    let glossary = load_overrides(dir.path()).unwrap().glossary.unwrap();

    // Then: The heading has empty value name and description
    assert_eq!(glossary.len(), 2);
    assert!(glossary[0].value_name.is_empty());
    assert_eq!(glossary[1].description, "Buying");
}

#[test]
fn test_malformed_file_is_serialization_error() {
    // Given: A description file with the wrong shape
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("MessageDesc.yaml"),
        "schema_version: 0\nrows:\n  - {description: no key}\n",
    )
    .unwrap();

    // When: We load it
    let err = load_overrides(dir.path()).unwrap_err();

    // Then: Parsing fails and names the file
    assert_eq!(err.kind(), ExErrorKind::Serialization);
    assert!(err.entity_id().unwrap().ends_with("MessageDesc.yaml"));
}
