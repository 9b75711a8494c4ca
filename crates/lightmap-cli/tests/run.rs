//! Integration tests for the `map` command.

use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use lightmap_cli::render::render_json;
use lightmap_cli::run::{MapRequest, map_record, run_map};
use lightmap_model::{SourceRecord, SpecDocument};

const SPECS: &str = r#"{
    "id": "required",
    "fullName": { "requirement": "required", "from": ["full_name", "name"] },
    "email": { "requirement": "nullable", "transformation": "lowercase" },
    "age": { "requirement": "optional", "from": "years", "transformation": "to_number" }
}"#;

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

fn document() -> SpecDocument {
    SpecDocument::from_json_str(SPECS).unwrap()
}

#[test]
fn run_map_reads_files_and_maps_in_document_order() {
    let dir = TempDir::new().unwrap();
    let specs = dir.path().join("specs.json");
    let source = dir.path().join("source.json");
    write(&specs, SPECS);
    write(
        &source,
        r#"{ "id": 7, "name": "Ada Lovelace", "email": "ADA@EXAMPLE.ORG", "years": "36" }"#,
    );

    let record = run_map(&MapRequest {
        specs,
        source,
        ..MapRequest::default()
    })
    .unwrap();

    insta::assert_snapshot!(render_json(&record).unwrap(), @r#"
    {
      "id": 7,
      "fullName": "Ada Lovelace",
      "email": "ada@example.org",
      "age": 36
    }
    "#);
}

#[test]
fn absent_optional_is_omitted_and_nullable_is_null() {
    let source = SourceRecord::from_json(json!({ "id": 1, "full_name": "Grace" })).unwrap();
    let record = map_record(&document(), &source, &[], &[]).unwrap();

    assert_eq!(record.get("email"), Some(&json!(null)));
    assert!(!record.contains("age"));
    assert_eq!(record.get("fullName"), Some(&json!("Grace")));
}

#[test]
fn replacements_and_exclusions_apply() {
    let source = SourceRecord::from_json(json!({ "years": "40" })).unwrap();
    let record = map_record(
        &document(),
        &source,
        &["email".to_string(), "age".to_string()],
        &[
            ("id".to_string(), json!(99)),
            ("fullName".to_string(), json!("Anonymous")),
        ],
    )
    .unwrap();

    assert_eq!(record.get("id"), Some(&json!(99)));
    assert_eq!(record.get("fullName"), Some(&json!("Anonymous")));
    assert!(!record.contains("email"));
    assert!(!record.contains("age"));
}

#[test]
fn excluding_required_property_is_an_error() {
    let source = SourceRecord::from_json(json!({ "id": 1, "name": "x" })).unwrap();
    let err = map_record(&document(), &source, &["id".to_string()], &[]).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Property 'id' excluded but is required");
}

#[test]
fn transform_failure_is_reported() {
    let source = SourceRecord::from_json(json!({ "id": 1, "name": "x", "years": "old" })).unwrap();
    let err = map_record(&document(), &source, &[], &[]).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"'old' is not a number");
}

#[test]
fn source_must_be_a_json_object() {
    let dir = TempDir::new().unwrap();
    let specs = dir.path().join("specs.json");
    let source = dir.path().join("source.json");
    write(&specs, SPECS);
    write(&source, "[1, 2, 3]");

    let err = run_map(&MapRequest {
        specs,
        source,
        ..MapRequest::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("expected a JSON object"));
}

#[test]
fn unknown_transformation_in_spec_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let specs = dir.path().join("specs.json");
    let source = dir.path().join("source.json");
    write(&specs, r#"{ "id": { "requirement": "required", "transformation": "reverse" } }"#);
    write(&source, r#"{ "id": 1 }"#);

    let err = run_map(&MapRequest {
        specs,
        source,
        ..MapRequest::default()
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("unknown transformation: reverse"));
}
