use std::io::Write;

use pretty_assertions::assert_eq;
use sketch_codegen::{
    translate, ControllerRegistry, OverrideError, OverrideTable, TranslateError, Translator,
};
use tempfile::NamedTempFile;

fn mapping_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = mapping_file(r#"{"digital.Low": "LOW", "PI": "3.14159"}"#);
    let table = OverrideTable::load(file.path()).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup("PI"), Some("3.14159"));
}

#[test]
fn test_load_empty_object() {
    let file = mapping_file("{}");
    let table = OverrideTable::load(file.path()).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = OverrideTable::load(dir.path().join("mapping.json")).unwrap_err();
    assert!(matches!(err, OverrideError::Read { .. }));
}

#[test]
fn test_malformed_file_fails_whole_load() {
    let file = mapping_file(r#"{"digital.Low": "LOW", "digital.High": }"#);
    let err = OverrideTable::load(file.path()).unwrap_err();
    assert!(matches!(err, OverrideError::Malformed { .. }));
    assert!(err.to_string().contains("not a flat JSON object"));
}

#[test]
fn test_override_precedes_registry() {
    let overrides: OverrideTable = [("serial.Begin", "beginSerial")].into_iter().collect();
    let registry = ControllerRegistry::builtin();
    let sketch = Translator::new(&overrides, &registry)
        .translate_source("package p\nfunc setup() { serial.Begin(9600); serial.End() }\n")
        .unwrap();
    assert_eq!(
        sketch,
        "void setup() {\n    beginSerial(9600);\n    Serial.end();\n}\n"
    );
}

#[test]
fn test_bare_identifier_override() {
    let overrides: OverrideTable = [("LED", "LED_BUILTIN")].into_iter().collect();
    let registry = ControllerRegistry::builtin();
    let sketch = Translator::new(&overrides, &registry)
        .translate_source("package p\nfunc loop() { digitalWrite(LED, 1) }\n")
        .unwrap();
    assert_eq!(sketch, "void loop() {\n    digitalWrite(LED_BUILTIN, 1);\n}\n");
}

#[test]
fn test_run_with_mapping_path() {
    let file = mapping_file(r#"{"timer.Delay": "delay"}"#);
    let mut out = Vec::new();
    translate(
        "package p\nfunc loop() { timer.Delay(10) }\n".as_bytes(),
        &mut out,
        file.path(),
    )
    .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "void loop() {\n    delay(10);\n}\n");
}

#[test]
fn test_run_with_missing_mapping_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = Vec::new();
    let err = translate("package p".as_bytes(), &mut out, dir.path().join("none.json")).unwrap_err();
    assert!(matches!(err, TranslateError::Overrides(OverrideError::Read { .. })));
    assert!(out.is_empty());
}
