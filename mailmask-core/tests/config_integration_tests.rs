// mailmask-core/tests/config_integration_tests.rs
//! Tests for rule loading, merging, and fail-fast validation.

use std::io::Write;

use mailmask_core::{merge_rules, MaskError, PatternConfig, PatternRegistry};
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn load_from_file_accepts_valid_rules() {
    let file = write_config(
        r#"
rules:
  - name: ticket_id
    description: "Internal ticket identifiers"
    pattern: '\bTKT-\d{6}\b'
"#,
    );

    let config = PatternConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.rules.len(), 1);
    assert_eq!(config.rules[0].name, "ticket_id");
}

#[test]
fn load_from_file_rejects_invalid_regex() {
    let file = write_config(
        r#"
rules:
  - name: broken
    pattern: '([unclosed'
"#,
    );

    let err = PatternConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("invalid regex pattern"));
}

#[test]
fn load_from_file_rejects_missing_file() {
    assert!(PatternConfig::load_from_file("/definitely/not/here.yaml").is_err());
}

#[test]
fn user_rules_override_defaults_without_reordering() {
    let defaults = PatternConfig::load_default_rules().unwrap();
    let default_names: Vec<String> = defaults.rules.iter().map(|r| r.name.clone()).collect();

    let file = write_config(
        r#"
rules:
  - name: email
    description: "Stricter corporate addresses only"
    pattern: '\b[\w.]+@corp\.example\.com\b'
  - name: ticket_id
    pattern: '\bTKT-\d{6}\b'
"#,
    );
    let user = PatternConfig::load_from_file(file.path()).unwrap();
    let merged = merge_rules(defaults, Some(user));

    let merged_names: Vec<String> = merged.rules.iter().map(|r| r.name.clone()).collect();
    let mut expected = default_names;
    expected.push("ticket_id".to_string());
    assert_eq!(merged_names, expected);

    let email = merged.rules.iter().find(|r| r.name == "email").unwrap();
    assert!(email.pattern.contains("corp"));
}

#[test]
fn registry_compilation_fails_fast_on_overlong_pattern() {
    let file = write_config(&format!(
        r#"
rules:
  - name: huge
    pattern: '{}'
"#,
        "a".repeat(600)
    ));

    // Validation at load time already refuses the pattern.
    let err = PatternConfig::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("exceeds maximum allowed"));
}

#[test]
fn new_label_needs_no_code_changes() {
    // A freshly registered classification flows through matching and masking
    // untouched: labels are open-ended strings, not a closed enum.
    let file = write_config(
        r#"
rules:
  - name: ticket_id
    pattern: '\bTKT-\d{6}\b'
"#,
    );
    let config = PatternConfig::load_from_file(file.path()).unwrap();
    let registry = PatternRegistry::compile(&config).unwrap();

    let matches = registry.match_all("see TKT-123456 for details");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].classification, "ticket_id");
}

#[test]
fn user_rule_with_enabled_false_never_matches() {
    let file = write_config(
        r#"
rules:
  - name: ticket_id
    pattern: '\bTKT-\d{6}\b'
    enabled: false
"#,
    );
    let config = PatternConfig::load_from_file(file.path()).unwrap();
    let registry = PatternRegistry::compile(&config).unwrap();

    assert!(registry.patterns.is_empty());
    assert!(registry.match_all("see TKT-123456 for details").is_empty());
}

#[test]
fn compile_error_is_structured() {
    let config = PatternConfig {
        rules: vec![mailmask_core::PatternRule {
            name: "broken".to_string(),
            pattern: "(".to_string(),
            ..Default::default()
        }],
    };
    match PatternRegistry::compile(&config) {
        Err(MaskError::Fatal(msg)) => assert!(msg.contains("broken")),
        other => panic!("expected fatal compile error, got {other:?}"),
    }
}
