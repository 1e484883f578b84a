// Unit tests for error handling
use dirsort_core::api::parse_entities;
use dirsort_core::config::SortConfig;
use dirsort_core::error::DirsortError;

#[test]
fn test_error_display() {
    assert_eq!(
        DirsortError::parse("invalid entity").to_string(),
        "Parse error: invalid entity"
    );
    assert_eq!(
        DirsortError::invalid_config("kinds must be a boolean").to_string(),
        "Invalid configuration: kinds must be a boolean"
    );
    assert_eq!(
        DirsortError::unknown_comparator("locale").to_string(),
        "Unknown comparator: locale"
    );
}

#[test]
fn test_parse_entities() {
    let entities =
        parse_entities(r#"[{"name": "src", "isDirectory": true}, {"name": "a.txt", "isDirectory": false}]"#)
            .unwrap();
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].name, "src");
    assert!(entities[0].is_directory);
}

#[test]
fn test_parse_entities_missing_flag() {
    // Missing isDirectory is rejected before any comparison happens
    let err = parse_entities(r#"[{"name": "a.txt"}]"#).unwrap_err();
    assert!(matches!(err, DirsortError::Parse(_)));
    assert!(err.to_string().contains("isDirectory"));
}

#[test]
fn test_parse_entities_non_string_name() {
    let err = parse_entities(r#"[{"name": 42, "isDirectory": false}]"#).unwrap_err();
    assert!(matches!(err, DirsortError::Parse(_)));
}

#[test]
fn test_config_errors_are_invalid_config() {
    let err = SortConfig::from_json(r#"{"kinds": "yes"}"#).unwrap_err();
    assert!(matches!(err, DirsortError::InvalidConfig(_)));
    assert!(err.to_string().starts_with("Invalid configuration: "));
}
