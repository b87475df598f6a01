use localfmt_config::{Config, ConfigError, FormatterRegistry, IssueSeverity, Platform};
use pretty_assertions::assert_eq;
use std::fs;

const SETTINGS: &str = r#"{
    "advancedLocalFormatters.formatters": [
        { "command": ["black", "-q", "-"], "languages": ["python"] },
        { "command": { "darwin": ["swift-format"] }, "languages": ["swift"] },
        { "command": ["prettier"], "languages": [] },
        { "command": ["old-black"], "languages": ["python"], "disabled": true },
        { "command": { "win32": ["fmt.cmd"], "*": ["fmt", "$tabSize"] }, "languages": ["mylang", "python"], "cwd": "tools" }
    ]
}"#;

#[test]
fn load_editor_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, SETTINGS).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.formatters.len(), 5);

    let (registry, issues) = FormatterRegistry::from_config(&config, Platform::new("linux"));
    let severities: Vec<_> = issues.iter().map(|i| (i.formatter_index, i.severity)).collect();
    assert_eq!(
        severities,
        vec![(1, IssueSeverity::Warning), (2, IssueSeverity::Error)]
    );

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.formatter_for("python").unwrap().command, vec!["black", "-q", "-"]);
    let mylang = registry.formatter_for("mylang").unwrap();
    assert_eq!(mylang.command, vec!["fmt", "$tabSize"]);
    assert_eq!(mylang.cwd.as_deref(), Some("tools"));
    assert!(registry.formatter_for("swift").is_none());
}

#[test]
fn platform_aliases_select_commands() {
    let config = Config::from_json_str(SETTINGS).unwrap();

    let (mac, _) = FormatterRegistry::from_config(&config, Platform::new("macos"));
    assert_eq!(mac.formatter_for("swift").unwrap().command, vec!["swift-format"]);

    let (windows, _) = FormatterRegistry::from_config(&config, Platform::new("windows"));
    assert_eq!(windows.formatter_for("mylang").unwrap().command, vec!["fmt.cmd"]);
}

#[test]
fn reload_replaces_formatters() {
    let config = Config::from_json_str(SETTINGS).unwrap();
    let (mut registry, _) = FormatterRegistry::from_config(&config, Platform::new("linux"));
    assert!(!registry.is_empty());

    let issues = registry.reload(&Config::default());
    assert!(issues.is_empty());
    assert!(registry.is_empty());
    assert!(registry.formatter_for("python").is_none());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(
        Config::from_json_str(r#"{ "formatters": [ { "command": 3 } ] }"#),
        Err(ConfigError::Json(_))
    ));
}
