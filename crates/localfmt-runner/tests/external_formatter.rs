#![cfg(unix)]

use localfmt_config::{Config, FormatterRegistry, Platform};
use localfmt_core::{FormattingOptions, Position, Range, RangeFormattingProvider, TextDocument};
use localfmt_runner::{ExternalFormatter, FormatContext, FormatError};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::time::Duration;

fn registry(json: &str) -> FormatterRegistry {
    let config = Config::from_json_str(json).unwrap();
    let (registry, issues) = FormatterRegistry::from_config(&config, Platform::new("linux"));
    assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
    registry
}

fn spacing_formatter() -> ExternalFormatter {
    let registry = registry(
        r#"{
            "formatters": [
                { "command": ["sh", "-c", "sed 's/=/ = /g'"], "languages": ["ini"] }
            ]
        }"#,
    );
    ExternalFormatter::from_registry(&registry, "ini", FormatContext::new("/tmp/settings.ini"))
        .unwrap()
}

#[test]
fn test_document_formatting() {
    let document = TextDocument::new("a=1\nb=2\n");
    let edits = spacing_formatter()
        .provide_document_formatting_edits(&document, &FormattingOptions::default())
        .unwrap();
    assert_eq!(edits.len(), 4);
    assert_eq!(document.apply_edits(&edits).unwrap(), "a = 1\nb = 2\n");
}

#[test]
fn test_range_formatting_only_touches_range() {
    let document = TextDocument::new("a=1\nb=2\nc=3\n");
    let range = Range::new(Position::new(1, 0), Position::new(1, 3));
    let edits = spacing_formatter()
        .provide_range_formatting_edits(&document, range, &FormattingOptions::default())
        .unwrap();
    assert_eq!(edits.len(), 2);
    assert_eq!(document.apply_edits(&edits).unwrap(), "a=1\nb = 2\nc=3\n");
}

#[test]
fn test_options_reach_the_command_line() {
    let registry = registry(
        r#"{
            "formatters": [
                {
                    "command": {
                        "linux": ["sh", "-c", "cat; echo \"$0 $1\"", "$tabSize", "$insertSpaces"],
                        "*": ["false"]
                    },
                    "languages": ["txt"]
                }
            ]
        }"#,
    );
    let formatter =
        ExternalFormatter::from_registry(&registry, "txt", FormatContext::new("/tmp/a.txt"))
            .unwrap();
    let options = FormattingOptions {
        tab_size: 2,
        insert_spaces: false,
    };
    assert_eq!(formatter.run("x\n", &options).unwrap(), "x\n2 false\n");
}

#[test]
fn test_configured_cwd_is_relative_to_workspace() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    std::fs::create_dir(root.join("tools")).unwrap();

    let registry = registry(
        r#"{ "formatters": [ { "command": ["pwd", "-P"], "cwd": "tools", "languages": ["txt"] } ] }"#,
    );
    let context = FormatContext::new(root.join("notes.txt")).with_workspace_folders([root.clone()]);
    let formatter = ExternalFormatter::from_registry(&registry, "txt", context).unwrap();

    assert_eq!(formatter.cwd(), Some(root.join("tools")));
    let out = formatter.run("", &FormattingOptions::default()).unwrap();
    assert_eq!(PathBuf::from(out.trim_end()), root.join("tools"));
}

#[test]
fn test_failure_produces_no_edits() {
    let registry = registry(
        r#"{ "formatters": [ { "command": ["sh", "-c", "echo bad >&2; exit 1"], "languages": ["c"] } ] }"#,
    );
    let formatter =
        ExternalFormatter::from_registry(&registry, "c", FormatContext::new("/tmp/a.c")).unwrap();
    let document = TextDocument::new("int x;\n");
    let err = formatter
        .provide_document_formatting_edits(&document, &FormattingOptions::default())
        .unwrap_err();
    assert!(matches!(err, FormatError::Failed { code: Some(1), .. }));
}

#[test]
fn test_unknown_language() {
    let registry = registry(r#"{ "formatters": [] }"#);
    let err = ExternalFormatter::from_registry(&registry, "go", FormatContext::new("/tmp/a.go"))
        .unwrap_err();
    assert!(matches!(err, FormatError::NoFormatter(ref language) if language == "go"));
}

#[test]
fn test_timeout() {
    let registry =
        registry(r#"{ "formatters": [ { "command": ["sleep", "5"], "languages": ["txt"] } ] }"#);
    let formatter =
        ExternalFormatter::from_registry(&registry, "txt", FormatContext::new("/tmp/a.txt"))
            .unwrap()
            .with_timeout(Some(Duration::from_millis(100)));
    let err = formatter.run("", &FormattingOptions::default()).unwrap_err();
    assert!(matches!(err, FormatError::Timeout(_)));
}
