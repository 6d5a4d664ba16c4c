//! Integration tests for multi-file template sets.

use std::fs;
use std::path::{Path, PathBuf};

use datatmpl_render::{RenderError, RenderOptions, TemplateSet};
use serde_json::json;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

fn render_files(paths: &[PathBuf], data: serde_json::Value) -> Result<String, RenderError> {
    TemplateSet::from_files(paths, RenderOptions::default())?.render_to_string(&data)
}

// ============================================================================
// Cross-file references
// ============================================================================

#[test]
fn macro_defined_in_second_file() {
    let dir = TempDir::new().unwrap();
    let page = write(
        dir.path(),
        "page.tmpl",
        r#"{% import "macros.tmpl" as m %}{{ m.greet(Name) }}!"#,
    );
    let macros = write(
        dir.path(),
        "macros.tmpl",
        "{% macro greet(who) %}Hello {{ who }}{% endmacro %}",
    );

    let out = render_files(&[page.clone(), macros.clone()], json!({"Name": "World"})).unwrap();
    assert_eq!(out, "Hello World!");

    // Pasting the files together is not the same thing: the import target
    // only exists as a named template in the set.
    let pasted = format!(
        "{}{}",
        fs::read_to_string(&page).unwrap(),
        fs::read_to_string(&macros).unwrap()
    );
    let single = TemplateSet::from_source("pasted", pasted, RenderOptions::default()).unwrap();
    let err = single.render_to_string(json!({"Name": "World"})).err().unwrap();
    assert!(matches!(err, RenderError::Execute(_)));
}

#[test]
fn include_of_second_file() {
    let dir = TempDir::new().unwrap();
    let main = write(dir.path(), "main.tmpl", r#"[{% include "footer.tmpl" %}]"#);
    let footer = write(dir.path(), "footer.tmpl", "footer for {{ Name }}");

    let out = render_files(&[main, footer], json!({"Name": "World"})).unwrap();
    assert_eq!(out, "[footer for World]");
}

#[test]
fn child_extends_base_from_second_file() {
    let dir = TempDir::new().unwrap();
    let child = write(
        dir.path(),
        "child.tmpl",
        r#"{% extends "base.tmpl" %}{% block body %}{{ Name }}{% endblock %}"#,
    );
    let base = write(
        dir.path(),
        "base.tmpl",
        "<{% block body %}default{% endblock %}>",
    );

    let out = render_files(&[child, base], json!({"Name": "World"})).unwrap();
    assert_eq!(out, "<World>");
}

#[test]
fn templates_in_other_directories_are_referenced_by_base_name() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("partials")).unwrap();
    let main = write(dir.path(), "main.tmpl", r#"{% include "row.tmpl" %}"#);
    let row = write(dir.path(), "partials/row.tmpl", "row");

    assert_eq!(render_files(&[main, row], json!({})).unwrap(), "row");
}

// ============================================================================
// Primary template and registration order
// ============================================================================

#[test]
fn only_the_first_file_is_executed() {
    let dir = TempDir::new().unwrap();
    let first = write(dir.path(), "first.tmpl", "first");
    let second = write(dir.path(), "second.tmpl", "second");

    let set = TemplateSet::from_files([&first, &second], RenderOptions::default()).unwrap();
    assert_eq!(set.primary(), "first.tmpl");
    assert_eq!(set.names(), ["first.tmpl", "second.tmpl"]);
    assert_eq!(set.render_to_string(json!({})).unwrap(), "first");
}

#[test]
fn duplicate_base_name_later_file_wins() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    let a = write(dir.path(), "t.tmpl", "from a");
    let b = write(dir.path(), "b/t.tmpl", "from b");

    let set = TemplateSet::from_files([a, b], RenderOptions::default()).unwrap();
    assert_eq!(set.names().len(), 1);
    assert_eq!(set.render_to_string(json!({})).unwrap(), "from b");
}

#[test]
fn invalid_utf8_decodes_the_same_from_file_and_bytes() {
    let dir = TempDir::new().unwrap();
    let body = b"caf\xe9 {{ Name }}".to_vec();
    let path = dir.path().join("latin1.tmpl");
    fs::write(&path, &body).unwrap();
    let data = json!({"Name": "World"});

    let from_file = TemplateSet::from_files([&path], RenderOptions::default())
        .unwrap()
        .render_to_string(&data)
        .unwrap();
    let from_bytes = TemplateSet::from_bytes("<stdin>", body, RenderOptions::default())
        .unwrap()
        .render_to_string(&data)
        .unwrap();

    assert_eq!(from_file, "caf\u{fffd} World");
    assert_eq!(from_file, from_bytes);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn unreferenced_file_must_still_parse() {
    let dir = TempDir::new().unwrap();
    let good = write(dir.path(), "good.tmpl", "fine");
    let bad = write(dir.path(), "bad.tmpl", "{% if %}");

    let err = TemplateSet::from_files([good, bad], RenderOptions::default())
        .err()
        .unwrap();
    assert!(matches!(err, RenderError::Parse(_)));
    assert!(err.to_string().contains("bad.tmpl"));
}

#[test]
fn missing_include_target_is_an_execution_error() {
    let dir = TempDir::new().unwrap();
    let main = write(dir.path(), "main.tmpl", r#"{% include "nowhere.tmpl" %}"#);

    let err = render_files(&[main], json!({})).unwrap_err();
    assert!(!err.is_parse());
}

#[test]
fn missing_key_policy() {
    let dir = TempDir::new().unwrap();
    let main = write(dir.path(), "main.tmpl", "Hello {{ Name }}");

    let lenient = TemplateSet::from_files([&main], RenderOptions::default()).unwrap();
    assert_eq!(lenient.render_to_string(json!({})).unwrap(), "Hello ");

    let strict = TemplateSet::from_files([&main], RenderOptions::strict()).unwrap();
    let err = strict.render_to_string(json!({})).err().unwrap();
    assert!(matches!(err, RenderError::Execute(_)));
}

// ============================================================================
// Output shape
// ============================================================================

#[test]
fn loop_output_keeps_line_structure() {
    let dir = TempDir::new().unwrap();
    let main = write(
        dir.path(),
        "hosts.tmpl",
        "{% for h in hosts %}{{ h.name }} {{ h.ip }}\n{% endfor %}",
    );
    let data = json!({"hosts": [
        {"name": "web", "ip": "10.0.0.1"},
        {"name": "db", "ip": "10.0.0.2"}
    ]});

    let out = render_files(&[main], data).unwrap();
    insta::assert_snapshot!(out.trim_end(), @r"
    web 10.0.0.1
    db 10.0.0.2
    ");
}
