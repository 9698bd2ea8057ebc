//! End-to-end runs of the navtree commands

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use navtree_cli::{run, Cli};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run_args(args: &[&str]) -> (anyhow::Result<u8>, String) {
    let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
    let mut out = Vec::new();
    let result = run(&cli, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// validate
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_validate_valid_file() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "sidebars.json",
        r#"["index", {"label": "Guides", "items": ["setup", "usage"]}]"#,
    );

    let (result, out) = run_args(&["navtree", "validate", arg(&file)]);
    assert_eq!(result.unwrap(), 0);
    assert!(out.contains("root: 3 documents, 1 category"));
    assert!(out.ends_with("0 errors, 0 warnings\n"));
}

#[test]
fn test_validate_reports_error_with_path() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "sidebars.yaml", "- label: ''\n  items: []\n");

    let (result, out) = run_args(&["navtree", "validate", arg(&file)]);
    assert_eq!(result.unwrap(), 1);
    assert!(out.contains("error[empty-label]: category at root[0] has an empty label"));
    assert!(out.ends_with("1 error, 0 warnings\n"));
}

#[test]
fn test_validate_reports_every_duplicate() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "sidebars.json", r#"["a", "b", "a", "b"]"#);

    let (result, out) = run_args(&["navtree", "validate", arg(&file)]);
    assert_eq!(result.unwrap(), 1);
    let errors: Vec<_> = out.lines().filter(|l| l.starts_with("error[")).collect();
    assert_eq!(
        errors,
        vec![
            "error[duplicate-document-id]: document id \"a\" is listed 2 times: root[0], root[2]",
            "error[duplicate-document-id]: document id \"b\" is listed 2 times: root[1], root[3]",
        ]
    );
}

#[test]
fn test_warnings_pass_unless_fail_on_warnings() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "sidebars.json", r#"[{"label": "Soon", "items": []}]"#);

    let (result, out) = run_args(&["navtree", "validate", arg(&file)]);
    assert_eq!(result.unwrap(), 0);
    assert!(out.contains("warning[empty-category]: category \"Soon\" at root[0] has no items"));

    let (result, _) = run_args(&["navtree", "validate", arg(&file), "--fail-on-warnings"]);
    assert_eq!(result.unwrap(), 1);
}

#[test]
fn test_validate_max_depth() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "sidebars.json",
        r#"[{"label": "A", "items": [{"label": "B", "items": ["deep"]}]}]"#,
    );

    let (result, out) = run_args(&["navtree", "validate", arg(&file), "--max-depth", "2"]);
    assert_eq!(result.unwrap(), 0);
    assert!(out.contains(
        "warning[depth-exceeded]: node at root[0].items[0].items[0] is nested 3 levels deep (limit 2)"
    ));
}

#[test]
fn test_validate_json_output() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "sidebars.json", r#"{"docs": ["a", ""]}"#);

    let (result, out) = run_args(&["navtree", "validate", arg(&file), "--json"]);
    assert_eq!(result.unwrap(), 1);
    let report: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["errors"][0]["kind"], "empty-document-id");
    assert_eq!(report["errors"][0]["path"], "docs[1]");
    assert_eq!(report["warnings"], serde_json::json!([]));
}

#[test]
fn test_validate_single_sidebar() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "sidebars.json",
        r#"{"docs": ["index"], "broken": [{"label": "", "items": []}]}"#,
    );

    let (result, out) = run_args(&["navtree", "validate", arg(&file), "--sidebar", "docs"]);
    assert_eq!(result.unwrap(), 0);
    assert!(out.contains("docs: 1 document, 0 categories"));

    let (result, _) = run_args(&["navtree", "validate", arg(&file), "--sidebar", "blog"]);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("no sidebar named \"blog\""));
}

#[test]
fn test_validate_explicit_format() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "sidebars.txt", "- index\n");

    let (result, _) = run_args(&["navtree", "validate", arg(&file)]);
    assert!(result.is_err());

    let (result, _) = run_args(&["navtree", "validate", arg(&file), "--format", "yaml"]);
    assert_eq!(result.unwrap(), 0);
}

#[test]
fn test_validate_syntax_error_is_a_failure() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "sidebars.json", "[\"index\",");

    let (result, _) = run_args(&["navtree", "validate", arg(&file)]);
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("invalid JSON"));
}

// ═══════════════════════════════════════════════════════════════════════
// show / convert
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_show_outline() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "sidebars.json",
        r#"{"docs": ["index", {"label": "Guides", "items": ["setup"]}], "api": ["http"]}"#,
    );

    let (result, out) = run_args(&["navtree", "show", arg(&file)]);
    assert_eq!(result.unwrap(), 0);
    assert_eq!(
        out,
        "docs:\n  - index\n  + Guides\n    - setup\n\napi:\n  - http\n"
    );
}

#[test]
fn test_show_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "sidebars.json", r#"["a", "a"]"#);

    let (result, _) = run_args(&["navtree", "show", arg(&file)]);
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("document id \"a\" is listed 2 times"));
}

#[test]
fn test_convert_json_to_yaml_keeps_list_shape() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "sidebars.json",
        r#"["index", {"label": "Guides", "items": ["setup"]}]"#,
    );

    let (result, out) = run_args(&["navtree", "convert", arg(&file), "--to", "yaml"]);
    assert_eq!(result.unwrap(), 0);

    let tree = navtree::parse_tree(&out, &navtree::YAML).unwrap();
    assert_eq!(tree.document_ids(), vec!["index", "setup"]);
}

#[test]
fn test_convert_to_file() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "sidebars.yml", "docs:\n  - index\napi:\n  - http\n");
    let target = dir.path().join("sidebars.json");

    let (result, out) = run_args(&[
        "navtree",
        "convert",
        arg(&file),
        "--to",
        "json",
        "--output",
        arg(&target),
    ]);
    assert_eq!(result.unwrap(), 0);
    assert!(out.is_empty());

    let sidebars = navtree::load_file(&target).unwrap();
    let names: Vec<_> = sidebars.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["docs", "api"]);
}
