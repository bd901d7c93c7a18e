//! End-to-end tests for the `arbgen` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A project with an English template and an incomplete Spanish bundle.
fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "lib/l10n/app_en.arb",
        r#"{
  "helloWorld": "Hello World",
  "@helloWorld": { "description": "Greeting" },
  "itemCount": "{count, plural, =0{no items} =1{one item} other{{count} items}}",
  "@itemCount": { "placeholders": { "count": { "type": "int" } } }
}"#,
    );
    write(
        dir.path(),
        "lib/l10n/app_es.arb",
        r#"{ "helloWorld": "Hola Mundo" }"#,
    );
    dir
}

fn arbgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_arbgen"))
        .args(args)
        .arg("--project-dir")
        .arg(dir)
        .args(["--color", "never"])
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// =========================================================================
// generate
// =========================================================================

#[test]
fn generate_writes_output_file() {
    let dir = project();
    let output = arbgen(dir.path(), &["generate"]);

    assert!(output.status.success(), "{output:?}");
    let generated = fs::read_to_string(dir.path().join("lib/l10n/app_localizations.rs")).unwrap();
    assert!(generated.contains("pub trait AppLocalizations"));
    assert!(generated.contains("AppLocalizationsEs"));
    assert!(stdout(&output).contains("2 messages"));
}

#[test]
fn generate_respects_output_class_flag() {
    let dir = project();
    let output = arbgen(dir.path(), &["generate", "--output-class", "Strings"]);

    assert!(output.status.success(), "{output:?}");
    let generated = fs::read_to_string(dir.path().join("lib/l10n/app_localizations.rs")).unwrap();
    assert!(generated.contains("pub trait Strings"));
    assert!(generated.contains("pub struct StringsEn"));
}

#[test]
fn generate_reads_config_file() {
    let dir = project();
    write(
        dir.path(),
        "l10n.json",
        r#"{ "output_localization_file": "strings.rs", "untranslated_messages_file": "missing.json" }"#,
    );
    let output = arbgen(dir.path(), &["generate"]);

    assert!(output.status.success(), "{output:?}");
    assert!(dir.path().join("lib/l10n/strings.rs").exists());
    let report = fs::read_to_string(dir.path().join("missing.json")).unwrap();
    let report: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(report["es"][0], "itemCount");
}

#[test]
fn generate_json_summary() {
    let dir = project();
    let output = arbgen(dir.path(), &["generate", "--json"]);

    assert!(output.status.success(), "{output:?}");
    let summary: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["messages"], 2);
    assert_eq!(summary["locales"], serde_json::json!(["en", "es"]));
}

#[test]
fn generate_fails_on_template_syntax_error() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "lib/l10n/app_en.arb",
        r#"{ "broken": "{count, plural, one{x}" }"#,
    );
    let output = arbgen(dir.path(), &["generate"]);

    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    assert!(!dir.path().join("lib/l10n/app_localizations.rs").exists());
}

// =========================================================================
// check
// =========================================================================

#[test]
fn check_writes_nothing() {
    let dir = project();
    let output = arbgen(dir.path(), &["check"]);

    assert!(output.status.success(), "{output:?}");
    assert!(!dir.path().join("lib/l10n/app_localizations.rs").exists());
}

#[test]
fn check_strict_fails_on_warnings() {
    let dir = project();
    write(
        dir.path(),
        "lib/l10n/app_es.arb",
        r#"{ "helloWorld": "Hola Mundo", "obsolete": "Viejo" }"#,
    );

    let relaxed = arbgen(dir.path(), &["check"]);
    assert!(relaxed.status.success(), "{relaxed:?}");
    assert!(stdout(&relaxed).contains("obsolete"));

    let strict = arbgen(dir.path(), &["check", "--strict"]);
    assert_eq!(strict.status.code(), Some(exitcode::DATAERR));
}

// =========================================================================
// coverage
// =========================================================================

#[test]
fn coverage_lists_missing_messages() {
    let dir = project();
    let output = arbgen(dir.path(), &["coverage"]);

    assert!(output.status.success(), "{output:?}");
    let text = stdout(&output);
    assert!(text.contains("1/2"));
    assert!(text.contains("50%"));
    assert!(text.contains("Missing in es:"));
    assert!(text.contains("  - itemCount"));
}

#[test]
fn coverage_json_output() {
    let dir = project();
    let output = arbgen(dir.path(), &["coverage", "--json"]);

    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rows[0]["locale"], "es");
    assert_eq!(rows[0]["translated"], 1);
    assert_eq!(rows[0]["total"], 2);
    assert_eq!(rows[0]["missing"], serde_json::json!(["itemCount"]));
}

#[test]
fn coverage_strict_fails_when_incomplete() {
    let dir = project();
    let output = arbgen(dir.path(), &["coverage", "--strict"]);

    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
}
