//! Tests for identifier naming and Rust code emission.

use std::fs;

use arbgen_generator::codegen::naming::{
    ident, is_identifier, method_name, screaming_snake_case, snake_case,
};
use arbgen_generator::{GenerateError, Generated, Generator, Settings};
use tempfile::TempDir;

fn build(
    files: &[(&str, &str)],
    settings: impl FnOnce(&TempDir) -> Settings,
) -> Result<Generated, GenerateError> {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    Generator::new(settings(&dir)).build()
}

fn default_settings(dir: &TempDir) -> Settings {
    Settings::builder().arb_dir(dir.path()).build()
}

fn render(files: &[(&str, &str)]) -> String {
    build(files, default_settings).unwrap().render()
}

// =========================================================================
// Naming
// =========================================================================

#[test]
fn test_snake_case() {
    assert_eq!(snake_case("helloWorld"), "hello_world");
    assert_eq!(snake_case("HTTPStatus"), "http_status");
    assert_eq!(snake_case("item2Count"), "item2_count");
    assert_eq!(snake_case("already_snake"), "already_snake");
    assert_eq!(screaming_snake_case("AppLocalizations"), "APP_LOCALIZATIONS");
}

#[test]
fn test_method_names() {
    assert_eq!(method_name("helloWorld").as_deref(), Some("hello_world"));
    assert_eq!(method_name("self").as_deref(), Some("self_"));
    assert_eq!(method_name("2fast"), None);
    assert_eq!(method_name("with-dash"), None);
    assert!(is_identifier("_private"));
    assert!(!is_identifier("_"));
}

#[test]
fn test_keywords_become_raw_identifiers() {
    assert_eq!(ident("type").to_string(), "r#type");
    assert_eq!(ident("name").to_string(), "name");
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn test_output_class_must_be_upper_camel_case() {
    let err = build(&[("app_en.arb", r#"{"a": "A"}"#)], |dir| {
        Settings::builder()
            .arb_dir(dir.path())
            .output_class("appStrings")
            .build()
    })
    .unwrap_err();
    assert!(matches!(err, GenerateError::InvalidOutputClass { ref name } if name == "appStrings"));
}

#[test]
fn test_message_keys_colliding_after_snake_case() {
    let err = build(
        &[("app_en.arb", r#"{"helloWorld": "A", "hello_world": "B"}"#)],
        default_settings,
    )
    .unwrap_err();
    let GenerateError::IdentifierCollision {
        key,
        first,
        second,
        ident,
    } = err
    else {
        panic!("expected an identifier collision");
    };
    assert_eq!(key, None);
    assert_eq!(first, "helloWorld");
    assert_eq!(second, "hello_world");
    assert_eq!(ident, "hello_world");
}

#[test]
fn test_message_key_colliding_with_locale_name() {
    let err = build(&[("app_en.arb", r#"{"localeName": "A"}"#)], default_settings).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::IdentifierCollision { ref first, .. } if first == "locale_name"
    ));
}

#[test]
fn test_placeholder_names_colliding_after_snake_case() {
    let err = build(
        &[("app_en.arb", r#"{"pair": "{userName} {user_name}"}"#)],
        default_settings,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::IdentifierCollision { ref key, .. } if key.as_deref() == Some("pair")
    ));
}

#[test]
fn test_invalid_placeholder_name() {
    let err = build(
        &[(
            "app_en.arb",
            r#"{"a": "text", "@a": {"placeholders": {"not-valid": {}}}}"#,
        )],
        default_settings,
    )
    .unwrap_err();
    assert!(matches!(err, GenerateError::InvalidPlaceholderName { .. }));
}

// =========================================================================
// Emission
// =========================================================================

#[test]
fn test_emits_trait_structs_and_lookup() {
    let source = render(&[
        ("app_en.arb", r#"{"helloWorld": "Hello World"}"#),
        ("app_es.arb", r#"{"helloWorld": "Hola Mundo"}"#),
    ]);
    assert!(source.contains("pub trait AppLocalizations"));
    assert!(source.contains("fn locale_name"));
    assert!(source.contains("fn hello_world"));
    assert!(source.contains("pub struct AppLocalizationsEn"));
    assert!(source.contains("pub struct AppLocalizationsEs"));
    assert!(source.contains("\"Hola Mundo\""));
    assert!(source.contains("SUPPORTED_LOCALES"));
    assert!(source.contains("APP_LOCALIZATIONS_TABLE"));
    assert!(source.contains("fn lookup_app_localizations"));
    assert!(source.contains("pub struct AppLocalizationsDelegate"));
}

#[test]
fn test_emission_is_deterministic() {
    let files = [
        (
            "app_en.arb",
            r#"{"items": "{count, plural, =0{none} one{one} other{{count}}}", "who": "{g, select, a{A} other{B}}"}"#,
        ),
        ("app_de.arb", r#"{"items": "{count, plural, one{eins} other{{count}}}"}"#),
    ];
    assert_eq!(render(&files), render(&files));
}

#[test]
fn test_plural_select_and_formatters() {
    let source = render(&[(
        "app_en.arb",
        r#"{
            "items": "{count, plural, =0{none} one{one} other{{count} items}}",
            "who": "{gender, select, male{He} other{They}}",
            "price": "{amount}",
            "@price": {"placeholders": {"amount": {"type": "double", "format": "simpleCurrency", "optionalParameters": {"name": "EUR"}}}},
            "when": "{day, date, yMMMd}"
        }"#,
    )]);
    assert!(source.contains("plural"));
    assert!(source.contains("PluralCase"));
    assert!(source.contains("Exact (0)"));
    assert!(source.contains("match gender"));
    assert!(source.contains("__amount_format"));
    assert!(source.contains("SimpleCurrency"));
    assert!(source.contains("\"EUR\""));
    assert!(source.contains("DateFormat"));
    assert!(source.contains("\"yMMMd\""));
}

#[test]
fn test_literal_braces_are_escaped_in_format_strings() {
    let source = render(&[("app_en.arb", r#"{"braces": "a } b {name}"}"#)]);
    assert!(source.contains("\"a }} b {}\""));
}

#[test]
fn test_untranslated_base_locale_is_a_stub() {
    let source = render(&[
        ("app_en.arb", r#"{"a": "A", "b": "B"}"#),
        ("app_fr.arb", r#"{"a": "Un"}"#),
    ]);
    assert!(source.contains("message 'b' is not translated for locale 'fr'"));
    assert!(!source.contains("message 'a' is not translated"));
}

#[test]
fn test_untranslated_regional_locale_is_a_stub() {
    let source = render(&[
        ("app_en.arb", r#"{"a": "A", "b": "B"}"#),
        ("app_en_GB.arb", r#"{"a": "A (GB)"}"#),
    ]);
    assert!(source.contains("pub struct AppLocalizationsEnGb"));
    assert!(source.contains("message 'b' is not translated for locale 'en_GB'"));
    assert!(!source.contains("AppLocalizations :: b (& AppLocalizationsEn"));
}

#[test]
fn test_unparsable_regional_translation_is_a_stub() {
    let source = render(&[
        ("app_en.arb", r#"{"n": "{c, plural, one{x} other{y}}"}"#),
        ("app_en_GB.arb", r#"{"n": "{c, plural, one{x}}"}"#),
    ]);
    assert!(source.contains("message 'n' is not translated for locale 'en_GB'"));
    assert!(!source.contains("message 'n' is not translated for locale 'en'"));
}

// =========================================================================
// Parameter Order
// =========================================================================

/// The source of the `impl` block for one locale struct, without whitespace.
fn locale_impl(source: &str, struct_name: &str) -> String {
    let compact: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    let start = compact
        .find(&format!("implAppLocalizationsfor{struct_name}{{"))
        .unwrap();
    let rest = &compact[start..];
    let end = rest[1..].find("impl").map_or(rest.len(), |i| i + 1);
    rest[..end].to_string()
}

const ORDERED_TEMPLATE: &str = r#"{
    "msg": "{a} then {b}",
    "@msg": {"placeholders": {"a": {"type": "String"}, "b": {"type": "String"}}}
}"#;

#[test]
fn test_reordered_translation_keeps_template_parameter_order() {
    let source = render(&[
        ("app_en.arb", ORDERED_TEMPLATE),
        ("app_es.arb", r#"{"msg": "{b} luego {a}"}"#),
    ]);
    let es = locale_impl(&source, "AppLocalizationsEs");
    assert!(es.contains("fnmsg(&self,a:&str,b:&str)"));
    let en = locale_impl(&source, "AppLocalizationsEn");
    assert!(en.contains("fnmsg(&self,a:&str,b:&str)"));
}

#[test]
fn test_translation_omitting_a_placeholder_keeps_its_position() {
    let source = render(&[
        ("app_en.arb", ORDERED_TEMPLATE),
        ("app_es.arb", r#"{"msg": "solo {b}"}"#),
    ]);
    let es = locale_impl(&source, "AppLocalizationsEs");
    assert!(es.contains("fnmsg(&self,_a:&str,b:&str)"));
}

#[test]
fn test_header_comes_first() {
    let generated = build(&[("app_en.arb", r#"{"a": "A"}"#)], |dir| {
        Settings::builder()
            .arb_dir(dir.path())
            .header("// Generated file. Do not edit.".to_string())
            .build()
    })
    .unwrap();
    assert!(generated
        .render()
        .starts_with("// Generated file. Do not edit.\n\n"));
}

#[test]
fn test_description_becomes_doc_comment() {
    let source = render(&[(
        "app_en.arb",
        r#"{"a": "Alpha", "@a": {"description": "The first letter"}}"#,
    )]);
    assert!(source.contains("The first letter"));
}
