//! Tests for placeholder type inference and format validation.

use arbgen_generator::parser::{Node, ParseOptions, parse_message};
use arbgen_generator::{
    DeclaredPlaceholder, GenerateError, PlaceholderType, PlaceholderUsage, infer_placeholders,
};
use indexmap::IndexMap;
use serde_json::json;

fn parse(text: &str) -> Node {
    parse_message(text, &ParseOptions::default()).unwrap()
}

fn declared(placeholders: Vec<DeclaredPlaceholder>) -> IndexMap<String, DeclaredPlaceholder> {
    placeholders
        .into_iter()
        .map(|placeholder| (placeholder.name.clone(), placeholder))
        .collect()
}

fn typed(name: &str, declared_type: PlaceholderType) -> DeclaredPlaceholder {
    DeclaredPlaceholder {
        declared_type: Some(declared_type),
        ..DeclaredPlaceholder::new(name)
    }
}

fn formatted(name: &str, declared_type: PlaceholderType, format: &str) -> DeclaredPlaceholder {
    DeclaredPlaceholder {
        format: Some(format.to_string()),
        ..typed(name, declared_type)
    }
}

// =========================================================================
// Type Resolution
// =========================================================================

#[test]
fn test_undeclared_plain_placeholder_is_object() {
    let ast = parse("Hello {name}");
    let placeholders = infer_placeholders("greet", &IndexMap::new(), [&ast]).unwrap();
    let name = &placeholders["name"];
    assert_eq!(name.resolved_type, PlaceholderType::Object);
    assert_eq!(name.usage, None);
    assert!(!name.declared);
    assert!(!name.requires_formatting);
}

#[test]
fn test_plural_defaults_to_num() {
    let ast = parse("{count, plural, one{one} other{many}}");
    let placeholders = infer_placeholders("items", &IndexMap::new(), [&ast]).unwrap();
    assert_eq!(placeholders["count"].resolved_type, PlaceholderType::Num);
    assert!(placeholders["count"].is_plural());
}

#[test]
fn test_plural_keeps_declared_int() {
    let ast = parse("{count, plural, one{one} other{many}}");
    let declarations = declared(vec![typed("count", PlaceholderType::Int)]);
    let placeholders = infer_placeholders("items", &declarations, [&ast]).unwrap();
    assert_eq!(placeholders["count"].resolved_type, PlaceholderType::Int);
    assert!(placeholders["count"].declared);
}

#[test]
fn test_plural_rejects_string() {
    let ast = parse("{count, plural, one{one} other{many}}");
    let declarations = declared(vec![typed("count", PlaceholderType::String)]);
    let err = infer_placeholders("items", &declarations, [&ast]).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::PlaceholderTypeMismatch {
            usage: PlaceholderUsage::Plural,
            declared: PlaceholderType::String,
            ..
        }
    ));
}

#[test]
fn test_select_is_string() {
    let ast = parse("{gender, select, male{He} other{They}}");
    let placeholders = infer_placeholders("pronoun", &IndexMap::new(), [&ast]).unwrap();
    assert_eq!(placeholders["gender"].resolved_type, PlaceholderType::String);
    assert!(placeholders["gender"].is_select());
}

#[test]
fn test_date_argument_is_date_time() {
    let ast = parse("On {when, date, yMMMd}");
    let placeholders = infer_placeholders("event", &IndexMap::new(), [&ast]).unwrap();
    assert_eq!(placeholders["when"].resolved_type, PlaceholderType::DateTime);
    assert!(placeholders["when"].is_date_time_argument());
    assert!(placeholders["when"].requires_formatting);
}

#[test]
fn test_usage_from_other_locale() {
    let template = parse("{count} items");
    let translation = parse("{count, plural, one{un} other{{count}}}");
    let placeholders =
        infer_placeholders("items", &IndexMap::new(), [&template, &translation]).unwrap();
    assert_eq!(placeholders["count"].resolved_type, PlaceholderType::Num);
}

#[test]
fn test_conflicting_usage() {
    let ast = parse("{x, plural, other{a}} {x, select, other{b}}");
    let err = infer_placeholders("both", &IndexMap::new(), [&ast]).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::ConflictingPlaceholderUsage {
            first: PlaceholderUsage::Plural,
            second: PlaceholderUsage::Select,
            ..
        }
    ));
}

#[test]
fn test_declared_order_then_synthesized_sorted() {
    let ast = parse("{zeta} {beta} {alpha} {declared}");
    let declarations = declared(vec![DeclaredPlaceholder::new("declared")]);
    let placeholders = infer_placeholders("order", &declarations, [&ast]).unwrap();
    let names: Vec<&String> = placeholders.keys().collect();
    assert_eq!(names, vec!["declared", "alpha", "beta", "zeta"]);
}

#[test]
fn test_declared_but_unused_placeholder_is_kept() {
    let ast = parse("No placeholders here");
    let declarations = declared(vec![typed("unused", PlaceholderType::Int)]);
    let placeholders = infer_placeholders("plain", &declarations, [&ast]).unwrap();
    assert_eq!(placeholders["unused"].resolved_type, PlaceholderType::Int);
}

// =========================================================================
// Format Validation
// =========================================================================

#[test]
fn test_plain_date_time_needs_format() {
    let ast = parse("Today is {day}");
    let declarations = declared(vec![typed("day", PlaceholderType::DateTime)]);
    let err = infer_placeholders("today", &declarations, [&ast]).unwrap_err();
    assert!(matches!(err, GenerateError::MissingDateFormat { .. }));
}

#[test]
fn test_unknown_date_skeleton_suggests_closest() {
    let ast = parse("{day}");
    let declarations = declared(vec![formatted("day", PlaceholderType::DateTime, "yMMd")]);
    let err = infer_placeholders("today", &declarations, [&ast]).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::InvalidDateFormat { ref suggestion, .. } if suggestion.is_some()
    ));
}

#[test]
fn test_custom_date_pattern_is_accepted() {
    let ast = parse("{day}");
    let mut day = formatted("day", PlaceholderType::DateTime, "EEE, d 'of' MMMM");
    day.is_custom_date_format = true;
    let placeholders = infer_placeholders("today", &declared(vec![day]), [&ast]).unwrap();
    assert!(placeholders["day"].is_custom_date_format);
}

#[test]
fn test_date_argument_format_is_validated() {
    let ast = parse("{when, date, notASkeleton}");
    let err = infer_placeholders("event", &IndexMap::new(), [&ast]).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidDateFormat { ref format, .. } if format == "notASkeleton"));
}

#[test]
fn test_number_format_requires_formatting() {
    let ast = parse("{amount}");
    let declarations = declared(vec![formatted(
        "amount",
        PlaceholderType::Double,
        "compactCurrency",
    )]);
    let placeholders = infer_placeholders("price", &declarations, [&ast]).unwrap();
    assert!(placeholders["amount"].requires_formatting);
    assert!(placeholders["amount"].is_number());
}

#[test]
fn test_unknown_number_format() {
    let ast = parse("{amount}");
    let declarations = declared(vec![formatted("amount", PlaceholderType::Int, "compactt")]);
    let err = infer_placeholders("price", &declarations, [&ast]).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::InvalidNumberFormat { ref suggestion, .. }
            if suggestion.as_deref() == Some("compact")
    ));
}

#[test]
fn test_rejected_optional_parameter() {
    let ast = parse("{amount}");
    let mut amount = formatted("amount", PlaceholderType::Double, "compact");
    amount
        .optional_parameters
        .insert("symbol".to_string(), json!("$"));
    let err = infer_placeholders("price", &declared(vec![amount]), [&ast]).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::InvalidOptionalParameter { ref parameter, .. } if parameter == "symbol"
    ));
}

#[test]
fn test_accepted_optional_parameter() {
    let ast = parse("{amount}");
    let mut amount = formatted("amount", PlaceholderType::Double, "currency");
    amount
        .optional_parameters
        .insert("decimalDigits".to_string(), json!(2));
    assert!(infer_placeholders("price", &declared(vec![amount]), [&ast]).is_ok());
}

#[test]
fn test_format_on_string_is_ignored() {
    let ast = parse("{name}");
    let declarations = declared(vec![formatted("name", PlaceholderType::String, "whatever")]);
    let placeholders = infer_placeholders("greet", &declarations, [&ast]).unwrap();
    assert!(!placeholders["name"].requires_formatting);
}
