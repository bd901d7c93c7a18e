//! Tests for the runtime plural, date and number helpers.

use arbgen::{
    DateFormat, DateTime, NumberFormat, NumberFormatKind, PluralCase, plural, plural_category,
};
use chrono::NaiveDate;

fn march_ninth() -> DateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(14, 5, 7)
        .unwrap()
}

// =========================================================================
// Plural Rules
// =========================================================================

#[test]
fn test_plural_categories() {
    assert_eq!(plural_category("en", 1), "one");
    assert_eq!(plural_category("en", 0), "other");
    assert_eq!(plural_category("ar", 0), "zero");
    assert_eq!(plural_category("ar", 2), "two");
    assert_eq!(plural_category("pl", 5), "many");
    assert_eq!(plural_category("ru", 21), "one");
    assert_eq!(plural_category("ja", 1), "other");
}

#[test]
fn test_plural_uses_language_subtag() {
    assert_eq!(plural_category("pl_PL", 2), "few");
    assert_eq!(plural_category("pt-BR", 1), "one");
}

#[test]
fn test_exact_case_wins_over_category() {
    let text = plural(
        "en",
        1.0,
        [
            (PluralCase::One, "category".to_string()),
            (PluralCase::Exact(1), "exact".to_string()),
        ],
        "other".to_string(),
    );
    assert_eq!(text, "exact");
}

#[test]
fn test_fractional_values_use_other() {
    let text = plural(
        "en",
        1.5,
        [(PluralCase::One, "one".to_string())],
        "other".to_string(),
    );
    assert_eq!(text, "other");
}

#[test]
fn test_missing_category_uses_other() {
    let text = plural(
        "ru",
        3.0,
        [(PluralCase::One, "one".to_string())],
        "other".to_string(),
    );
    assert_eq!(text, "other");
}

// =========================================================================
// Dates
// =========================================================================

#[test]
fn test_date_skeletons() {
    let date = march_ninth();
    assert_eq!(DateFormat::skeleton("yMd", "en").format(&date), "3/9/2024");
    assert_eq!(
        DateFormat::skeleton("yMMMMEEEEd", "en").format(&date),
        "Saturday, March 9, 2024"
    );
    assert_eq!(DateFormat::skeleton("yQQQ", "en").format(&date), "Q1 2024");
    assert_eq!(DateFormat::skeleton("Hms", "en").format(&date), "14:05:07");
}

#[test]
fn test_localized_numeric_layouts() {
    let date = march_ninth();
    assert_eq!(DateFormat::skeleton("yMd", "de").format(&date), "9.3.2024");
    assert_eq!(DateFormat::skeleton("yMd", "fr_CA").format(&date), "9/3/2024");
    assert_eq!(DateFormat::skeleton("yMd", "ja").as_pattern(), "y/M/d");
    assert_eq!(DateFormat::skeleton("jm", "fr").format(&date), "14:05");
    assert_eq!(DateFormat::skeleton("jm", "en_GB").format(&date), "2:05 PM");
}

#[test]
fn test_custom_pattern_with_quotes() {
    let date = march_ninth();
    assert_eq!(
        DateFormat::pattern("EEE, d 'of' MMMM", "en").format(&date),
        "Sat, 9 of March"
    );
    assert_eq!(DateFormat::pattern("h''mm", "en").format(&date), "2'05");
}

// =========================================================================
// Numbers
// =========================================================================

#[test]
fn test_decimal_separators() {
    let value = 1234567.5;
    assert_eq!(
        NumberFormat::new(NumberFormatKind::DecimalPattern, "de").format(value),
        "1.234.567,5"
    );
    assert_eq!(
        NumberFormat::new(NumberFormatKind::DecimalPattern, "fr").format(value),
        "1\u{a0}234\u{a0}567,5"
    );
    assert_eq!(
        NumberFormat::new(NumberFormatKind::DecimalPattern, "en").format(-1234.5),
        "-1,234.5"
    );
}

#[test]
fn test_decimal_digits() {
    let format = NumberFormat::new(NumberFormatKind::DecimalPatternDigits, "en").decimal_digits(2);
    assert_eq!(format.format(1.0), "1.00");
}

#[test]
fn test_percent_patterns() {
    assert_eq!(
        NumberFormat::new(NumberFormatKind::PercentPattern, "en").format(0.256),
        "26%"
    );
    assert_eq!(
        NumberFormat::new(NumberFormatKind::DecimalPercentPattern, "en")
            .decimal_digits(1)
            .format(0.256),
        "25.6%"
    );
}

#[test]
fn test_scientific_pattern() {
    assert_eq!(
        NumberFormat::new(NumberFormatKind::ScientificPattern, "en").format(1234.0),
        "1.234E3"
    );
}

#[test]
fn test_compact_patterns() {
    let compact = NumberFormat::new(NumberFormatKind::Compact, "en");
    assert_eq!(compact.format(999.0), "999");
    assert_eq!(compact.format(15000.0), "15K");
    assert_eq!(compact.format(2_000_000.0), "2M");
    assert_eq!(
        NumberFormat::new(NumberFormatKind::CompactLong, "en").format(2_500_000.0),
        "2.5 million"
    );
}

#[test]
fn test_currency_patterns() {
    assert_eq!(
        NumberFormat::new(NumberFormatKind::Currency, "en").format(1234.5),
        "USD1,234.50"
    );
    assert_eq!(
        NumberFormat::new(NumberFormatKind::Currency, "en")
            .symbol("$")
            .decimal_digits(0)
            .format(1234.4),
        "$1,234"
    );
    assert_eq!(
        NumberFormat::new(NumberFormatKind::SimpleCurrency, "de").format(3.5),
        "€3,50"
    );
    assert_eq!(
        NumberFormat::new(NumberFormatKind::CompactSimpleCurrency, "en").format(1_500_000.0),
        "$1.5M"
    );
}

#[test]
fn test_custom_currency_pattern() {
    let format = NumberFormat::new(NumberFormatKind::Currency, "en")
        .symbol("€")
        .custom_pattern("¤ #,##0.00");
    assert_eq!(format.format(1234.5), "€ 1,234.50");
}
