use arbgen_semantics::{
    NumberFormatKind, date_skeleton_names, date_skeleton_pattern, is_iso639_language,
    is_plural_category, number_symbols,
};

#[test]
fn iso639_lookup() {
    for code in ["en", "es", "zh", "fil", "gsw", "haw", "zu", "aa", "my"] {
        assert!(is_iso639_language(code), "{code} should be a language");
    }
    for code in ["app", "qq", "EN", "", "e", "xx"] {
        assert!(!is_iso639_language(code), "{code} should not be a language");
    }
}

#[test]
fn plural_categories() {
    assert!(is_plural_category("few"));
    assert!(is_plural_category("other"));
    assert!(!is_plural_category("several"));
}

#[test]
fn every_number_format_round_trips_its_name() {
    for kind in NumberFormatKind::ALL {
        assert_eq!(NumberFormatKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(NumberFormatKind::from_name("decimal"), None);
}

#[test]
fn currency_formats_accept_decimal_digits() {
    for kind in NumberFormatKind::ALL.into_iter().filter(|k| k.is_currency()) {
        assert!(kind.accepted_parameters().contains(&"decimalDigits"));
    }
    assert!(NumberFormatKind::Compact.accepted_parameters().is_empty());
}

#[test]
fn date_skeletons_resolve() {
    assert_eq!(date_skeleton_pattern("yMd"), Some("M/d/y"));
    assert_eq!(date_skeleton_pattern("Hm"), Some("HH:mm"));
    assert_eq!(date_skeleton_pattern("yMMMMd"), Some("MMMM d, y"));
    assert_eq!(date_skeleton_pattern("ymd"), None);
    assert!(date_skeleton_names().any(|name| name == "jms"));
}

#[test]
fn separators_by_language() {
    assert_eq!(number_symbols("en").group, ",");
    assert_eq!(number_symbols("de").decimal, ",");
    assert_eq!(number_symbols("fr").group, "\u{a0}");
    assert_eq!(number_symbols("xx").decimal, ".");
}
