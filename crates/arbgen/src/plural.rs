//! CLDR plural selection for generated plural expressions.
//!
//! Each thread keeps one `PluralRules` per language, built the first time
//! that language is asked for.

use std::cell::RefCell;

use icu_locale_core::{Locale, locale};
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language code.
    static PLURAL_RULES_CACHE: RefCell<Vec<(String, Option<PluralRules>)>> = const { RefCell::new(Vec::new()) };
}

/// A case label of a plural expression other than `other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCase {
    /// `=N`: matches exactly the integer `N`.
    Exact(i64),
    Zero,
    One,
    Two,
    Few,
    Many,
}

impl PluralCase {
    /// The CLDR category name, or `None` for exact-value cases.
    pub fn category(self) -> Option<&'static str> {
        match self {
            PluralCase::Exact(_) => None,
            PluralCase::Zero => Some("zero"),
            PluralCase::One => Some("one"),
            PluralCase::Two => Some("two"),
            PluralCase::Few => Some("few"),
            PluralCase::Many => Some("many"),
        }
    }
}

/// The language subtag of a tag such as `en_US` or `pt-BR`.
fn language_of(locale: &str) -> &str {
    locale.split(['_', '-']).next().unwrap_or(locale)
}

/// Build `PluralRules` for a language, falling back to English.
fn build_rules(language: &str) -> Option<PluralRules> {
    let loc = Locale::try_from_str(language).unwrap_or(locale!("en"));
    PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into())
        .or_else(|_| PluralRules::try_new(locale!("en").into(), PluralRuleType::Cardinal.into()))
        .ok()
}

/// Translate a `PluralCategory` enum to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Get the CLDR plural category for an integer in a given locale.
///
/// Returns one of: "zero", "one", "two", "few", "many", "other". Only the
/// language subtag of `locale` is used.
///
/// # Examples
///
/// ```
/// use arbgen::plural_category;
///
/// assert_eq!(plural_category("en", 1), "one");
/// assert_eq!(plural_category("en_US", 2), "other");
/// assert_eq!(plural_category("ru", 2), "few");
/// assert_eq!(plural_category("ru", 5), "many");
/// ```
pub fn plural_category(locale: &str, n: i64) -> &'static str {
    let language = language_of(locale);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some((_, rules)) = cache.iter().find(|(code, _)| code == language) {
            return rules
                .as_ref()
                .map_or("other", |rules| category_str(rules.category_for(n)));
        }
        let rules = build_rules(language);
        let category = rules
            .as_ref()
            .map_or("other", |rules| category_str(rules.category_for(n)));
        cache.push((language.to_string(), rules));
        category
    })
}

/// Pick the text of a plural expression for `n`.
///
/// Exact-value cases are matched first, then the CLDR category of `n` in
/// `locale`. Non-integer values only match `other`.
///
/// # Examples
///
/// ```
/// use arbgen::{PluralCase, plural};
///
/// let render = |n: f64| {
///     plural(
///         "en",
///         n,
///         [
///             (PluralCase::Exact(0), "no items".to_string()),
///             (PluralCase::One, "one item".to_string()),
///         ],
///         format!("{n} items"),
///     )
/// };
/// assert_eq!(render(0.0), "no items");
/// assert_eq!(render(1.0), "one item");
/// assert_eq!(render(5.0), "5 items");
/// ```
pub fn plural<const N: usize>(
    locale: &str,
    n: f64,
    cases: [(PluralCase, String); N],
    other: String,
) -> String {
    let whole = (n.is_finite() && n.fract() == 0.0).then_some(n as i64);
    let category = whole.map(|n| plural_category(locale, n));

    let mut chosen = None;
    for (case, text) in cases {
        match case {
            PluralCase::Exact(exact) if Some(exact) == whole => return text,
            PluralCase::Exact(_) => {}
            keyword => {
                if chosen.is_none() && category.is_some() && keyword.category() == category {
                    chosen = Some(text);
                }
            }
        }
    }
    chosen.unwrap_or(other)
}
