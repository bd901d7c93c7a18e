//! Shared ARB semantic tables used by both the generator and the runtime.
//!
//! This crate centralizes language codes, plural category names, date format
//! skeletons and number format names so that generation-time validation and
//! runtime formatting cannot drift apart.

/// Canonical CLDR plural category names, in CLDR order.
pub const PLURAL_CATEGORIES: &[&str] = &["zero", "one", "two", "few", "many", "other"];

/// Returns true if `name` is a CLDR plural category keyword.
pub fn is_plural_category(name: &str) -> bool {
    PLURAL_CATEGORIES.contains(&name)
}

/// Returns true if `code` is a recognized ISO-639 language code.
///
/// Used when inferring a bundle's locale from its file name, so that file
/// name segments such as `my_app` are not mistaken for a locale.
pub fn is_iso639_language(code: &str) -> bool {
    ISO639_LANGUAGES.binary_search(&code).is_ok()
}

/// ICU date skeletons understood by the runtime `DateFormat`.
///
/// Each skeleton maps to the pattern used to render it.
pub fn date_skeleton_pattern(skeleton: &str) -> Option<&'static str> {
    DATE_SKELETONS
        .iter()
        .find(|(name, _)| *name == skeleton)
        .map(|(_, pattern)| *pattern)
}

/// All accepted date skeleton names.
pub fn date_skeleton_names() -> impl Iterator<Item = &'static str> {
    DATE_SKELETONS.iter().map(|(name, _)| *name)
}

/// Named number formats accepted in a placeholder's `format` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberFormatKind {
    Compact,
    CompactCurrency,
    CompactSimpleCurrency,
    CompactLong,
    Currency,
    DecimalPattern,
    DecimalPatternDigits,
    DecimalPercentPattern,
    PercentPattern,
    ScientificPattern,
    SimpleCurrency,
}

impl NumberFormatKind {
    pub const ALL: [NumberFormatKind; 11] = [
        NumberFormatKind::Compact,
        NumberFormatKind::CompactCurrency,
        NumberFormatKind::CompactSimpleCurrency,
        NumberFormatKind::CompactLong,
        NumberFormatKind::Currency,
        NumberFormatKind::DecimalPattern,
        NumberFormatKind::DecimalPatternDigits,
        NumberFormatKind::DecimalPercentPattern,
        NumberFormatKind::PercentPattern,
        NumberFormatKind::ScientificPattern,
        NumberFormatKind::SimpleCurrency,
    ];

    /// Resolve a format name as written in ARB metadata.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The name as written in ARB metadata.
    pub fn name(self) -> &'static str {
        match self {
            NumberFormatKind::Compact => "compact",
            NumberFormatKind::CompactCurrency => "compactCurrency",
            NumberFormatKind::CompactSimpleCurrency => "compactSimpleCurrency",
            NumberFormatKind::CompactLong => "compactLong",
            NumberFormatKind::Currency => "currency",
            NumberFormatKind::DecimalPattern => "decimalPattern",
            NumberFormatKind::DecimalPatternDigits => "decimalPatternDigits",
            NumberFormatKind::DecimalPercentPattern => "decimalPercentPattern",
            NumberFormatKind::PercentPattern => "percentPattern",
            NumberFormatKind::ScientificPattern => "scientificPattern",
            NumberFormatKind::SimpleCurrency => "simpleCurrency",
        }
    }

    /// Optional parameters this format accepts in `optionalParameters`.
    pub fn accepted_parameters(self) -> &'static [&'static str] {
        match self {
            NumberFormatKind::Compact
            | NumberFormatKind::CompactLong
            | NumberFormatKind::DecimalPattern
            | NumberFormatKind::PercentPattern
            | NumberFormatKind::ScientificPattern => &[],
            NumberFormatKind::CompactCurrency => &["name", "symbol", "decimalDigits"],
            NumberFormatKind::CompactSimpleCurrency | NumberFormatKind::SimpleCurrency => {
                &["name", "decimalDigits"]
            }
            NumberFormatKind::Currency => &["name", "symbol", "decimalDigits", "customPattern"],
            NumberFormatKind::DecimalPatternDigits | NumberFormatKind::DecimalPercentPattern => {
                &["decimalDigits"]
            }
        }
    }

    /// Whether the format renders a currency amount.
    pub fn is_currency(self) -> bool {
        matches!(
            self,
            NumberFormatKind::CompactCurrency
                | NumberFormatKind::CompactSimpleCurrency
                | NumberFormatKind::Currency
                | NumberFormatKind::SimpleCurrency
        )
    }
}

/// Digit grouping and decimal separators for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub group: &'static str,
    pub decimal: &'static str,
}

/// Separators used when rendering numbers for `language`.
///
/// Languages not listed use the English separators.
pub fn number_symbols(language: &str) -> NumberSymbols {
    match language {
        "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" | "el" | "ro" | "hr" | "sl"
        | "sr" | "vi" => NumberSymbols {
            group: ".",
            decimal: ",",
        },
        "fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "nb" | "no" | "fi" | "uk" | "hu" | "bg"
        | "lt" | "lv" | "et" => NumberSymbols {
            group: "\u{a0}",
            decimal: ",",
        },
        _ => NumberSymbols {
            group: ",",
            decimal: ".",
        },
    }
}

/// Default currency symbol for a language, used by `simpleCurrency` formats.
pub fn simple_currency_symbol(currency: &str) -> &str {
    match currency {
        "USD" | "CAD" | "AUD" | "MXN" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        "INR" => "₹",
        "KRW" => "₩",
        "RUB" => "₽",
        "BRL" => "R$",
        other => other,
    }
}

/// Default currency code for a language when a currency format names none.
pub fn default_currency(language: &str) -> &'static str {
    match language {
        "de" | "es" | "fr" | "it" | "nl" | "pt" | "fi" | "el" | "et" | "lt" | "lv" | "sk"
        | "sl" => "EUR",
        "en" => "USD",
        "ja" => "JPY",
        "zh" => "CNY",
        "ko" => "KRW",
        "ru" => "RUB",
        "hi" => "INR",
        _ => "USD",
    }
}

const DATE_SKELETONS: &[(&str, &str)] = &[
    ("d", "d"),
    ("E", "EEE"),
    ("EEEE", "EEEE"),
    ("LLL", "LLL"),
    ("LLLL", "LLLL"),
    ("M", "L"),
    ("Md", "M/d"),
    ("MEd", "EEE, M/d"),
    ("MMM", "LLL"),
    ("MMMd", "MMM d"),
    ("MMMEd", "EEE, MMM d"),
    ("MMMM", "LLLL"),
    ("MMMMd", "MMMM d"),
    ("MMMMEEEEd", "EEEE, MMMM d"),
    ("QQQ", "QQQ"),
    ("QQQQ", "QQQQ"),
    ("y", "y"),
    ("yM", "M/y"),
    ("yMd", "M/d/y"),
    ("yMEd", "EEE, M/d/y"),
    ("yMMM", "MMM y"),
    ("yMMMd", "MMM d, y"),
    ("yMMMEd", "EEE, MMM d, y"),
    ("yMMMM", "MMMM y"),
    ("yMMMMd", "MMMM d, y"),
    ("yMMMMEEEEd", "EEEE, MMMM d, y"),
    ("yQQQ", "QQQ y"),
    ("yQQQQ", "QQQQ y"),
    ("H", "HH"),
    ("Hm", "HH:mm"),
    ("Hms", "HH:mm:ss"),
    ("j", "h a"),
    ("jm", "h:mm a"),
    ("jms", "h:mm:ss a"),
    ("m", "m"),
    ("ms", "mm:ss"),
    ("s", "s"),
];

// Sorted for binary search.
const ISO639_LANGUAGES: &[&str] = &[
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg",
    "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv",
    "cy", "da", "de", "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi",
    "fil", "fj", "fo", "fr", "fy", "ga", "gd", "gl", "gn", "gsw", "gu", "gv", "ha", "haw", "he",
    "hi", "ho", "hr", "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is",
    "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks",
    "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv", "mg", "mh",
    "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn",
    "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu",
    "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn",
    "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk", "tl",
    "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa",
    "wo", "xh", "yi", "yo", "za", "zh", "zu",
];
