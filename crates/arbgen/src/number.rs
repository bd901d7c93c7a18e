//! Number formatting for numeric placeholders with a `format` attribute.

use arbgen_semantics::{
    NumberFormatKind, NumberSymbols, default_currency, number_symbols, simple_currency_symbol,
};

const COMPACT_UNITS: [(f64, &str, &str); 4] = [
    (1e12, "T", " trillion"),
    (1e9, "B", " billion"),
    (1e6, "M", " million"),
    (1e3, "K", " thousand"),
];

/// Renders numbers in one of the named ARB number formats.
///
/// Separators follow the locale's language; currency symbols are always
/// placed before the amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    kind: NumberFormatKind,
    language: String,
    decimal_digits: Option<u32>,
    name: Option<String>,
    symbol: Option<String>,
    custom_pattern: Option<String>,
}

impl NumberFormat {
    pub fn new(kind: NumberFormatKind, locale: &str) -> Self {
        let language = locale.split(['_', '-']).next().unwrap_or(locale);
        Self {
            kind,
            language: language.to_string(),
            decimal_digits: None,
            name: None,
            symbol: None,
            custom_pattern: None,
        }
    }

    /// Number of fraction digits to show.
    #[must_use]
    pub fn decimal_digits(mut self, digits: u32) -> Self {
        self.decimal_digits = Some(digits);
        self
    }

    /// ISO currency code, e.g. `EUR`.
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Currency symbol, e.g. `€`.
    #[must_use]
    pub fn symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    /// Currency pattern such as `¤#,##0.00`.
    #[must_use]
    pub fn custom_pattern(mut self, pattern: &str) -> Self {
        self.custom_pattern = Some(pattern.to_string());
        self
    }

    /// Format a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbgen::{NumberFormat, NumberFormatKind};
    ///
    /// let decimal = NumberFormat::new(NumberFormatKind::DecimalPattern, "en");
    /// assert_eq!(decimal.format(1234567.5), "1,234,567.5");
    ///
    /// let compact = NumberFormat::new(NumberFormatKind::Compact, "en");
    /// assert_eq!(compact.format(1200.0), "1.2K");
    ///
    /// let currency = NumberFormat::new(NumberFormatKind::SimpleCurrency, "en").name("EUR");
    /// assert_eq!(currency.format(3.5), "€3.50");
    /// ```
    pub fn format(&self, value: f64) -> String {
        let symbols = number_symbols(&self.language);
        let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { "" };
        let magnitude = value.abs();

        let body = match self.kind {
            NumberFormatKind::DecimalPattern => decimal(magnitude, None, symbols),
            NumberFormatKind::DecimalPatternDigits => {
                decimal(magnitude, self.decimal_digits, symbols)
            }
            NumberFormatKind::PercentPattern => {
                decimal(magnitude * 100.0, Some(0), symbols) + "%"
            }
            NumberFormatKind::DecimalPercentPattern => {
                decimal(magnitude * 100.0, self.decimal_digits, symbols) + "%"
            }
            NumberFormatKind::ScientificPattern => scientific(magnitude, symbols),
            NumberFormatKind::Compact => compact(magnitude, false, symbols),
            NumberFormatKind::CompactLong => compact(magnitude, true, symbols),
            NumberFormatKind::Currency => {
                if let Some(pattern) = &self.custom_pattern {
                    return format!("{sign}{}", self.custom(magnitude, pattern, symbols));
                }
                let prefix = self.symbol.clone().unwrap_or_else(|| self.currency_code());
                prefix + &decimal(magnitude, Some(self.decimal_digits.unwrap_or(2)), symbols)
            }
            NumberFormatKind::SimpleCurrency => {
                self.simple_symbol()
                    + &decimal(magnitude, Some(self.decimal_digits.unwrap_or(2)), symbols)
            }
            NumberFormatKind::CompactCurrency => {
                let prefix = self.symbol.clone().unwrap_or_else(|| self.currency_code());
                prefix + &compact(magnitude, false, symbols)
            }
            NumberFormatKind::CompactSimpleCurrency => {
                self.simple_symbol() + &compact(magnitude, false, symbols)
            }
        };
        format!("{sign}{body}")
    }

    fn currency_code(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| default_currency(&self.language).to_string())
    }

    fn simple_symbol(&self) -> String {
        simple_currency_symbol(&self.currency_code()).to_string()
    }

    /// Substitute the amount and symbol into a `¤#,##0.00` style pattern.
    fn custom(&self, magnitude: f64, pattern: &str, symbols: NumberSymbols) -> String {
        let digits = pattern
            .split_once('.')
            .map_or(0, |(_, fraction)| {
                fraction.chars().take_while(|c| *c == '0' || *c == '#').count()
            });
        let amount = decimal(
            magnitude,
            Some(u32::try_from(digits).unwrap_or(2)),
            symbols,
        );
        let symbol = self.symbol.clone().unwrap_or_else(|| self.simple_symbol());

        let mut out = String::new();
        let mut amount_written = false;
        for c in pattern.chars() {
            match c {
                '¤' => out.push_str(&symbol),
                '#' | '0' | ',' | '.' => {
                    if !amount_written {
                        out.push_str(&amount);
                        amount_written = true;
                    }
                }
                other => out.push(other),
            }
        }
        out
    }
}

/// Grouped decimal rendering. `None` digits shows up to three fraction
/// digits with trailing zeros removed.
fn decimal(magnitude: f64, digits: Option<u32>, symbols: NumberSymbols) -> String {
    let fixed = format!("{:.*}", digits.unwrap_or(3) as usize, magnitude);
    let (integer, mut fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
        None => (fixed, String::new()),
    };
    if digits.is_none() {
        fraction = fraction.trim_end_matches('0').to_string();
    }

    let mut out = group(&integer, symbols.group);
    if !fraction.is_empty() {
        out.push_str(symbols.decimal);
        out.push_str(&fraction);
    }
    out
}

/// Insert the group separator every three digits.
fn group(integer: &str, separator: &str) -> String {
    let len = integer.len();
    let mut out = String::with_capacity(len + len);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

fn compact(magnitude: f64, long: bool, symbols: NumberSymbols) -> String {
    for (scale, short, long_name) in COMPACT_UNITS {
        if magnitude >= scale {
            let scaled = magnitude / scale;
            let digits = if scaled < 10.0 { None } else { Some(0) };
            let number = match digits {
                None => trim_fraction(&decimal(scaled, Some(1), symbols), symbols),
                Some(_) => decimal(scaled, digits, symbols),
            };
            return number + if long { long_name } else { short };
        }
    }
    trim_fraction(&decimal(magnitude, Some(1), symbols), symbols)
}

fn trim_fraction(number: &str, symbols: NumberSymbols) -> String {
    match number.split_once(symbols.decimal) {
        Some((integer, "0")) => integer.to_string(),
        _ => number.to_string(),
    }
}

fn scientific(magnitude: f64, symbols: NumberSymbols) -> String {
    format!("{magnitude:E}").replacen('.', symbols.decimal, 1)
}
