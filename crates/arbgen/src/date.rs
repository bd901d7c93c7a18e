//! Date and time formatting for `DateTime` placeholders.
//!
//! Skeletons such as `yMd` resolve to ICU patterns through
//! `arbgen_semantics`, with a few per-language overrides for numeric
//! layouts. Month and weekday names are English.

use std::fmt::Write;

use arbgen_semantics::date_skeleton_pattern;
use chrono::{Datelike, NaiveDateTime, Timelike};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const QUARTERS: [&str; 4] = ["1st quarter", "2nd quarter", "3rd quarter", "4th quarter"];

/// Renders a [`NaiveDateTime`] with an ICU date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    /// Formatter for a named skeleton such as `yMMMd` or `Hm`.
    ///
    /// Unknown skeletons are used as patterns verbatim.
    pub fn skeleton(skeleton: &str, locale: &str) -> Self {
        let language = locale.split(['_', '-']).next().unwrap_or(locale);
        let pattern = localized_pattern(skeleton, language)
            .or_else(|| date_skeleton_pattern(skeleton))
            .unwrap_or(skeleton);
        Self {
            pattern: pattern.to_string(),
        }
    }

    /// Formatter for an explicit ICU pattern such as `EEE, MMM d`.
    pub fn pattern(pattern: &str, _locale: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
        }
    }

    /// The ICU pattern this formatter renders.
    pub fn as_pattern(&self) -> &str {
        &self.pattern
    }

    /// Format a date and time.
    ///
    /// # Example
    ///
    /// ```
    /// use arbgen::{DateFormat, DateTime};
    /// use chrono::NaiveDate;
    ///
    /// let date: DateTime = NaiveDate::from_ymd_opt(2024, 3, 9)
    ///     .unwrap()
    ///     .and_hms_opt(14, 5, 0)
    ///     .unwrap();
    /// assert_eq!(DateFormat::skeleton("yMd", "en").format(&date), "3/9/2024");
    /// assert_eq!(DateFormat::skeleton("yMMMd", "en").format(&date), "Mar 9, 2024");
    /// assert_eq!(DateFormat::skeleton("jm", "en").format(&date), "2:05 PM");
    /// ```
    pub fn format(&self, value: &NaiveDateTime) -> String {
        let mut out = String::new();
        let mut chars = self.pattern.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                for quoted in chars.by_ref() {
                    if quoted == '\'' {
                        break;
                    }
                    out.push(quoted);
                }
                continue;
            }
            if !c.is_ascii_alphabetic() {
                out.push(c);
                continue;
            }
            let mut width = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                width += 1;
            }
            write_field(&mut out, c, width, value);
        }
        out
    }
}

/// Render one run of a pattern letter.
fn write_field(out: &mut String, letter: char, width: usize, value: &NaiveDateTime) {
    let month = value.month0() as usize;
    let weekday = value.weekday().num_days_from_monday() as usize;
    let quarter = value.month0().div_euclid(3) + 1;
    let hour12 = match value.hour() % 12 {
        0 => 12,
        hour => hour,
    };
    let _ = match (letter, width) {
        ('y', 2) => write!(out, "{:02}", value.year().rem_euclid(100)),
        ('y', _) => write!(out, "{}", value.year()),
        ('M' | 'L', 1) => write!(out, "{}", value.month()),
        ('M' | 'L', 2) => write!(out, "{:02}", value.month()),
        ('M' | 'L', 3) => write!(out, "{}", &MONTHS[month][..3]),
        ('M' | 'L', _) => write!(out, "{}", MONTHS[month]),
        ('d', 1) => write!(out, "{}", value.day()),
        ('d', _) => write!(out, "{:02}", value.day()),
        ('E', 1..=3) => write!(out, "{}", &WEEKDAYS[weekday][..3]),
        ('E', _) => write!(out, "{}", WEEKDAYS[weekday]),
        ('H', 1) => write!(out, "{}", value.hour()),
        ('H', _) => write!(out, "{:02}", value.hour()),
        ('h', 1) => write!(out, "{hour12}"),
        ('h', _) => write!(out, "{hour12:02}"),
        ('m', 1) => write!(out, "{}", value.minute()),
        ('m', _) => write!(out, "{:02}", value.minute()),
        ('s', 1) => write!(out, "{}", value.second()),
        ('s', _) => write!(out, "{:02}", value.second()),
        ('a', _) => out.write_str(if value.hour() < 12 { "AM" } else { "PM" }),
        ('Q', 1 | 2) => write!(out, "{quarter}"),
        ('Q', 3) => write!(out, "Q{quarter}"),
        ('Q', _) => out.write_str(QUARTERS[month.div_euclid(3)]),
        _ => {
            for _ in 0..width {
                out.push(letter);
            }
            Ok(())
        }
    };
}

/// Numeric layouts that differ from the English defaults.
fn localized_pattern(skeleton: &str, language: &str) -> Option<&'static str> {
    let pattern = match (language, skeleton) {
        ("de" | "ru" | "pl" | "fi" | "nb" | "cs", "yMd") => "d.M.y",
        ("de" | "ru" | "pl" | "fi" | "nb" | "cs", "Md") => "d.M.",
        ("fr" | "es" | "it" | "pt" | "vi" | "id", "yMd") => "d/M/y",
        ("fr" | "es" | "it" | "pt" | "vi" | "id", "Md") => "d/M",
        ("ja" | "zh" | "ko", "yMd") => "y/M/d",
        ("en", _) => return None,
        (_, "j") => "HH",
        (_, "jm") => "HH:mm",
        (_, "jms") => "HH:mm:ss",
        _ => return None,
    };
    Some(pattern)
}
