//! Runtime support for code generated from ARB localization files.
//!
//! Generated code refers to this crate through absolute `::arbgen::` paths,
//! so it must be a direct dependency of any crate using `localizations!`.

mod date;
mod delegate;
mod number;
mod plural;

pub use date::DateFormat;
pub use delegate::{LocalizationsDelegate, UnsupportedLocale};
pub use number::NumberFormat;
pub use plural::{PluralCase, plural, plural_category};

pub use arbgen_semantics::NumberFormatKind;

/// The value type of `DateTime` placeholders.
pub type DateTime = chrono::NaiveDateTime;

// Re-export the localizations! macro
pub use arbgen_macros::localizations;
