//! Error and warning types for localization generation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;
use crate::placeholder::{PlaceholderType, PlaceholderUsage};

/// A fatal error that aborts generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// File I/O error.
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON object.
    #[error("'{path}' is not a valid ARB file: {message}")]
    MalformedBundle { path: PathBuf, message: String },

    /// A locale tag could not be parsed.
    #[error("invalid locale '{tag}': {reason}")]
    InvalidLocale { tag: String, reason: String },

    /// `@@locale` disagrees with the locale in the file name.
    #[error(
        "the locale specified in @@locale and the file name of '{path}' do not match: \
         @@locale is '{explicit}' but the file name implies '{filename}'"
    )]
    LocaleMismatch {
        path: PathBuf,
        explicit: String,
        filename: String,
    },

    /// Neither `@@locale` nor the file name identify a locale.
    #[error(
        "could not determine the locale of '{path}': add an \"@@locale\" entry or a \
         locale suffix such as '_en' to the file name"
    )]
    LocaleUndetermined { path: PathBuf },

    /// A value has the wrong JSON type.
    #[error("'{key}' in '{path}' must be {expected}")]
    InvalidValueType {
        path: PathBuf,
        key: String,
        expected: &'static str,
    },

    /// `required_resource_attributes` is set and `@key` is missing.
    #[error("resource attribute \"@{key}\" was not found in '{path}'")]
    MissingResourceAttribute { path: PathBuf, key: String },

    /// The template has no value for a message key.
    #[error("no value found for message '{key}' in '{path}'")]
    MissingResourceValue { path: PathBuf, key: String },

    /// A message key is not a usable identifier.
    #[error(
        "invalid message key '{key}' in '{path}': keys must start with a letter and \
         contain only letters, digits and underscores"
    )]
    InvalidMessageKey { path: PathBuf, key: String },

    /// A placeholder declares an unknown `type`.
    #[error(
        "placeholder '{placeholder}' of '{key}' in '{path}' has unknown type '{found}'{}",
        suggestion_suffix(suggestion)
    )]
    InvalidPlaceholderType {
        path: PathBuf,
        key: String,
        placeholder: String,
        found: String,
        suggestion: Option<String>,
    },

    /// Two files resolve to the same locale.
    #[error("multiple ARB files for locale '{locale}': '{first}' and '{second}'")]
    DuplicateLocale {
        locale: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A regional or script locale has no base-language bundle.
    #[error(
        "locales {} need a fallback bundle for the base language '{language}'",
        dependents.join(", ")
    )]
    MissingFallback {
        language: String,
        dependents: Vec<String>,
    },

    /// The ARB directory contains no bundles.
    #[error("no .arb files found in '{dir}'")]
    NoBundles { dir: PathBuf },

    /// The configured template file is not among the loaded bundles.
    #[error("template ARB file '{path}' was not found")]
    TemplateNotFound { path: PathBuf },

    /// A preferred locale has no bundle.
    #[error("preferred supported locale '{locale}' has no ARB file")]
    UnknownPreferredLocale { locale: String },

    /// The template translation of a message failed to parse.
    #[error("[{path}:{key}] {error}")]
    Parse {
        path: PathBuf,
        key: String,
        locale: String,
        #[source]
        error: ParseError,
    },

    /// A placeholder is used in more than one role.
    #[error(
        "placeholder '{placeholder}' of '{key}' is used as both a {first} and a {second}"
    )]
    ConflictingPlaceholderUsage {
        key: String,
        placeholder: String,
        first: PlaceholderUsage,
        second: PlaceholderUsage,
    },

    /// The declared type does not fit the placeholder's role.
    #[error(
        "placeholder '{placeholder}' of '{key}' is used as a {usage} and must be of type \
         {expected}, but is declared as {declared}"
    )]
    PlaceholderTypeMismatch {
        key: String,
        placeholder: String,
        usage: PlaceholderUsage,
        declared: PlaceholderType,
        expected: &'static str,
    },

    /// A DateTime placeholder has no `format`.
    #[error(
        "placeholder '{placeholder}' of '{key}' has type DateTime and needs a \"format\" \
         attribute such as \"yMd\""
    )]
    MissingDateFormat { key: String, placeholder: String },

    /// A date format is not a known skeleton.
    #[error(
        "date format '{format}' of placeholder '{placeholder}' in '{key}' is not a known \
         skeleton{}; set \"isCustomDateFormat\": \"true\" to use a pattern",
        suggestion_suffix(suggestion)
    )]
    InvalidDateFormat {
        key: String,
        placeholder: String,
        format: String,
        suggestion: Option<String>,
    },

    /// A number format is not a known format name.
    #[error(
        "number format '{format}' of placeholder '{placeholder}' in '{key}' is not \
         supported{}",
        suggestion_suffix(suggestion)
    )]
    InvalidNumberFormat {
        key: String,
        placeholder: String,
        format: String,
        suggestion: Option<String>,
    },

    /// An optional parameter is not accepted by its number format.
    #[error(
        "number format '{format}' of placeholder '{placeholder}' in '{key}' does not \
         accept the optional parameter '{parameter}'"
    )]
    InvalidOptionalParameter {
        key: String,
        placeholder: String,
        format: String,
        parameter: String,
    },

    /// A declared placeholder name is not an identifier.
    #[error(
        "placeholder '{placeholder}' of '{key}' is not a valid name: names must start with a \
         letter or underscore and contain only letters, digits and underscores"
    )]
    InvalidPlaceholderName { key: String, placeholder: String },

    /// The output class cannot name a Rust trait.
    #[error("output class '{name}' must be an UpperCamelCase Rust identifier")]
    InvalidOutputClass { name: String },

    /// Two names map to the same generated Rust identifier.
    #[error("'{first}' and '{second}' both generate the Rust identifier '{ident}'{}", context_suffix(key))]
    IdentifierCollision {
        key: Option<String>,
        first: String,
        second: String,
        ident: String,
    },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(candidate) => format!(" (did you mean '{candidate}'?)"),
        None => String::new(),
    }
}

fn context_suffix(key: &Option<String>) -> String {
    match key {
        Some(key) => format!(" in '{key}'"),
        None => String::new(),
    }
}

/// Suggest the closest candidate by Levenshtein distance, if reasonably close.
pub(crate) fn closest_match<'a>(
    input: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    candidates
        .into_iter()
        .map(|candidate| (strsim::levenshtein(input, candidate), candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}

/// A recoverable problem found during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationWarning {
    /// A non-template translation failed to parse and is treated as untranslated.
    TranslationParseFailed {
        locale: String,
        key: String,
        message: String,
    },
    /// A non-template bundle defines a key the template does not have.
    UnknownMessage { locale: String, key: String },
    /// A setting has no effect on generated Rust code.
    IneffectiveSetting { name: &'static str },
    /// The output could not be formatted with rustfmt.
    FormatFailed { message: String },
}

impl fmt::Display for GenerationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationWarning::TranslationParseFailed {
                locale,
                key,
                message,
            } => write!(
                f,
                "translation of '{key}' for locale '{locale}' failed to parse and is treated as untranslated:\n{message}"
            ),
            GenerationWarning::UnknownMessage { locale, key } => write!(
                f,
                "message '{key}' in locale '{locale}' does not exist in the template and is ignored"
            ),
            GenerationWarning::IneffectiveSetting { name } => {
                write!(f, "setting '{name}' has no effect on generated Rust code")
            }
            GenerationWarning::FormatFailed { message } => {
                write!(f, "could not format the generated file: {message}")
            }
        }
    }
}
