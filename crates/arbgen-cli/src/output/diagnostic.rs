//! Miette diagnostics for generation errors.

use arbgen_generator::{GenerateError, ParseError};
use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for ICU message syntax errors.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error in '{key}' ({locale}): {message}")]
#[diagnostic(code(arbgen::syntax))]
pub struct ArbDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    key: String,

    locale: String,

    message: String,

    #[help]
    help: Option<String>,
}

impl ArbDiagnostic {
    /// Create a diagnostic from a ParseError with the message text as source.
    pub fn from_parse_error(source_name: &str, key: &str, locale: &str, err: &ParseError) -> Self {
        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = err.byte_offset().min(err.text.len());
        let len = usize::from(offset < err.text.len());

        ArbDiagnostic {
            src: NamedSource::new(source_name, err.text.clone()),
            span: (offset, len).into(),
            key: key.to_string(),
            locale: locale.to_string(),
            message: err.message.clone(),
            help: Some("enable use_escaping to write literal braces as '{' and '}'".into()),
        }
    }
}

/// Convert a generation error into a report, with source context for
/// message syntax errors.
pub fn generate_report(err: GenerateError) -> Report {
    match err {
        GenerateError::Parse {
            path,
            key,
            locale,
            error,
        } => ArbDiagnostic::from_parse_error(&path.display().to_string(), &key, &locale, &error)
            .into(),
        other => Report::msg(other.to_string()),
    }
}
