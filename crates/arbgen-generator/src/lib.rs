//! ARB localization code generation.
//!
//! Reads a directory of ARB resource bundles, parses each message's ICU
//! syntax, infers placeholder types and emits Rust source with one typed
//! method per message and one implementation per locale.

pub mod bundle;
pub mod codegen;
pub mod collection;
pub mod error;
pub mod generator;
pub mod inference;
pub mod locale;
pub mod message;
pub mod parser;
pub mod placeholder;
pub mod report;
pub mod settings;

pub use bundle::{LoadOptions, MessageMetadata, ResourceBundle, locale_from_file_name};
pub use codegen::{Localizations, emit, render};
pub use collection::ResourceBundleCollection;
pub use error::{GenerateError, GenerationWarning};
pub use generator::{Generated, Generator, settings_for_project};
pub use inference::infer_placeholders;
pub use locale::LocaleId;
pub use message::Message;
pub use parser::{Node, ParseError, ParseOptions, parse_message};
pub use placeholder::{
    DeclaredPlaceholder, Placeholder, PlaceholderOverride, PlaceholderType, PlaceholderUsage,
};
pub use report::{GenerationReport, UntranslatedMessages};
pub use settings::{CONFIG_FILE_NAME, Settings};
