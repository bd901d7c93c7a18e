use std::env;
use std::path::PathBuf;

use proc_macro::TokenStream;

mod expand;
mod input;

/// The localizations! macro for compiling ARB files into typed Rust.
///
/// Loads every `*.arb` file of `arb_dir` (relative to the invoking crate's
/// `Cargo.toml`), validates all messages and expands to generated items.
/// Any generation error becomes a compile error.
///
/// # Settings
///
/// `arb_dir`, `template_arb_file`, `output_class`, `header`, `header_file`
/// take strings; `relaxed_syntax`, `use_escaping`, `suppress_warnings` and
/// `required_resource_attributes` take bools; `preferred_supported_locales`
/// takes a list of strings. Without `arb_dir`, the crate's `l10n.json` is
/// read first. Generation warnings are reported as compiler warnings unless
/// `suppress_warnings = true`.
///
/// # Generated Code
///
/// - `pub trait <OutputClass>` with one method per message
/// - One unit struct per locale, e.g. `<OutputClass>EnUs`
/// - `SUPPORTED_LOCALES` and `lookup_<output_class>(locale)`
/// - `<OutputClass>Delegate` implementing `arbgen::LocalizationsDelegate`
///
/// # Example
///
/// ```ignore
/// arbgen::localizations! {
///     arb_dir = "l10n",
///     template_arb_file = "app_en.arb",
///     output_class = "AppLocalizations",
/// }
///
/// let l10n = lookup_app_localizations("en_US").unwrap();
/// assert_eq!(l10n.hello("World"), "Hello World");
/// ```
#[proc_macro]
pub fn localizations(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as input::MacroInput);

    let root = env::var_os("CARGO_MANIFEST_DIR").map_or_else(PathBuf::new, PathBuf::from);
    let settings = match input.settings(&root) {
        Ok(settings) => settings,
        Err(e) => return e.to_compile_error().into(),
    };

    match expand::expand(settings) {
        Ok(tokens) => tokens.into(),
        Err(e) => syn::Error::new(input.span(), e.to_string())
            .to_compile_error()
            .into(),
    }
}
