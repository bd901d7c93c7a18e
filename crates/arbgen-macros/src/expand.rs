//! Expansion of the localizations! macro.

use arbgen_generator::{GenerateError, GenerationWarning, Generator, Settings, emit};
use proc_macro2::TokenStream;
use quote::quote;

/// Run the generator and return the emitted items.
///
/// Every bundle is also referenced through `include_bytes!` so that editing
/// an ARB file recompiles the invoking crate. Generation warnings become
/// compiler warnings unless `suppress_warnings` is set.
pub fn expand(settings: Settings) -> Result<TokenStream, GenerateError> {
    let suppress_warnings = settings.suppress_warnings;
    let generated = Generator::new(settings).build()?;
    let items = emit(&generated.localizations);

    let tracked = generated
        .collection
        .bundles()
        .iter()
        .filter_map(|bundle| bundle.path().to_str())
        .map(|path| quote! { const _: &[u8] = ::core::include_bytes!(#path); });

    let warnings = if suppress_warnings {
        TokenStream::new()
    } else {
        warning_items(&generated.warnings)
    };

    Ok(quote! {
        #(#tracked)*
        #warnings
        #items
    })
}

/// One anonymous const per warning that uses a deprecated item, so rustc
/// prints the warning text as the deprecation note.
fn warning_items(warnings: &[GenerationWarning]) -> TokenStream {
    let items = warnings.iter().map(|warning| {
        let note = format!("arbgen: {warning}");
        quote! {
            const _: () = {
                #[deprecated(note = #note)]
                const ARBGEN_WARNING: () = ();
                ARBGEN_WARNING
            };
        }
    });
    quote! { #(#items)* }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn settings_for(
        files: &[(&str, &str)],
        suppress_warnings: bool,
    ) -> (tempfile::TempDir, Settings) {
        let dir = tempfile::tempdir().expect("temp dir");
        for (name, content) in files {
            fs::write(dir.path().join(name), content).expect("write bundle");
        }
        let settings = Settings::builder()
            .arb_dir(dir.path())
            .suppress_warnings(suppress_warnings)
            .build();
        (dir, settings)
    }

    const BROKEN_TRANSLATION: [(&str, &str); 2] = [
        ("app_en.arb", r#"{"n": "{c, plural, one{x} other{y}}"}"#),
        ("app_de.arb", r#"{"n": "{c, plural, one{x}}"}"#),
    ];

    // =========================================================================
    // Warnings
    // =========================================================================

    #[test]
    fn test_no_warnings_emit_nothing() {
        assert!(warning_items(&[]).is_empty());
    }

    #[test]
    fn test_warning_becomes_deprecation_note() {
        let tokens = warning_items(&[GenerationWarning::UnknownMessage {
            locale: "de".to_string(),
            key: "extra".to_string(),
        }])
        .to_string();
        assert!(tokens.contains("deprecated"));
        assert!(tokens.contains("message 'extra' in locale 'de' does not exist in the template"));
        assert!(tokens.contains("ARBGEN_WARNING"));
    }

    #[test]
    fn test_parse_failure_surfaces_in_expansion() {
        let (_dir, settings) = settings_for(&BROKEN_TRANSLATION, false);
        let tokens = expand(settings).expect("expands").to_string();
        assert!(tokens.contains("deprecated"));
        assert!(tokens.contains("translation of 'n' for locale 'de' failed to parse"));
        assert!(tokens.contains("message 'n' is not translated for locale 'de'"));
    }

    #[test]
    fn test_suppressed_warnings_emit_nothing() {
        let (_dir, settings) = settings_for(&BROKEN_TRANSLATION, true);
        let tokens = expand(settings).expect("expands").to_string();
        assert!(!tokens.contains("deprecated"));
    }
}
