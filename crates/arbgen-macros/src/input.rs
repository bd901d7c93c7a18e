//! Input of the localizations! macro: `key = value` settings.

use std::path::Path;

use arbgen_generator::Settings;
use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Ident, LitBool, LitStr, Token, bracketed};

/// All settings given to one macro invocation.
pub struct MacroInput {
    pub entries: Vec<SettingEntry>,
}

/// One `name = value` pair.
pub struct SettingEntry {
    pub name: Ident,
    pub value: SettingValue,
}

pub enum SettingValue {
    Str(LitStr),
    Bool(LitBool),
    List(Vec<LitStr>),
}

impl Parse for MacroInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let entries: Punctuated<SettingEntry, Token![,]> = Punctuated::parse_terminated(input)?;
        Ok(MacroInput {
            entries: entries.into_iter().collect(),
        })
    }
}

impl Parse for SettingEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let value = if input.peek(LitStr) {
            SettingValue::Str(input.parse()?)
        } else if input.peek(LitBool) {
            SettingValue::Bool(input.parse()?)
        } else if input.peek(syn::token::Bracket) {
            let content;
            bracketed!(content in input);
            let items: Punctuated<LitStr, Token![,]> = Punctuated::parse_terminated(&content)?;
            SettingValue::List(items.into_iter().collect())
        } else {
            return Err(input.error("expected a string, a bool or a list of strings"));
        };
        Ok(SettingEntry { name, value })
    }
}

impl MacroInput {
    /// Settings for this invocation, relative to the crate root `root`.
    ///
    /// Without an `arb_dir` entry the crate's `l10n.json` (if any) supplies
    /// the starting point; entries always override it.
    pub fn settings(&self, root: &Path) -> syn::Result<Settings> {
        let mut settings = if self.entry("arb_dir").is_some() {
            Settings::default()
        } else {
            Settings::discover(root)
        };

        for entry in &self.entries {
            let name = entry.name.to_string();
            match (name.as_str(), &entry.value) {
                ("arb_dir", SettingValue::Str(v)) => settings.arb_dir = v.value().into(),
                ("template_arb_file", SettingValue::Str(v)) => {
                    settings.template_arb_file = v.value().into();
                }
                ("output_class", SettingValue::Str(v)) => settings.output_class = v.value(),
                ("header", SettingValue::Str(v)) => settings.header = Some(v.value()),
                ("header_file", SettingValue::Str(v)) => {
                    settings.header_file = Some(v.value().into());
                }
                ("preferred_supported_locales", SettingValue::List(items)) => {
                    settings.preferred_supported_locales =
                        items.iter().map(LitStr::value).collect();
                }
                ("relaxed_syntax", SettingValue::Bool(v)) => settings.relaxed_syntax = v.value,
                ("use_escaping", SettingValue::Bool(v)) => settings.use_escaping = v.value,
                ("suppress_warnings", SettingValue::Bool(v)) => {
                    settings.suppress_warnings = v.value;
                }
                ("required_resource_attributes", SettingValue::Bool(v)) => {
                    settings.required_resource_attributes = v.value;
                }
                (
                    "arb_dir" | "template_arb_file" | "output_class" | "header" | "header_file"
                    | "preferred_supported_locales" | "relaxed_syntax" | "use_escaping"
                    | "suppress_warnings" | "required_resource_attributes",
                    _,
                ) => {
                    return Err(syn::Error::new(
                        entry.name.span(),
                        format!("wrong value type for setting '{name}'"),
                    ));
                }
                _ => {
                    return Err(syn::Error::new(
                        entry.name.span(),
                        format!("unknown setting '{name}'"),
                    ));
                }
            }
        }

        Ok(settings.rooted_at(root))
    }

    fn entry(&self, name: &str) -> Option<&SettingEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Span for errors that concern the invocation as a whole.
    pub fn span(&self) -> Span {
        self.entries
            .first()
            .map_or_else(Span::call_site, |entry| entry.name.span())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use syn::parse_quote;

    /// Helper to parse a localizations! macro input from tokens.
    fn parse_input(tokens: proc_macro2::TokenStream) -> MacroInput {
        syn::parse2(tokens).expect("should parse")
    }

    // =========================================================================
    // Parsing
    // =========================================================================

    #[test]
    fn test_parse_empty_input() {
        let input = parse_input(parse_quote! {});
        assert!(input.entries.is_empty());
    }

    #[test]
    fn test_parse_value_kinds() {
        let input = parse_input(parse_quote! {
            arb_dir = "l10n",
            use_escaping = true,
            preferred_supported_locales = ["es", "en"],
        });
        assert_eq!(input.entries.len(), 3);
        assert!(matches!(input.entries[0].value, SettingValue::Str(_)));
        assert!(matches!(input.entries[1].value, SettingValue::Bool(_)));
        assert!(matches!(&input.entries[2].value, SettingValue::List(items) if items.len() == 2));
    }

    #[test]
    fn test_parse_rejects_other_literals() {
        let result: syn::Result<MacroInput> = syn::parse2(parse_quote! { arb_dir = 42 });
        assert!(result.is_err());
    }

    // =========================================================================
    // Settings
    // =========================================================================

    #[test]
    fn test_settings_resolved_against_root() {
        let input = parse_input(parse_quote! {
            arb_dir = "l10n",
            output_class = "Strings",
            header_file = "header.txt",
            relaxed_syntax = true,
        });
        let settings = input.settings(&PathBuf::from("/project")).expect("valid settings");
        assert_eq!(settings.arb_dir, PathBuf::from("/project/l10n"));
        assert_eq!(settings.output_class, "Strings");
        assert_eq!(
            settings.header_file,
            Some(PathBuf::from("/project/l10n/header.txt"))
        );
        assert!(settings.relaxed_syntax);
        assert!(!settings.use_escaping);
    }

    #[test]
    fn test_settings_wrong_value_type() {
        let input = parse_input(parse_quote! { use_escaping = "yes" });
        let err = input.settings(&PathBuf::from("/project")).unwrap_err();
        assert_eq!(err.to_string(), "wrong value type for setting 'use_escaping'");
    }

    #[test]
    fn test_settings_unknown_setting() {
        let input = parse_input(parse_quote! { format = true });
        let err = input.settings(&PathBuf::from("/project")).unwrap_err();
        assert_eq!(err.to_string(), "unknown setting 'format'");
    }

    #[test]
    fn test_settings_read_config_without_arb_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join("l10n.json"),
            r#"{"arb_dir": "i18n", "output_class": "FromConfig"}"#,
        )
        .expect("write config");

        let input = parse_input(parse_quote! { use_escaping = true });
        let settings = input.settings(dir.path()).expect("valid settings");
        assert_eq!(settings.arb_dir, dir.path().join("i18n"));
        assert_eq!(settings.output_class, "FromConfig");
        assert!(settings.use_escaping);
    }

    #[test]
    fn test_settings_ignore_config_with_arb_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join("l10n.json"),
            r#"{"output_class": "FromConfig"}"#,
        )
        .expect("write config");

        let input = parse_input(parse_quote! { arb_dir = "l10n" });
        let settings = input.settings(dir.path()).expect("valid settings");
        assert_eq!(settings.output_class, "AppLocalizations");
    }
}
