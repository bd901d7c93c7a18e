//! Rust code generation for a set of localized messages.
//!
//! Transforms validated [`Localizations`] into Rust code that provides:
//! - A trait with one typed method per message
//! - One unit struct per locale implementing the trait
//! - `SUPPORTED_LOCALES`, a dispatch table and a `lookup_*` function
//! - A `LocalizationsDelegate` implementation

mod body;
pub mod naming;

use std::collections::BTreeMap;

use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

use crate::codegen::body::{BodyContext, parameter_ident};
use crate::codegen::naming::{ident, is_identifier, method_name, screaming_snake_case, snake_case};
use crate::error::GenerateError;
use crate::locale::LocaleId;
use crate::message::Message;
use crate::placeholder::{Placeholder, PlaceholderType};

/// Method names every generated trait defines itself.
const RESERVED_METHODS: &[&str] = &["locale_name"];

/// Validated input to code generation.
#[derive(Debug, Clone)]
pub struct Localizations {
    output_class: String,
    header: Option<String>,
    template_locale: LocaleId,
    supported_locales: Vec<LocaleId>,
    messages: Vec<Message>,
}

impl Localizations {
    /// Check that every generated identifier is valid and unique.
    ///
    /// `supported_locales` is the order of `SUPPORTED_LOCALES`; `messages`
    /// are in template key order.
    pub fn new(
        output_class: impl Into<String>,
        header: Option<String>,
        template_locale: LocaleId,
        supported_locales: Vec<LocaleId>,
        messages: Vec<Message>,
    ) -> Result<Self, GenerateError> {
        let output_class = output_class.into();
        if !is_identifier(&output_class) || !output_class.starts_with(|c: char| c.is_ascii_uppercase())
        {
            return Err(GenerateError::InvalidOutputClass { name: output_class });
        }

        let mut methods: BTreeMap<String, String> = RESERVED_METHODS
            .iter()
            .map(|name| ((*name).to_string(), (*name).to_string()))
            .collect();
        for message in &messages {
            let Some(method) = method_name(&message.key) else {
                return Err(GenerateError::InvalidMessageKey {
                    path: template_locale.as_str().into(),
                    key: message.key.clone(),
                });
            };
            if let Some(first) = methods.insert(method.clone(), message.key.clone()) {
                return Err(GenerateError::IdentifierCollision {
                    key: None,
                    first,
                    second: message.key.clone(),
                    ident: method,
                });
            }

            let mut parameters: BTreeMap<String, &str> = BTreeMap::new();
            for name in message.template_placeholders.keys() {
                let Some(parameter) = method_name(name) else {
                    return Err(GenerateError::InvalidPlaceholderName {
                        key: message.key.clone(),
                        placeholder: name.clone(),
                    });
                };
                if let Some(first) = parameters.insert(parameter.clone(), name) {
                    return Err(GenerateError::IdentifierCollision {
                        key: Some(message.key.clone()),
                        first: first.to_string(),
                        second: name.clone(),
                        ident: parameter,
                    });
                }
            }
        }

        Ok(Self {
            output_class,
            header,
            template_locale,
            supported_locales,
            messages,
        })
    }

    pub fn output_class(&self) -> &str {
        &self.output_class
    }

    pub fn template_locale(&self) -> &LocaleId {
        &self.template_locale
    }

    pub fn supported_locales(&self) -> &[LocaleId] {
        &self.supported_locales
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    fn trait_ident(&self) -> Ident {
        format_ident!("{}", self.output_class)
    }

    fn struct_ident(&self, locale: &LocaleId) -> Ident {
        format_ident!("{}{}", self.output_class, locale.type_suffix())
    }
}

/// Main code generation entry point.
pub fn emit(localizations: &Localizations) -> TokenStream {
    let localizations_trait = generate_trait(localizations);
    let structs = generate_structs(localizations);
    let lookup = generate_lookup(localizations);
    let delegate = generate_delegate(localizations);

    quote! {
        #localizations_trait
        #structs
        #lookup
        #delegate
    }
}

/// Generated source text: the header followed by the emitted tokens.
pub fn render(localizations: &Localizations) -> String {
    let mut out = String::new();
    if let Some(header) = &localizations.header {
        out.push_str(header);
        if !header.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(&emit(localizations).to_string());
    out.push('\n');
    out
}

// =============================================================================
// Trait Generation
// =============================================================================

/// Generate the localizations trait.
fn generate_trait(localizations: &Localizations) -> TokenStream {
    let trait_ident = localizations.trait_ident();
    let template = &localizations.template_locale;
    let methods = localizations.messages.iter().map(|message| {
        let signature = method_signature(message, None);
        let docs = method_docs(message, template).into_iter().map(|doc| quote! { #[doc = #doc] });
        quote! {
            #(#docs)*
            #signature;
        }
    });
    let doc = format!(
        " Localized messages, generated from the `{template}` template bundle."
    );

    quote! {
        #[doc = #doc]
        pub trait #trait_ident: Send + Sync {
            /// The locale tag this implementation renders, e.g. `en_US`.
            fn locale_name(&self) -> &'static str;

            #(#methods)*
        }
    }
}

/// Doc comment lines for a trait method.
fn method_docs(message: &Message, template: &LocaleId) -> Vec<String> {
    let mut docs = Vec::new();
    if let Some(description) = &message.description {
        docs.extend(description.lines().map(|line| format!(" {line}")));
        docs.push(String::new());
    }
    docs.push(format!(" In `{template}`, this message translates to:"));
    docs.push(" ```text".to_string());
    docs.extend(message.reference_value.lines().map(|line| format!(" {line}")));
    docs.push(" ```".to_string());
    docs
}

/// `fn key(&self, a: &str, n: f64) -> String`
///
/// Parameters not in `used` are prefixed with `_`. With `used` of `None`
/// every parameter keeps its name.
fn method_signature(message: &Message, used: Option<&[&str]>) -> TokenStream {
    let method = ident(&method_name(&message.key).unwrap_or_else(|| message.key.clone()));
    let parameters = message.template_placeholders.values().map(|placeholder| {
        let name = if used.is_none_or(|used| used.contains(&placeholder.name.as_str())) {
            parameter_ident(&placeholder.name)
        } else {
            let base = method_name(&placeholder.name).unwrap_or_else(|| placeholder.name.clone());
            format_ident!("_{}", base)
        };
        let ty = parameter_type(placeholder);
        quote! { #name: #ty }
    });
    quote! {
        fn #method(&self, #(#parameters),*) -> ::std::string::String
    }
}

fn parameter_type(placeholder: &Placeholder) -> TokenStream {
    match placeholder.resolved_type {
        PlaceholderType::String => quote! { &str },
        PlaceholderType::Int => quote! { i64 },
        PlaceholderType::Num | PlaceholderType::Double => quote! { f64 },
        PlaceholderType::DateTime => quote! { ::arbgen::DateTime },
        PlaceholderType::Object => quote! { &dyn ::core::fmt::Display },
    }
}

// =============================================================================
// Locale Struct Generation
// =============================================================================

/// Generate one unit struct and trait implementation per locale.
fn generate_structs(localizations: &Localizations) -> TokenStream {
    let trait_ident = localizations.trait_ident();
    let structs = localizations.supported_locales.iter().map(|locale| {
        let struct_ident = localizations.struct_ident(locale);
        let tag = locale.as_str();
        let doc = format!(" `{tag}` translations of [`{}`].", localizations.output_class);
        let methods = localizations
            .messages
            .iter()
            .map(|message| generate_method(message, locale));

        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, Default)]
            pub struct #struct_ident;

            impl #trait_ident for #struct_ident {
                fn locale_name(&self) -> &'static str {
                    #tag
                }

                #(#methods)*
            }
        }
    });

    quote! { #(#structs)* }
}

/// A method body for one locale: the translation, or a stub that panics
/// when the locale has no usable translation.
fn generate_method(message: &Message, locale: &LocaleId) -> TokenStream {
    if let Some(ast) = message.parsed_for(locale) {
        let used: Vec<&str> = BodyContext::used_names(ast).into_iter().collect();
        let signature = method_signature(message, Some(&used));
        let body = BodyContext { message, locale }.render(ast);
        return quote! {
            #signature {
                #body
            }
        };
    }

    let signature = method_signature(message, Some(&[][..]));
    let panic = Literal::string(&format!(
        "message '{}' is not translated for locale '{locale}'",
        message.key
    ));
    quote! {
        #signature {
            ::core::unimplemented!(#panic)
        }
    }
}

// =============================================================================
// Lookup Generation
// =============================================================================

/// Generate `SUPPORTED_LOCALES`, the dispatch table and the lookup function.
fn generate_lookup(localizations: &Localizations) -> TokenStream {
    let trait_ident = localizations.trait_ident();
    let table_ident = format_ident!("{}_TABLE", screaming_snake_case(&localizations.output_class));
    let lookup_ident = format_ident!("lookup_{}", snake_case(&localizations.output_class));
    let tags: Vec<&str> = localizations
        .supported_locales
        .iter()
        .map(LocaleId::as_str)
        .collect();
    let entries = localizations.supported_locales.iter().map(|locale| {
        let tag = locale.as_str();
        let struct_ident = localizations.struct_ident(locale);
        quote! { (#tag, &#struct_ident) }
    });
    let lookup_doc = format!(
        " The [`{}`] for `locale`, trying the full tag, then language and script, \
         then language and region, then the bare language.",
        localizations.output_class
    );

    quote! {
        /// Locale tags with generated translations, preferred locales first.
        pub const SUPPORTED_LOCALES: &[&str] = &[#(#tags),*];

        const #table_ident: &[(&str, &'static dyn #trait_ident)] = &[#(#entries),*];

        #[doc = #lookup_doc]
        pub fn #lookup_ident(locale: &str) -> ::core::option::Option<&'static dyn #trait_ident> {
            let tag = locale.replace('-', "_");
            let mut parts = tag.split('_');
            let language = parts.next().unwrap_or_default();
            let rest: ::std::vec::Vec<&str> = parts.collect();
            let script = rest.iter().find(|part| part.len() >= 4);
            let region = rest.iter().find(|part| part.len() < 4);

            let mut candidates = ::std::vec![tag.clone()];
            if let ::core::option::Option::Some(script) = script {
                candidates.push(::std::format!("{language}_{script}"));
            }
            if let ::core::option::Option::Some(region) = region {
                candidates.push(::std::format!("{language}_{region}"));
            }
            candidates.push(language.to_string());

            candidates.iter().find_map(|candidate| {
                #table_ident
                    .iter()
                    .find(|(tag, _)| *tag == candidate.as_str())
                    .map(|(_, localizations)| *localizations)
            })
        }
    }
}

// =============================================================================
// Delegate Generation
// =============================================================================

/// Generate `<OutputClass>Delegate`.
fn generate_delegate(localizations: &Localizations) -> TokenStream {
    let trait_ident = localizations.trait_ident();
    let delegate_ident = format_ident!("{}Delegate", localizations.output_class);
    let lookup_ident = format_ident!("lookup_{}", snake_case(&localizations.output_class));
    let doc = format!(" Loads [`{}`] implementations by locale tag.", localizations.output_class);

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, Default)]
        pub struct #delegate_ident;

        impl ::arbgen::LocalizationsDelegate for #delegate_ident {
            type Output = dyn #trait_ident;

            fn is_supported(&self, locale: &str) -> bool {
                #lookup_ident(locale).is_some()
            }

            fn load(
                &self,
                locale: &str,
            ) -> ::core::future::Ready<
                ::core::result::Result<&'static Self::Output, ::arbgen::UnsupportedLocale>,
            > {
                ::core::future::ready(
                    #lookup_ident(locale).ok_or_else(|| ::arbgen::UnsupportedLocale::new(locale)),
                )
            }
        }
    }
}
