//! Method bodies: turning one locale's parsed message into a `String`
//! expression.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::slice;

use arbgen_semantics::NumberFormatKind;
use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};
use serde_json::Value as JsonValue;

use crate::codegen::naming::{ident, method_name};
use crate::locale::LocaleId;
use crate::message::Message;
use crate::parser::{ArgumentKind, Branch, BranchLabel, Node};
use crate::placeholder::{Placeholder, PlaceholderType};

/// Everything needed to render one message for one locale.
pub(crate) struct BodyContext<'a> {
    pub message: &'a Message,
    pub locale: &'a LocaleId,
}

impl BodyContext<'_> {
    /// The statements and final expression of the method body.
    pub fn render(&self, ast: &Node) -> TokenStream {
        let formatters = self.formatter_locals(ast);
        let value = self.render_children(ast.children());
        quote! {
            #(#formatters)*
            #value
        }
    }

    /// Names of every placeholder the body reads.
    pub fn used_names(ast: &Node) -> BTreeSet<&str> {
        ast.referenced_names().into_iter().collect()
    }

    fn placeholder(&self, name: &str) -> Option<Placeholder> {
        self.message
            .placeholder_for(self.locale, name)
            .map(Cow::into_owned)
    }

    /// One `let` per placeholder rendered through a formatter.
    fn formatter_locals(&self, ast: &Node) -> Vec<TokenStream> {
        let mut plain = BTreeSet::new();
        ast.walk(&mut |node| {
            if let Node::Placeholder(name) = node {
                plain.insert(name.as_str());
            }
        });

        let locale = self.locale.as_str();
        self.message
            .template_placeholders
            .keys()
            .filter(|name| plain.contains(name.as_str()))
            .filter_map(|name| self.placeholder(name))
            .filter(|placeholder| placeholder.requires_formatting)
            .map(|placeholder| {
                let local = formatter_ident(&placeholder.name);
                let constructor = if placeholder.is_date() {
                    date_formatter(
                        placeholder.format.as_deref().unwrap_or("yMd"),
                        placeholder.is_custom_date_format,
                        locale,
                    )
                } else {
                    number_formatter(&placeholder, locale)
                };
                quote! { let #local = #constructor; }
            })
            .collect()
    }

    /// Render a sub-message as a `String` expression.
    fn render_children(&self, children: &[Node]) -> TokenStream {
        if let [single @ (Node::Plural { .. } | Node::Select { .. } | Node::Argument { .. })] =
            children
        {
            return self.render_expression(single);
        }

        let mut literal = String::new();
        let mut template = String::new();
        let mut arguments = Vec::new();
        for child in children {
            match child {
                Node::Text(text) => {
                    literal.push_str(text);
                    template.push_str(&text.replace('{', "{{").replace('}', "}}"));
                }
                Node::Placeholder(name) => {
                    template.push_str("{}");
                    arguments.push(self.render_placeholder(name));
                }
                Node::Message(nested) => {
                    template.push_str("{}");
                    arguments.push(self.render_children(nested));
                }
                Node::Plural { .. } | Node::Select { .. } | Node::Argument { .. } => {
                    template.push_str("{}");
                    arguments.push(self.render_expression(child));
                }
            }
        }

        if arguments.is_empty() {
            let text = Literal::string(&literal);
            return quote! { ::std::string::String::from(#text) };
        }
        let template = Literal::string(&template);
        quote! { ::std::format!(#template, #(#arguments),*) }
    }

    fn render_placeholder(&self, name: &str) -> TokenStream {
        let value = parameter_ident(name);
        match self.placeholder(name) {
            Some(placeholder) if placeholder.requires_formatting => {
                let local = formatter_ident(name);
                if placeholder.is_date() {
                    quote! { #local.format(&#value) }
                } else {
                    let number = as_f64(&placeholder, &value);
                    quote! { #local.format(#number) }
                }
            }
            _ => quote! { #value },
        }
    }

    fn render_expression(&self, node: &Node) -> TokenStream {
        match node {
            Node::Plural { variable, branches } => self.render_plural(variable, branches),
            Node::Select { variable, branches } => self.render_select(variable, branches),
            Node::Argument {
                variable,
                kind,
                format,
            } => self.render_argument(variable, *kind, format.as_deref()),
            Node::Message(children) => self.render_children(children),
            Node::Text(_) | Node::Placeholder(_) => self.render_children(slice::from_ref(node)),
        }
    }

    /// `::arbgen::plural(locale, n, [(case, text), ...], other)`
    fn render_plural(&self, variable: &str, branches: &[Branch]) -> TokenStream {
        let locale = self.locale.as_str();
        let value = parameter_ident(variable);
        let count = match self.placeholder(variable) {
            Some(placeholder) => as_f64(&placeholder, &value),
            None => quote! { #value },
        };

        let mut cases = Vec::new();
        let mut other = quote! { ::std::string::String::new() };
        for branch in branches {
            let text = self.render_children(&branch.children);
            match &branch.label {
                label if label.is_other() => other = text,
                BranchLabel::Exact(exact) => {
                    let exact = Literal::i64_unsuffixed(*exact);
                    cases.push(quote! { (::arbgen::PluralCase::Exact(#exact), #text) });
                }
                BranchLabel::Keyword(keyword) => {
                    let case = plural_case(keyword);
                    cases.push(quote! { (::arbgen::PluralCase::#case, #text) });
                }
            }
        }

        quote! {
            ::arbgen::plural(#locale, #count, [#(#cases),*], #other)
        }
    }

    /// `match value { "case" => ..., _ => other }`
    fn render_select(&self, variable: &str, branches: &[Branch]) -> TokenStream {
        let value = parameter_ident(variable);
        let mut arms = Vec::new();
        let mut other = quote! { ::std::string::String::new() };
        for branch in branches {
            let text = self.render_children(&branch.children);
            match &branch.label {
                label if label.is_other() => other = text,
                BranchLabel::Exact(exact) => {
                    let case = Literal::string(&exact.to_string());
                    arms.push(quote! { #case => #text, });
                }
                BranchLabel::Keyword(keyword) => {
                    let case = Literal::string(keyword);
                    arms.push(quote! { #case => #text, });
                }
            }
        }

        quote! {
            match #value {
                #(#arms)*
                _ => #other,
            }
        }
    }

    /// `{when, date, yMMMd}` and `{when, time, jm}`
    fn render_argument(&self, variable: &str, kind: ArgumentKind, format: Option<&str>) -> TokenStream {
        let value = parameter_ident(variable);
        let placeholder = self.placeholder(variable);
        let default = match kind {
            ArgumentKind::Date => "yMd",
            ArgumentKind::Time => "jm",
        };
        let format = format
            .or_else(|| placeholder.as_ref().and_then(|p| p.format.as_deref()))
            .unwrap_or(default);
        let is_custom = placeholder
            .as_ref()
            .is_some_and(|placeholder| placeholder.is_custom_date_format);
        let formatter = date_formatter(format, is_custom, self.locale.as_str());
        quote! { #formatter.format(&#value) }
    }
}

/// The parameter identifier for a placeholder name.
pub(crate) fn parameter_ident(name: &str) -> Ident {
    ident(&method_name(name).unwrap_or_else(|| name.to_string()))
}

fn formatter_ident(name: &str) -> Ident {
    let base = method_name(name).unwrap_or_else(|| name.to_string());
    format_ident!("__{}_format", base.trim_end_matches('_'))
}

fn as_f64(placeholder: &Placeholder, value: &Ident) -> TokenStream {
    if placeholder.resolved_type == PlaceholderType::Int {
        quote! { #value as f64 }
    } else {
        quote! { #value }
    }
}

fn plural_case(keyword: &str) -> Ident {
    let case = match keyword {
        "zero" => "Zero",
        "one" => "One",
        "two" => "Two",
        "few" => "Few",
        "many" => "Many",
        _ => "Other",
    };
    format_ident!("{}", case)
}

fn date_formatter(format: &str, is_custom: bool, locale: &str) -> TokenStream {
    if is_custom {
        quote! { ::arbgen::DateFormat::pattern(#format, #locale) }
    } else {
        quote! { ::arbgen::DateFormat::skeleton(#format, #locale) }
    }
}

fn number_formatter(placeholder: &Placeholder, locale: &str) -> TokenStream {
    let kind = placeholder
        .format
        .as_deref()
        .and_then(NumberFormatKind::from_name)
        .map_or("DecimalPattern", number_kind_variant);
    let kind = format_ident!("{}", kind);

    let options = placeholder
        .optional_parameters
        .iter()
        .filter_map(|(parameter, value)| match (parameter.as_str(), value) {
            ("decimalDigits", JsonValue::Number(digits)) => {
                let digits = Literal::u32_unsuffixed(u32::try_from(digits.as_u64()?).ok()?);
                Some(quote! { .decimal_digits(#digits) })
            }
            ("decimalDigits", JsonValue::String(digits)) => {
                let digits = Literal::u32_unsuffixed(digits.parse().ok()?);
                Some(quote! { .decimal_digits(#digits) })
            }
            ("name", JsonValue::String(name)) => Some(quote! { .name(#name) }),
            ("symbol", JsonValue::String(symbol)) => Some(quote! { .symbol(#symbol) }),
            ("customPattern", JsonValue::String(pattern)) => {
                Some(quote! { .custom_pattern(#pattern) })
            }
            _ => None,
        });

    quote! {
        ::arbgen::NumberFormat::new(::arbgen::NumberFormatKind::#kind, #locale) #(#options)*
    }
}

fn number_kind_variant(kind: NumberFormatKind) -> &'static str {
    match kind {
        NumberFormatKind::Compact => "Compact",
        NumberFormatKind::CompactCurrency => "CompactCurrency",
        NumberFormatKind::CompactSimpleCurrency => "CompactSimpleCurrency",
        NumberFormatKind::CompactLong => "CompactLong",
        NumberFormatKind::Currency => "Currency",
        NumberFormatKind::DecimalPattern => "DecimalPattern",
        NumberFormatKind::DecimalPatternDigits => "DecimalPatternDigits",
        NumberFormatKind::DecimalPercentPattern => "DecimalPercentPattern",
        NumberFormatKind::PercentPattern => "PercentPattern",
        NumberFormatKind::ScientificPattern => "ScientificPattern",
        NumberFormatKind::SimpleCurrency => "SimpleCurrency",
    }
}
