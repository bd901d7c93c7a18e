//! Rust identifiers for message keys, placeholders and generated types.

use proc_macro2::{Ident, Span};

/// Words that cannot be used as identifiers without the `r#` prefix.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that are not allowed even as raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "Self", "super", "_"];

/// Convert `helloWorld`, `HTTPStatus` or `item2Count` to snake case.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let previous = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match previous {
                Some(p) if p.is_ascii_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_ascii_uppercase() => next.is_some_and(|n| n.is_ascii_lowercase()),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert `en_US` style text or `snake_case` to `SCREAMING_SNAKE_CASE`.
pub fn screaming_snake_case(name: &str) -> String {
    snake_case(name).to_ascii_uppercase()
}

/// Returns true if `name` is a plain ASCII Rust identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name != "_"
}

/// The snake-case identifier text for `name`, or `None` if unusable.
///
/// Rust keywords keep their spelling and are emitted as raw identifiers by
/// [`ident`]; `self`-like words get a trailing underscore.
pub fn method_name(name: &str) -> Option<String> {
    if !is_identifier(name) {
        return None;
    }
    let snake = snake_case(name);
    if RESERVED.contains(&snake.as_str()) {
        Some(format!("{snake}_"))
    } else {
        Some(snake)
    }
}

/// Build an identifier, using a raw identifier for keywords.
pub fn ident(name: &str) -> Ident {
    if KEYWORDS.contains(&name) {
        Ident::new_raw(name, Span::call_site())
    } else {
        Ident::new(name, Span::call_site())
    }
}
