//! ICU message parser.
//!
//! Messages are tokenized by a mode-switching lexer and then parsed by a
//! recursive-descent parser into a [`Node`] tree. Both stages are pure
//! functions of the input text and [`ParseOptions`].

pub mod ast;
pub mod error;
mod lexer;
mod parse;

use bon::Builder;

pub use ast::*;
pub use error::ParseError;
pub use lexer::{Token, TokenKind, tokenize};

/// Options controlling how message text is interpreted.
#[derive(Debug, Clone, Default, Builder)]
pub struct ParseOptions {
    /// Recognize apostrophe escapes (`'{'`, `''`).
    #[builder(default)]
    pub use_escaping: bool,
    /// Treat braces that cannot start an expression as literal text.
    #[builder(default)]
    pub relaxed_syntax: bool,
    /// Known placeholder names; with `relaxed_syntax`, `{name}` for a name
    /// outside this set is literal text.
    pub placeholders: Option<Vec<String>>,
}

/// Parse a single message into a `Node::Message`.
///
/// # Example
///
/// ```
/// use arbgen_generator::parser::{Node, ParseOptions, parse_message};
///
/// let node = parse_message("Hello {name}", &ParseOptions::default()).unwrap();
/// assert_eq!(
///     node,
///     Node::Message(vec![
///         Node::Text("Hello ".into()),
///         Node::Placeholder("name".into()),
///     ])
/// );
/// ```
pub fn parse_message(text: &str, options: &ParseOptions) -> Result<Node, ParseError> {
    let tokens = tokenize(text, options)?;
    parse::Parser::new(tokens, text).parse()
}
