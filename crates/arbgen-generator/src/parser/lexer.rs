//! Tokenizer for ICU message syntax using winnow.
//!
//! The lexer keeps a stack of modes. Text outside braces and inside branch
//! bodies is lexed in string mode; the inside of `{...}` is lexed in
//! expression mode. `{` switches to the other mode and `}` returns to the
//! enclosing one.

use winnow::combinator::{alt, delimited, opt};
use winnow::prelude::*;
use winnow::token::{one_of, take_till, take_while};

use super::ParseOptions;
use super::error::ParseError;

/// Kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    OpenBrace,
    CloseBrace,
    Comma,
    EqualSign,
    Number,
    Identifier,
    Whitespace,
}

/// A token with its (unescaped) value and character offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    String,
    Expression,
}

/// One level of the mode stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    mode: Mode,
    /// `{` characters turned into literal text at this level (relaxed
    /// syntax); the same number of `}` are literal too.
    literal_braces: usize,
}

impl Frame {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            literal_braces: 0,
        }
    }
}

/// Split `text` into tokens.
pub fn tokenize(text: &str, options: &ParseOptions) -> Result<Vec<Token>, ParseError> {
    let mut input = text;
    let mut offset = 0;
    let mut frames = vec![Frame::new(Mode::String)];
    let mut tokens = Vec::new();

    while !input.is_empty() {
        let depth = frames.len();
        let Some(frame) = frames.last_mut() else {
            break;
        };
        let mode = frame.mode;
        let before = input;

        let lexed = if mode == Mode::String && frame.literal_braces > 0 && input.starts_with('}') {
            frame.literal_braces -= 1;
            input = &input[1..];
            Ok((TokenKind::Text, "}".to_string()))
        } else {
            match mode {
                Mode::String => string_token(&mut input, options, depth == 1),
                Mode::Expression => expression_token(&mut input),
            }
        };
        let Ok((kind, value)) = lexed else {
            let found = before.chars().next().unwrap_or('?');
            return Err(ParseError::new(
                format!("unexpected character '{found}'"),
                offset,
                text,
            ));
        };

        if mode == Mode::String && kind == TokenKind::Text && value == "{" && before.starts_with('{') {
            frame.literal_braces += 1;
        }
        match kind {
            TokenKind::OpenBrace => frames.push(Frame::new(match mode {
                Mode::String => Mode::Expression,
                Mode::Expression => Mode::String,
            })),
            TokenKind::CloseBrace if depth > 1 => {
                frames.pop();
            }
            _ => {}
        }

        let consumed = &before[..before.len() - input.len()];
        tokens.push(Token {
            kind,
            value,
            offset,
        });
        offset += consumed.chars().count();
    }

    Ok(tokens)
}

type Lexed = (TokenKind, String);

/// Lex one token in string mode.
fn string_token(input: &mut &str, options: &ParseOptions, top_level: bool) -> ModalResult<Lexed> {
    if options.relaxed_syntax && input.starts_with('{') && !opens_expression(&(*input)[1..], options)
    {
        '{'.parse_next(input)?;
        return Ok((TokenKind::Text, "{".to_string()));
    }

    // A `}` that closes nothing is literal text unless escaping is the
    // only way to write one.
    if top_level && input.starts_with('}') && (options.relaxed_syntax || !options.use_escaping) {
        '}'.parse_next(input)?;
        return Ok((TokenKind::Text, "}".to_string()));
    }

    if options.use_escaping && input.starts_with('\'') {
        return quoted.map(|text| (TokenKind::Text, text)).parse_next(input);
    }

    alt((
        '{'.value((TokenKind::OpenBrace, "{".to_string())),
        '}'.value((TokenKind::CloseBrace, "}".to_string())),
        take_while(1.., |c: char| {
            c != '{' && c != '}' && !(options.use_escaping && c == '\'')
        })
        .map(|text: &str| (TokenKind::Text, text.to_string())),
    ))
    .parse_next(input)
}

/// Parse an apostrophe escape.
///
/// `''` is a literal apostrophe. An apostrophe immediately followed by a
/// brace quotes everything up to the next apostrophe. Any other apostrophe
/// is literal.
fn quoted(input: &mut &str) -> ModalResult<String> {
    alt((
        "''".value("'".to_string()),
        delimited('\'', take_till(1.., '\''), opt('\''))
            .verify(|quoted: &&str| quoted.starts_with(['{', '}']))
            .map(str::to_string),
        '\''.value("'".to_string()),
    ))
    .parse_next(input)
}

/// Lex one token in expression mode.
fn expression_token(input: &mut &str) -> ModalResult<Lexed> {
    alt((
        take_while(1.., char::is_whitespace)
            .map(|ws: &str| (TokenKind::Whitespace, ws.to_string())),
        ','.value((TokenKind::Comma, ",".to_string())),
        '='.value((TokenKind::EqualSign, "=".to_string())),
        '{'.value((TokenKind::OpenBrace, "{".to_string())),
        '}'.value((TokenKind::CloseBrace, "}".to_string())),
        (opt('-'), take_while(1.., |c: char| c.is_ascii_digit()))
            .take()
            .map(|number: &str| (TokenKind::Number, number.to_string())),
        identifier.map(|name: &str| (TokenKind::Identifier, name.to_string())),
    ))
    .parse_next(input)
}

/// Parse an identifier: a letter or underscore followed by word characters.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

/// Decide, in relaxed mode, whether the text after a `{` starts an expression.
///
/// Anything that does not begin with an identifier is literal. When the set
/// of known placeholders is supplied, a bare `{name}` naming an unknown
/// placeholder is literal as well; `{name, ...}` always opens an expression.
fn opens_expression(rest: &str, options: &ParseOptions) -> bool {
    let mut rest = rest.trim_start();
    let Ok(name) = identifier(&mut rest) else {
        return false;
    };
    match &options.placeholders {
        Some(known) if rest.trim_start().starts_with('}') => known.iter().any(|p| p == name),
        _ => true,
    }
}
