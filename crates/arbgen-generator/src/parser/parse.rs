//! Recursive-descent parser over the token stream.
//!
//! The only state is the token cursor. Grammar:
//!
//! ```text
//! message    := (text | expression)*
//! expression := '{' ws ident ws '}'
//!             | '{' ws ident ws ',' ws ('plural' | 'select') ws ',' branch+ ws '}'
//!             | '{' ws ident ws ',' ws ('date' | 'time') ws (',' ws ident ws)? '}'
//! branch     := ws ('=' number | ident | number) ws '{' message '}'
//! ```

use arbgen_semantics::is_plural_category;

use super::ast::{ArgumentKind, Branch, BranchLabel, Node};
use super::error::ParseError;
use super::lexer::{Token, TokenKind};

pub(super) struct Parser<'a> {
    tokens: Vec<Token>,
    position: usize,
    text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExpressionKind {
    Plural,
    Select,
}

impl ExpressionKind {
    fn name(self) -> &'static str {
        match self {
            ExpressionKind::Plural => "plural",
            ExpressionKind::Select => "select",
        }
    }
}

impl<'a> Parser<'a> {
    pub(super) fn new(tokens: Vec<Token>, text: &'a str) -> Self {
        Self {
            tokens,
            position: 0,
            text,
        }
    }

    /// Parse the whole token stream as a top-level message.
    pub(super) fn parse(mut self) -> Result<Node, ParseError> {
        let children = self.message(false)?;
        Ok(Node::Message(children))
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Character offset of the current token, or end of input.
    fn offset(&self) -> usize {
        self.peek()
            .map_or_else(|| self.text.chars().count(), |token| token.offset)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, self.offset(), self.text)
    }

    fn describe_current(&self) -> String {
        match self.peek() {
            Some(token) => format!("'{}'", token.value),
            None => "end of input".to_string(),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_kind() == Some(TokenKind::Whitespace) {
            self.position += 1;
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, ParseError> {
        if self.peek_kind() == Some(kind) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(self.error(format!(
            "expected {what} but found {}",
            self.describe_current()
        )))
    }

    /// Parse text and expressions until a closing brace (when nested) or the
    /// end of input (top level).
    fn message(&mut self, nested: bool) -> Result<Vec<Node>, ParseError> {
        let mut children: Vec<Node> = Vec::new();
        loop {
            match self.peek_kind() {
                None => {
                    if nested {
                        return Err(self.error("expected '}' but found end of input"));
                    }
                    return Ok(children);
                }
                Some(TokenKind::CloseBrace) => {
                    if nested {
                        return Ok(children);
                    }
                    return Err(self.error("unexpected '}' outside of an expression"));
                }
                Some(TokenKind::OpenBrace) => children.push(self.expression()?),
                Some(_) => {
                    let Some(token) = self.advance() else {
                        continue;
                    };
                    if let Some(Node::Text(previous)) = children.last_mut() {
                        previous.push_str(&token.value);
                    } else {
                        children.push(Node::Text(token.value));
                    }
                }
            }
        }
    }

    fn expression(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::OpenBrace, "'{'")?;
        self.skip_whitespace();
        let name = self.expect(TokenKind::Identifier, "a placeholder name")?.value;
        self.skip_whitespace();

        if self.peek_kind() == Some(TokenKind::CloseBrace) {
            self.advance();
            return Ok(Node::Placeholder(name));
        }

        self.expect(TokenKind::Comma, "',' or '}'")?;
        self.skip_whitespace();
        let keyword = self.expect(
            TokenKind::Identifier,
            "one of 'plural', 'select', 'date' or 'time'",
        )?;
        self.skip_whitespace();

        match keyword.value.as_str() {
            "plural" => self.branches(name, ExpressionKind::Plural),
            "select" => self.branches(name, ExpressionKind::Select),
            "date" => self.argument(name, ArgumentKind::Date),
            "time" => self.argument(name, ArgumentKind::Time),
            other => Err(ParseError::new(
                format!(
                    "unknown expression type '{other}' for '{name}'; expected 'plural', 'select', 'date' or 'time'"
                ),
                keyword.offset,
                self.text,
            )),
        }
    }

    fn argument(&mut self, variable: String, kind: ArgumentKind) -> Result<Node, ParseError> {
        let mut format = None;
        if self.peek_kind() == Some(TokenKind::Comma) {
            self.advance();
            self.skip_whitespace();
            format = Some(self.expect(TokenKind::Identifier, "a date format")?.value);
            self.skip_whitespace();
        }
        self.expect(TokenKind::CloseBrace, "'}'")?;
        Ok(Node::Argument {
            variable,
            kind,
            format,
        })
    }

    fn branches(&mut self, variable: String, kind: ExpressionKind) -> Result<Node, ParseError> {
        let start = self.offset();
        self.expect(TokenKind::Comma, "','")?;

        let mut branches: Vec<Branch> = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek_kind() == Some(TokenKind::CloseBrace) || self.peek().is_none() {
                break;
            }
            let label_offset = self.offset();
            let label = self.branch_label(kind)?;
            if branches.iter().any(|branch| branch.label == label) {
                return Err(ParseError::new(
                    format!("duplicate branch '{label}' in {} '{variable}'", kind.name()),
                    label_offset,
                    self.text,
                ));
            }
            self.skip_whitespace();
            self.expect(TokenKind::OpenBrace, "'{' to start the branch body")?;
            let children = self.message(true)?;
            self.expect(TokenKind::CloseBrace, "'}' to end the branch body")?;
            branches.push(Branch { label, children });
        }
        self.expect(TokenKind::CloseBrace, "'}'")?;

        if branches.is_empty() {
            return Err(ParseError::new(
                format!("{} expression '{variable}' has no branches", kind.name()),
                start,
                self.text,
            ));
        }
        if !branches.iter().any(|branch| branch.label.is_other()) {
            return Err(ParseError::new(
                format!(
                    "{} expression '{variable}' is missing the mandatory 'other' branch",
                    kind.name()
                ),
                start,
                self.text,
            ));
        }

        Ok(match kind {
            ExpressionKind::Plural => Node::Plural {
                variable,
                branches,
            },
            ExpressionKind::Select => Node::Select {
                variable,
                branches,
            },
        })
    }

    fn branch_label(&mut self, kind: ExpressionKind) -> Result<BranchLabel, ParseError> {
        let offset = self.offset();
        match (self.peek_kind(), kind) {
            (Some(TokenKind::EqualSign), ExpressionKind::Plural) => {
                self.advance();
                let number = self.expect(TokenKind::Number, "a number after '='")?;
                number
                    .value
                    .parse::<i64>()
                    .map(BranchLabel::Exact)
                    .map_err(|_| {
                        ParseError::new(
                            format!("'{}' is not a valid exact value", number.value),
                            number.offset,
                            self.text,
                        )
                    })
            }
            (Some(TokenKind::Identifier), ExpressionKind::Plural) => {
                let word = self.advance().map(|token| token.value).unwrap_or_default();
                if is_plural_category(&word) {
                    Ok(BranchLabel::Keyword(word))
                } else {
                    Err(ParseError::new(
                        format!(
                            "invalid plural category '{word}'; expected one of zero, one, two, few, many, other or =N"
                        ),
                        offset,
                        self.text,
                    ))
                }
            }
            (Some(TokenKind::Identifier | TokenKind::Number), ExpressionKind::Select) => Ok(
                BranchLabel::Keyword(self.advance().map(|token| token.value).unwrap_or_default()),
            ),
            _ => Err(self.error(format!(
                "expected a {} case but found {}",
                kind.name(),
                self.describe_current()
            ))),
        }
    }
}
