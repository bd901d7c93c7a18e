//! Parse error type for ICU message syntax.

use std::fmt;

/// An error produced while lexing or parsing a single message.
///
/// `offset` is a character (not byte) index into `text`. The `Display`
/// implementation renders the offending line with a caret under the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
    pub text: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>, offset: usize, text: &str) -> Self {
        Self {
            message: message.into(),
            offset,
            text: text.to_string(),
        }
    }

    /// Byte offset of the error, clamped to the text length.
    pub fn byte_offset(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.offset)
            .map_or(self.text.len(), |(index, _)| index)
    }

    /// The line containing the error and the caret column within it.
    fn line_and_column(&self) -> (&str, usize) {
        let byte_offset = self.byte_offset();
        let line_start = self.text[..byte_offset].rfind('\n').map_or(0, |pos| pos + 1);
        let line_end = self.text[byte_offset..]
            .find('\n')
            .map_or(self.text.len(), |pos| byte_offset + pos);
        let column = self.text[line_start..byte_offset].chars().count();
        (&self.text[line_start..line_end], column)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.line_and_column();
        writeln!(f, "{} at character {}", self.message, self.offset)?;
        writeln!(f, "    {line}")?;
        write!(f, "    {}^", " ".repeat(column))
    }
}

impl std::error::Error for ParseError {}
