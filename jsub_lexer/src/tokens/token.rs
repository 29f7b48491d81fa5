//! Token model emitted by the scanner
use crate::grammar::keywords::Keyword;
use crate::utils::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    Keyword,
    Identifier,
    Number,
    String,
    Operator,
    Delimiter,
    /// Only produced when comment retention is enabled
    Comment,
    Eof,
    Error,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "KEYWORD",
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Operator => "OPERATOR",
            Self::Delimiter => "DELIMITER",
            Self::Comment => "COMMENT",
            Self::Eof => "EOF",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme with the position of its first character.
///
/// For `Error` tokens the lexeme is the offending character or a diagnostic
/// message; for `String` tokens it is the body without quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenType,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenType, lexeme: impl Into<String>, start: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line: start.line,
            column: start.column,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenType::Error
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::Eof
    }

    pub fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenType::Keyword => Keyword::from_str(&self.lexeme),
            _ => None,
        }
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match self.kind {
            TokenType::Identifier => Some(&self.lexeme),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}:{}] {} -> \"{}\"",
            self.line, self.column, self.kind, self.lexeme
        )
    }
}
