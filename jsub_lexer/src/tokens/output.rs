//! Result of one lexing session

use super::token::{Token, TokenType};
use crate::symbols::SymbolTable;
use serde::{Deserialize, Serialize};

/// Token sequence and symbol table produced together by one scan.
///
/// The token sequence always ends with exactly one `Eof` token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexOutput {
    tokens: Vec<Token>,
    symbols: SymbolTable,
}

impl LexOutput {
    pub(crate) fn new(tokens: Vec<Token>, symbols: SymbolTable) -> Self {
        debug_assert!(
            tokens.last().is_some_and(Token::is_eof),
            "token sequence must end with EOF"
        );
        Self { tokens, symbols }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Error tokens in scan order
    pub fn errors(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.kind == TokenType::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Tokens of one kind, in scan order
    pub fn of_kind(&self, kind: TokenType) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(move |t| t.kind == kind)
    }

    pub fn into_parts(self) -> (Vec<Token>, SymbolTable) {
        (self.tokens, self.symbols)
    }
}
