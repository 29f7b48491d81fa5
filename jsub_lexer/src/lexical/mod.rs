//! Lexical analysis module
//!
//! Converts Java-subset source text into a [`LexOutput`]: the classified
//! token sequence plus the identifier table. Lexing never fails as a whole;
//! problems show up as `Error` tokens.

pub mod analyzer;
pub mod classifier;
pub mod cursor;

use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{LexOutput, Token, TokenType};
use serde::Serialize;

pub use analyzer::{LexerError, LexicalAnalyzer, LexicalMetrics};
pub use cursor::Cursor;

// ============================================================================
// MODULE API
// ============================================================================

/// Tokenize in-memory source with default preferences
pub fn tokenize(source: &str) -> LexOutput {
    LexicalAnalyzer::new().tokenize(source)
}

/// Tokenize with custom runtime preferences
pub fn tokenize_with_preferences(source: &str, preferences: LexicalPreferences) -> LexOutput {
    LexicalAnalyzer::with_preferences(preferences).tokenize(source)
}

// ============================================================================
// MODULE INITIALIZATION
// ============================================================================

/// Check that every lexical code is registered (for system startup)
pub fn init_lexical_analysis_logging() -> Result<(), String> {
    let lexical_codes = [
        codes::lexical::INVALID_CHARACTER,
        codes::lexical::UNTERMINATED_STRING,
        codes::lexical::UNTERMINATED_BLOCK_COMMENT,
    ];

    for code in &lexical_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Lexical error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    crate::log_debug!("Lexical analysis codes validated",
        "codes" => lexical_codes.len(),
        "success_code" => codes::success::TOKENIZATION_COMPLETE.as_str()
    );

    Ok(())
}

// ============================================================================
// TOKEN COUNTS
// ============================================================================

/// Per-kind totals over a token slice
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenCounts {
    pub keywords: usize,
    pub identifiers: usize,
    pub numbers: usize,
    pub strings: usize,
    pub operators: usize,
    pub delimiters: usize,
    pub comments: usize,
    pub errors: usize,
}

impl TokenCounts {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        tokens.iter().fold(Self::default(), |mut counts, token| {
            match token.kind {
                TokenType::Keyword => counts.keywords += 1,
                TokenType::Identifier => counts.identifiers += 1,
                TokenType::Number => counts.numbers += 1,
                TokenType::String => counts.strings += 1,
                TokenType::Operator => counts.operators += 1,
                TokenType::Delimiter => counts.delimiters += 1,
                TokenType::Comment => counts.comments += 1,
                TokenType::Error => counts.errors += 1,
                TokenType::Eof => {}
            }
            counts
        })
    }

    /// Tokens counted, EOF excluded
    pub fn total(&self) -> usize {
        self.keywords
            + self.identifiers
            + self.numbers
            + self.strings
            + self.operators
            + self.delimiters
            + self.comments
            + self.errors
    }
}
