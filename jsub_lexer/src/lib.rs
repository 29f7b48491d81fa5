// Internal modules
pub mod config;
pub mod file_processor;
pub mod grammar;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod symbols;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use lexical::{tokenize, LexerError, LexicalAnalyzer};
pub use symbols::SymbolTable;
pub use tokens::{LexOutput, Token, TokenType};
