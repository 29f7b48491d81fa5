//! Token model
//!
//! Tokens are flat records: a kind, the consumed lexeme, and the line and
//! column of the first character. A lexing session returns them together with
//! the identifier table as a [`LexOutput`].

pub mod output;
pub mod token;

pub use output::LexOutput;
pub use token::{Token, TokenType};
