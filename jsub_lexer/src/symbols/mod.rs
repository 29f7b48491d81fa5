//! Identifier bookkeeping
//!
//! The scanner records every `Identifier` token here; keywords never reach the
//! table.

pub mod table;

pub use table::{SymbolEntry, SymbolTable};
