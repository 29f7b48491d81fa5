//! File processor module
//!
//! Loads source files from disk for the lexer. Lexing itself never touches the
//! filesystem.

mod processor;

pub use processor::{read_source, FileProcessorError, SourceFile};

/// Largest source file accepted, in bytes (10 MiB)
pub const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

