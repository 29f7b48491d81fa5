//! Configuration module
//!
//! Runtime preferences only; the character sets the scanner recognizes are
//! fixed data in `grammar::keywords`.

pub mod runtime;

pub use runtime::{ConfigError, LexicalPreferences, LoggingPreferences, RuntimeConfig};
