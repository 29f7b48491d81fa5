//! Shared primitive types used by the scanner, tokens, and log events.

pub mod span;

pub use span::{Position, Span};
