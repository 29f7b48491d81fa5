//! Position-aware character access over a source buffer

use crate::utils::Position;

/// Forward-only reader over source text.
///
/// `advance` is the only operation that moves the position, so line and
/// column bookkeeping lives in exactly one place.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    position: Position,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: Position::start(),
        }
    }

    fn rest(&self) -> &'src str {
        &self.source[self.position.offset..]
    }

    /// Current character, or `None` at end of input
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Character after the current one
    pub fn peek_ahead(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Consume and return the current character
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position = self.position.advance(ch);
        Some(ch)
    }

    /// Consume characters while `predicate` holds
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while self.peek().is_some_and(&mut predicate) {
            self.advance();
        }
    }

    pub fn at_end(&self) -> bool {
        self.position.offset >= self.source.len()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Source text between `start` and the current position
    pub fn slice_from(&self, start: Position) -> &'src str {
        &self.source[start.offset..self.position.offset]
    }
}
