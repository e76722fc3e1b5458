//! Character cursor over query text.
//!
//! The scanner knows nothing about query syntax. It walks a sequence of code points and never
//! fails: reads past the end yield [`NUL`], and every movement is clamped to the text length.

/// Sentinel returned by [`Scanner::peek`] when the cursor is at or past the end of the text.
///
/// No character in the query grammar compares equal to it.
pub const NUL: char = '\0';

/// A cursor over a query string.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    /// The text being scanned, as code points.
    text: Vec<char>,
    /// Index of the current character. Always `<= text.len()`.
    position: usize,
}

impl Scanner {
    /// Creates a scanner positioned at the start of `text`.
    pub fn new(text: &str) -> Self {
        let mut scanner = Self::default();
        scanner.reset(text);
        scanner
    }

    /// Replaces the scanned text and rewinds to the start.
    pub fn reset(&mut self, text: &str) {
        self.text = text.chars().collect();
        self.position = 0;
    }

    /// Current cursor position, in characters.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of characters in the text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true once the cursor has reached the end of the text.
    pub fn at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    /// Returns the character under the cursor, or [`NUL`] at the end.
    pub fn peek(&self) -> char {
        self.peek_at(0)
    }

    /// Returns the character `offset` places ahead of the cursor, or [`NUL`] past the end.
    pub fn peek_at(&self, offset: usize) -> char {
        self.position
            .checked_add(offset)
            .and_then(|index| self.text.get(index))
            .copied()
            .unwrap_or(NUL)
    }

    /// Returns the characters in `start..end`, clamped to the text.
    pub fn extract(&self, start: usize, end: usize) -> String {
        let end = end.min(self.text.len());
        let start = start.min(end);
        self.text[start..end].iter().collect()
    }

    /// Moves forward one character.
    pub fn advance(&mut self) {
        self.advance_by(1);
    }

    /// Moves forward `count` characters, stopping at the end of the text.
    pub fn advance_by(&mut self, count: usize) {
        self.position = self.position.saturating_add(count).min(self.text.len());
    }

    /// Advances while `predicate` holds for the current character.
    pub fn skip_while(&mut self, predicate: impl Fn(char) -> bool) {
        while !self.at_end() && predicate(self.peek()) {
            self.advance();
        }
    }

    /// Advances while `predicate` holds and returns the characters skipped.
    pub fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> String {
        let start = self.position;
        self.skip_while(predicate);
        self.extract(start, self.position)
    }

    /// Skips whitespace characters.
    pub fn skip_whitespace(&mut self) {
        self.skip_while(char::is_whitespace);
    }

    /// Advances to the next occurrence of `target`, or to the end if there is none.
    pub fn skip_to(&mut self, target: char) {
        self.skip_while(|ch| ch != target);
    }
}
