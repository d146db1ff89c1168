// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Explicit scan cursor over the lines of a DSL document.
//!
//! The parser advances the cursor variably depending on the construct it
//! consumed, so sub-parsers (task body, conditional block) borrow the cursor
//! mutably and leave it positioned at the first line they did not consume.
//! There is no index rewinding and no parser-owned scan state.

/// A forward-only cursor over the trimmed lines of a document.
///
/// The whole input is trimmed before it is split, so line numbers are 1-based
/// relative to the trimmed text.
pub(crate) struct Cursor<'a> {
    lines: Vec<&'a str>,
    index: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.trim().split('\n').collect(),
            index: 0,
        }
    }

    /// The current line, trimmed, without consuming it. `None` at end of input.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.index).map(|line| line.trim())
    }

    /// Consume the current line.
    pub fn advance(&mut self) {
        if self.index < self.lines.len() {
            self.index += 1;
        }
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.lines.len()
    }

    /// 1-based number of the current line.
    pub fn line_number(&self) -> usize {
        self.index + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_trims_and_does_not_consume() {
        let cursor = Cursor::new("  first  \nsecond");
        assert_eq!(cursor.peek(), Some("first"));
        assert_eq!(cursor.peek(), Some("first"));
        assert_eq!(cursor.line_number(), 1);
    }

    #[test]
    fn advance_walks_to_end() {
        let mut cursor = Cursor::new("a\nb");
        assert!(!cursor.at_end());
        cursor.advance();
        assert_eq!(cursor.peek(), Some("b"));
        assert_eq!(cursor.line_number(), 2);
        cursor.advance();
        assert!(cursor.at_end());
        assert_eq!(cursor.peek(), None);
        // Advancing past the end stays put
        cursor.advance();
        assert_eq!(cursor.line_number(), 3);
    }

    #[test]
    fn surrounding_whitespace_does_not_shift_line_numbers() {
        let cursor = Cursor::new("\n\n@var x = \"\"\n\n");
        assert_eq!(cursor.peek(), Some("@var x = \"\""));
        assert_eq!(cursor.line_number(), 1);
    }

    #[test]
    fn interior_blank_lines_are_preserved() {
        let mut cursor = Cursor::new("a\n\nb");
        cursor.advance();
        assert_eq!(cursor.peek(), Some(""));
        cursor.advance();
        assert_eq!(cursor.peek(), Some("b"));
        assert_eq!(cursor.line_number(), 3);
    }
}
