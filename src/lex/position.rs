//! Position tracking for source code locations
//!
//! Logos hands out byte spans. Diagnostics want 1-based line:column positions, with columns
//! counted in characters so multi-byte UTF-8 input lines up with what an editor shows.
//! [SourceLocation] precomputes where each line starts and converts offsets with a binary
//! search.

use std::fmt;

/// A 1-based line:column position in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
#[derive(Debug, Clone)]
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self { line_starts }
    }

    /// Convert a byte offset to a position
    ///
    /// `source` must be the text this table was built from and `byte_offset` must lie on a
    /// char boundary (logos spans always do).
    pub fn byte_to_position(&self, source: &str, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = source
            .get(line_start..byte_offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(byte_offset - line_start);

        Position::new(line + 1, column + 1)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_character_is_one_one() {
        let source = "+ 42";
        let location = SourceLocation::new(source);
        assert_eq!(location.byte_to_position(source, 0), Position::new(1, 1));
        assert_eq!(location.byte_to_position(source, 2), Position::new(1, 3));
    }

    #[test]
    fn test_multiline_offsets() {
        let source = "a\nbc\n\nd";
        let location = SourceLocation::new(source);
        assert_eq!(location.line_count(), 4);
        assert_eq!(location.byte_to_position(source, 2), Position::new(2, 1));
        assert_eq!(location.byte_to_position(source, 3), Position::new(2, 2));
        assert_eq!(location.byte_to_position(source, 6), Position::new(4, 1));
    }

    #[test]
    fn test_columns_count_characters() {
        let source = "/* é */ x";
        let location = SourceLocation::new(source);
        let offset = source.find('x').unwrap();
        assert_eq!(location.byte_to_position(source, offset), Position::new(1, 9));
    }

    #[test]
    fn test_end_of_input_position() {
        let source = "ab\n";
        let location = SourceLocation::new(source);
        assert_eq!(location.byte_to_position(source, source.len()), Position::new(2, 1));
    }
}
