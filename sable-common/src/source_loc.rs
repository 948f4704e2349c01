//! Source location tracking for error reporting
//!
//! This module provides types for tracking locations in source text,
//! which the lexer stamps onto tokens and the parser onto tree nodes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A location in a source text.
///
/// `offset` is a byte offset into the text; `line` and `column` are 1-based,
/// with columns counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }

    /// The location of the first character of a text
    pub fn start() -> Self {
        Self::new(0, 1, 1)
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open span in a source text: `end` is the position just past the
/// last character covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceSpan {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    /// Create an empty span at a single location
    pub fn from_location(location: SourceLocation) -> Self {
        Self {
            start: location,
            end: location,
        }
    }

    /// Length of the covered text in bytes
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Span from the start of `self` to the end of `other`
    pub fn to(&self, other: &SourceSpan) -> SourceSpan {
        SourceSpan::new(self.start, other.end)
    }

    /// Whether `other` lies entirely inside this span
    pub fn contains(&self, other: &SourceSpan) -> bool {
        self.start.offset <= other.start.offset && other.end.offset <= self.end.offset
    }

    /// The slice of `source` this span covers
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start.offset..self.end.offset]
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            if self.start.column == self.end.column {
                write!(f, "{}", self.start)
            } else {
                write!(f, "{}:{}-{}", self.start.line, self.start.column, self.end.column)
            }
        } else {
            write!(
                f,
                "{}:{}-{}:{}",
                self.start.line, self.start.column, self.end.line, self.end.column
            )
        }
    }
}

/// Trait for types that have a source span
pub trait HasSpan {
    fn span(&self) -> SourceSpan;
}

/// Helper for creating source locations during lexing
#[derive(Debug, Clone)]
pub struct SourceTracker {
    offset: usize,
    line: u32,
    column: u32,
}

impl SourceTracker {
    pub fn new() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get current location
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.offset, self.line, self.column)
    }

    /// Current byte offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Advance by one character
    pub fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Create a span from a start location to current location
    pub fn span_from(&self, start: SourceLocation) -> SourceSpan {
        SourceSpan::new(start, self.location())
    }
}

impl Default for SourceTracker {
    fn default() -> Self {
        Self::new()
    }
}
