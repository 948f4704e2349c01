//! Diagnostics for the Sable front-end
//!
//! A [`Diagnostic`] is the presentation form of an error: a severity, a
//! message, the span it points at and optional notes. Rendering against the
//! original source text is done on demand by the caller.

use crate::source_loc::SourceSpan;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with location and severity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: SourceSpan,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(message: String, span: SourceSpan) -> Self {
        Self {
            severity: Severity::Error,
            message,
            span,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.notes.push(note);
        self
    }

    /// Render the diagnostic with the offending source line and a caret
    /// marker under the span.
    pub fn render(&self, filename: &str, source: &str) -> String {
        let start = self.span.start;
        let mut out = format!("{}: {}\n", self.severity, self.message);

        let gutter = " ".repeat(start.line.to_string().len());
        out.push_str(&format!("{gutter}--> {filename}:{}:{}\n", start.line, start.column));

        if let Some(line) = source.lines().nth(start.line.saturating_sub(1) as usize) {
            let width = if self.span.end.line == start.line {
                self.span.end.column.saturating_sub(start.column).max(1)
            } else {
                1
            };
            let pad = " ".repeat(start.column.saturating_sub(1) as usize);
            out.push_str(&format!("{gutter} |\n"));
            out.push_str(&format!("{} | {}\n", start.line, line));
            out.push_str(&format!("{gutter} | {pad}{}\n", "^".repeat(width as usize)));
        }

        for note in &self.notes {
            out.push_str(&format!("{gutter} = note: {note}\n"));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.severity, self.message, self.span.start)?;

        for note in &self.notes {
            write!(f, "\n  note: {}", note)?;
        }

        Ok(())
    }
}
