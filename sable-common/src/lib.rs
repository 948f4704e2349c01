//! Sable front-end - Common Types and Utilities
//!
//! Source positions and diagnostics shared by the lexer, the parser and
//! whatever consumes the syntax tree afterwards.

pub mod error;
pub mod source_loc;

pub use error::{Diagnostic, Severity};
pub use source_loc::{HasSpan, SourceLocation, SourceSpan, SourceTracker};
