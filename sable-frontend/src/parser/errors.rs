//! Parse error types for the Sable front-end
//!
//! Lexing and parsing share one error type: the first failure ends the
//! parse and is handed back to the caller as-is.

use sable_common::{Diagnostic, SourceLocation, SourceSpan};
use thiserror::Error;

/// Everything that can stop a parse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized character `{character}` at {}", .span.start)]
    UnrecognizedCharacter { character: char, span: SourceSpan },

    #[error("unterminated block comment starting at {}", .span.start)]
    UnterminatedComment { span: SourceSpan },

    #[error("invalid numeric literal `{text}` at {}", .span.start)]
    InvalidNumericLiteral { text: String, span: SourceSpan },

    #[error("expected {expected}, found {found} at {}", .span.start)]
    UnexpectedToken {
        expected: String,
        found: String,
        span: SourceSpan,
    },

    #[error("unexpected end of input in {context} at {}", .span.start)]
    UnexpectedEndOfInput { context: String, span: SourceSpan },

    #[error("variable `{name}` has no initializer, expected `=` at {}", .span.start)]
    MissingInitializer { name: String, span: SourceSpan },

    #[error("unexpected {found} after the last function at {}", .span.start)]
    TrailingInput { found: String, span: SourceSpan },

    #[error("expression nested deeper than {limit} levels at {}", .span.start)]
    NestingTooDeep { limit: usize, span: SourceSpan },
}

impl ParseError {
    /// Span of the offending text
    pub fn span(&self) -> SourceSpan {
        match self {
            ParseError::UnrecognizedCharacter { span, .. }
            | ParseError::UnterminatedComment { span }
            | ParseError::InvalidNumericLiteral { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEndOfInput { span, .. }
            | ParseError::MissingInitializer { span, .. }
            | ParseError::TrailingInput { span, .. }
            | ParseError::NestingTooDeep { span, .. } => *span,
        }
    }

    pub fn location(&self) -> SourceLocation {
        self.span().start
    }

    /// Byte offset where the error was detected
    pub fn offset(&self) -> usize {
        self.location().offset
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        let message = match err {
            ParseError::UnrecognizedCharacter { character, .. } => {
                format!("unrecognized character `{}`", character.escape_default())
            }
            ParseError::UnterminatedComment { .. } => "unterminated block comment".to_string(),
            ParseError::InvalidNumericLiteral { text, .. } => {
                format!("numeric literal `{}` is out of range", text)
            }
            ParseError::UnexpectedToken { expected, found, .. } => {
                format!("expected {}, found {}", expected, found)
            }
            ParseError::UnexpectedEndOfInput { context, .. } => {
                format!("unexpected end of input in {}", context)
            }
            ParseError::MissingInitializer { name, .. } => {
                format!("variable `{}` has no initializer", name)
            }
            ParseError::TrailingInput { found, .. } => {
                format!("unexpected {} after the last function", found)
            }
            ParseError::NestingTooDeep { limit, .. } => {
                format!("expression nested deeper than {} levels", limit)
            }
        };

        let diagnostic = Diagnostic::error(message, err.span());
        match err {
            ParseError::MissingInitializer { .. } => {
                diagnostic.with_note("variables are declared as `var name = value;`".to_string())
            }
            ParseError::TrailingInput { .. } => {
                diagnostic.with_note("only `func` declarations may appear at the top level".to_string())
            }
            ParseError::NestingTooDeep { .. } => diagnostic
                .with_note("split the expression using intermediate variables".to_string()),
            _ => diagnostic,
        }
    }
}

impl From<ParseError> for Diagnostic {
    fn from(err: ParseError) -> Self {
        Diagnostic::from(&err)
    }
}
