//! Token definitions for the Sable lexer
//!
//! This module defines token kinds and the Token struct.

use sable_common::{HasSpan, SourceSpan};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sable token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    IntLiteral,
    FloatLiteral,

    Identifier,

    // Keywords
    Func,
    Var,

    // Operators
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /
    Equal, // =

    // Delimiters
    Colon,      // :
    Comma,      // ,
    Semicolon,  // ;
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }

    EndOfFile,
}

/// Coarse classification of a token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenCategory {
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    Keyword,
    Punctuation,
    EndOfInput,
}

impl TokenKind {
    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::IntLiteral => TokenCategory::IntegerLiteral,
            TokenKind::FloatLiteral => TokenCategory::FloatLiteral,
            TokenKind::Identifier => TokenCategory::Identifier,
            TokenKind::Func | TokenKind::Var => TokenCategory::Keyword,
            TokenKind::EndOfFile => TokenCategory::EndOfInput,
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Equal
            | TokenKind::Colon
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::LeftBrace
            | TokenKind::RightBrace => TokenCategory::Punctuation,
        }
    }

    /// Keyword lookup; keywords share the identifier pattern
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "func" => Some(TokenKind::Func),
            "var" => Some(TokenKind::Var),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::IntLiteral => write!(f, "integer literal"),
            TokenKind::FloatLiteral => write!(f, "float literal"),
            TokenKind::Identifier => write!(f, "identifier"),

            TokenKind::Func => write!(f, "`func`"),
            TokenKind::Var => write!(f, "`var`"),

            TokenKind::Plus => write!(f, "`+`"),
            TokenKind::Minus => write!(f, "`-`"),
            TokenKind::Star => write!(f, "`*`"),
            TokenKind::Slash => write!(f, "`/`"),
            TokenKind::Equal => write!(f, "`=`"),

            TokenKind::Colon => write!(f, "`:`"),
            TokenKind::Comma => write!(f, "`,`"),
            TokenKind::Semicolon => write!(f, "`;`"),
            TokenKind::LeftParen => write!(f, "`(`"),
            TokenKind::RightParen => write!(f, "`)`"),
            TokenKind::LeftBrace => write!(f, "`{{`"),
            TokenKind::RightBrace => write!(f, "`}}`"),

            TokenKind::EndOfFile => write!(f, "end of input"),
        }
    }
}

/// A token with its source text and location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: SourceSpan,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, span: SourceSpan) -> Self {
        Self { kind, text, span }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl HasSpan for Token<'_> {
    fn span(&self) -> SourceSpan {
        self.span
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.category() {
            TokenCategory::Identifier | TokenCategory::IntegerLiteral | TokenCategory::FloatLiteral => {
                write!(f, "{} `{}`", self.kind, self.text)
            }
            TokenCategory::Keyword | TokenCategory::Punctuation | TokenCategory::EndOfInput => {
                write!(f, "{}", self.kind)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shows_text_only_for_valued_tokens() {
        let span = SourceSpan::default();

        assert_eq!(Token::new(TokenKind::FloatLiteral, "2.5", span).to_string(), "float literal `2.5`");
        assert_eq!(Token::new(TokenKind::Identifier, "count", span).to_string(), "identifier `count`");
        assert_eq!(Token::new(TokenKind::Var, "var", span).to_string(), "`var`");
        assert_eq!(Token::new(TokenKind::LeftBrace, "{", span).to_string(), "`{`");
        assert_eq!(Token::new(TokenKind::EndOfFile, "", span).to_string(), "end of input");
    }
}
