//! Sable Lexer
//!
//! Turns source text into a lazy stream of tokens. Whitespace and comments
//! are trivia: they are consumed between tokens and never yielded.

pub mod literals;
pub mod token;
pub mod trivia;

pub use token::{Token, TokenCategory, TokenKind};

use crate::parser::ParseError;
use log::debug;
use sable_common::SourceTracker;
use std::iter::FusedIterator;

/// Sable Lexer
pub struct Lexer<'src> {
    pub(crate) source: &'src str,
    pub(crate) tracker: SourceTracker,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tracker: SourceTracker::new(),
            finished: false,
        }
    }

    /// Rewind to the start of the source
    pub fn reset(&mut self) {
        self.tracker = SourceTracker::new();
        self.finished = false;
    }

    fn rest(&self) -> &'src str {
        &self.source[self.tracker.offset()..]
    }

    /// Get current character
    pub(crate) fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peek ahead n characters
    pub(crate) fn peek_char(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    /// Advance to next character
    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.tracker.advance(ch);
        Some(ch)
    }

    /// Advance while `predicate` holds for the current character
    pub(crate) fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(ch) = self.current_char() {
            if !predicate(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Tokenize an identifier or keyword
    fn tokenize_identifier(&mut self, start: usize) -> TokenKind {
        self.advance_while(|ch| ch.is_ascii_alphanumeric() || ch == '_');

        let text = &self.source[start..self.tracker.offset()];
        TokenKind::keyword(text).unwrap_or(TokenKind::Identifier)
    }

    /// Get next token
    pub fn next_token(&mut self) -> Result<Token<'src>, ParseError> {
        self.skip_trivia()?;

        let start_location = self.tracker.location();

        let kind = match self.current_char() {
            None => TokenKind::EndOfFile,

            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
                self.tokenize_identifier(start_location.offset)
            }

            Some(ch) if ch.is_ascii_digit() => self.tokenize_number(),

            Some(ch) => {
                self.advance();
                match ch {
                    '+' => TokenKind::Plus,
                    '-' => TokenKind::Minus,
                    '*' => TokenKind::Star,
                    '/' => TokenKind::Slash,
                    '=' => TokenKind::Equal,
                    ':' => TokenKind::Colon,
                    ',' => TokenKind::Comma,
                    ';' => TokenKind::Semicolon,
                    '(' => TokenKind::LeftParen,
                    ')' => TokenKind::RightParen,
                    '{' => TokenKind::LeftBrace,
                    '}' => TokenKind::RightBrace,
                    _ => {
                        return Err(ParseError::UnrecognizedCharacter {
                            character: ch,
                            span: self.tracker.span_from(start_location),
                        });
                    }
                }
            }
        };

        let span = self.tracker.span_from(start_location);
        Ok(Token::new(kind, span.slice(self.source), span))
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, ParseError>;

    /// Yields every token up to and including `EndOfFile`, or up to the
    /// first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) if token.is(TokenKind::EndOfFile) => self.finished = true,
            Ok(_) => {}
            Err(err) => {
                debug!("lexer stopped: {}", err);
                self.finished = true;
            }
        }
        Some(result)
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenize an entire source text, end-of-file marker included
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, ParseError> {
    Lexer::new(source).collect()
}
