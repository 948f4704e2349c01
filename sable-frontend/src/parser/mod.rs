//! Sable Recursive Descent Parser
//!
//! One method per grammar rule, each returning its node or the first error.
//! Tokens are pulled from the lexer on demand; the cursor only moves forward
//! and at most two tokens are buffered (the current one plus the lookahead
//! used to tell `x = ...` from `x + ...`).

pub mod declarations;
pub mod errors;
pub mod expressions;
pub mod precedence;
pub mod statements;
pub mod types;

pub use errors::ParseError;
pub use precedence::{infix_operator, Associativity, InfixOperator, Precedence};

use crate::ast::Identifier;
use crate::lexer::{Lexer, Token, TokenKind};
use sable_common::{SourceLocation, SourceSpan};
use std::collections::VecDeque;

/// Deepest allowed nesting of parentheses and chained assignments
pub const MAX_NESTING_DEPTH: usize = 256;

/// Sable Parser
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    lookahead: VecDeque<Token<'src>>,
    /// End of the last consumed token
    previous_end: SourceLocation,
    /// Expression tree levels open around the cursor: parentheses,
    /// assignment values and folded binary operators
    pub(crate) depth: usize,
}

impl<'src> Parser<'src> {
    /// Create a new parser
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexer::new(source),
            lookahead: VecDeque::with_capacity(2),
            previous_end: SourceLocation::start(),
            depth: 0,
        }
    }

    /// Peek at current token without consuming
    pub(crate) fn peek(&mut self) -> Result<&Token<'src>, ParseError> {
        self.peek_nth(0)
    }

    /// Peek `n` tokens past the current one
    pub(crate) fn peek_nth(&mut self, n: usize) -> Result<&Token<'src>, ParseError> {
        while self.lookahead.len() <= n {
            let token = self.lexer.next_token()?;
            self.lookahead.push_back(token);
        }
        Ok(&self.lookahead[n])
    }

    pub(crate) fn peek_kind(&mut self) -> Result<TokenKind, ParseError> {
        Ok(self.peek()?.kind)
    }

    /// Get current token and advance
    pub(crate) fn advance(&mut self) -> Result<Token<'src>, ParseError> {
        let token = match self.lookahead.pop_front() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        self.previous_end = token.span.end;
        Ok(token)
    }

    /// Check if current token matches expected kind
    pub(crate) fn check(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        Ok(self.peek_kind()? == kind)
    }

    /// Consume token if it matches expected kind
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.check(kind)? {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Expect and consume a specific token kind
    pub(crate) fn expect(&mut self, kind: TokenKind, context: &str) -> Result<Token<'src>, ParseError> {
        let token = *self.peek()?;
        if token.is(kind) {
            self.advance()
        } else {
            Err(Self::unexpected(&token, &kind.to_string(), context))
        }
    }

    pub(crate) fn expect_identifier(&mut self, context: &str) -> Result<Identifier, ParseError> {
        let token = self.expect(TokenKind::Identifier, context)?;
        Ok(Identifier::new(token.text, token.span))
    }

    /// Error for `token` showing up where `expected` was required
    pub(crate) fn unexpected(token: &Token<'_>, expected: &str, context: &str) -> ParseError {
        if token.is(TokenKind::EndOfFile) {
            ParseError::UnexpectedEndOfInput {
                context: context.to_string(),
                span: token.span,
            }
        } else {
            ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.to_string(),
                span: token.span,
            }
        }
    }

    /// Run `parse` one nesting level deeper. `span` marks the token that
    /// opened the level and is reported once the limit is reached.
    pub(crate) fn nested<T>(
        &mut self,
        span: SourceSpan,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let depth = self.depth;
        self.enter_level(span)?;
        let result = parse(self);
        self.depth = depth;
        result
    }

    /// Count one more level of nesting, failing past `MAX_NESTING_DEPTH`
    pub(crate) fn enter_level(&mut self, span: SourceSpan) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
                span,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// End of the most recently consumed token
    pub(crate) fn previous_end(&self) -> SourceLocation {
        self.previous_end
    }
}
