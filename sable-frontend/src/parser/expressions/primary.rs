//! Primary expression parsing

use crate::ast::*;
use crate::lexer::{Token, TokenKind};
use crate::parser::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a literal, an identifier or a parenthesized expression
    pub fn parse_primary_expression(&mut self) -> Result<Expression, ParseError> {
        let token = *self.peek()?;

        let kind = match token.kind {
            TokenKind::IntLiteral => {
                self.advance()?;
                let value = token.text.parse::<i64>().map_err(|_| invalid_literal(&token))?;
                ExpressionKind::IntegerLiteral(value)
            }
            TokenKind::FloatLiteral => {
                self.advance()?;
                let value = token
                    .text
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| invalid_literal(&token))?;
                ExpressionKind::FloatLiteral(value)
            }
            TokenKind::Identifier => {
                self.advance()?;
                ExpressionKind::Identifier(token.text.to_string())
            }
            TokenKind::LeftParen => {
                self.advance()?;
                let inner = self.nested(token.span, |parser| parser.parse_expression())?;
                let close = self.expect(TokenKind::RightParen, "parenthesized expression")?;

                return Ok(Expression::new(
                    ExpressionKind::Parenthesized(Box::new(inner)),
                    token.span.to(&close.span),
                ));
            }
            _ => return Err(Self::unexpected(&token, "expression", "expression")),
        };

        Ok(Expression::new(kind, token.span))
    }
}

fn invalid_literal(token: &Token<'_>) -> ParseError {
    ParseError::InvalidNumericLiteral {
        text: token.text.to_string(),
        span: token.span,
    }
}
