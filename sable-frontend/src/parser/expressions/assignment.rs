//! Assignment expression parsing

use crate::ast::*;
use crate::lexer::TokenKind;
use crate::parser::{ParseError, Parser, Precedence};

impl Parser<'_> {
    /// Parse `identifier = expression`, or fall through to the binary levels
    /// when the token after a leading identifier is not `=`.
    pub fn parse_assignment_expression(&mut self) -> Result<Expression, ParseError> {
        let is_assignment =
            self.check(TokenKind::Identifier)? && self.peek_nth(1)?.is(TokenKind::Equal);
        if !is_assignment {
            return self.parse_binary_expression(Precedence::Assignment.next());
        }

        let target = self.expect_identifier("assignment")?;
        let equal = self.expect(TokenKind::Equal, "assignment")?;

        // Right-associative: the value is itself an assignment expression
        let value = self.nested(equal.span, |parser| parser.parse_assignment_expression())?;
        let span = target.span.to(&value.span);

        Ok(Expression::new(
            ExpressionKind::Assignment {
                target,
                value: Box::new(value),
            },
            span,
        ))
    }
}
