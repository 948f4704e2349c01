//! Binary expression parsing with operator precedence

use crate::ast::*;
use crate::parser::{infix_operator, ParseError, Parser, Precedence};

impl Parser<'_> {
    /// Parse operands joined by infix operators binding at least as tightly
    /// as `min_precedence`, folding to the left.
    pub fn parse_binary_expression(&mut self, min_precedence: Precedence) -> Result<Expression, ParseError> {
        let left = self.parse_primary_expression()?;

        // Every fold deepens the tree by one level
        let depth = self.depth;
        let result = self.fold_binary_operators(left, min_precedence);
        self.depth = depth;
        result
    }

    fn fold_binary_operators(
        &mut self,
        mut left: Expression,
        min_precedence: Precedence,
    ) -> Result<Expression, ParseError> {
        while let Some(operator) = infix_operator(self.peek_kind()?) {
            if operator.precedence < min_precedence {
                break;
            }

            let token = self.advance()?;
            self.enter_level(token.span)?;
            let right = self.parse_binary_expression(operator.right_operand_precedence())?;
            let span = left.span.to(&right.span);

            left = Expression::new(
                ExpressionKind::Binary {
                    op: operator.op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }
}
