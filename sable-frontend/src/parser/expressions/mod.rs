//! Expression parsing for Sable
//!
//! Precedence climbing over the table in [`crate::parser::precedence`],
//! with assignment handled up front by one token of lookahead.

mod assignment;
mod binary;
mod primary;

use crate::ast::Expression;
use crate::parser::{ParseError, Parser};

impl Parser<'_> {
    /// Parse expression (top level)
    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_assignment_expression()
    }
}
