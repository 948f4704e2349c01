//! Type annotation parsing
//!
//! `Type := Identifier ('*')*`. A `*` reached here is always a pointer
//! marker: expression parsing never enters this rule.

use crate::ast::{Type, TypeName};
use crate::lexer::TokenKind;
use crate::parser::{ParseError, Parser};
use sable_common::SourceSpan;

impl Parser<'_> {
    /// Parse a type annotation
    pub fn parse_type(&mut self) -> Result<Type, ParseError> {
        let base = self.expect_identifier("type")?;

        let mut pointer_depth = 0;
        while self.match_token(TokenKind::Star)? {
            pointer_depth += 1;
        }

        Ok(Type {
            base: TypeName::from_identifier(&base.name),
            pointer_depth,
            span: SourceSpan::new(base.span.start, self.previous_end()),
        })
    }
}
