//! Statement and block parsing for Sable
//!
//! `Block := '{' Statement* '}'`; a statement is either a `var`
//! declaration or an expression followed by `;`.

use crate::ast::*;
use crate::lexer::TokenKind;
use crate::parser::{ParseError, Parser};
use log::trace;
use sable_common::SourceSpan;

impl Parser<'_> {
    /// Parse a `{ ... }` block
    pub fn parse_block(&mut self) -> Result<Block, ParseError> {
        let open = self.expect(TokenKind::LeftBrace, "block")?;
        trace!("parsing block at {}", open.span.start);

        let mut statements = Vec::new();
        loop {
            let token = *self.peek()?;
            match token.kind {
                TokenKind::RightBrace => break,
                TokenKind::EndOfFile => return Err(Self::unexpected(&token, "`}`", "block")),
                _ => statements.push(self.parse_statement()?),
            }
        }

        let close = self.advance()?;

        Ok(Block {
            statements,
            span: open.span.to(&close.span),
        })
    }

    /// Parse statement
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek_kind()? {
            TokenKind::Var => self.parse_variable_declaration(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parse `var name (: type)? = initializer;`
    pub fn parse_variable_declaration(&mut self) -> Result<Statement, ParseError> {
        let var = self.expect(TokenKind::Var, "variable declaration")?;
        let name = self.expect_identifier("variable declaration")?;

        let declared_type = if self.match_token(TokenKind::Colon)? {
            Some(self.parse_type()?)
        } else {
            None
        };

        let token = *self.peek()?;
        match token.kind {
            TokenKind::Equal => {
                self.advance()?;
            }
            TokenKind::EndOfFile => {
                return Err(Self::unexpected(&token, "`=`", "variable declaration"));
            }
            _ => {
                return Err(ParseError::MissingInitializer {
                    name: name.name,
                    span: token.span,
                });
            }
        }

        let initializer = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "variable declaration")?;

        Ok(Statement {
            kind: StatementKind::VariableDeclaration(VariableDeclaration {
                name,
                declared_type,
                initializer,
            }),
            span: SourceSpan::new(var.span.start, self.previous_end()),
        })
    }

    /// Parse expression statement
    pub fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
        let expr = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "expression statement")?;

        let start = expr.span.start;
        Ok(Statement {
            kind: StatementKind::Expression(expr),
            span: SourceSpan::new(start, self.previous_end()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_statement_from_str(input: &str) -> Result<Statement, ParseError> {
        Parser::new(input).parse_statement()
    }

    fn parse_block_from_str(input: &str) -> Result<Block, ParseError> {
        Parser::new(input).parse_block()
    }

    #[test]
    fn test_variable_declaration_with_type() {
        let stmt = parse_statement_from_str("var count: u32* = p;").unwrap();
        assert_eq!(stmt.span.len(), 20);

        match stmt.kind {
            StatementKind::VariableDeclaration(decl) => {
                assert_eq!(decl.name.name, "count");
                let ty = decl.declared_type.expect("type annotation");
                assert_eq!(ty.base, TypeName::Primitive(PrimitiveType::U32));
                assert_eq!(ty.pointer_depth, 1);
                assert_eq!(decl.initializer.kind, ExpressionKind::Identifier("p".to_string()));
            }
            _ => panic!("Expected variable declaration"),
        }
    }

    #[test]
    fn test_variable_declaration_without_type() {
        let stmt = parse_statement_from_str("var x = 1.5;").unwrap();
        match stmt.kind {
            StatementKind::VariableDeclaration(decl) => {
                assert!(decl.declared_type.is_none());
                assert_eq!(decl.initializer.kind, ExpressionKind::FloatLiteral(1.5));
            }
            _ => panic!("Expected variable declaration"),
        }
    }

    #[test]
    fn test_expression_statement() {
        let stmt = parse_statement_from_str("x = x + 1;").unwrap();
        assert_eq!(stmt.span.len(), 10);
        match stmt.kind {
            StatementKind::Expression(expr) => {
                assert!(matches!(expr.kind, ExpressionKind::Assignment { .. }));
            }
            _ => panic!("Expected expression statement"),
        }
    }

    #[test]
    fn test_missing_expression_points_at_semicolon() {
        let err = parse_statement_from_str("var x = ;").unwrap_err();
        match err {
            ParseError::UnexpectedToken { expected, found, span } => {
                assert_eq!(expected, "expression");
                assert_eq!(found, "`;`");
                assert_eq!(span.start.offset, 8);
            }
            other => panic!("Expected unexpected token, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_initializer() {
        let err = parse_statement_from_str("var x: i32;").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingInitializer {
                name: "x".to_string(),
                span: err.span(),
            }
        );
        assert_eq!(err.offset(), 10);
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse_statement_from_str("x = 1 }").unwrap_err();
        match err {
            ParseError::UnexpectedToken { expected, found, .. } => {
                assert_eq!(expected, "`;`");
                assert_eq!(found, "`}`");
            }
            other => panic!("Expected unexpected token, got {:?}", other),
        }
    }

    #[test]
    fn test_block() {
        let block = parse_block_from_str("{ var a = 1; a * 2; }").unwrap();
        assert_eq!(block.statements.len(), 2);
        assert_eq!(block.span.start.offset, 0);
        assert_eq!(block.span.end.offset, 21);
    }

    #[test]
    fn test_empty_block() {
        let block = parse_block_from_str("{}").unwrap();
        assert!(block.statements.is_empty());
    }

    #[test]
    fn test_unterminated_block() {
        let err = parse_block_from_str("{ var a = 1;").unwrap_err();
        match err {
            ParseError::UnexpectedEndOfInput { context, span } => {
                assert_eq!(context, "block");
                assert_eq!(span.start.offset, 12);
            }
            other => panic!("Expected end of input, got {:?}", other),
        }
    }

    #[test]
    fn test_block_is_not_an_expression() {
        let err = parse_block_from_str("{ { } }").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }));
        assert_eq!(err.offset(), 2);
    }
}
