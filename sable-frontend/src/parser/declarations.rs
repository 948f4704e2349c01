//! Declaration and function parsing for Sable
//!
//! The top-level driver: a program is a sequence of function declarations
//! running up to the end of the input.

use crate::ast::*;
use crate::lexer::TokenKind;
use crate::parser::{ParseError, Parser};
use log::{debug, trace};
use sable_common::SourceSpan;

impl Parser<'_> {
    /// Parse a complete program
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let start_location = self.peek()?.span.start;

        let mut functions = Vec::new();
        while self.check(TokenKind::Func)? {
            functions.push(self.parse_function_declaration()?);
        }

        let next = *self.peek()?;
        if !next.is(TokenKind::EndOfFile) {
            return Err(ParseError::TrailingInput {
                found: next.to_string(),
                span: next.span,
            });
        }

        let span = if functions.is_empty() {
            SourceSpan::from_location(start_location)
        } else {
            SourceSpan::new(start_location, self.previous_end())
        };

        debug!("parsed {} function declaration(s)", functions.len());

        Ok(Program { functions, span })
    }

    /// Parse `func name(params): type` followed by a block or `;`
    pub fn parse_function_declaration(&mut self) -> Result<FunctionDeclaration, ParseError> {
        let func = self.expect(TokenKind::Func, "function declaration")?;
        let name = self.expect_identifier("function declaration")?;
        trace!("parsing function `{}`", name.name);

        self.expect(TokenKind::LeftParen, "function declaration")?;
        let parameters = self.parse_parameter_list()?;
        self.expect(TokenKind::RightParen, "parameter list")?;

        self.expect(TokenKind::Colon, "function declaration")?;
        let return_type = self.parse_type()?;

        let token = *self.peek()?;
        let body = match token.kind {
            TokenKind::LeftBrace => Some(self.parse_block()?),
            TokenKind::Semicolon => {
                self.advance()?;
                None
            }
            _ => {
                return Err(Self::unexpected(
                    &token,
                    "function body or `;`",
                    "function declaration",
                ))
            }
        };

        Ok(FunctionDeclaration {
            name,
            parameters,
            return_type,
            body,
            span: SourceSpan::new(func.span.start, self.previous_end()),
        })
    }

    /// Parse `Parameter (',' Parameter)*`, or nothing before `)`
    pub fn parse_parameter_list(&mut self) -> Result<Vec<Parameter>, ParseError> {
        let mut parameters = Vec::new();

        if self.check(TokenKind::RightParen)? {
            return Ok(parameters);
        }

        loop {
            parameters.push(self.parse_parameter()?);

            if !self.match_token(TokenKind::Comma)? {
                break;
            }
        }

        Ok(parameters)
    }

    /// Parse `name: type`
    pub fn parse_parameter(&mut self) -> Result<Parameter, ParseError> {
        let name = self.expect_identifier("parameter")?;
        self.expect(TokenKind::Colon, "parameter")?;
        let param_type = self.parse_type()?;

        let span = SourceSpan::new(name.span.start, self.previous_end());
        Ok(Parameter {
            name,
            param_type,
            span,
        })
    }
}
