//! Sable Front-end
//!
//! This crate turns Sable source text into a syntax tree:
//! - Lexer: lazy token stream, whitespace and comments skipped
//! - Parser: recursive descent with precedence climbing for binary operators
//! - AST: span-annotated tree definitions
//! - Printer: canonical source output for a tree
//! - Visitor: read-only tree walks

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod visit;

pub use ast::{
    BinaryOp, Block, Expression, ExpressionKind, FunctionDeclaration, Identifier, Parameter,
    PrimitiveType, Program, Statement, StatementKind, Type, TypeName, VariableDeclaration,
};
pub use lexer::{tokenize, Lexer, Token, TokenCategory, TokenKind};
pub use parser::{ParseError, Parser};
pub use printer::unparse;
pub use visit::Visitor;

/// Parse a complete Sable source text into a program
pub fn parse(source: &str) -> Result<Program, ParseError> {
    Parser::new(source).parse_program()
}
