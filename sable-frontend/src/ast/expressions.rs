//! Expression AST nodes for Sable
//!
//! This module defines expression nodes in the abstract syntax tree.

use super::ops::BinaryOp;
use super::Identifier;
use sable_common::{HasSpan, SourceSpan};
use serde::{Deserialize, Serialize};

/// AST Expression nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    /// `target = value`, right-associative
    Assignment {
        target: Identifier,
        value: Box<Expression>,
    },

    /// Binary operation
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },

    /// Identifier reference
    Identifier(String),

    IntegerLiteral(i64),

    FloatLiteral(f64),

    /// `( inner )`; the node's span includes both parentheses
    Parenthesized(Box<Expression>),
}

impl Expression {
    pub fn new(kind: ExpressionKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl HasSpan for Expression {
    fn span(&self) -> SourceSpan {
        self.span
    }
}
