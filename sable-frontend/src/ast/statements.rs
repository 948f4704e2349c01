//! Statement AST nodes for Sable
//!
//! This module defines statements, blocks, functions and the program root.

use super::expressions::Expression;
use super::types::Type;
use super::Identifier;
use sable_common::{HasSpan, SourceSpan};
use serde::{Deserialize, Serialize};

/// AST Statement nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StatementKind {
    /// `var name (: type)? = initializer;`
    VariableDeclaration(VariableDeclaration),

    /// Expression statement
    Expression(Expression),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub name: Identifier,
    /// `None` leaves the type to be inferred from the initializer
    pub declared_type: Option<Type>,
    pub initializer: Expression,
}

/// `{ statements }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: Identifier,
    pub param_type: Type,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: Identifier,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    /// `None` for a forward declaration ending in `;`
    pub body: Option<Block>,
    pub span: SourceSpan,
}

impl FunctionDeclaration {
    pub fn is_forward_declaration(&self) -> bool {
        self.body.is_none()
    }
}

/// Root of the tree: functions in declaration order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Program {
    pub functions: Vec<FunctionDeclaration>,
    pub span: SourceSpan,
}

impl Program {
    pub fn function(&self, name: &str) -> Option<&FunctionDeclaration> {
        self.functions.iter().find(|func| func.name.name == name)
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.statements == other.statements
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.param_type == other.param_type
    }
}

impl PartialEq for FunctionDeclaration {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.parameters == other.parameters
            && self.return_type == other.return_type
            && self.body == other.body
    }
}

impl PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.functions == other.functions
    }
}

impl HasSpan for Statement {
    fn span(&self) -> SourceSpan {
        self.span
    }
}

impl HasSpan for Block {
    fn span(&self) -> SourceSpan {
        self.span
    }
}

impl HasSpan for Parameter {
    fn span(&self) -> SourceSpan {
        self.span
    }
}

impl HasSpan for FunctionDeclaration {
    fn span(&self) -> SourceSpan {
        self.span
    }
}

impl HasSpan for Program {
    fn span(&self) -> SourceSpan {
        self.span
    }
}
