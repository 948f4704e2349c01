//! Abstract Syntax Tree definitions for Sable
//!
//! The parser builds the tree in a single pass; every node owns its
//! children and carries the span of the text it was parsed from. Equality
//! on nodes is structural: spans are ignored.

pub mod expressions;
pub mod ops;
pub mod statements;
pub mod types;

// Re-export commonly used types at module level
pub use expressions::{Expression, ExpressionKind};
pub use ops::BinaryOp;
pub use statements::{
    Block, FunctionDeclaration, Parameter, Program, Statement, StatementKind, VariableDeclaration,
};
pub use types::{PrimitiveType, Type, TypeName};

use sable_common::{HasSpan, SourceSpan};
use serde::{Deserialize, Serialize};

/// A name as written in the source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub span: SourceSpan,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl HasSpan for Identifier {
    fn span(&self) -> SourceSpan {
        self.span
    }
}
