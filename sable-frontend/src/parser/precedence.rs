//! Operator binding strengths
//!
//! Levels from loosest to tightest: assignment, additive, multiplicative,
//! primary. Only binary operators live in the table; assignment is
//! recognised by its `identifier =` prefix before climbing starts.

use crate::ast::BinaryOp;
use crate::lexer::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Assignment,
    Additive,
    Multiplicative,
    Primary,
}

impl Precedence {
    /// The next tighter level
    pub fn next(self) -> Precedence {
        match self {
            Precedence::Assignment => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative | Precedence::Primary => Precedence::Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfixOperator {
    pub op: BinaryOp,
    pub precedence: Precedence,
    pub associativity: Associativity,
}

impl InfixOperator {
    pub const fn new(op: BinaryOp, precedence: Precedence, associativity: Associativity) -> Self {
        Self {
            op,
            precedence,
            associativity,
        }
    }

    /// Minimum precedence for the right-hand operand
    pub fn right_operand_precedence(&self) -> Precedence {
        match self.associativity {
            Associativity::Left => self.precedence.next(),
            Associativity::Right => self.precedence,
        }
    }
}

const INFIX_OPERATORS: [(TokenKind, InfixOperator); 4] = [
    (
        TokenKind::Plus,
        InfixOperator::new(BinaryOp::Add, Precedence::Additive, Associativity::Left),
    ),
    (
        TokenKind::Minus,
        InfixOperator::new(BinaryOp::Sub, Precedence::Additive, Associativity::Left),
    ),
    (
        TokenKind::Star,
        InfixOperator::new(BinaryOp::Mul, Precedence::Multiplicative, Associativity::Left),
    ),
    (
        TokenKind::Slash,
        InfixOperator::new(BinaryOp::Div, Precedence::Multiplicative, Associativity::Left),
    ),
];

/// Look up the binary operator a token kind stands for, if any
pub fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    INFIX_OPERATORS
        .iter()
        .find(|(token_kind, _)| *token_kind == kind)
        .map(|(_, operator)| *operator)
}
