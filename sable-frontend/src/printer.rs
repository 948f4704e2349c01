//! Canonical source printer
//!
//! Every node prints back to Sable source that parses to an equal tree.
//! Layout is fixed: one statement per line, four-space indentation, single
//! spaces around binary operators and after `:` and `,`.

use crate::ast::*;
use std::fmt;

const INDENT: &str = "    ";

/// Print a whole program, functions separated by a blank line
pub fn unparse(program: &Program) -> String {
    program.to_string()
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExpressionKind::Assignment { target, value } => write!(f, "{target} = {value}"),
            ExpressionKind::Binary { op, left, right } => write!(f, "{left} {op} {right}"),
            ExpressionKind::Identifier(name) => f.write_str(name),
            ExpressionKind::IntegerLiteral(value) => write!(f, "{value}"),
            ExpressionKind::FloatLiteral(value) => write_float(f, *value),
            ExpressionKind::Parenthesized(inner) => write!(f, "({inner})"),
        }
    }
}

/// Floats always carry a fractional part so they lex back as floats
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let text = value.to_string();
    if text.contains('.') {
        f.write_str(&text)
    } else {
        write!(f, "{text}.0")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StatementKind::VariableDeclaration(decl) => write!(f, "{decl}"),
            StatementKind::Expression(expr) => write!(f, "{expr};"),
        }
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "var {}", self.name)?;
        if let Some(declared_type) = &self.declared_type {
            write!(f, ": {declared_type}")?;
        }
        write!(f, " = {};", self.initializer)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for statement in &self.statements {
            writeln!(f, "{INDENT}{statement}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.param_type)
    }
}

impl fmt::Display for FunctionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "func {}(", self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, "): {}", self.return_type)?;

        match &self.body {
            Some(body) => write!(f, " {body}"),
            None => write!(f, ";"),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, func) in self.functions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{func}")?;
        }
        Ok(())
    }
}
