//! Read-only traversal of the syntax tree
//!
//! Override the `visit_*` methods of interest; the defaults call the
//! matching `walk_*` function, which visits children in source order.

use crate::ast::*;

pub trait Visitor<'ast> {
    #[inline(always)]
    fn visit_program(&mut self, program: &'ast Program) {
        walk_program(self, program);
    }

    #[inline(always)]
    fn visit_function(&mut self, func: &'ast FunctionDeclaration) {
        walk_function(self, func);
    }

    #[inline(always)]
    fn visit_parameter(&mut self, param: &'ast Parameter) {
        walk_parameter(self, param);
    }

    #[inline(always)]
    fn visit_type(&mut self, _ty: &'ast Type) {}

    #[inline(always)]
    fn visit_block(&mut self, block: &'ast Block) {
        walk_block(self, block);
    }

    #[inline(always)]
    fn visit_statement(&mut self, statement: &'ast Statement) {
        walk_statement(self, statement);
    }

    #[inline(always)]
    fn visit_expression(&mut self, expr: &'ast Expression) {
        walk_expression(self, expr);
    }

    #[inline(always)]
    fn visit_identifier(&mut self, _ident: &'ast Identifier) {}
}

pub fn walk_program<'ast, V: Visitor<'ast> + ?Sized>(v: &mut V, program: &'ast Program) {
    for func in &program.functions {
        v.visit_function(func);
    }
}

pub fn walk_function<'ast, V: Visitor<'ast> + ?Sized>(v: &mut V, func: &'ast FunctionDeclaration) {
    v.visit_identifier(&func.name);
    for param in &func.parameters {
        v.visit_parameter(param);
    }
    v.visit_type(&func.return_type);
    if let Some(body) = &func.body {
        v.visit_block(body);
    }
}

pub fn walk_parameter<'ast, V: Visitor<'ast> + ?Sized>(v: &mut V, param: &'ast Parameter) {
    v.visit_identifier(&param.name);
    v.visit_type(&param.param_type);
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(v: &mut V, block: &'ast Block) {
    for statement in &block.statements {
        v.visit_statement(statement);
    }
}

pub fn walk_statement<'ast, V: Visitor<'ast> + ?Sized>(v: &mut V, statement: &'ast Statement) {
    match &statement.kind {
        StatementKind::VariableDeclaration(decl) => {
            v.visit_identifier(&decl.name);
            if let Some(declared_type) = &decl.declared_type {
                v.visit_type(declared_type);
            }
            v.visit_expression(&decl.initializer);
        }
        StatementKind::Expression(expr) => v.visit_expression(expr),
    }
}

pub fn walk_expression<'ast, V: Visitor<'ast> + ?Sized>(v: &mut V, expr: &'ast Expression) {
    match &expr.kind {
        ExpressionKind::Assignment { target, value } => {
            v.visit_identifier(target);
            v.visit_expression(value);
        }
        ExpressionKind::Binary { left, right, .. } => {
            v.visit_expression(left);
            v.visit_expression(right);
        }
        ExpressionKind::Parenthesized(inner) => v.visit_expression(inner),
        ExpressionKind::Identifier(_)
        | ExpressionKind::IntegerLiteral(_)
        | ExpressionKind::FloatLiteral(_) => {}
    }
}
