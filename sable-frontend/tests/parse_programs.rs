//! End-to-end parsing of complete Sable programs

mod common;

use common::parse_ok;
use indoc::indoc;
use sable_common::{HasSpan, SourceSpan};
use sable_frontend::visit::{
    walk_block, walk_expression, walk_function, walk_parameter, walk_statement, Visitor,
};
use sable_frontend::*;

fn body(program: &Program, index: usize) -> &Block {
    program.functions[index]
        .body
        .as_ref()
        .expect("function should have a body")
}

fn initializer(statement: &Statement) -> &Expression {
    match &statement.kind {
        StatementKind::VariableDeclaration(decl) => &decl.initializer,
        other => panic!("Expected variable declaration, got {:?}", other),
    }
}

#[test]
fn test_pointer_parameter_and_multiplication() {
    let program = parse_ok("func f(x: i32*): i32 { var y = x * 2; }");
    let func = &program.functions[0];

    let param_type = &func.parameters[0].param_type;
    assert_eq!(param_type.base, TypeName::Primitive(PrimitiveType::I32));
    assert_eq!(param_type.pointer_depth, 1);

    match &initializer(&body(&program, 0).statements[0]).kind {
        ExpressionKind::Binary { op, left, right } => {
            assert_eq!(*op, BinaryOp::Mul);
            assert_eq!(left.kind, ExpressionKind::Identifier("x".to_string()));
            assert_eq!(right.kind, ExpressionKind::IntegerLiteral(2));
        }
        other => panic!("Expected multiplication, got {:?}", other),
    }
}

#[test]
fn test_forward_declaration_has_no_body() {
    let program = parse_ok("func f(): i32;");
    assert_eq!(program.functions.len(), 1);
    assert!(program.functions[0].body.is_none());
}

#[test]
fn test_comments_do_not_change_the_tree() {
    let with_comments = parse_ok("func f(): i32 /* c */ { // trailing\n }");
    let without_comments = parse_ok("func f(): i32 { }");
    assert_eq!(with_comments, without_comments);
}

#[test]
fn test_multi_function_program() {
    let source = indoc! {"
        // Vector helpers
        func length(v: Vec3*): f64;

        func scale(v: Vec3*, k: f64): void {
            var factor: f64 = k * 2.5;
            var copy = v;
            factor = factor / 2.0;
        }

        /* entry point */
        func main(): i32 {
            var result: i64 = (1 + 2) * 3 - 4;
            result;
        }
    "};
    let program = parse_ok(source);

    assert_eq!(program.functions.len(), 3);
    assert!(program.function("length").unwrap().is_forward_declaration());

    let scale = program.function("scale").unwrap();
    assert_eq!(scale.parameters.len(), 2);
    assert_eq!(scale.parameters[0].param_type.to_string(), "Vec3*");
    assert_eq!(body(&program, 1).statements.len(), 3);

    let main = program.function("main").unwrap();
    assert_eq!(main.span.start.line, 11);
    assert_eq!(main.span.end.line, 14);
    assert_eq!(main.return_type.base, TypeName::Primitive(PrimitiveType::I32));
}

#[test]
fn test_declared_type_is_kept_as_written() {
    let program = parse_ok("func f(): void { var a: u8 = 1.5; var b: Point** = a; }");
    let statements = &body(&program, 0).statements;

    // Mismatches are for semantic analysis to report
    match &statements[0].kind {
        StatementKind::VariableDeclaration(decl) => {
            let declared = decl.declared_type.as_ref().unwrap();
            assert_eq!(declared.base, TypeName::Primitive(PrimitiveType::U8));
            assert_eq!(decl.initializer.kind, ExpressionKind::FloatLiteral(1.5));
        }
        other => panic!("Expected variable declaration, got {:?}", other),
    }
    match &statements[1].kind {
        StatementKind::VariableDeclaration(decl) => {
            let declared = decl.declared_type.as_ref().unwrap();
            assert_eq!(declared.base, TypeName::Named("Point".to_string()));
            assert_eq!(declared.pointer_depth, 2);
        }
        other => panic!("Expected variable declaration, got {:?}", other),
    }
}

#[test]
fn test_unicode_in_comments_keeps_offsets_in_bytes() {
    let source = "// héllo wörld\nfunc f(): i32;";
    let program = parse_ok(source);
    let func = &program.functions[0];

    assert_eq!(func.span.slice(source), "func f(): i32;");
    assert_eq!(func.span.start.line, 2);
    assert_eq!(func.span.start.column, 1);
}

/// Checks every child span lies inside its parent's span, and that siblings
/// appear in source order without overlapping
struct SpanNesting {
    /// Open parents with the end offset of their last visited child
    levels: Vec<(SourceSpan, usize)>,
    checked: usize,
}

impl SpanNesting {
    fn new(root: SourceSpan) -> Self {
        Self {
            levels: vec![(root, root.start.offset)],
            checked: 0,
        }
    }

    fn check(&mut self, span: SourceSpan) {
        let (parent, previous_end) = self.levels.last_mut().expect("root level");
        assert!(
            parent.contains(&span),
            "span {} escapes its parent {}",
            span,
            parent
        );
        assert!(
            *previous_end <= span.start.offset,
            "span {} overlaps the sibling ending at byte {}",
            span,
            previous_end
        );
        *previous_end = span.end.offset;
        self.checked += 1;
    }

    fn enter(&mut self, span: SourceSpan) {
        self.check(span);
        self.levels.push((span, span.start.offset));
    }

    fn leave(&mut self) {
        self.levels.pop();
    }
}

impl<'ast> Visitor<'ast> for SpanNesting {
    fn visit_function(&mut self, func: &'ast FunctionDeclaration) {
        self.enter(func.span());
        walk_function(self, func);
        self.leave();
    }

    fn visit_parameter(&mut self, param: &'ast Parameter) {
        self.enter(param.span());
        walk_parameter(self, param);
        self.leave();
    }

    fn visit_block(&mut self, block: &'ast Block) {
        self.enter(block.span());
        walk_block(self, block);
        self.leave();
    }

    fn visit_statement(&mut self, statement: &'ast Statement) {
        self.enter(statement.span());
        walk_statement(self, statement);
        self.leave();
    }

    fn visit_expression(&mut self, expr: &'ast Expression) {
        self.enter(expr.span());
        walk_expression(self, expr);
        self.leave();
    }

    fn visit_type(&mut self, ty: &'ast Type) {
        self.check(ty.span());
    }

    fn visit_identifier(&mut self, ident: &'ast Identifier) {
        self.check(ident.span());
    }
}

#[test]
fn test_spans_nest() {
    let source = indoc! {"
        func f(a: i32*, b: Node**): f32 {
            var x: i32 = (a + 1) * b - 3;
            x = a = 2.5;
        }
        func g(): void;
    "};
    let program = parse_ok(source);

    let mut nesting = SpanNesting::new(program.span());
    nesting.visit_program(&program);
    assert!(nesting.checked >= 30);

    let stmt = &body(&program, 0).statements[0];
    assert_eq!(stmt.span.slice(source), "var x: i32 = (a + 1) * b - 3;");
    assert_eq!(initializer(stmt).span.slice(source), "(a + 1) * b - 3");
}

#[test]
#[should_panic(expected = "overlaps the sibling")]
fn test_span_checker_rejects_overlapping_siblings() {
    let source = "func f(): i32 { a; b; }";
    let mut program = parse_ok(source);

    // Move the second statement's start back over the first one
    let body = program.functions[0].body.as_mut().unwrap();
    let first = body.statements[0].span;
    body.statements[1].span.start = first.start;

    let mut nesting = SpanNesting::new(program.span());
    nesting.visit_program(&program);
}

#[test]
fn test_sibling_spans_are_ordered() {
    let source = "func f(a: i32, b: i8*): void { x = a * b - 1; var y = (x); } func g(): u8;";
    let program = parse_ok(source);

    let mut nesting = SpanNesting::new(program.span());
    nesting.visit_program(&program);

    let params = &program.functions[0].parameters;
    assert!(params[0].span.end.offset <= params[1].span.start.offset);

    let statements = &body(&program, 0).statements;
    assert!(statements[0].span.end.offset <= statements[1].span.start.offset);
    assert!(program.functions[0].span.end.offset <= program.functions[1].span.start.offset);

    match &statements[0].kind {
        StatementKind::Expression(Expression {
            kind: ExpressionKind::Assignment { value, .. },
            ..
        }) => match &value.kind {
            ExpressionKind::Binary { left, right, .. } => {
                assert!(left.span.end.offset <= right.span.start.offset);
                assert_eq!(left.span.slice(source), "a * b");
            }
            other => panic!("Expected binary expression, got {:?}", other),
        },
        other => panic!("Expected assignment statement, got {:?}", other),
    }
}
