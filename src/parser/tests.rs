//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs
//! including:
//! - Variable declarations
//! - Struct and function declarations
//! - Expressions, precedence and associativity
//! - Control flow statements
//! - Error cases

use std::rc::Rc;

use crate::ast::ast::{Expr, ExprWrapper, Stmt, Type, TypeType};
use crate::ast::expressions::{
    AssignmentExpr, BinaryExpr, MemberExpr, NumberExpr, StructLiteralExpr, SymbolExpr,
};
use crate::ast::statements::{BlockStmt, ExpressionStmt, ForStmt, FuncDeclStmt, VarDeclStmt};
use crate::errors::errors::Error;
use crate::lexer::lexer::tokenize;
use crate::lexer::tokens::TokenKind;

use super::parser::parse;

fn parse_source(source: &str) -> Result<BlockStmt, Error> {
    let tokens = tokenize(source.to_string(), Some("test.rill".to_string())).unwrap();
    parse(tokens, Rc::new("test.rill".to_string()))
}

fn first_expr(block: &BlockStmt) -> &ExprWrapper {
    let stmt = block.body.first().expect("program has no statements");
    &stmt
        .as_any()
        .downcast_ref::<ExpressionStmt>()
        .expect("first statement is not an expression statement")
        .expression
}

#[test]
fn test_parse_variable_declaration() {
    let program = parse_source("let x: i32 = 42;").unwrap();

    let var_decl = program.body[0]
        .as_any()
        .downcast_ref::<VarDeclStmt>()
        .unwrap();
    assert_eq!(var_decl.identifier, "x");
    assert_eq!(
        var_decl.declared_type.get_type_type(),
        TypeType::Symbol("i32".to_string())
    );
    let init = var_decl.assigned_value.as_ref().unwrap();
    let number = init.as_any().downcast_ref::<NumberExpr>().unwrap();
    assert_eq!(number.value, 42.0);
}

#[test]
fn test_parse_variable_declaration_without_initializer() {
    let program = parse_source("let x: i32;").unwrap();

    let var_decl = program.body[0]
        .as_any()
        .downcast_ref::<VarDeclStmt>()
        .unwrap();
    assert!(var_decl.assigned_value.is_none());
}

#[test]
fn test_parse_array_type_declaration() {
    let program = parse_source("let xs: i32[][];").unwrap();

    let var_decl = program.body[0]
        .as_any()
        .downcast_ref::<VarDeclStmt>()
        .unwrap();
    assert_eq!(
        var_decl.declared_type.get_type_type(),
        TypeType::Array(Box::new(TypeType::Array(Box::new(TypeType::Symbol(
            "i32".to_string()
        )))))
    );
}

#[test]
fn test_subtraction_is_left_associative() {
    let program = parse_source("2 - 3 - 4;").unwrap();

    // (2 - 3) - 4
    let outer = first_expr(&program)
        .as_any()
        .downcast_ref::<BinaryExpr>()
        .unwrap();
    assert_eq!(outer.operator.kind, TokenKind::Dash);
    assert_eq!(
        outer.right.as_any().downcast_ref::<NumberExpr>().unwrap().value,
        4.0
    );

    let inner = outer.left.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(
        inner.left.as_any().downcast_ref::<NumberExpr>().unwrap().value,
        2.0
    );
    assert_eq!(
        inner.right.as_any().downcast_ref::<NumberExpr>().unwrap().value,
        3.0
    );
}

#[test]
fn test_assignment_is_right_associative() {
    let program = parse_source("a = b = 1;").unwrap();

    // a = (b = 1)
    let outer = first_expr(&program)
        .as_any()
        .downcast_ref::<AssignmentExpr>()
        .unwrap();
    assert_eq!(
        outer
            .assignee
            .as_any()
            .downcast_ref::<SymbolExpr>()
            .unwrap()
            .value,
        "a"
    );

    let inner = outer
        .value
        .as_any()
        .downcast_ref::<AssignmentExpr>()
        .unwrap();
    assert_eq!(
        inner
            .assignee
            .as_any()
            .downcast_ref::<SymbolExpr>()
            .unwrap()
            .value,
        "b"
    );
    assert_eq!(
        inner.value.as_any().downcast_ref::<NumberExpr>().unwrap().value,
        1.0
    );
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let program = parse_source("5 + 3 * 2;").unwrap();

    // 5 + (3 * 2)
    let outer = first_expr(&program)
        .as_any()
        .downcast_ref::<BinaryExpr>()
        .unwrap();
    assert_eq!(outer.operator.kind, TokenKind::Plus);

    let inner = outer.right.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(inner.operator.kind, TokenKind::Star);
}

#[test]
fn test_grouping_overrides_precedence() {
    let program = parse_source("(5 + 3) * 2;").unwrap();

    let outer = first_expr(&program)
        .as_any()
        .downcast_ref::<BinaryExpr>()
        .unwrap();
    assert_eq!(outer.operator.kind, TokenKind::Star);
}

#[test]
fn test_member_access_chains_left() {
    let program = parse_source("a.b.c;").unwrap();

    // (a.b).c
    let outer = first_expr(&program)
        .as_any()
        .downcast_ref::<MemberExpr>()
        .unwrap();
    assert_eq!(outer.member, "c");

    let inner = outer.base.as_any().downcast_ref::<MemberExpr>().unwrap();
    assert_eq!(inner.member, "b");
    assert_eq!(
        inner.base.as_any().downcast_ref::<SymbolExpr>().unwrap().value,
        "a"
    );
}

#[test]
fn test_parse_logical_expression() {
    let program = parse_source("a > 0 && b < 10;").unwrap();

    let outer = first_expr(&program)
        .as_any()
        .downcast_ref::<BinaryExpr>()
        .unwrap();
    assert_eq!(outer.operator.kind, TokenKind::And);
}

#[test]
fn test_parse_unary_expression() {
    let result = parse_source("let neg: i32 = -x;");
    assert!(result.is_ok());
}

#[test]
fn test_parse_function_declaration() {
    let program = parse_source("func add(a: i32, b: i32): i32 { a + b; }").unwrap();

    let func_decl = program.body[0]
        .as_any()
        .downcast_ref::<FuncDeclStmt>()
        .unwrap();
    assert_eq!(func_decl.identifier, "add");
    assert_eq!(func_decl.parameters.len(), 2);
    assert_eq!(func_decl.parameters[0].0, "a");
    assert!(func_decl.return_type.is_some());
    assert_eq!(func_decl.body.body.len(), 1);
}

#[test]
fn test_parse_function_declaration_without_return_type() {
    let program = parse_source("func noop() { }").unwrap();

    let func_decl = program.body[0]
        .as_any()
        .downcast_ref::<FuncDeclStmt>()
        .unwrap();
    assert!(func_decl.return_type.is_none());
    assert!(func_decl.parameters.is_empty());
}

#[test]
fn test_parse_struct_definition() {
    let result = parse_source("struct Point { x: i32, y: i32 }");
    assert!(result.is_ok());
}

#[test]
fn test_parse_struct_definition_without_commas() {
    // Member separators are optional in declarations.
    let result = parse_source("struct Point { x: i32 y: i32 }");
    assert!(result.is_ok());
}

#[test]
fn test_parse_struct_literal() {
    let program = parse_source("Point { x: 10, y: 20, };").unwrap();

    let literal = first_expr(&program)
        .as_any()
        .downcast_ref::<StructLiteralExpr>()
        .unwrap();
    assert_eq!(
        literal
            .struct_expr
            .as_any()
            .downcast_ref::<SymbolExpr>()
            .unwrap()
            .value,
        "Point"
    );
    assert_eq!(literal.members.len(), 2);
    assert_eq!(literal.members[0].0, "x");
    assert_eq!(literal.members[1].0, "y");
}

#[test]
fn test_parse_struct_literal_requires_member_comma() {
    // Literal member assignments each end with a comma, unlike
    // declarations.
    let result = parse_source("Point { x: 10 };");
    assert!(result.is_err());
}

#[test]
fn test_parse_function_call() {
    let result = parse_source("print(\"Hello, World!\");");
    assert!(result.is_ok());
}

#[test]
fn test_parse_index_expression() {
    let result = parse_source("xs[i + 1];");
    assert!(result.is_ok());
}

#[test]
fn test_parse_if_statement() {
    let result = parse_source("if (x > 0) { x; }");
    assert!(result.is_ok());
}

#[test]
fn test_parse_if_else_statement() {
    let result = parse_source("if (x > 0) { x; } else { y; }");
    assert!(result.is_ok());
}

#[test]
fn test_parse_if_condition_requires_parentheses() {
    let result = parse_source("if x > 0 { x; }");
    assert!(result.is_err());
}

#[test]
fn test_parse_for_statement() {
    let program = parse_source("for (let i: i32 = 0; i < 10; i = i + 1) { i; }").unwrap();

    let for_stmt = program.body[0].as_any().downcast_ref::<ForStmt>().unwrap();
    assert!(for_stmt
        .init
        .as_any()
        .downcast_ref::<VarDeclStmt>()
        .is_some());
    assert_eq!(for_stmt.body.body.len(), 1);
}

#[test]
fn test_parse_for_iteration_has_no_terminator() {
    // `for (init; cond; iter;)` is malformed: the iteration expression
    // runs straight into the closing paren.
    let result = parse_source("for (let i: i32 = 0; i < 10; i = i + 1;) { }");
    assert!(result.is_err());
}

#[test]
fn test_parse_compound_assignment() {
    let result = parse_source("x += 5;");
    assert!(result.is_ok());
}

#[test]
fn test_parse_multiple_statements() {
    let program = parse_source("let x: i32 = 10; let y: i32 = 20; x + y;").unwrap();
    assert_eq!(program.body.len(), 3);
}

#[test]
fn test_parse_nested_blocks() {
    let program = parse_source("{ let x: i32 = 10; { let y: i32 = 20; } }").unwrap();
    assert_eq!(program.body.len(), 1);
}

#[test]
fn test_parse_bool_literals() {
    let result = parse_source("let flag: bool = true; let other: bool = false;");
    assert!(result.is_ok());
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("").unwrap();
    assert!(program.body.is_empty());
}

#[test]
fn test_parse_syntax_error_missing_semicolon() {
    let result = parse_source("let x: i32 = 42");
    assert!(result.is_err());
}

#[test]
fn test_parse_syntax_error_unexpected_token() {
    let result = parse_source("let : i32 = 42;");
    assert!(result.is_err());
}

#[test]
fn test_parse_syntax_error_missing_type_annotation() {
    let result = parse_source("let x = 42;");
    assert!(result.is_err());
}
