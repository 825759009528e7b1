use std::any::Any;

use crate::{lexer::tokens::Token, Span};

use super::ast::{Expr, ExprType, ExprWrapper};

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug)]
pub struct NumberExpr {
    pub value: f64,
    pub span: Span,
}

impl Expr for NumberExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Number
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// String Expression
/// Represents a string literal in the AST.
#[derive(Debug)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for StringExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::String
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Bool Expression
/// Represents a `true` or `false` literal in the AST.
#[derive(Debug)]
pub struct BoolExpr {
    pub value: bool,
    pub span: Span,
}

impl Expr for BoolExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Bool
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Symbol Expression
/// Represents an identifier in the AST. This includes function and struct names.
#[derive(Debug)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for SymbolExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

// COMPLEX

/// Prefix Expression
/// Represents a unary prefix operation on an expression in the AST.
#[derive(Debug)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for PrefixExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for BinaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Group Expression
/// Represents a parenthesized expression in the AST. The grouping only
/// affects parsing; the inner expression's type passes straight through.
#[derive(Debug)]
pub struct GroupExpr {
    pub inner: ExprWrapper,
    pub span: Span,
}

impl Expr for GroupExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Group
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Assignment Expression
/// Represents an assignment operation (`=`, `+=`, `-=`) in the AST.
#[derive(Debug)]
pub struct AssignmentExpr {
    pub assignee: ExprWrapper,
    pub operator: Token,
    pub value: ExprWrapper,
    pub span: Span,
}

impl Expr for AssignmentExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Assignment
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Call Expression
/// Represents a function call in the AST.
#[derive(Debug)]
pub struct CallExpr {
    pub callee: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
    pub span: Span,
}

impl Expr for CallExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Struct Literal Expression
/// Represents the construction of a struct value in the AST. The member
/// assignments keep their source order.
#[derive(Debug)]
pub struct StructLiteralExpr {
    pub struct_expr: ExprWrapper,
    pub members: Vec<(String, ExprWrapper)>,
    pub span: Span,
}

impl Expr for StructLiteralExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::StructLiteral
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Member Expression
/// Represents access to a named member of a struct value (`a.b`).
#[derive(Debug)]
pub struct MemberExpr {
    pub base: ExprWrapper,
    pub member: String,
    pub span: Span,
}

impl Expr for MemberExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Member
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Index Expression
/// Represents indexing into an array value (`a[i]`).
#[derive(Debug)]
pub struct IndexExpr {
    pub base: ExprWrapper,
    pub index: ExprWrapper,
    pub span: Span,
}

impl Expr for IndexExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Index
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}
