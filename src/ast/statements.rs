use std::{any::Any, slice::Iter};

use crate::Span;

use super::ast::{ExprWrapper, Stmt, StmtType, StmtWrapper, TypeWrapper};

#[derive(Debug)]
pub struct BlockStmt {
    pub body: Vec<StmtWrapper>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.body.iter()
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug)]
pub struct ExpressionStmt {
    pub expression: ExprWrapper,
    pub span: Span,
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// A `let` declaration. The type annotation is mandatory, the initializer
/// is not.
#[derive(Debug)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub declared_type: TypeWrapper,
    pub assigned_value: Option<ExprWrapper>,
    pub span: Span,
}

impl Stmt for VarDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::VarDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// A `struct` declaration with its ordered member list.
#[derive(Debug)]
pub struct StructDeclStmt {
    pub name: String,
    pub members: Vec<(String, TypeWrapper)>,
    pub span: Span,
}

impl Stmt for StructDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::StructDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// A `func` declaration. A missing return type annotation means `void`.
#[derive(Debug)]
pub struct FuncDeclStmt {
    pub identifier: String,
    pub parameters: Vec<(String, TypeWrapper)>,
    pub return_type: Option<TypeWrapper>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Stmt for FuncDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::FuncDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug)]
pub struct IfStmt {
    pub condition: ExprWrapper,
    pub then_body: StmtWrapper,
    pub else_body: Option<StmtWrapper>,
    pub span: Span,
}

impl Stmt for IfStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::IfStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// A `for` loop header holds a full init statement, a terminated
/// condition expression and an unterminated iteration expression.
#[derive(Debug)]
pub struct ForStmt {
    pub init: StmtWrapper,
    pub condition: ExprWrapper,
    pub iteration: ExprWrapper,
    pub body: BlockStmt,
    pub span: Span,
}

impl Stmt for ForStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ForStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
