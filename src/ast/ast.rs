use std::{any::Any, fmt::Debug};

/// Statement Types
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum StmtType {
    ExpressionStmt,
    BlockStmt,
    VarDeclStmt,
    StructDeclStmt,
    FuncDeclStmt,
    IfStmt,
    ForStmt,
}

/// Statement Trait
///
/// Defines the behavior of all statement types in the AST.
pub trait Stmt: Debug {
    /// Returns the type of the statement.
    fn get_stmt_type(&self) -> StmtType;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Returns the span of the statement.
    fn get_span(&self) -> &crate::Span;
}

/// Statement Wrapper
///
/// A wrapper that allows for any statement kind to be stored with helper methods
#[derive(Debug)]
pub struct StmtWrapper(Box<dyn Stmt>);

impl StmtWrapper {
    pub fn new<T: Stmt + 'static>(stmt: T) -> Self {
        StmtWrapper(Box::new(stmt))
    }
}

impl Stmt for StmtWrapper {
    fn get_stmt_type(&self) -> StmtType {
        self.0.get_stmt_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn get_span(&self) -> &crate::Span {
        self.0.get_span()
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    String,
    Bool,
    Symbol,
    Prefix,
    Binary,
    Group,
    Assignment,
    Call,
    StructLiteral,
    Member,
    Index,
}

pub trait Expr: Debug {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Returns the span of the expression.
    fn get_span(&self) -> &crate::Span;
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }
}

impl Expr for ExprWrapper {
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn get_span(&self) -> &crate::Span {
        self.0.get_span()
    }
}

/// Type Types
///
/// Describes the shape of a syntactic type annotation. The payload makes
/// the shape self-contained, so the type checker can resolve annotations
/// without downcasting.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeType {
    Symbol(String),
    Array(Box<TypeType>),
}

/// Type Trait
///
/// Defines the behavior of all syntactic type annotations in the AST.
pub trait Type: Debug {
    /// Returns the type type of the type.
    fn get_type_type(&self) -> TypeType;
}

/// Type Wrapper
///
/// A wrapper that allows for any type kind to be stored with helper methods
#[derive(Debug)]
pub struct TypeWrapper(Box<dyn Type>);

impl TypeWrapper {
    pub fn new<T: Type + 'static>(type_: T) -> Self {
        TypeWrapper(Box::new(type_))
    }
}

impl Type for TypeWrapper {
    fn get_type_type(&self) -> TypeType {
        self.0.get_type_type()
    }
}
