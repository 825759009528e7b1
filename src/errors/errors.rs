use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A fatal front end error.
///
/// Produced by the lexer and the parser. The first one aborts the whole
/// phase; no partial token stream or AST is handed downstream.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::ExpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` here, found `{}`",
                expected, found
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected {expected}, found {found}")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
}

/// A non-fatal semantic error.
///
/// The type checker appends these to its ordered diagnostics list and
/// keeps traversing; an empty list means the program is well typed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Diagnostic {
    #[error("undefined type: {name}")]
    UndefinedType { name: String },
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("type mismatch: variable {name} declared as {declared} but initialized with {found}")]
    VarDeclTypeMismatch {
        name: String,
        declared: String,
        found: String,
    },
    #[error("redeclared struct {name} in the same scope")]
    RedeclaredStruct { name: String },
    #[error("duplicate member {member} in struct {name}")]
    DuplicateStructMember { member: String, name: String },
    #[error("redeclared function {name} in the same scope")]
    RedeclaredFunction { name: String },
    #[error("if statement condition does not evaluate to a boolean type")]
    IfCondNotBoolean,
    #[error("for statement condition does not evaluate to a boolean type")]
    ForCondNotBoolean,
    #[error("invalid operands for {operator}: {lhs} and {rhs}")]
    InvalidBinaryOperands {
        operator: String,
        lhs: String,
        rhs: String,
    },
    #[error("cannot compare {lhs} and {rhs}")]
    IncomparableTypes { lhs: String, rhs: String },
    #[error("unsupported binary operator: {operator}")]
    UnsupportedBinaryOperator { operator: String },
    #[error("invalid operand for {operator}: {operand}")]
    InvalidUnaryOperand { operator: String, operand: String },
    #[error("unsupported unary operator: {operator}")]
    UnsupportedUnaryOperator { operator: String },
    #[error("cannot call non-function value of type {found}")]
    NotAFunction { found: String },
    #[error("wrong number of arguments, expected {expected}, found {found}")]
    WrongArgumentCount { expected: usize, found: usize },
    #[error("argument {index} type mismatch: expected {expected}, found {found}")]
    ArgumentTypeMismatch {
        index: usize,
        expected: String,
        found: String,
    },
    #[error("expression of type {found} cannot be used as a struct")]
    NotAStruct { found: String },
    #[error("{member} is not a member of struct {name}")]
    NotAStructMember { member: String, name: String },
    #[error("struct member {member} assigned multiple times")]
    StructMemberReassigned { member: String },
    #[error("cannot assign {found} to {expected} of struct member {member}")]
    StructMemberTypeMismatch {
        member: String,
        expected: String,
        found: String,
    },
    #[error("struct member {member} is not assigned a value")]
    StructMemberNotAssigned { member: String },
    #[error("cannot index non-array value of type {found}")]
    NotAnArray { found: String },
    #[error("array index must be a numeric type, found {found}")]
    NonNumericIndex { found: String },
    #[error("cannot assign {found} to {expected}")]
    AssignTypeMismatch { expected: String, found: String },
}
