//! Syntactic type annotations.
//!
//! These are the types as written in source (`i32`, `P`, `i32[][]`).
//! They carry no meaning on their own; the type checker resolves them
//! against the primitive set and the structs in scope.

use super::ast::{Type, TypeType, TypeWrapper};

/// A type named by a single identifier, either a primitive or a struct.
/// Resolution happens during type checking.
#[derive(Debug, Clone)]
pub struct SymbolType {
    pub name: String,
}

impl Type for SymbolType {
    fn get_type_type(&self) -> TypeType {
        TypeType::Symbol(self.name.clone())
    }
}

/// An array type annotation (`T[]`). Nests to arbitrary depth.
#[derive(Debug)]
pub struct ArrayType {
    pub underlying: TypeWrapper,
}

impl Type for ArrayType {
    fn get_type_type(&self) -> TypeType {
        TypeType::Array(Box::new(self.underlying.get_type_type()))
    }
}
