//! Semantic types.
//!
//! These are the types the checker reasons about, distinct from the
//! syntactic annotations in the AST. Primitives, arrays and function
//! types compare structurally; struct types compare nominally, by name
//! alone. The `Display` forms (`i32`, `P`, `i32[]`, `func(i32,i32):i32`)
//! are what the diagnostics print.

use std::fmt::Display;

/// The closed set of primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Void,
    Bool,
    String,
    I8,
    I32,
    I64,
    F32,
    F64,
}

impl Primitive {
    /// Maps a source-level type name onto a primitive, if it is one.
    pub fn from_name(name: &str) -> Option<Primitive> {
        match name {
            "void" => Some(Primitive::Void),
            "bool" => Some(Primitive::Bool),
            "string" => Some(Primitive::String),
            "i8" => Some(Primitive::I8),
            "i32" => Some(Primitive::I32),
            "i64" => Some(Primitive::I64),
            "f32" => Some(Primitive::F32),
            "f64" => Some(Primitive::F64),
            _ => None,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Primitive::I8 | Primitive::I32 | Primitive::I64 | Primitive::F32 | Primitive::F64
        )
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Primitive::Void => "void",
            Primitive::Bool => "bool",
            Primitive::String => "string",
            Primitive::I8 => "i8",
            Primitive::I32 => "i32",
            Primitive::I64 => "i64",
            Primitive::F32 => "f32",
            Primitive::F64 => "f64",
        };
        write!(f, "{}", name)
    }
}

/// A nominal struct type with its ordered member list.
#[derive(Debug, Clone)]
pub struct StructType {
    pub name: String,
    pub members: Vec<(String, Type)>,
}

impl StructType {
    pub fn member_type(&self, member: &str) -> Option<&Type> {
        self.members
            .iter()
            .find(|(name, _)| name == member)
            .map(|(_, ty)| ty)
    }
}

/// A function type: parameter types and a return type.
#[derive(Debug, Clone)]
pub struct FuncType {
    pub param_types: Vec<Type>,
    pub return_type: Box<Type>,
}

#[derive(Debug, Clone)]
pub enum Type {
    Primitive(Primitive),
    Array(Box<Type>),
    Func(FuncType),
    Struct(StructType),
}

impl Type {
    /// Type equality. Structural for primitives, arrays and function
    /// types; nominal for structs.
    pub fn equals(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Primitive(a), Type::Primitive(b)) => a == b,
            (Type::Array(a), Type::Array(b)) => a.equals(b),
            (Type::Func(a), Type::Func(b)) => {
                a.param_types.len() == b.param_types.len()
                    && a.return_type.equals(&b.return_type)
                    && a.param_types
                        .iter()
                        .zip(b.param_types.iter())
                        .all(|(x, y)| x.equals(y))
            }
            (Type::Struct(a), Type::Struct(b)) => a.name == b.name,
            _ => false,
        }
    }

    pub fn is_primitive(&self, primitive: Primitive) -> bool {
        matches!(self, Type::Primitive(p) if *p == primitive)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Primitive(p) if p.is_numeric())
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Primitive(primitive) => write!(f, "{}", primitive),
            Type::Array(element) => write!(f, "{}[]", element),
            Type::Func(func) => {
                let params = func
                    .param_types
                    .iter()
                    .map(|param| param.to_string())
                    .collect::<Vec<String>>()
                    .join(",");
                write!(f, "func({}):{}", params, func.return_type)
            }
            Type::Struct(struct_type) => write!(f, "{}", struct_type.name),
        }
    }
}
