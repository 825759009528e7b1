/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST definitions and traits
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
/// - types: Definitions for syntactic type annotations
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
