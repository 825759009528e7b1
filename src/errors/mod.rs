//! Error types and error handling for the front end.
//!
//! This module defines the error types used across the phases:
//!
//! - Fatal errors with source position information (lexer, parser)
//! - Non-fatal type checking diagnostics
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
