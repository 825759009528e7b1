//! Unit tests for error handling.
//!
//! This module contains tests for the fatal error types and the
//! rendering of type checking diagnostics.

use crate::errors::errors::{Diagnostic, Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.rill".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.rill".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        Position(0, Rc::new("test.rill".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_expected_token_error_names_both_kinds() {
    let error = Error::new(
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Semicolon,
            found: TokenKind::CloseParen,
        },
        Position(0, Rc::new("test.rill".to_string())),
    );

    assert_eq!(error.get_error_name(), "ExpectedToken");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert!(tip.contains("Semicolon"));
            assert!(tip.contains("CloseParen"));
        }
        ErrorTip::None => panic!("expected a suggestion tip"),
    }
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999999999".to_string(),
        },
        Position(0, Rc::new("test.rill".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_unrecognised_token_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.rill".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_diagnostic_rendering() {
    let diagnostic = Diagnostic::VarDeclTypeMismatch {
        name: "x".to_string(),
        declared: "string".to_string(),
        found: "i32".to_string(),
    };
    assert_eq!(
        diagnostic.to_string(),
        "type mismatch: variable x declared as string but initialized with i32"
    );

    let diagnostic = Diagnostic::UndefinedVariable {
        name: "foo".to_string(),
    };
    assert_eq!(diagnostic.to_string(), "undefined variable: foo");

    let diagnostic = Diagnostic::WrongArgumentCount {
        expected: 2,
        found: 3,
    };
    assert_eq!(
        diagnostic.to_string(),
        "wrong number of arguments, expected 2, found 3"
    );
}

#[test]
fn test_diagnostic_equality() {
    let a = Diagnostic::UndefinedType {
        name: "P".to_string(),
    };
    let b = Diagnostic::UndefinedType {
        name: "P".to_string(),
    };
    assert_eq!(a, b);
}
