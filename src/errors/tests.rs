//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.imp".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_found(), None);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        }
    );
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.imp".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            found: TokenKind::Comma,
            expected: TokenKind::VarName,
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_line(), 42);
    assert_eq!(error.get_found(), Some(TokenKind::Comma));
}

#[test]
fn test_unexpected_token_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            found: TokenKind::EndProg,
            expected: TokenKind::RParen,
        },
        Position(7, Rc::new("test.imp".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.to_string(), "Error at line 7: ENDPROG expected RPAREN");
}

#[test]
fn test_unexpected_token_detailed_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            found: TokenKind::Then,
            message: "expected a comparison operator".to_string(),
        },
        Position(3, Rc::new("test.imp".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
    assert_eq!(
        error.to_string(),
        "Error at line 3: THEN expected a comparison operator"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.imp".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            found: TokenKind::Do,
            expected: TokenKind::Then,
        },
        Position(0, Rc::new("test.imp".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "Unexpected token: `DO`, expected `THEN`")
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
