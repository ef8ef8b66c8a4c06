//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::MK_TOKEN;

#[test]
fn test_unexpected_peek_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedPeekToken {
            expected: TokenKind::Ident,
            got: TokenKind::Assign,
        },
        MK_TOKEN!(TokenKind::Assign, "="),
    );

    assert_eq!(
        error.to_string(),
        "expected next token to be IDENT, got ASSIGN instead"
    );
    assert_eq!(error.get_error_name(), "UnexpectedPeekToken");
    assert_eq!(error.get_token().literal, "=");
}

#[test]
fn test_no_prefix_message() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Int,
        },
        MK_TOKEN!(TokenKind::Int, "5"),
    );

    assert_eq!(error.to_string(), "no prefix parse function for INT found");
    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_illegal_token_tip() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Illegal,
        },
        MK_TOKEN!(TokenKind::Illegal, "@"),
    );

    assert_eq!(error.get_tip().to_string(), "Unrecognised character `@`");
}

#[test]
fn test_unexpected_peek_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedPeekToken {
            expected: TokenKind::Assign,
            got: TokenKind::Int,
        },
        MK_TOKEN!(TokenKind::Int, "5"),
    );

    assert_eq!(
        error.get_tip().to_string(),
        "Unexpected token: `5`, expected ASSIGN here"
    );
}
