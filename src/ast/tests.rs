//! Unit tests for the syntax tree.
//!
//! Rendering is compared as text, so these build nodes by hand.

use crate::{lexer::tokens::TokenKind, MK_TOKEN};

use super::{
    ast::{Node, Program},
    expressions::{Expression, Identifier, IntegerLiteral},
    statements::{ExpressionStatement, LetStatement, ReturnStatement, Statement},
};

fn identifier(name: &str) -> Identifier {
    Identifier::new(MK_TOKEN!(TokenKind::Ident, name))
}

fn integer(value: i64) -> IntegerLiteral {
    IntegerLiteral {
        token: MK_TOKEN!(TokenKind::Int, value.to_string()),
        value,
    }
}

#[test]
fn test_render_let_statement() {
    let program = Program {
        statements: vec![Statement::Let(LetStatement {
            token: MK_TOKEN!(TokenKind::Let, "let"),
            name: identifier("myVar"),
            value: Some(identifier("anotherVar").into()),
        })],
    };

    assert_eq!(program.render(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_render_let_statement_with_integer() {
    let statement = LetStatement {
        token: MK_TOKEN!(TokenKind::Let, "let"),
        name: identifier("x"),
        value: Some(integer(5).into()),
    };

    assert_eq!(statement.render(), "let x = 5;");
}

#[test]
fn test_render_let_statement_without_value() {
    let statement = LetStatement {
        token: MK_TOKEN!(TokenKind::Let, "let"),
        name: identifier("x"),
        value: None,
    };

    assert_eq!(statement.render(), "let x = ;");
}

#[test]
fn test_render_return_statement() {
    let with_value = ReturnStatement {
        token: MK_TOKEN!(TokenKind::Return, "return"),
        value: Some(integer(10).into()),
    };
    let without_value = ReturnStatement {
        token: MK_TOKEN!(TokenKind::Return, "return"),
        value: None,
    };

    assert_eq!(with_value.render(), "return 10;");
    assert_eq!(without_value.render(), "return ;");
    assert_eq!(with_value.token_literal(), "return");
}

#[test]
fn test_render_expression_statement() {
    let statement = Statement::Expression(ExpressionStatement {
        token: MK_TOKEN!(TokenKind::Ident, "foobar"),
        expression: identifier("foobar").into(),
    });

    assert_eq!(statement.render(), "foobar");
    assert_eq!(statement.token_literal(), "foobar");
}

#[test]
fn test_program_renders_statements_in_order() {
    let program = Program {
        statements: vec![
            Statement::Let(LetStatement {
                token: MK_TOKEN!(TokenKind::Let, "let"),
                name: identifier("a"),
                value: Some(integer(1).into()),
            }),
            Statement::Return(ReturnStatement {
                token: MK_TOKEN!(TokenKind::Return, "return"),
                value: Some(identifier("a").into()),
            }),
        ],
    };

    assert_eq!(program.len(), 2);
    assert_eq!(program.render(), "let a = 1;return a;");
}

#[test]
fn test_empty_program() {
    let program = Program::new();

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.render(), "");
}

#[test]
fn test_expression_token_literal() {
    let expression: Expression = integer(42).into();

    assert_eq!(expression.token_literal(), "42");
    assert_eq!(expression.render(), "42");
}
