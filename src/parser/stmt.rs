use crate::{
    ast::{
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement, Statement},
    },
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expression, lookups::Precedence, parser::Parser};

pub fn parse_statement(parser: &mut Parser) -> Option<Statement> {
    match parser.current_token().kind {
        TokenKind::Let => parse_let_statement(parser),
        TokenKind::Return => parse_return_statement(parser),
        _ => parse_expression_statement(parser),
    }
}

pub fn parse_let_statement(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }

    let name = Identifier::new(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    // TODO: parse the bound value once integer and operator prefix functions are registered.
    skip_to_semicolon(parser);

    Some(Statement::Let(LetStatement {
        token,
        name,
        value: None,
    }))
}

pub fn parse_return_statement(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    parser.next_token();
    skip_to_semicolon(parser);

    Some(Statement::Return(ReturnStatement { token, value: None }))
}

pub fn parse_expression_statement(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    let expression = parse_expression(parser, Precedence::Lowest);

    // The semicolon is optional, and still consumed when the expression was a hole.
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    expression.map(|expression| Statement::Expression(ExpressionStatement { token, expression }))
}

/// Leaves the current token on the next `;`, or on `EOF` if there is none.
fn skip_to_semicolon(parser: &mut Parser) {
    while !parser.current_token_is(TokenKind::Semicolon) && !parser.current_token_is(TokenKind::Eof)
    {
        parser.next_token();
    }
}
