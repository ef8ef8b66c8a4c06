use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::expressions::Expression, lexer::tokens::TokenKind};

use super::{expr::parse_identifier, parser::Parser};

/// Binding power of an operator, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -x or !x
    Call,        // f(x)
}

/// Builds an expression from the token at the start of an expression.
pub type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
/// Combines an already parsed left operand with the current operator token.
pub type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

lazy_static! {
    pub static ref PRECEDENCES: HashMap<TokenKind, Precedence> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Eq, Precedence::Equals);
        map.insert(TokenKind::NotEq, Precedence::Equals);
        map.insert(TokenKind::Lt, Precedence::LessGreater);
        map.insert(TokenKind::Gt, Precedence::LessGreater);
        map.insert(TokenKind::Plus, Precedence::Sum);
        map.insert(TokenKind::Minus, Precedence::Sum);
        map.insert(TokenKind::Slash, Precedence::Product);
        map.insert(TokenKind::Asterisk, Precedence::Product);
        map.insert(TokenKind::LParen, Precedence::Call);
        map
    };
}

/// Tokens without an entry bind at `Lowest`.
pub fn precedence_of(kind: TokenKind) -> Precedence {
    PRECEDENCES.get(&kind).copied().unwrap_or(Precedence::Lowest)
}

pub fn create_token_lookups(parser: &mut Parser) {
    // Literals and symbols
    parser.register_prefix(TokenKind::Ident, parse_identifier);
}

// Lookup tables inside parser struct, so grammar can grow without touching dispatch
pub type PrefixLookup = HashMap<TokenKind, PrefixParseFn>;
pub type InfixLookup = HashMap<TokenKind, InfixParseFn>;
