use crate::ast::expressions::{Expression, Identifier};

use super::{lookups::Precedence, parser::Parser};

/// Parses one expression starting at the current token.
///
/// Infix functions keep folding onto the left operand for as long as the
/// next token binds tighter than `precedence`. Returns `None` when the
/// current token cannot start an expression, after recording why.
pub fn parse_expression(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    let token_kind = parser.current_token().kind;
    let Some(prefix) = parser.get_prefix_lookup().get(&token_kind).copied() else {
        parser.no_prefix_parse_fn_error(token_kind);
        return None;
    };

    let mut left = prefix(parser)?;

    while precedence < parser.peek_precedence() {
        let token_kind = parser.peek_token().kind;
        let Some(infix) = parser.get_infix_lookup().get(&token_kind).copied() else {
            return Some(left);
        };

        parser.next_token();
        left = infix(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expression> {
    Some(Identifier::new(parser.current_token().clone()).into())
}
