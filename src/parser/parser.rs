//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens
//! from the lexer one at a time and keeps a two token window (current and
//! peek). Statements are dispatched on the current token; expressions go
//! through the prefix and infix lookup tables.
//!
//! Diagnostics are appended to an error list and parsing carries on with
//! the next token, so one pass can report several problems.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, precedence_of, InfixLookup, InfixParseFn, Precedence, PrefixLookup,
        PrefixParseFn,
    },
    stmt::parse_statement,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source, owned for the lifetime of the parser
    lexer: Lexer,
    /// The token under examination
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Diagnostics in the order they were recorded
    errors: Vec<Error>,
    /// Lookup table for prefix expression functions
    prefix_parse_fns: PrefixLookup,
    /// Lookup table for infix expression functions
    infix_parse_fns: InfixLookup,
}

impl Parser {
    /// Creates a new Parser and primes `current_token` and `peek_token`.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            current_token: MK_TOKEN!(TokenKind::Eof, ""),
            peek_token: MK_TOKEN!(TokenKind::Eof, ""),
            errors: vec![],
            prefix_parse_fns: HashMap::new(),
            infix_parse_fns: HashMap::new(),
        };

        parser.next_token();
        parser.next_token();
        create_token_lookups(&mut parser);

        parser
    }

    /// Parses statements until `EOF`.
    ///
    /// Always returns a program; check [`Parser::errors`] for what went wrong.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_token_is(TokenKind::Eof) {
            if let Some(statement) = parse_statement(self) {
                program.statements.push(statement);
            }
            self.next_token();
        }

        debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        program
    }

    /// Shifts the window one token forward.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = std::mem::replace(&mut self.peek_token, next);
    }

    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advances only if the peek token is of the expected kind. Otherwise
    /// records an error and leaves the window where it is.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.kind)
    }

    pub fn current_precedence(&self) -> Precedence {
        precedence_of(self.current_token.kind)
    }

    /// Registers a prefix expression function for a token kind.
    pub fn register_prefix(&mut self, kind: TokenKind, prefix_fn: PrefixParseFn) {
        self.prefix_parse_fns.insert(kind, prefix_fn);
    }

    /// Registers an infix expression function for a token kind.
    pub fn register_infix(&mut self, kind: TokenKind, infix_fn: InfixParseFn) {
        self.infix_parse_fns.insert(kind, infix_fn);
    }

    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_parse_fns
    }

    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_parse_fns
    }

    /// Messages of every diagnostic recorded so far, oldest first.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_diagnostics(self) -> Vec<Error> {
        self.errors
    }

    pub fn no_prefix_parse_fn_error(&mut self, kind: TokenKind) {
        let token = self.current_token.clone();
        self.push_error(Error::new(ErrorImpl::NoPrefixParseFn { kind }, token));
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let token = self.peek_token.clone();
        self.push_error(Error::new(
            ErrorImpl::UnexpectedPeekToken {
                expected,
                got: token.kind,
            },
            token,
        ));
    }

    fn push_error(&mut self, error: Error) {
        debug!(error = %error, literal = %error.get_token().literal, "recorded parse error");
        self.errors.push(error);
    }
}

/// Parses a whole source text.
///
/// # Returns
///
/// A tuple containing:
/// - The Program (possibly partial)
/// - Every diagnostic recorded along the way
pub fn parse(source: impl Into<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (program, parser.into_diagnostics())
}
