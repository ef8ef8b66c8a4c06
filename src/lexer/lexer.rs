use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

/// Stands in for the current character once the input is exhausted.
const EOF_CHAR: char = '\0';

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Pull-style scanner over a single source text.
///
/// `position` points at `ch`, `read_position` just past it. Both are byte
/// offsets and always sit on a character boundary.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: String,
    position: usize,
    read_position: usize,
    ch: char,
}

impl Lexer {
    pub fn new(input: impl Into<String>) -> Lexer {
        let mut lexer = Lexer {
            input: input.into(),
            position: 0,
            read_position: 0,
            ch: EOF_CHAR,
        };
        lexer.read_char();
        lexer
    }

    /// Returns the next token. Once the input is exhausted every call yields `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            '=' => {
                if self.peek_char() == '=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::Eq, "==")
                } else {
                    MK_TOKEN!(TokenKind::Assign, "=")
                }
            }
            '!' => {
                if self.peek_char() == '=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::NotEq, "!=")
                } else {
                    MK_TOKEN!(TokenKind::Bang, "!")
                }
            }
            '+' => MK_TOKEN!(TokenKind::Plus, "+"),
            '-' => MK_TOKEN!(TokenKind::Minus, "-"),
            '*' => MK_TOKEN!(TokenKind::Asterisk, "*"),
            '/' => MK_TOKEN!(TokenKind::Slash, "/"),
            '<' => MK_TOKEN!(TokenKind::Lt, "<"),
            '>' => MK_TOKEN!(TokenKind::Gt, ">"),
            ',' => MK_TOKEN!(TokenKind::Comma, ","),
            ';' => MK_TOKEN!(TokenKind::Semicolon, ";"),
            '(' => MK_TOKEN!(TokenKind::LParen, "("),
            ')' => MK_TOKEN!(TokenKind::RParen, ")"),
            '{' => MK_TOKEN!(TokenKind::LBrace, "{"),
            '}' => MK_TOKEN!(TokenKind::RBrace, "}"),
            EOF_CHAR => MK_TOKEN!(TokenKind::Eof, ""),
            ch if is_letter(ch) => {
                // The run is already consumed, so skip the trailing read_char.
                let literal = self.read_run(&IDENTIFIER_PATTERN);
                let kind = lookup_ident(&literal);
                return emit(MK_TOKEN!(kind, literal));
            }
            ch if is_digit(ch) => {
                let literal = self.read_run(&INTEGER_PATTERN);
                return emit(MK_TOKEN!(TokenKind::Int, literal));
            }
            ch => MK_TOKEN!(TokenKind::Illegal, ch.to_string()),
        };

        self.read_char();
        emit(token)
    }

    fn read_char(&mut self) {
        if self.read_position >= self.input.len() {
            self.ch = EOF_CHAR;
            self.position = self.input.len();
            self.read_position = self.position + 1;
            return;
        }

        self.ch = self.input[self.read_position..]
            .chars()
            .next()
            .unwrap_or(EOF_CHAR);
        self.position = self.read_position;
        self.read_position += self.ch.len_utf8();
    }

    fn peek_char(&self) -> char {
        self.input
            .get(self.read_position..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(EOF_CHAR)
    }

    /// Consumes the longest match of `pattern` starting at the current character.
    fn read_run(&mut self, pattern: &Regex) -> String {
        let start = self.position;
        let end = pattern
            .find(&self.input[start..])
            .map_or(start, |matched| start + matched.end());

        while self.position < end {
            self.read_char();
        }

        self.input[start..end].to_string()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.read_char();
        }
    }
}

fn emit(token: Token) -> Token {
    trace!(kind = %token.kind, literal = %token.literal, "scanned token");
    token
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Scans `source` to completion, returning every token up to and including `EOF`.
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.is(TokenKind::Eof);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
