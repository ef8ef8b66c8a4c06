#![allow(clippy::module_inception)]

//! Front end of the Monkey language: tokenizer, syntax tree and parser.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

extern crate regex;

pub use ast::ast::{Node, Program};
pub use lexer::lexer::{tokenize, Lexer};
pub use lexer::tokens::{Token, TokenKind};
pub use parser::parser::{parse, Parser};
