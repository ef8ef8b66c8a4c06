//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - The closed token vocabulary and the keyword table
//! - One character of lookahead for `==` and `!=`
//! - Identifier and integer runs
//! - `ILLEGAL` tokens for anything it does not recognise

pub mod lexer;
pub mod tokens;
