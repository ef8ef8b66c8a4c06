//! Parser module for building the syntax tree.
//!
//! This module contains the parser that turns the lexer's token stream
//! into a `Program`. It uses a Pratt parser for expressions and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements)
//! - Expression parsing through registered prefix and infix functions
//! - Error accumulation without unwinding
//!
//! Prefix and infix functions are looked up by token kind, and the
//! precedence table decides how far an expression extends to the right.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
