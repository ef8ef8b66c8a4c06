//! Error types for the parser.
//!
//! Diagnostics are collected rather than raised: the parser records one
//! `Error` per structural problem and keeps going. This module includes:
//!
//! - The diagnostic variants and their messages
//! - Helpful suggestions for the front end

pub mod errors;

#[cfg(test)]
mod tests;
