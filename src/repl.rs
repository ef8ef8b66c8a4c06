//! Line-oriented read-eval-print front end.
//!
//! Reads one line at a time, runs it through the lexer (or the parser in
//! [`Mode::Ast`]) and writes the result back, prompting between lines.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse,
};

pub const PROMPT: &str = ">> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print every token of the line
    #[default]
    Tokens,
    /// Print the rendered program, or the parser's errors
    Ast,
}

/// Runs the loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W, mode: Mode) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed, leaving repl");
            return Ok(());
        }

        match mode {
            Mode::Tokens => write_tokens(&line, &mut output)?,
            Mode::Ast => write_program(&line, &mut output)?,
        }
    }
}

fn write_tokens<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    let mut lexer = Lexer::new(line);

    loop {
        let token = lexer.next_token();
        if token.is(TokenKind::Eof) {
            return Ok(());
        }
        writeln!(output, "{}", token)?;
    }
}

fn write_program<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    let (program, errors) = parse(line);

    if errors.is_empty() {
        return writeln!(output, "{}", program);
    }

    writeln!(output, "parser errors:")?;
    for error in &errors {
        writeln!(output, "\t{}", error)?;
    }
    Ok(())
}
