use std::{
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{ArgAction, Parser as CliParser};
use monkey::{
    errors::errors::{Error, ErrorTip},
    parser::parser::parse,
    repl::{self, Mode},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, CliParser)]
#[command(name = "monkey", version, about = "Tokenizer and parser for the Monkey language")]
struct Cli {
    /// Source file to parse. Starts the REPL when omitted
    file: Option<PathBuf>,
    /// Print the parsed program for each REPL line instead of its tokens
    #[arg(long)]
    ast: bool,
    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(io::stderr)
        .init();

    match cli.file {
        Some(path) => run_file(&path),
        None => {
            let mode = if cli.ast { Mode::Ast } else { Mode::Tokens };
            match repl::start(io::stdin().lock(), io::stdout(), mode) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    error!(%err, "repl aborted");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn run_file(path: &Path) -> ExitCode {
    let source = match read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            error!(path = %path.display(), %err, "failed to read source file");
            return ExitCode::FAILURE;
        }
    };

    let (program, errors) = parse(source);
    info!(path = %path.display(), statements = program.len(), errors = errors.len(), "parsed file");

    if errors.is_empty() {
        println!("{}", program);
        return ExitCode::SUCCESS;
    }

    for error in &errors {
        display_error(error, path);
    }
    ExitCode::FAILURE
}

fn display_error(error: &Error, file: &Path) {
    /*
        Error: UnexpectedPeekToken - expected next token to be IDENT, got ASSIGN instead
        -> main.mk (near `=`)
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} - {}", error.get_error_name(), error);
    } else {
        eprintln!(
            "Error: {} - {} ({})",
            error.get_error_name(),
            error,
            error.get_tip()
        );
    }
    eprintln!(
        "-> {} (near `{}`)",
        file.as_os_str().to_string_lossy(),
        error.get_token().literal
    );
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "monkey=warn",
        1 => "monkey=debug",
        _ => "monkey=trace",
    }
}
