//! stmtc command line interface
//!
//! Usage:
//!   stmtc [OPTIONS] [FILE]
//!
//! Examples:
//!   stmtc input.txt                       # Print the parse tree
//!   stmtc --emit=tokens input.txt         # List the tokens
//!   stmtc --emit=instructions -o out.txt input.txt

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, error, info};
use stmtc::{
    display_error,
    driver::{self, Emit},
};

/// Scans and parses one statement of the small imperative language
#[derive(Parser, Debug)]
#[command(name = "stmtc")]
#[command(version)]
#[command(about = "DFA lexer and recursive-descent parser for a small imperative language", long_about = None)]
struct Cli {
    /// Source file (reads stdin when absent)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// What to emit
    #[arg(long, default_value = "tree")]
    emit: EmitKind,

    /// Also show each diagnostic against its source line on stderr
    #[arg(long)]
    context: bool,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress warnings)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EmitKind {
    /// One line per token
    Tokens,
    /// Indented parse tree
    Tree,
    /// Stack-machine instructions
    Instructions,
}

impl From<EmitKind> for Emit {
    fn from(kind: EmitKind) -> Self {
        match kind {
            EmitKind::Tokens => Emit::Tokens,
            EmitKind::Tree => Emit::Tree,
            EmitKind::Instructions => Emit::Instructions,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logger_builder(cli.quiet, cli.verbose).init();

    let (source, file_name) = read_source(&cli.input)?;
    debug!("read {} characters from {}", source.chars().count(), file_name);

    let output = driver::run(&source, &file_name, cli.emit.into());

    if cli.context {
        for diagnostic in &output.diagnostics {
            eprint!("{}", display_error(diagnostic, &source));
        }
    }

    write_output(&cli.output, &output.render())?;

    if output.has_errors() {
        error!("{} diagnostic(s) in {}", output.diagnostics.len(), file_name);
        return Ok(ExitCode::FAILURE);
    }

    info!("done");
    Ok(ExitCode::SUCCESS)
}

/// Logger at the level picked by `-q`/`-v`. `RUST_LOG`, when set, overrides
/// it.
fn logger_builder(quiet: bool, verbose: u8) -> env_logger::Builder {
    let log_level = if quiet {
        log::LevelFilter::Error
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log_level)
        .parse_default_env()
        .format_timestamp(None);
    builder
}

fn read_source(input: &Option<PathBuf>) -> Result<(String, String)> {
    match input {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {:?}", path))?;
            Ok((source, path.display().to_string()))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read stdin")?;
            Ok((source, String::from("<stdin>")))
        }
    }
}

fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).with_context(|| format!("Failed to write output: {:?}", p))?;
            info!("Output written to {:?}", p);
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
