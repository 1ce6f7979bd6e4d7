use std::{path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use jlex::{
    errors::errors::Error, load_source, normalize, render_error, strip_comments, tokenize, Token,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Splits Java-like source files into tokens.
#[derive(Parser, Debug)]
#[command(name = "jlex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Splits Java-like source files into tokens", long_about = None)]
struct Cli {
    /// Source file to read
    file: PathBuf,

    /// Pipeline stage to print
    #[arg(long, value_enum, default_value_t = Stage::Tokens, env = "JLEX_STAGE")]
    stage: Stage,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, env = "JLEX_FORMAT")]
    format: Format,

    /// Enable verbose output
    #[arg(short, long, env = "JLEX_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "JLEX_NO_COLOR")]
    no_color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Stage {
    /// Normalized fragments, comments included
    Fragments,
    /// Fragments with comments removed
    Stripped,
    /// The token sequence
    Tokens,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One item per line
    Text,
    /// A JSON array
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only carries the lexer output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();

    let source = load_source(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;

    let report = |error: Error| {
        eprint!("{}", render_error(&error, &source, &cli.file));
        anyhow!("failed to tokenize {}", cli.file.display())
    };

    match cli.stage {
        Stage::Fragments => print_fragments(&normalize(&source), cli.format)?,
        Stage::Stripped => {
            let fragments = strip_comments(normalize(&source)).map_err(report)?;
            print_fragments(&fragments, cli.format)?;
        }
        Stage::Tokens => {
            let tokens = tokenize(&source).map_err(report)?;
            debug!(tokens = tokens.len(), "printing tokens");
            print_tokens(&tokens, cli.format)?;
        }
    }

    info!("Processed {} in {:?}", cli.file.display(), start.elapsed());
    Ok(())
}

fn print_fragments(fragments: &[String], format: Format) -> Result<()> {
    match format {
        Format::Text => fragments.iter().for_each(|fragment| println!("{}", fragment)),
        Format::Json => println!("{}", serde_json::to_string_pretty(fragments)?),
    }

    Ok(())
}

fn print_tokens(tokens: &[Token], format: Format) -> Result<()> {
    match format {
        Format::Text => tokens.iter().for_each(|token| println!("{}", token)),
        Format::Json => println!("{}", serde_json::to_string_pretty(tokens)?),
    }

    Ok(())
}
