//! tree-builder CLI - syntax tree dumps from the command line.
//!
//! Parses each input with the tree-sitter grammar matching its extension
//! and writes a playground-style listing to `<outputs>/<stem>_tree.txt`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Exit code for command-line usage errors.
const USAGE_EXIT_CODE: u8 = 1;

/// tree-builder: Playground-style syntax tree dumps.
#[derive(Parser)]
#[command(name = "tree-builder")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input files, resolved against the inputs directory
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Configuration file (defaults to ./tree-builder.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory input files are resolved against
    #[arg(short, long)]
    inputs_dir: Option<PathBuf>,

    /// Directory rendered trees are written to
    #[arg(short, long)]
    outputs_dir: Option<PathBuf>,

    /// Grammar to use instead of detecting it from the file extension
    #[arg(short, long)]
    language: Option<String>,

    /// Print rendered trees to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version are reported through clap but are not failures
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprint!("{e}");
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let base_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!(
                "{}: failed to get current directory: {e}",
                "error".red().bold()
            );
            return ExitCode::FAILURE;
        }
    };

    let options = cli::render::Options {
        inputs: cli.inputs,
        config: cli.config,
        inputs_dir: cli.inputs_dir,
        outputs_dir: cli.outputs_dir,
        language: cli.language,
        stdout: cli.stdout,
    };

    match cli::render::run(&base_dir, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::from(e.exit_code())
        }
    }
}
