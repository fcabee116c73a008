//! Rendering command implementation.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tree_builder::{Config, Error, Language, SourceParser, join_lines, render_batch, render_file};

/// Arguments for one CLI invocation.
pub struct Options {
    pub inputs: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub inputs_dir: Option<PathBuf>,
    pub outputs_dir: Option<PathBuf>,
    pub language: Option<String>,
    pub stdout: bool,
}

/// Run the render command.
pub fn run(base_dir: &Path, options: Options) -> Result<(), Error> {
    let config = Config::load(base_dir, options.config.as_deref())?.with_overrides(
        base_dir,
        options.inputs_dir.as_deref(),
        options.outputs_dir.as_deref(),
    );
    tracing::debug!(?config, "Resolved configuration");

    let language = options
        .language
        .as_deref()
        .map(str::parse::<Language>)
        .transpose()?;

    if options.stdout {
        return print_to_stdout(&config, &options.inputs, language);
    }

    let total = options.inputs.len();
    let mut failed = 0;
    for outcome in render_batch(&config, &options.inputs, language) {
        match outcome.result {
            Ok(rendered) => {
                println!("Parsed tree written to: {}", rendered.output.display());
            }
            Err(e) if total == 1 => return Err(e),
            Err(e) => {
                eprintln!(
                    "  {} {}: {e}",
                    "•".red(),
                    outcome.requested.display()
                );
                failed += 1;
            }
        }
    }

    if failed == 0 {
        Ok(())
    } else {
        Err(Error::BatchFailed { failed, total })
    }
}

/// Render inputs sequentially and print them, separated by a blank line.
fn print_to_stdout(
    config: &Config,
    inputs: &[PathBuf],
    language: Option<Language>,
) -> Result<(), Error> {
    let mut parser = SourceParser::new();
    for (i, input) in inputs.iter().enumerate() {
        let (_, lines) = render_file(&mut parser, &config.input_path(input), language)?;
        if i > 0 {
            println!();
        }
        if inputs.len() > 1 {
            println!("{}", format!("// {}", input.display()).dimmed());
        }
        println!("{}", join_lines(&lines));
    }
    Ok(())
}
