//! Rendering source files, one or many at a time.
//!
//! Each file goes through the same pipeline:
//!
//! ```text
//! resolve path → detect language → read → parse → render → write
//! ```
//!
//! Configuration problems (missing input, unknown extension) are reported
//! before the file is read. Batches run across rayon's thread pool with one
//! [`SourceParser`] per worker; a tree and its cursor never leave the
//! worker that produced them.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::languages::Language;
use crate::output::write_rendered;
use crate::parser::SourceParser;

/// Result of rendering one input file to disk.
#[derive(Debug)]
pub struct RenderedFile {
    /// Input file that was parsed
    pub input: PathBuf,
    /// Language used to parse it
    pub language: Language,
    /// Where the dump was written
    pub output: PathBuf,
    /// Number of lines in the dump
    pub line_count: usize,
}

/// Outcome for one entry of a batch, in input order.
#[derive(Debug)]
pub struct BatchOutcome {
    /// Input as given by the caller (before resolution)
    pub requested: PathBuf,
    /// What happened to it
    pub result: Result<RenderedFile>,
}

/// Read `path` and render its syntax tree.
///
/// `language` overrides detection from the file extension.
///
/// # Errors
///
/// Returns [`Error::InputNotFound`], [`Error::UnsupportedLanguage`] or
/// [`Error::Read`] before parsing, and [`Error::Parser`] if tree-sitter fails.
pub fn render_file(
    parser: &mut SourceParser,
    path: &Path,
    language: Option<Language>,
) -> Result<(Language, Vec<String>)> {
    if !path.is_file() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    let language = match language {
        Some(language) => language,
        None => Language::from_path(path)?,
    };

    let source = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), %language, "Rendering file");
    let lines = parser.render(&source, language)?;
    Ok((language, lines))
}

/// Render one input and write its dump according to `config`.
///
/// # Errors
///
/// Propagates failures from [`render_file`] and [`write_rendered`].
pub fn render_to_output(
    parser: &mut SourceParser,
    config: &Config,
    input: &Path,
    language: Option<Language>,
) -> Result<RenderedFile> {
    let path = config.input_path(input);
    let (language, lines) = render_file(parser, &path, language)?;

    let output = config.output_path(input);
    write_rendered(&lines, &output)?;

    Ok(RenderedFile {
        input: path,
        language,
        output,
        line_count: lines.len(),
    })
}

/// Render every input in parallel, writing each dump according to `config`.
///
/// Failures are per-file: one bad input does not stop the others. Outcomes
/// come back in the order the inputs were given.
#[must_use]
pub fn render_batch(
    config: &Config,
    inputs: &[PathBuf],
    language: Option<Language>,
) -> Vec<BatchOutcome> {
    debug!(inputs = inputs.len(), "Rendering batch");
    inputs
        .par_iter()
        .map_init(SourceParser::new, |parser, input| BatchOutcome {
            requested: input.clone(),
            result: render_to_output(parser, config, input, language),
        })
        .collect()
}
