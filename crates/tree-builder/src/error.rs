//! Error types for tree-builder operations.
//!
//! Errors fall into three groups:
//!
//! - **Configuration errors**: missing inputs, unsupported languages, bad
//!   config files. These surface before any syntax tree is walked.
//! - **Infrastructure errors**: file reads/writes and tree-sitter failures.
//! - **Precondition violations**: a cursor handed to the printer that is
//!   not positioned at the root of its tree.
//!
//! Rendering itself never fails once it has a well-formed cursor. Missing
//! nodes produced by error recovery are data, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for tree-builder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for tree-builder operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file does not exist
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The input file exists but could not be read
    #[error("failed to read input file {}", path.display())]
    Read {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The rendered tree could not be persisted
    #[error("failed to write output file {}", path.display())]
    Write {
        /// Path that failed to write
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// No grammar is registered for the requested language or extension
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Tree-sitter could not load a grammar or produce a tree
    #[error("parser error: {0}")]
    Parser(String),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),

    /// The cursor passed to the printer was not at the root of its tree
    #[error("cursor must be positioned at the tree root (found depth {depth})")]
    CursorNotAtRoot {
        /// Depth the cursor reported
        depth: u32,
    },

    /// Some inputs of a batch failed; each failure was already reported
    #[error("{failed} of {total} inputs failed to render")]
    BatchFailed {
        /// Number of failed inputs
        failed: usize,
        /// Number of inputs in the batch
        total: usize,
    },
}

impl Error {
    /// Process exit code the CLI reports for this error.
    ///
    /// Each failure class gets its own code so scripts can tell a missing
    /// input apart from a grammar that failed to load.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InputNotFound(_) => 2,
            Self::Read { .. } => 3,
            Self::Write { .. } => 4,
            Self::UnsupportedLanguage(_) => 5,
            Self::Parser(_) => 6,
            Self::Config(_) => 7,
            Self::CursorNotAtRoot { .. } | Self::BatchFailed { .. } => 1,
        }
    }
}
