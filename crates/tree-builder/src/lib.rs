//! # tree-builder: Playground-Style Syntax Tree Dumps
//!
//! tree-builder parses source files with tree-sitter and writes the same
//! indented, position-annotated listing the tree-sitter playground shows:
//! one line per named node, with grammar field names and
//! `[row, column]` ranges.
//!
//! ## Design Philosophy
//!
//! - **The printer only needs a cursor** - anything implementing
//!   [`SyntaxCursor`] can be rendered, tree-sitter or not
//! - **Deterministic output** - the same source always yields the same bytes
//! - **Library first, CLI second**
//!
//! ## Quick Start
//!
//! ```no_run
//! use tree_builder::{Language, SourceParser};
//!
//! let mut parser = SourceParser::new();
//! let lines = parser.render("struct Point { x: i32 }", Language::Rust)?;
//! for line in &lines {
//!     println!("{line}");
//! }
//! # Ok::<(), tree_builder::Error>(())
//! ```

pub mod batch;
pub mod config;
pub mod cursor;
mod error;
pub mod languages;
pub mod output;
pub mod parser;
pub mod printer;

pub use batch::{BatchOutcome, RenderedFile, render_batch, render_file, render_to_output};
pub use config::{CONFIG_FILE_NAME, Config, output_file_name};
pub use cursor::{Point, SyntaxCursor};
pub use error::{Error, Result};
pub use languages::Language;
pub use output::write_rendered;
pub use parser::SourceParser;
pub use printer::{DisplayLabel, join_lines, render, render_node, render_tree};
