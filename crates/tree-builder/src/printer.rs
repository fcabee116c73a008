//! Playground-style rendering of a syntax tree.
//!
//! The printer walks a [`SyntaxCursor`] depth-first and emits one line per
//! display-worthy node:
//!
//! ```text
//! source_file [0, 0] - [0, 9]
//!   function_item [0, 0] - [0, 9]
//!     name: identifier [0, 3] - [0, 4]
//!     parameters: parameters [0, 4] - [0, 6]
//!     body: block [0, 7] - [0, 9]
//! ```
//!
//! ## Which nodes are emitted
//!
//! - Missing nodes always are, labelled `MISSING <type>` when named and
//!   `MISSING "<type>"` when anonymous.
//! - Named nodes are, labelled with their type.
//! - Anonymous tokens are not, but their subtrees are still walked.
//!
//! Indentation is two spaces per tree edge between the root and the node,
//! counting edges through anonymous ancestors.
//!
//! ## Traversal
//!
//! The walk is iterative. A `visited_children` flag tells whether the
//! cursor has arrived at a node for the first time (open its row, try to
//! descend) or is coming back up (try the next sibling, else the parent).
//! Memory is bounded by the output plus a depth counter.

use std::fmt;

use tracing::{debug, trace};

use crate::cursor::{Point, SyntaxCursor};
use crate::error::{Error, Result};

/// Indentation emitted per level of tree depth.
pub const INDENT_UNIT: &str = "  ";

/// Label of a display-worthy node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayLabel<'a> {
    /// A named node, shown by its type
    Named(&'a str),
    /// A node inserted by error recovery
    Missing {
        /// Type of the expected node
        kind: &'a str,
        /// Whether the expected node is named; anonymous ones are quoted
        named: bool,
    },
}

impl<'a> DisplayLabel<'a> {
    /// Classify the node under the cursor.
    ///
    /// Returns `None` for anonymous, non-missing nodes.
    pub fn of<C: SyntaxCursor + ?Sized>(cursor: &'a C) -> Option<Self> {
        if cursor.is_missing() {
            Some(Self::Missing {
                kind: cursor.kind(),
                named: cursor.is_named(),
            })
        } else if cursor.is_named() {
            Some(Self::Named(cursor.kind()))
        } else {
            None
        }
    }
}

impl fmt::Display for DisplayLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(kind) => f.write_str(kind),
            Self::Missing { kind, named: true } => write!(f, "MISSING {kind}"),
            Self::Missing { kind, named: false } => write!(f, "MISSING \"{kind}\""),
        }
    }
}

/// Render the tree under `cursor` into playground-style lines.
///
/// The cursor must sit at the node the dump starts from (depth 0). On
/// return its position is unspecified; treat it as spent.
///
/// # Errors
///
/// Returns [`Error::CursorNotAtRoot`] if the cursor has already been moved
/// below its starting node.
pub fn render<C: SyntaxCursor + ?Sized>(cursor: &mut C) -> Result<Vec<String>> {
    let depth = cursor.depth();
    if depth != 0 {
        return Err(Error::CursorNotAtRoot { depth });
    }

    let rows = TreePrinter::default().walk(cursor);
    debug!(lines = rows.len(), "Rendered syntax tree");
    Ok(rows)
}

/// Render every node of a tree-sitter tree.
#[must_use]
pub fn render_tree(tree: &tree_sitter::Tree) -> Vec<String> {
    render_node(tree.root_node())
}

/// Render the subtree rooted at `node`.
#[must_use]
pub fn render_node(node: tree_sitter::Node<'_>) -> Vec<String> {
    // A fresh cursor always starts at depth 0.
    TreePrinter::default().walk(&mut node.walk())
}

/// Join rendered lines the way they are persisted: `\n`-separated with no
/// trailing newline.
#[must_use]
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Format a single output line.
#[must_use]
pub fn format_line(
    indent_level: usize,
    field_name: Option<&str>,
    label: &DisplayLabel<'_>,
    start: Point,
    end: Point,
) -> String {
    let mut line = INDENT_UNIT.repeat(indent_level);
    if let Some(field) = field_name {
        line.push_str(field);
        line.push_str(": ");
    }
    line.push_str(&format!("{label} {start} - {end}"));
    line
}

/// Traversal state for one rendering pass.
#[derive(Debug, Default)]
struct TreePrinter {
    rows: Vec<String>,
    row: String,
    row_complete: bool,
    visited_children: bool,
    indent_level: usize,
}

impl TreePrinter {
    fn walk<C: SyntaxCursor + ?Sized>(mut self, cursor: &mut C) -> Vec<String> {
        loop {
            let display_worthy = DisplayLabel::of(&*cursor).is_some();

            if self.visited_children {
                if display_worthy {
                    self.row_complete = true;
                }

                if cursor.goto_next_sibling() {
                    self.visited_children = false;
                } else if cursor.goto_parent() {
                    self.indent_level = self.indent_level.saturating_sub(1);
                } else {
                    break;
                }
            } else {
                if let Some(label) = DisplayLabel::of(&*cursor) {
                    self.flush();
                    self.row = format_line(
                        self.indent_level,
                        cursor.field_name(),
                        &label,
                        cursor.start_position(),
                        cursor.end_position(),
                    );
                    self.row_complete = true;
                    trace!(row = %self.row, "Opened row");
                }

                if cursor.goto_first_child() {
                    self.indent_level += 1;
                } else {
                    self.visited_children = true;
                }
            }
        }

        self.flush();
        self.rows
    }

    fn flush(&mut self) {
        if self.row_complete && !self.row.is_empty() {
            self.rows.push(std::mem::take(&mut self.row));
            self.row_complete = false;
        }
    }
}
