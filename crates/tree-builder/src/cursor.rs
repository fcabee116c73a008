//! The cursor contract the tree printer walks.
//!
//! A [`SyntaxCursor`] is a stateful pointer into a syntax tree. It can move
//! to the first child, the next sibling or the parent, and it exposes the
//! attributes of the node it currently points at. The printer never needs
//! anything else, which keeps it independent of any particular parser.
//!
//! `tree_sitter::TreeCursor` implements the trait directly.

use std::fmt;

/// A zero-based (row, column) position in source text.
///
/// The column unit is whatever the producing parser uses. Tree-sitter
/// reports byte offsets within the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    /// Zero-based line number
    pub row: usize,
    /// Zero-based column within the line
    pub column: usize,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.column)
    }
}

impl From<tree_sitter::Point> for Point {
    fn from(point: tree_sitter::Point) -> Self {
        Self::new(point.row, point.column)
    }
}

/// A movable pointer into a syntax tree.
///
/// Movement methods return `false` and leave the cursor where it was when
/// the requested node does not exist.
pub trait SyntaxCursor {
    /// Grammar rule or token type of the current node.
    fn kind(&self) -> &str;

    /// Whether the current node is named (a grammar rule rather than punctuation).
    fn is_named(&self) -> bool;

    /// Whether the current node was synthesized by error recovery.
    fn is_missing(&self) -> bool;

    /// Start position of the current node.
    fn start_position(&self) -> Point;

    /// End position of the current node.
    fn end_position(&self) -> Point;

    /// Field name on the edge from the parent to the current node.
    fn field_name(&self) -> Option<&str>;

    /// Number of edges between the cursor's starting node and the current node.
    fn depth(&self) -> u32;

    /// Move to the first child of the current node.
    fn goto_first_child(&mut self) -> bool;

    /// Move to the next sibling of the current node.
    fn goto_next_sibling(&mut self) -> bool;

    /// Move to the parent of the current node.
    fn goto_parent(&mut self) -> bool;
}

impl SyntaxCursor for tree_sitter::TreeCursor<'_> {
    fn kind(&self) -> &str {
        self.node().kind()
    }

    fn is_named(&self) -> bool {
        self.node().is_named()
    }

    fn is_missing(&self) -> bool {
        self.node().is_missing()
    }

    fn start_position(&self) -> Point {
        self.node().start_position().into()
    }

    fn end_position(&self) -> Point {
        self.node().end_position().into()
    }

    fn field_name(&self) -> Option<&str> {
        tree_sitter::TreeCursor::field_name(self)
    }

    fn depth(&self) -> u32 {
        tree_sitter::TreeCursor::depth(self)
    }

    fn goto_first_child(&mut self) -> bool {
        tree_sitter::TreeCursor::goto_first_child(self)
    }

    fn goto_next_sibling(&mut self) -> bool {
        tree_sitter::TreeCursor::goto_next_sibling(self)
    }

    fn goto_parent(&mut self) -> bool {
        tree_sitter::TreeCursor::goto_parent(self)
    }
}
