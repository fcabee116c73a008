//! Common test utilities shared across integration tests.
//!
//! Provides an in-memory syntax tree with a [`SyntaxCursor`] over it, so
//! printer behavior can be pinned down without depending on what a real
//! grammar happens to produce.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tree_builder::printer::{DisplayLabel, format_line};
use tree_builder::{Point, SyntaxCursor};

/// A node of a hand-built syntax tree.
#[derive(Debug, Clone)]
pub struct TestNode {
    pub kind: String,
    pub named: bool,
    pub missing: bool,
    pub field: Option<String>,
    pub start: Point,
    pub end: Point,
    pub children: Vec<TestNode>,
}

impl TestNode {
    fn new(kind: &str, named: bool, start: (usize, usize), end: (usize, usize)) -> Self {
        Self {
            kind: kind.to_string(),
            named,
            missing: false,
            field: None,
            start: Point::new(start.0, start.1),
            end: Point::new(end.0, end.1),
            children: Vec::new(),
        }
    }

    /// A named node.
    pub fn named(kind: &str, start: (usize, usize), end: (usize, usize)) -> Self {
        Self::new(kind, true, start, end)
    }

    /// An anonymous token.
    pub fn anonymous(kind: &str, start: (usize, usize), end: (usize, usize)) -> Self {
        Self::new(kind, false, start, end)
    }

    /// Mark the node as inserted by error recovery.
    pub fn missing(mut self) -> Self {
        self.missing = true;
        self
    }

    /// Attach a field name to the edge from the parent.
    pub fn field(mut self, name: &str) -> Self {
        self.field = Some(name.to_string());
        self
    }

    /// Append a child.
    pub fn child(mut self, child: TestNode) -> Self {
        self.children.push(child);
        self
    }

    /// Fresh cursor at this node.
    pub fn cursor(&self) -> TestCursor<'_> {
        TestCursor {
            root: self,
            path: Vec::new(),
        }
    }

    /// Number of nodes that produce a line.
    pub fn display_worthy_count(&self) -> usize {
        let own = usize::from(self.missing || self.named);
        own + self
            .children
            .iter()
            .map(TestNode::display_worthy_count)
            .sum::<usize>()
    }
}

/// Cursor over a [`TestNode`] tree, tracked as a path of child indices.
pub struct TestCursor<'a> {
    root: &'a TestNode,
    path: Vec<usize>,
}

impl<'a> TestCursor<'a> {
    /// Cursor positioned `path` below the root.
    pub fn at(root: &'a TestNode, path: &[usize]) -> Self {
        Self {
            root,
            path: path.to_vec(),
        }
    }

    fn node_at(&self, path: &[usize]) -> &'a TestNode {
        path.iter().fold(self.root, |node, &i| &node.children[i])
    }

    fn current(&self) -> &'a TestNode {
        self.node_at(&self.path)
    }
}

impl SyntaxCursor for TestCursor<'_> {
    fn kind(&self) -> &str {
        &self.current().kind
    }

    fn is_named(&self) -> bool {
        self.current().named
    }

    fn is_missing(&self) -> bool {
        self.current().missing
    }

    fn start_position(&self) -> Point {
        self.current().start
    }

    fn end_position(&self) -> Point {
        self.current().end
    }

    fn field_name(&self) -> Option<&str> {
        self.current().field.as_deref()
    }

    fn depth(&self) -> u32 {
        u32::try_from(self.path.len()).expect("test trees are shallow")
    }

    fn goto_first_child(&mut self) -> bool {
        if self.current().children.is_empty() {
            return false;
        }
        self.path.push(0);
        true
    }

    fn goto_next_sibling(&mut self) -> bool {
        let Some((&last, parent_path)) = self.path.split_last() else {
            return false;
        };
        if last + 1 < self.node_at(parent_path).children.len() {
            *self.path.last_mut().expect("path is not empty") += 1;
            true
        } else {
            false
        }
    }

    fn goto_parent(&mut self) -> bool {
        self.path.pop().is_some()
    }
}

/// Straightforward recursive rendering used as a reference for the
/// iterative printer.
pub fn render_recursive(root: &TestNode) -> Vec<String> {
    fn visit(node: &TestNode, depth: usize, out: &mut Vec<String>) {
        let label = if node.missing {
            Some(DisplayLabel::Missing {
                kind: &node.kind,
                named: node.named,
            })
        } else if node.named {
            Some(DisplayLabel::Named(&node.kind))
        } else {
            None
        };
        if let Some(label) = label {
            out.push(format_line(
                depth,
                node.field.as_deref(),
                &label,
                node.start,
                node.end,
            ));
        }
        for child in &node.children {
            visit(child, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    visit(root, 0, &mut out);
    out
}

/// Number of leading two-space indent units on a rendered line.
pub fn indent_level(line: &str) -> usize {
    (line.len() - line.trim_start_matches(' ').len()) / 2
}

/// Directory holding the bundled source fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}
