//! Tree-sitter parsing coordination.
//!
//! [`SourceParser`] owns one `tree_sitter::Parser` and swaps its grammar
//! only when the requested language changes, so a worker rendering many
//! files of the same language loads the grammar once.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::languages::Language;
use crate::printer;

/// Parses source text into tree-sitter trees.
pub struct SourceParser {
    parser: tree_sitter::Parser,
    language: Option<Language>,
}

impl Default for SourceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser {
    /// Create a parser with no grammar loaded yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: tree_sitter::Parser::new(),
            language: None,
        }
    }

    /// The grammar currently loaded, if any.
    #[must_use]
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// Parse `source` with the grammar for `language`.
    ///
    /// Trees containing syntax errors are returned as-is; error recovery
    /// nodes show up in the rendered output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parser`] if the grammar is incompatible with the
    /// linked tree-sitter runtime or parsing is aborted.
    pub fn parse(&mut self, source: &str, language: Language) -> Result<tree_sitter::Tree> {
        if self.language != Some(language) {
            self.parser
                .set_language(&language.tree_sitter_language())
                .map_err(|e| Error::Parser(format!("failed to load {language} grammar: {e}")))?;
            self.language = Some(language);
        }

        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| Error::Parser(format!("tree-sitter returned no {language} tree")))?;

        let root = tree.root_node();
        debug!(
            %language,
            bytes = source.len(),
            has_error = root.has_error(),
            "Parsed source"
        );
        if root.has_error() {
            warn!(%language, "Source contains syntax errors; dump includes recovery nodes");
        }

        Ok(tree)
    }

    /// Parse `source` and render its syntax tree.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`SourceParser::parse`].
    pub fn render(&mut self, source: &str, language: Language) -> Result<Vec<String>> {
        let tree = self.parse(source, language)?;
        printer::render(&mut tree.walk())
    }
}
