//! Grammar registry.
//!
//! Maps file extensions and language names to the tree-sitter grammars
//! compiled into the binary.
//!
//! ## Adding a New Language
//!
//! 1. Add the grammar crate to the workspace dependencies
//! 2. Add the variant to [`Language`] with its extensions and names
//! 3. Return its grammar from [`Language::tree_sitter_language`]

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

/// Languages with a bundled grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Rust source files (`.rs`)
    Rust,
    /// C# source files (`.cs`)
    CSharp,
    /// Swift source files (`.swift`)
    Swift,
    /// JavaScript source files (`.js`, `.mjs`, `.cjs`, `.jsx`)
    JavaScript,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Self; 4] = [Self::Rust, Self::CSharp, Self::Swift, Self::JavaScript];

    /// File extensions handled by this language.
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Rust => &["rs"],
            Self::CSharp => &["cs"],
            Self::Swift => &["swift"],
            Self::JavaScript => &["js", "mjs", "cjs", "jsx"],
        }
    }

    /// Detect language from file extension.
    ///
    /// Matching is case-insensitive and tolerates a leading dot.
    ///
    /// # Returns
    ///
    /// `None` if the extension is not recognized.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext).to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }

    /// Detect language from a file path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`] naming the extension (or
    /// `none`) when no grammar handles it.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext).ok_or_else(|| {
            let shown = if ext.is_empty() { "none" } else { ext };
            Error::UnsupportedLanguage(format!(
                "no grammar for extension '{shown}' ({})",
                path.display()
            ))
        })
    }

    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::CSharp => "csharp",
            Self::Swift => "swift",
            Self::JavaScript => "javascript",
        }
    }

    /// The tree-sitter grammar for this language.
    #[must_use]
    pub fn tree_sitter_language(&self) -> tree_sitter::Language {
        match self {
            Self::Rust => tree_sitter_rust::LANGUAGE.into(),
            Self::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
            Self::Swift => tree_sitter_swift::LANGUAGE.into(),
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Accepts canonical names, common aliases and bare extensions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rust" => Ok(Self::Rust),
            "csharp" | "c#" | "c_sharp" | "c-sharp" => Ok(Self::CSharp),
            "swift" => Ok(Self::Swift),
            "javascript" => Ok(Self::JavaScript),
            other => Self::from_extension(other)
                .ok_or_else(|| Error::UnsupportedLanguage(s.to_string())),
        }
    }
}
