//! Persisting rendered trees.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::printer::join_lines;

/// Write rendered lines to `path`, creating parent directories as needed.
///
/// Lines are joined with `\n` and no trailing newline is added, so the file
/// is byte-for-byte what golden-file comparisons expect.
///
/// # Errors
///
/// Returns [`Error::Write`] if the directory or the file cannot be written.
pub fn write_rendered(lines: &[String], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, join_lines(lines)).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), lines = lines.len(), "Wrote rendered tree");
    Ok(())
}
