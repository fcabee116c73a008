//! Configuration management for tree-builder.
//!
//! Inputs are looked up in an inputs directory and dumps land in an outputs
//! directory. Both default to `inputs/` and `outputs/` under the working
//! directory and can be changed in a `tree-builder.yaml` file:
//!
//! ```yaml
//! inputs_dir: fixtures
//! outputs_dir: build/trees
//! ```
//!
//! Relative directories in a config file are resolved against the file's
//! own directory. Command-line flags override the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Name of the config file looked up in the base directory.
pub const CONFIG_FILE_NAME: &str = "tree-builder.yaml";

/// Suffix appended to an input's file stem to name its dump.
pub const OUTPUT_SUFFIX: &str = "_tree.txt";

/// Directory layout used to resolve inputs and place outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory input file names are resolved against
    pub inputs_dir: PathBuf,
    /// Directory rendered trees are written to
    pub outputs_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs_dir: PathBuf::from("inputs"),
            outputs_dir: PathBuf::from("outputs"),
        }
    }
}

impl Config {
    /// Load configuration for `base_dir`.
    ///
    /// With `explicit` set, that file must exist. Otherwise
    /// `<base_dir>/tree-builder.yaml` is used when present and the
    /// defaults apply when it is not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if an explicit file is missing or a config
    /// file is not valid YAML for this schema, and [`Error::Read`] if it
    /// exists but cannot be read.
    pub fn load(base_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                let path = base_dir.join(path);
                if !path.is_file() {
                    return Err(Error::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                path
            }
            None => {
                let path = base_dir.join(CONFIG_FILE_NAME);
                if !path.is_file() {
                    debug!(base = %base_dir.display(), "No config file, using defaults");
                    return Ok(Self::default().resolved_against(base_dir));
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_yaml(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;

        debug!(path = %path.display(), "Loaded config file");
        let config_dir = path.parent().unwrap_or(base_dir);
        Ok(config.resolved_against(config_dir))
    }

    /// Parse configuration from YAML text.
    ///
    /// Keys that are left out keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on malformed YAML or unknown keys.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Make relative directories absolute by joining them onto `base`.
    #[must_use]
    pub fn resolved_against(self, base: &Path) -> Self {
        Self {
            inputs_dir: base.join(self.inputs_dir),
            outputs_dir: base.join(self.outputs_dir),
        }
    }

    /// Replace directories with command-line values, resolved against `base`.
    #[must_use]
    pub fn with_overrides(
        mut self,
        base: &Path,
        inputs_dir: Option<&Path>,
        outputs_dir: Option<&Path>,
    ) -> Self {
        if let Some(dir) = inputs_dir {
            self.inputs_dir = base.join(dir);
        }
        if let Some(dir) = outputs_dir {
            self.outputs_dir = base.join(dir);
        }
        self
    }

    /// Where an input argument lives. Absolute paths are kept as-is.
    #[must_use]
    pub fn input_path(&self, input: &Path) -> PathBuf {
        self.inputs_dir.join(input)
    }

    /// Where the dump for `input` is written.
    #[must_use]
    pub fn output_path(&self, input: &Path) -> PathBuf {
        self.outputs_dir.join(output_file_name(input))
    }
}

/// Dump file name for an input: its stem followed by `_tree.txt`.
#[must_use]
pub fn output_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map_or_else(String::new, |s| s.to_string_lossy().into_owned());
    format!("{stem}{OUTPUT_SUFFIX}")
}
