use crate::error::{FragzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "fragz.json";
const DEFAULT_OUTPUT_PATH: &str = "diagram.mmd";

/// Preamble written at the top of every merged diagram.
pub const DEFAULT_HEADER_BLOCK: &str = "---
config:
  theme: default
  layout: elk
---
classDiagram
";

/// Merge configuration, stored in `fragz.json` at the working directory root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FragzConfig {
    /// Fragment files to merge, in output order
    #[serde(default)]
    pub fragment_names: Vec<String>,

    /// Where the merged diagram is written, relative to the working directory
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Fixed preamble placed before the first fragment
    #[serde(default = "default_header_block")]
    pub header_block: String,
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_header_block() -> String {
    DEFAULT_HEADER_BLOCK.to_string()
}

impl Default for FragzConfig {
    fn default() -> Self {
        Self {
            fragment_names: Vec::new(),
            output_path: default_output_path(),
            header_block: default_header_block(),
        }
    }
}

impl FragzConfig {
    pub fn path_in<P: AsRef<Path>>(config_dir: P) -> PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = Self::path_in(config_dir);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FragzError::Io)?;
        let config: FragzConfig =
            serde_json::from_str(&content).map_err(FragzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<PathBuf> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FragzError::Io)?;
        }

        let config_path = Self::path_in(config_dir);
        let content = serde_json::to_string_pretty(self).map_err(FragzError::Serialization)?;
        fs::write(&config_path, content).map_err(FragzError::Io)?;
        Ok(config_path)
    }

    /// Replaces the fragment list when `names` is non-empty.
    pub fn with_fragments(mut self, names: Vec<String>) -> Self {
        if !names.is_empty() {
            self.fragment_names = names;
        }
        self
    }

    pub fn with_output_path(mut self, output_path: Option<String>) -> Self {
        if let Some(path) = output_path {
            self.output_path = path;
        }
        self
    }

    /// Rejects configurations the merger cannot act on.
    pub fn validate(&self) -> Result<()> {
        if self.output_path.trim().is_empty() {
            return Err(FragzError::Config("output_path must not be empty".into()));
        }
        if let Some(pos) = self.fragment_names.iter().position(|n| n.is_empty()) {
            return Err(FragzError::Config(format!(
                "fragment name at position {} is empty",
                pos + 1
            )));
        }
        Ok(())
    }
}
