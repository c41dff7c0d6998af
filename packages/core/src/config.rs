//! Tree view configuration
//!
//! Loaded once when a session starts. Every field has a serde default, so a
//! partial (or absent) `doctree.json` still yields a usable configuration.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Behavior switches for the drag-and-drop tree view
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeViewConfig {
    /// Accept drops that nest a node inside another
    #[serde(default = "default_true")]
    pub allow_drop_inside_item: bool,

    /// Accept sibling reordering drops
    #[serde(default = "default_true")]
    pub allow_reordering: bool,

    /// Expanding or collapsing a node applies to all of its descendants
    #[serde(default = "default_true")]
    pub expand_nodes_recursive: bool,

    /// JSON file with the initial documents; built-in samples when absent
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for TreeViewConfig {
    fn default() -> Self {
        Self {
            allow_drop_inside_item: true,
            allow_reordering: true,
            expand_nodes_recursive: true,
            seed_path: None,
        }
    }
}

impl TreeViewConfig {
    /// Load configuration from a JSON file, falling back to defaults when
    /// the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(seed_path) = &self.seed_path {
            if seed_path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("seedPath cannot be empty".to_string()));
            }
        }
        Ok(())
    }
}
