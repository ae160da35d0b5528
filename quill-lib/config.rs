//! TOML configuration for the text subsystem.
//!
//! ```toml
//! [fonts]
//! max-fonts = 16
//!
//! [editor]
//! undo-capacity = 50
//! ```

use std::{
  fs,
  path::{
    Path,
    PathBuf,
  },
};

use quill_renderer::RegistryConfig;
use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;

use crate::history::DEFAULT_UNDO_CAPACITY;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read {path}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error(transparent)]
  Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct EditorConfig {
  /// Undo steps kept per editor
  pub undo_capacity: usize,
}

impl Default for EditorConfig {
  fn default() -> Self {
    Self {
      undo_capacity: DEFAULT_UNDO_CAPACITY,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
  pub fonts:  RegistryConfig,
  pub editor: EditorConfig,
}

impl Config {
  pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
    Ok(toml::from_str(source)?)
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| {
      ConfigError::Io {
        path: path.to_path_buf(),
        source,
      }
    })?;
    Self::from_toml(&source)
  }
}
