//! Configuration
//!
//! A small TOML document naming the archive to mount and, optionally, a
//! startup script whose lines run before the interactive session:
//!
//! ```toml
//! archive = "fs.zip"
//! startup_script = "init.vsh"
//! autosave = false
//! create_if_missing = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::archive::LoadOptions;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Zip file backing the filesystem.
    pub archive: PathBuf,
    /// Lines fed through the dispatcher before the session starts.
    #[serde(default)]
    pub startup_script: Option<PathBuf>,
    /// Flush after every successful mkdir/nano/mv.
    #[serde(default)]
    pub autosave: bool,
    /// Treat a missing archive as empty instead of failing.
    #[serde(default)]
    pub create_if_missing: bool,
}

impl Config {
    pub fn new(archive: impl Into<PathBuf>) -> Self {
        Self {
            archive: archive.into(),
            startup_script: None,
            autosave: false,
            create_if_missing: false,
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_string(),
            source,
        })
    }

    /// Read a config file. Relative paths in it are taken relative to the
    /// file's own directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        if let Some(base) = path.parent() {
            config.archive = anchor(base, &config.archive);
            config.startup_script = config.startup_script.map(|s| anchor(base, &s));
        }
        Ok(config)
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            create_if_missing: self.create_if_missing,
        }
    }
}

fn anchor(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
