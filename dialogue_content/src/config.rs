//! Content configuration - where dialogue sources live and how they render.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`DIALOGUE_*`)
//! 2. Config file (`dialogue.toml`)
//! 3. Compiled defaults

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable overriding [`ContentConfig::content_dir`].
pub const CONTENT_DIR_ENV: &str = "DIALOGUE_CONTENT_DIR";

/// Extension of dialogue source files.
pub const SOURCE_EXTENSION: &str = "csv";

/// Configuration for locating and presenting dialogue content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding one `<biome>.csv` per biome.
    pub content_dir: PathBuf,

    /// Biomes to load, in order. Empty means every CSV file in `content_dir`.
    pub biomes: Vec<String>,

    /// Embed accent colour as `0xRRGGBB`.
    pub embed_colour: Option<u32>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("dialogue"),
            biomes: Vec::new(),
            embed_colour: None,
        }
    }
}

impl ContentConfig {
    /// Load configuration from a TOML file, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let mut config: ContentConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (no environment overrides).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ContentConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `DIALOGUE_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var(CONTENT_DIR_ENV) {
            if !dir.trim().is_empty() {
                self.content_dir = PathBuf::from(dir);
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "content_dir".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for biome in &self.biomes {
            let name = biome.trim().to_lowercase();
            if name.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "biomes".to_string(),
                    message: "biome names must not be empty".to_string(),
                });
            }
            if !seen.insert(name) {
                return Err(ConfigError::ValidationFailed {
                    field: "biomes".to_string(),
                    message: format!("biome '{}' is listed more than once", biome),
                });
            }
        }

        if let Some(colour) = self.embed_colour {
            if colour > 0xFF_FFFF {
                return Err(ConfigError::ValidationFailed {
                    field: "embed_colour".to_string(),
                    message: "must be a 24-bit RGB value".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Resolve the dialogue source files to load, in load order.
    ///
    /// Listed biomes map to `<content_dir>/<biome>.csv`; with no list, every
    /// CSV file in `content_dir` is used, sorted by file name.
    pub fn source_paths(&self) -> Result<Vec<PathBuf>, ConfigError> {
        if !self.biomes.is_empty() {
            return Ok(self
                .biomes
                .iter()
                .map(|biome| {
                    self.content_dir
                        .join(format!("{}.{}", biome.trim(), SOURCE_EXTENSION))
                })
                .collect());
        }

        let entries = std::fs::read_dir(&self.content_dir).map_err(|source| ConfigError::ContentDir {
            path: self.content_dir.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ConfigError::ContentDir {
                path: self.content_dir.clone(),
                source,
            })?;
            let path = entry.path();
            let is_source = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION));
            if is_source {
                paths.push(path);
            }
        }
        paths.sort();

        Ok(paths)
    }
}
