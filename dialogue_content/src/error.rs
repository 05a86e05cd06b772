//! Error types for content loading and configuration.
//! One enum per concern, `thiserror` only.

use std::path::PathBuf;

use crate::biome::{BiomeId, Context};

/// Errors raised while turning dialogue sources into a catalog.
///
/// Every variant is fatal to startup: a catalog is never built from a
/// partially loaded set of sources.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read dialogue source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV in dialogue source for biome '{biome}': {source}")]
    Csv {
        biome: BiomeId,
        #[source]
        source: csv::Error,
    },

    #[error("malformed dialogue source for biome '{biome}': line {line} has {columns} columns, expected at least 4")]
    MalformedRow {
        biome: BiomeId,
        /// 1-based line in the source file.
        line: u64,
        columns: usize,
    },

    #[error("malformed dialogue source for biome '{biome}': line {line} has an empty {context} cell")]
    EmptyCell {
        biome: BiomeId,
        /// 1-based line in the source file.
        line: u64,
        context: Context,
    },

    #[error("malformed dialogue source for biome '{biome}': no data rows after the header")]
    NoDataRows { biome: BiomeId },

    #[error("biome '{biome}' is provided by more than one dialogue source")]
    DuplicateBiome { biome: BiomeId },

    #[error("cannot derive a biome name from dialogue source {path}")]
    InvalidSourceName { path: PathBuf },
}

/// Errors raised while loading or validating a [`ContentConfig`](crate::ContentConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid config value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("cannot list dialogue directory {path}: {source}")]
    ContentDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A context name that is not one of `enter`, `investigate`, `preview`, `exit`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialogue context '{0}'")]
pub struct UnknownContext(pub String);
