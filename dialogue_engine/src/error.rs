//! Error types for the selection engine.

use dialogue_content::{BiomeId, ConfigError, Context, LoadError};

/// Errors returned by a selection query.
///
/// Neither is retried or replaced with default text: both point at a caller
/// mistake or a gap in the authored content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("no dialogue loaded for biome '{biome}' ({context})")]
    UnknownBiome { biome: BiomeId, context: Context },

    #[error("dialogue pool for biome '{biome}' ({context}) is empty")]
    EmptyPool { biome: BiomeId, context: Context },
}

/// Any error the engine's entry points can return.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

pub type EngineResult<T> = Result<T, EngineError>;
