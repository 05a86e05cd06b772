//! # Dialogue Engine
//!
//! Picks the line of dialogue shown when a player enters, investigates,
//! previews or leaves a biome. Selection is deterministic: every line carries
//! a usage counter and the least-used line wins, ties going to the earliest
//! row in the source file. Over a session each pool cycles through all of
//! its lines before any line repeats.
//!
//! ## Core Components
//!
//! - **catalog**: Counted dialogue pools keyed by biome and context
//! - **selection**: The [`SelectionEngine`] query and catalog loading entry points
//! - **shared**: A mutex-guarded handle for engines used from several threads

mod catalog;
pub mod error;
pub mod selection;
pub mod shared;

pub use dialogue_content::{
    is_pointer, BiomeId, ConfigError, ContentConfig, Context, DialogueUnit, LoadError,
};
pub use error::*;
pub use selection::*;
pub use shared::*;
