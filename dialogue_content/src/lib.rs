//! # Dialogue Content
//!
//! The content crate: everything the selection engine reads but never decides.
//! It names the places a player can be ([`BiomeId`]) and the moments a line is
//! shown ([`Context`]), defines the display-ready [`DialogueUnit`], and loads
//! the per-biome CSV files into a [`RawCatalog`].
//!
//! This crate holds no usage counters; balancing lives in `dialogue_engine`.

pub mod biome;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod loader;

pub use biome::*;
pub use config::*;
pub use dialogue::*;
pub use error::*;
pub use loader::*;
