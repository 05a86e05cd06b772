//! Biomes and contexts - the two keys every dialogue line is filed under.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::UnknownContext;

/// Identifier for a biome (a location with its own dialogue pool).
///
/// Ids are lowercased on construction, so `"Forest"` and `"forest"` refer to
/// the same pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct BiomeId(String);

impl BiomeId {
    /// Create a biome id from any string-like name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_lowercase())
    }

    /// The normalised id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BiomeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BiomeId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for BiomeId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl std::fmt::Display for BiomeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The situation a line of dialogue is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Context {
    /// Arriving in a biome.
    Enter,
    /// Searching the current biome.
    Investigate,
    /// A glimpse of a biome before travelling there.
    Preview,
    /// Leaving a biome.
    Exit,
}

impl Context {
    /// All contexts, in source column order.
    pub const ALL: [Context; 4] = [
        Context::Enter,
        Context::Investigate,
        Context::Preview,
        Context::Exit,
    ];

    /// Column of this context in a dialogue CSV file.
    pub fn column(&self) -> usize {
        match self {
            Context::Enter => 0,
            Context::Investigate => 1,
            Context::Preview => 2,
            Context::Exit => 3,
        }
    }

    /// Short lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Context::Enter => "enter",
            Context::Investigate => "investigate",
            Context::Preview => "preview",
            Context::Exit => "exit",
        }
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Context {
    type Err = UnknownContext;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enter" | "entry" => Ok(Context::Enter),
            "investigate" => Ok(Context::Investigate),
            "preview" => Ok(Context::Preview),
            "exit" => Ok(Context::Exit),
            _ => Err(UnknownContext(s.to_string())),
        }
    }
}
