//! Shared engine handle for callers on more than one thread.
//!
//! A selection reads the minimum, increments it and returns its text. Two
//! callers interleaving those steps could both be handed the same line, so
//! every query on the shared handle runs under one lock.

use std::sync::{Arc, Mutex, MutexGuard};

use dialogue_content::{BiomeId, Context, DialogueUnit};

use crate::error::SelectionError;
use crate::selection::SelectionEngine;

/// A cloneable, thread-safe handle to a [`SelectionEngine`].
#[derive(Debug, Clone)]
pub struct SharedSelectionEngine(Arc<Mutex<SelectionEngine>>);

impl SharedSelectionEngine {
    /// Move an engine behind a shared lock.
    pub fn new(engine: SelectionEngine) -> Self {
        Self(Arc::new(Mutex::new(engine)))
    }

    /// See [`SelectionEngine::select_message`].
    pub fn select_message(
        &self,
        biome: &BiomeId,
        context: Context,
    ) -> Result<String, SelectionError> {
        self.lock().select_message(biome, context)
    }

    /// See [`SelectionEngine::select_dialogue`].
    pub fn select_dialogue(
        &self,
        biome: &BiomeId,
        context: Context,
    ) -> Result<DialogueUnit, SelectionError> {
        self.lock().select_dialogue(biome, context)
    }

    /// See [`SelectionEngine::occurrences`].
    pub fn occurrences(&self, biome: &BiomeId, context: Context) -> Option<Vec<u64>> {
        self.lock().occurrences(biome, context)
    }

    // Counters are consistent between calls, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, SelectionEngine> {
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl From<SelectionEngine> for SharedSelectionEngine {
    fn from(engine: SelectionEngine) -> Self {
        Self::new(engine)
    }
}
