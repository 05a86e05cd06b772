//! Selection Engine - chooses which line of dialogue to show next.
//!
//! The selection rule works as follows:
//! 1. **Lookup**: Resolve the pool for the requested biome and context
//! 2. **Scan**: Walk the pool once, keeping the first line with the fewest uses
//! 3. **Count**: Increment that line's counter by one
//! 4. **Return**: Hand back the line's text unchanged
//!
//! Ties go to the earliest row of the source file, so a fresh pool is shown
//! in file order and then cycles.

use std::path::Path;

use dialogue_content::{
    is_pointer, load_sources, BiomeId, ContentConfig, Context, DialogueUnit, LoadError,
    RawCatalog,
};
use tracing::{debug, warn};

use crate::catalog::{Catalog, CountedEntry};
use crate::error::{EngineResult, SelectionError};

/// Load dialogue sources and build a ready-to-query engine.
///
/// Fails with the first invalid source; no engine is built from a partial
/// catalog.
pub fn load_catalog<I, P>(paths: I) -> Result<SelectionEngine, LoadError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    load_sources(paths).map(SelectionEngine::new)
}

/// Build an engine from the sources a [`ContentConfig`] points at.
pub fn load_from_config(config: &ContentConfig) -> EngineResult<SelectionEngine> {
    let paths = config.source_paths()?;
    Ok(load_catalog(paths)?)
}

/// Owns the dialogue catalog and its usage counters.
#[derive(Debug)]
pub struct SelectionEngine {
    catalog: Catalog,
}

impl SelectionEngine {
    /// Create an engine over a loaded catalog, with every counter at zero.
    pub fn new(raw: RawCatalog) -> Self {
        Self {
            catalog: Catalog::from_raw(raw),
        }
    }

    /// Select the least-shown line for a biome and context.
    ///
    /// # Algorithm
    ///
    /// 1. Find the line with the fewest uses, the earliest row winning ties
    /// 2. Count one use of it
    /// 3. Return its text
    ///
    /// Lines starting with `@` are references to other lines. They are returned
    /// as written; nothing resolves them yet.
    pub fn select_message(
        &mut self,
        biome: &BiomeId,
        context: Context,
    ) -> Result<String, SelectionError> {
        let pool = self
            .catalog
            .pool_mut(biome, context)
            .ok_or_else(|| SelectionError::UnknownBiome {
                biome: biome.clone(),
                context,
            })?;

        let entry = least_used(pool).ok_or_else(|| SelectionError::EmptyPool {
            biome: biome.clone(),
            context,
        })?;
        entry.record_use();

        debug!(
            %biome,
            %context,
            occurrences = entry.occurrences(),
            "selected dialogue"
        );
        if is_pointer(entry.text()) {
            warn!(%biome, %context, text = entry.text(), "selected dialogue is an unresolved reference");
        }

        Ok(entry.text().to_string())
    }

    /// Select a line and wrap it as a [`DialogueUnit`].
    ///
    /// The unit has no title or image; add them with the unit's builders.
    pub fn select_dialogue(
        &mut self,
        biome: &BiomeId,
        context: Context,
    ) -> Result<DialogueUnit, SelectionError> {
        self.select_message(biome, context).map(DialogueUnit::new)
    }

    /// Biomes the engine can answer for, sorted.
    pub fn biomes(&self) -> Vec<&BiomeId> {
        self.catalog.biomes()
    }

    /// Usage counts of a pool, in source row order.
    pub fn occurrences(&self, biome: &BiomeId, context: Context) -> Option<Vec<u64>> {
        self.catalog
            .pool(biome, context)
            .map(|pool| pool.iter().map(CountedEntry::occurrences).collect())
    }

    /// Number of lines in a pool.
    pub fn pool_len(&self, biome: &BiomeId, context: Context) -> Option<usize> {
        self.catalog.pool(biome, context).map(<[CountedEntry]>::len)
    }
}

/// First entry with the lowest count. `min_by_key` keeps the first of equal
/// minima, which is the row-order tie-break.
fn least_used(pool: &mut [CountedEntry]) -> Option<&mut CountedEntry> {
    pool.iter_mut().min_by_key(|entry| entry.occurrences())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialogue_content::BiomeDialogue;

    const CAVE: &str = "entry,investigate,preview,exit\ne1,i1,p1,x1\ne2,i2,p2,x2\n";

    const FOREST: &str = "\
entry,investigate,preview,exit
f-e1,f-i1,f-p1,f-x1
f-e2,f-i2,f-p2,f-x2
f-e3,f-i3,f-p3,f-x3
";

    fn engine_with(sources: &[(&str, &str)]) -> SelectionEngine {
        let mut raw = RawCatalog::new();
        for (name, csv) in sources {
            let biome = BiomeId::new(name);
            let dialogue = RawCatalog::read_source(&biome, csv.as_bytes()).unwrap();
            raw.add_biome(biome, dialogue).unwrap();
        }
        SelectionEngine::new(raw)
    }

    fn spread(counts: &[u64]) -> u64 {
        counts.iter().max().unwrap() - counts.iter().min().unwrap()
    }

    #[test]
    fn test_round_trip_cycles_least_used() {
        let mut engine = engine_with(&[("cave", CAVE)]);
        let cave = BiomeId::new("cave");

        let picks: Vec<_> = (0..3)
            .map(|_| engine.select_message(&cave, Context::Enter).unwrap())
            .collect();

        assert_eq!(picks, ["e1", "e2", "e1"]);
        assert_eq!(engine.occurrences(&cave, Context::Enter).unwrap(), [2, 1]);
    }

    #[test]
    fn test_fresh_pool_follows_row_order() {
        let mut engine = engine_with(&[("forest", FOREST)]);
        let forest = BiomeId::new("forest");

        let picks: Vec<_> = (0..7)
            .map(|_| engine.select_message(&forest, Context::Investigate).unwrap())
            .collect();

        assert_eq!(
            picks,
            ["f-i1", "f-i2", "f-i3", "f-i1", "f-i2", "f-i3", "f-i1"]
        );
    }

    #[test]
    fn test_balance_invariant_holds_after_every_query() {
        let mut engine = engine_with(&[("forest", FOREST)]);
        let forest = BiomeId::new("forest");

        for n in 1..=50u64 {
            engine.select_message(&forest, Context::Exit).unwrap();

            let counts = engine.occurrences(&forest, Context::Exit).unwrap();
            assert!(spread(&counts) <= 1, "unbalanced after {n} queries: {counts:?}");
            assert_eq!(counts.iter().sum::<u64>(), n);
        }
    }

    #[test]
    fn test_query_only_touches_its_own_pool() {
        let mut engine = engine_with(&[("cave", CAVE), ("forest", FOREST)]);
        let cave = BiomeId::new("cave");
        let forest = BiomeId::new("forest");

        engine.select_message(&cave, Context::Preview).unwrap();
        engine.select_message(&cave, Context::Preview).unwrap();

        assert_eq!(engine.occurrences(&cave, Context::Preview).unwrap(), [1, 1]);
        for context in [Context::Enter, Context::Investigate, Context::Exit] {
            assert_eq!(engine.occurrences(&cave, context).unwrap(), [0, 0]);
        }
        for context in Context::ALL {
            assert_eq!(engine.occurrences(&forest, context).unwrap(), [0, 0, 0]);
        }
    }

    #[test]
    fn test_biome_lookup_is_case_insensitive() {
        let mut engine = engine_with(&[("Cave", CAVE)]);

        assert_eq!(engine.select_message(&BiomeId::new("CAVE"), Context::Exit).unwrap(), "x1");
        assert_eq!(engine.select_message(&"cave".into(), Context::Exit).unwrap(), "x2");
    }

    #[test]
    fn test_unknown_biome() {
        let mut engine = engine_with(&[("cave", CAVE)]);
        let unknown = BiomeId::new("unknown");

        let err = engine.select_message(&unknown, Context::Enter).unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownBiome {
                biome: unknown,
                context: Context::Enter,
            }
        );
    }

    #[test]
    fn test_empty_pool() {
        let mut raw = RawCatalog::new();
        raw.add_biome(BiomeId::new("void"), BiomeDialogue::default()).unwrap();
        let mut engine = SelectionEngine::new(raw);

        let err = engine
            .select_message(&BiomeId::new("void"), Context::Investigate)
            .unwrap_err();
        assert!(matches!(err, SelectionError::EmptyPool { context: Context::Investigate, .. }));
        assert_eq!(engine.pool_len(&BiomeId::new("void"), Context::Investigate), Some(0));
    }

    #[test]
    fn test_pointer_lines_are_returned_verbatim() {
        let source = "entry,investigate,preview,exit\n@forest_intro,i,p,x\n";
        let mut engine = engine_with(&[("glade", source)]);

        let text = engine.select_message(&BiomeId::new("glade"), Context::Enter).unwrap();
        assert_eq!(text, "@forest_intro");
        assert!(is_pointer(&text));
    }

    #[test]
    fn test_select_dialogue_wraps_text() {
        let mut engine = engine_with(&[("cave", CAVE)]);

        let unit = engine
            .select_dialogue(&BiomeId::new("cave"), Context::Enter)
            .unwrap()
            .with_title("The Cave");

        assert_eq!(unit, DialogueUnit::new("e1").with_title("The Cave"));
        assert_eq!(engine.occurrences(&BiomeId::new("cave"), Context::Enter).unwrap(), [1, 0]);
    }

    #[test]
    fn test_introspection() {
        let engine = engine_with(&[("forest", FOREST), ("cave", CAVE)]);

        assert_eq!(engine.biomes(), [&BiomeId::new("cave"), &BiomeId::new("forest")]);
        assert_eq!(engine.pool_len(&BiomeId::new("forest"), Context::Enter), Some(3));
        assert_eq!(engine.pool_len(&BiomeId::new("lake"), Context::Enter), None);
        assert!(engine.occurrences(&BiomeId::new("lake"), Context::Enter).is_none());
    }

    #[test]
    fn test_least_used_prefers_first_minimum() {
        let mut pool: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|text| CountedEntry::new(text.to_string()))
            .collect();
        pool[0].record_use();

        assert_eq!(least_used(&mut pool).unwrap().text(), "b");
        assert!(least_used(&mut []).is_none());
    }
}
