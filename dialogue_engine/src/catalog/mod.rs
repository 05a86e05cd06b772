//! Catalog - the counted dialogue pools owned by a selection engine.
//!
//! Four mappings, one per context, each from biome to an ordered pool of
//! counted lines. Pool membership and text are fixed at construction; only
//! the counters move.

mod counted;

pub(crate) use counted::CountedEntry;

use std::collections::HashMap;

use dialogue_content::{BiomeId, Context, RawCatalog};

#[derive(Debug, Default)]
pub(crate) struct Catalog {
    pools: [HashMap<BiomeId, Vec<CountedEntry>>; 4],
}

impl Catalog {
    /// Wrap every raw line in a fresh counter, keeping row order.
    pub(crate) fn from_raw(raw: RawCatalog) -> Self {
        let mut catalog = Self::default();

        for (context, bucket) in raw.into_buckets() {
            catalog.pools[context.column()] = bucket
                .into_iter()
                .map(|(biome, lines)| {
                    let pool = lines.into_iter().map(CountedEntry::new).collect::<Vec<_>>();
                    (biome, pool)
                })
                .collect();
        }

        catalog
    }

    pub(crate) fn pool(&self, biome: &BiomeId, context: Context) -> Option<&[CountedEntry]> {
        self.pools[context.column()].get(biome).map(Vec::as_slice)
    }

    pub(crate) fn pool_mut(
        &mut self,
        biome: &BiomeId,
        context: Context,
    ) -> Option<&mut [CountedEntry]> {
        self.pools[context.column()]
            .get_mut(biome)
            .map(Vec::as_mut_slice)
    }

    /// Biomes present in the catalog, sorted.
    pub(crate) fn biomes(&self) -> Vec<&BiomeId> {
        let mut biomes: Vec<_> = self.pools[0].keys().collect();
        biomes.sort();
        biomes
    }
}
