//! Catalog loader - reads per-biome CSV files into raw dialogue buckets.
//!
//! Each source file holds one biome. The file stem is the biome id, the first
//! row is a header, and every following row carries one line per context in
//! the fixed column order `enter, investigate, preview, exit`. Row order is
//! preserved because the selection engine breaks ties by it.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::biome::{BiomeId, Context};
use crate::error::LoadError;

/// Number of columns every data row must provide.
pub const REQUIRED_COLUMNS: usize = Context::ALL.len();

/// The dialogue lines of a single biome, one list per context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BiomeDialogue {
    lines: [Vec<String>; 4],
}

impl BiomeDialogue {
    /// Lines for one context, in source row order.
    pub fn lines(&self, context: Context) -> &[String] {
        &self.lines[context.column()]
    }

    /// Number of data rows read.
    pub fn row_count(&self) -> usize {
        self.lines[0].len()
    }

    fn push_row(&mut self, row: [String; 4]) {
        for (bucket, line) in self.lines.iter_mut().zip(row) {
            bucket.push(line);
        }
    }
}

/// Raw dialogue text for every loaded biome, bucketed by context.
///
/// Every biome present in one bucket is present in all four.
#[derive(Debug, Clone, Default)]
pub struct RawCatalog {
    buckets: [HashMap<BiomeId, Vec<String>>; 4],
}

impl RawCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one biome's CSV source from any reader.
    ///
    /// Fails on a row with fewer than four columns, on an empty dialogue cell,
    /// or when the source has no data rows after the header. Columns past the
    /// fourth are ignored.
    pub fn read_source<R: Read>(biome: &BiomeId, reader: R) -> Result<BiomeDialogue, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut dialogue = BiomeDialogue::default();

        for (index, record) in csv_reader.records().enumerate() {
            let record = record.map_err(|source| LoadError::Csv {
                biome: biome.clone(),
                source,
            })?;
            // Blank lines are skipped by the reader, so count file lines, not records.
            let line = record
                .position()
                .map(|position| position.line())
                .unwrap_or(index as u64 + 2);

            if record.len() < REQUIRED_COLUMNS {
                return Err(LoadError::MalformedRow {
                    biome: biome.clone(),
                    line,
                    columns: record.len(),
                });
            }

            if let Some(context) = Context::ALL
                .into_iter()
                .find(|context| record[context.column()].is_empty())
            {
                return Err(LoadError::EmptyCell {
                    biome: biome.clone(),
                    line,
                    context,
                });
            }

            dialogue.push_row(std::array::from_fn(|column| record[column].to_string()));
        }

        if dialogue.row_count() == 0 {
            return Err(LoadError::NoDataRows {
                biome: biome.clone(),
            });
        }

        debug!(%biome, rows = dialogue.row_count(), "read dialogue source");
        Ok(dialogue)
    }

    /// Add a biome's dialogue to all four buckets.
    pub fn add_biome(&mut self, biome: BiomeId, dialogue: BiomeDialogue) -> Result<(), LoadError> {
        if self.contains(&biome) {
            return Err(LoadError::DuplicateBiome { biome });
        }

        for (bucket, lines) in self.buckets.iter_mut().zip(dialogue.lines) {
            bucket.insert(biome.clone(), lines);
        }
        Ok(())
    }

    /// Whether a biome has been loaded.
    pub fn contains(&self, biome: &BiomeId) -> bool {
        self.buckets[0].contains_key(biome)
    }

    /// Lines for a biome and context, in source row order.
    pub fn lines(&self, biome: &BiomeId, context: Context) -> Option<&[String]> {
        self.buckets[context.column()]
            .get(biome)
            .map(|lines| lines.as_slice())
    }

    /// All loaded biomes, sorted.
    pub fn biomes(&self) -> Vec<&BiomeId> {
        let mut biomes: Vec<_> = self.buckets[0].keys().collect();
        biomes.sort();
        biomes
    }

    /// Number of loaded biomes.
    pub fn len(&self) -> usize {
        self.buckets[0].len()
    }

    /// Whether no biome has been loaded.
    pub fn is_empty(&self) -> bool {
        self.buckets[0].is_empty()
    }

    /// Consume the catalog, yielding each context with its bucket.
    pub fn into_buckets(self) -> impl Iterator<Item = (Context, HashMap<BiomeId, Vec<String>>)> {
        Context::ALL.into_iter().zip(self.buckets)
    }
}

/// Derive a biome id from a source path (its file stem).
pub fn biome_from_path(path: &Path) -> Result<BiomeId, LoadError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.trim().is_empty())
        .map(BiomeId::new)
        .ok_or_else(|| LoadError::InvalidSourceName {
            path: path.to_path_buf(),
        })
}

/// Load every source file into a [`RawCatalog`].
///
/// Stops at the first invalid source; nothing is returned for a partial load.
pub fn load_sources<I, P>(paths: I) -> Result<RawCatalog, LoadError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut catalog = RawCatalog::new();
    let mut total_rows = 0;

    for path in paths {
        let path = path.as_ref();
        let biome = biome_from_path(path)?;

        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dialogue = RawCatalog::read_source(&biome, file)?;

        total_rows += dialogue.row_count();
        catalog.add_biome(biome, dialogue)?;
    }

    info!(biomes = catalog.len(), rows = total_rows, "dialogue catalog loaded");
    Ok(catalog)
}
