//! Chunk-classify-merge scan for CpG islands.
//!
//! A scan runs the following stages in order:
//!
//! 1. [`chunker::chunk`] splits the sequence into fixed-size chunks.
//! 2. [`WorkerPool::score_all`] scores every chunk's C/G fraction in
//!    parallel, preserving chunk order.
//! 3. [`merger::merge`] joins runs of consecutive qualifying chunks into
//!    candidate islands.
//! 4. [`filter::filter`] drops candidates shorter than the minimum length.
//!
//! Every parameter is validated before the first stage runs, and any stage
//! failure aborts the whole scan.

pub mod chunker;
mod config;
pub mod filter;
pub mod merger;
mod pool;
pub mod scorer;

use log::*;

pub use config::{
    PoolStrategy,
    ScanConfig,
};
pub use pool::{
    score_all,
    WorkerPool,
};

use crate::data_structs::typedef::{
    DensityType,
    PosType,
};
use crate::data_structs::{
    Island,
    ScoredChunk,
    Sequence,
};
use crate::error::Result;

/// Islands found by a scan, with counts from the intermediate stages.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub islands:      Vec<Island>,
    pub n_chunks:     usize,
    pub n_qualifying: usize,
    pub n_candidates: usize,
}

/// Runs scans with a fixed [`ScanConfig`].
#[derive(Debug, Clone)]
pub struct IslandScanner {
    config: ScanConfig,
}

impl IslandScanner {
    /// Validates `config` up front so that every later scan fails fast only on
    /// its sequence.
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    fn pool(&self) -> WorkerPool {
        WorkerPool::new(self.config.workers).with_strategy(self.config.strategy)
    }

    /// Chunks and scores `sequence` without merging.
    pub fn score_chunks<'a>(
        &self,
        sequence: &'a Sequence,
    ) -> Result<Vec<ScoredChunk<'a>>> {
        let chunks = chunker::chunk(sequence, self.config.chunk_size)?;
        info!(
            "Sliced {} character sequence into {} chunks",
            sequence.len(),
            chunks.len()
        );
        self.pool().score_all(&chunks, self.config.threshold)
    }

    pub fn scan(
        &self,
        sequence: &Sequence,
    ) -> Result<ScanOutcome> {
        let pool = self.pool();
        info!(
            "Searching {} character sequence for CpG islands using {} threads ({} strategy), \
             threshold of {:.2}, min length of {}, and slicing into chunks of size {} or less",
            sequence.len(),
            pool.workers(),
            pool.strategy(),
            self.config.threshold,
            self.config.min_length,
            self.config.chunk_size
        );

        let scored = self.score_chunks(sequence)?;
        let n_qualifying = scored.iter().filter(|c| c.qualifies()).count();
        debug!("{} of {} chunks qualify", n_qualifying, scored.len());

        let candidates = merger::merge(&scored)?;
        let n_candidates = candidates.len();
        let islands = filter::filter(candidates, self.config.min_length)?;
        info!("Found {} CpG islands matching the criteria", islands.len());

        Ok(ScanOutcome {
            islands,
            n_chunks: scored.len(),
            n_qualifying,
            n_candidates,
        })
    }
}

/// Finds CpG islands in `sequence`.
///
/// Validates every argument, including the sequence alphabet, before any
/// chunk is scored. The result does not depend on `worker_count`.
///
/// # Example
///
/// ```
/// let islands = cpgscan::scan("CGCGAAAACGCG", 0.6, 4, 4, 2).unwrap();
/// let tuples: Vec<_> = islands.iter().map(|i| i.as_tuple()).collect();
/// assert_eq!(tuples, vec![("CGCG", 0, 4), ("CGCG", 8, 4)]);
/// ```
pub fn scan(
    sequence: &str,
    threshold: DensityType,
    chunk_size: PosType,
    min_length: PosType,
    worker_count: usize,
) -> Result<Vec<Island>> {
    let scanner = IslandScanner::new(ScanConfig::new(
        threshold,
        chunk_size,
        min_length,
        worker_count,
    ))?;
    let sequence = Sequence::try_new(sequence)?;
    Ok(scanner.scan(&sequence)?.islands)
}
