//! Parallel chunk scoring.
//!
//! Results are always placed into a result slot array pre-sized to the
//! number of chunks and addressed by chunk position, so the output order is
//! the input order no matter which worker finishes first.

use std::any::Any;
use std::panic::{
    catch_unwind,
    AssertUnwindSafe,
};

use crossbeam::channel;
use itertools::Itertools;
use log::*;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use super::config::{
    check_positive,
    PoolStrategy,
};
use super::scorer::score;
use crate::data_structs::typedef::DensityType;
use crate::data_structs::{
    Chunk,
    ScoredChunk,
};
use crate::error::{
    Result,
    ScanError,
};
use crate::with_field_fn;

/// Fixed-size pool of scoring workers, alive for one call to
/// [`WorkerPool::score_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPool {
    workers:  usize,
    strategy: PoolStrategy,
}

impl WorkerPool {
    with_field_fn!(strategy, PoolStrategy);

    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            strategy: PoolStrategy::default(),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn strategy(&self) -> PoolStrategy {
        self.strategy
    }

    /// Scores every chunk exactly once and returns the results in input
    /// order.
    ///
    /// Parallelism is capped at the number of chunks. If any worker panics or
    /// any slot is left empty the whole call fails with
    /// [`ScanError::WorkerFailure`]; errors returned by the scorer itself are
    /// propagated unchanged. No partial result is ever returned.
    pub fn score_all<'a>(
        &self,
        chunks: &[Chunk<'a>],
        threshold: DensityType,
    ) -> Result<Vec<ScoredChunk<'a>>> {
        self.score_all_with(chunks, threshold, score)
    }

    /// [`WorkerPool::score_all`] with a custom per-chunk scorer.
    pub(crate) fn score_all_with<'a, F>(
        &self,
        chunks: &[Chunk<'a>],
        threshold: DensityType,
        scorer: F,
    ) -> Result<Vec<ScoredChunk<'a>>>
    where
        F: Fn(Chunk<'a>, DensityType) -> Result<ScoredChunk<'a>> + Sync,
    {
        check_positive("workers", self.workers)?;
        if chunks.is_empty() {
            return Ok(Vec::new());
        }

        if self.workers > chunks.len() {
            warn!(
                "{} workers requested for {} chunks, capping parallelism at {}",
                self.workers,
                chunks.len(),
                chunks.len()
            );
        }
        let workers = self.workers.min(chunks.len());
        debug!(
            "Scoring {} chunks on {} workers ({} strategy)",
            chunks.len(),
            workers,
            self.strategy
        );

        let slots = match self.strategy {
            PoolStrategy::Slots => score_into_slots(chunks, threshold, workers, &scorer)?,
            PoolStrategy::Channel => score_over_channel(chunks, threshold, workers, &scorer)?,
        };
        collect_slots(slots)
    }
}

/// Scores `chunks` on `workers` workers with the default strategy.
pub fn score_all<'a>(
    chunks: &[Chunk<'a>],
    threshold: DensityType,
    workers: usize,
) -> Result<Vec<ScoredChunk<'a>>> {
    WorkerPool::new(workers).score_all(chunks, threshold)
}

type Slots<'a> = Vec<Option<ScoredChunk<'a>>>;

/// Each rayon task owns exactly one slot, zipped with its chunk, so writes are
/// index-disjoint and need no lock.
fn score_into_slots<'a, F>(
    chunks: &[Chunk<'a>],
    threshold: DensityType,
    workers: usize,
    scorer: &F,
) -> Result<Slots<'a>>
where
    F: Fn(Chunk<'a>, DensityType) -> Result<ScoredChunk<'a>> + Sync,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("cpgscan-worker-{i}"))
        .build()
        .map_err(|e| ScanError::WorkerFailure(format!("failed to build worker pool: {e}")))?;

    let mut slots: Slots<'a> = vec![None; chunks.len()];
    pool.install(|| {
        slots
            .par_iter_mut()
            .zip(chunks.par_iter())
            .try_for_each(|(slot, chunk)| {
                *slot = Some(score_guarded(scorer, *chunk, threshold)?);
                Ok::<(), ScanError>(())
            })
    })?;
    Ok(slots)
}

/// Workers pull `(position, chunk)` tasks from a bounded channel and send back
/// `(position, result)`; the caller places every result into its slot.
fn score_over_channel<'a, F>(
    chunks: &[Chunk<'a>],
    threshold: DensityType,
    workers: usize,
    scorer: &F,
) -> Result<Slots<'a>>
where
    F: Fn(Chunk<'a>, DensityType) -> Result<ScoredChunk<'a>> + Sync,
{
    let (task_tx, task_rx) = channel::bounded::<(usize, Chunk<'a>)>(workers * 2);
    let (result_tx, result_rx) = channel::unbounded::<(usize, Result<ScoredChunk<'a>>)>();

    std::thread::scope(|scope| -> Result<Slots<'a>> {
        let handles = (0..workers)
            .map(|i| {
                let task_rx = task_rx.clone();
                let result_tx = result_tx.clone();
                std::thread::Builder::new()
                    .name(format!("cpgscan-worker-{i}"))
                    .spawn_scoped(scope, move || {
                        for (pos, chunk) in task_rx.iter() {
                            if result_tx.send((pos, scorer(chunk, threshold))).is_err() {
                                break;
                            }
                        }
                    })
                    .map_err(|e| {
                        ScanError::WorkerFailure(format!("failed to spawn worker {i}: {e}"))
                    })
            })
            .collect::<Vec<_>>();
        drop(task_rx);
        drop(result_tx);

        // On a spawn failure no task is sent and the scope joins the workers
        // that did start.
        let spawned = handles.into_iter().collect::<Result<Vec<_>>>();

        if spawned.is_ok() {
            for task in chunks.iter().copied().enumerate() {
                // Fails only once every worker has exited.
                if task_tx.send(task).is_err() {
                    break;
                }
            }
        }
        drop(task_tx);

        let mut slots: Slots<'a> = vec![None; chunks.len()];
        let mut first_error = None;
        for (pos, result) in result_rx.iter() {
            match result {
                Ok(scored) => {
                    if let Some(slot) = slots.get_mut(pos) {
                        *slot = Some(scored);
                    }
                },
                Err(e) => {
                    first_error.get_or_insert(e);
                },
            }
        }

        let panics = spawned?
            .into_iter()
            .filter_map(|handle| handle.join().err())
            .map(panic_message)
            .collect_vec();
        if !panics.is_empty() {
            return Err(ScanError::WorkerFailure(format!(
                "{} worker(s) panicked: {}",
                panics.len(),
                panics.join("; ")
            )));
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(slots),
        }
    })
}

/// Runs `scorer`, turning a panic into [`ScanError::WorkerFailure`].
fn score_guarded<'a, F>(
    scorer: &F,
    chunk: Chunk<'a>,
    threshold: DensityType,
) -> Result<ScoredChunk<'a>>
where
    F: Fn(Chunk<'a>, DensityType) -> Result<ScoredChunk<'a>> + Sync,
{
    catch_unwind(AssertUnwindSafe(|| scorer(chunk, threshold))).unwrap_or_else(|payload| {
        Err(ScanError::WorkerFailure(format!(
            "worker panicked on chunk {}: {}",
            chunk.index(),
            panic_message(payload)
        )))
    })
}

fn collect_slots(slots: Slots<'_>) -> Result<Vec<ScoredChunk<'_>>> {
    slots
        .into_iter()
        .enumerate()
        .map(|(pos, slot)| {
            slot.ok_or_else(|| {
                ScanError::WorkerFailure(format!("no result was produced for chunk {pos}"))
            })
        })
        .collect()
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    }
    else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    }
    else {
        "unknown panic".to_string()
    }
}
