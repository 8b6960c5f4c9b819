use log::*;

use crate::data_structs::{
    CandidateIsland,
    ScoredChunk,
};
use crate::error::{
    Result,
    ScanError,
};

/// Merges runs of consecutive qualifying chunks into candidate islands.
///
/// A single pass keeps one open run. A non-qualifying chunk closes it, and a
/// run still open after the last chunk is closed and emitted as well, so
/// every candidate is maximal.
///
/// # Errors
///
/// [`ScanError::InvalidState`] if a chunk does not start where the previous
/// one ended.
pub fn merge(scored_chunks: &[ScoredChunk<'_>]) -> Result<Vec<CandidateIsland>> {
    let mut candidates = Vec::new();
    let mut open: Option<CandidateIsland> = None;
    let mut expected_start = scored_chunks.first().map(|c| c.start());

    for chunk in scored_chunks {
        if Some(chunk.start()) != expected_start {
            return Err(ScanError::InvalidState(format!(
                "chunk {} starts at {} but the previous chunk ended at {}",
                chunk.index(),
                chunk.start(),
                expected_start.unwrap_or_default()
            )));
        }
        expected_start = Some(chunk.end());

        if chunk.qualifies() {
            match open.as_mut() {
                Some(run) => run.extend(chunk),
                None => open = Some(CandidateIsland::open(chunk)),
            }
        }
        else if let Some(run) = open.take() {
            candidates.push(run);
        }
    }
    if let Some(run) = open {
        candidates.push(run);
    }

    debug!(
        "Merged {} chunks into {} candidate islands",
        scored_chunks.len(),
        candidates.len()
    );
    Ok(candidates)
}
