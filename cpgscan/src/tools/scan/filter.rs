use crate::data_structs::typedef::PosType;
use crate::data_structs::{
    CandidateIsland,
    Island,
};
use crate::error::Result;
use crate::tools::scan::config::check_positive;

/// Keeps the candidates at least `min_length` bases long, in order.
pub fn filter(
    candidates: Vec<CandidateIsland>,
    min_length: PosType,
) -> Result<Vec<Island>> {
    check_positive("min_length", min_length)?;
    Ok(candidates
        .into_iter()
        .filter(|c| c.len() >= min_length)
        .map(CandidateIsland::into_island)
        .collect())
}
