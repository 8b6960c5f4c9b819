use crate::data_structs::typedef::PosType;
use crate::data_structs::{
    Chunk,
    Sequence,
};
use crate::error::Result;
use crate::tools::scan::config::check_positive;

/// Splits `sequence` into consecutive chunks of `chunk_size` bases.
///
/// Chunk `i` starts at `i * chunk_size`. Only the last chunk may be shorter,
/// and a `chunk_size` larger than the sequence yields a single chunk.
///
/// # Errors
///
/// [`ScanError::InvalidArgument`](crate::error::ScanError::InvalidArgument)
/// if `chunk_size` is zero.
pub fn chunk(
    sequence: &Sequence,
    chunk_size: PosType,
) -> Result<Vec<Chunk<'_>>> {
    check_positive("chunk_size", chunk_size)?;

    // The alphabet is ASCII, so byte windows are valid str boundaries.
    let text = sequence.as_str();
    let mut chunks = Vec::with_capacity(n_chunks(text.len(), chunk_size));
    chunks.extend(
        (0..text.len())
            .step_by(chunk_size)
            .enumerate()
            .map(|(index, start)| {
                let end = text.len().min(start.saturating_add(chunk_size));
                Chunk::new(index, start, &text[start..end])
            }),
    );
    Ok(chunks)
}

/// Number of chunks [`chunk`] produces for a sequence of `length` bases.
/// `chunk_size` must be non-zero.
pub fn n_chunks(
    length: PosType,
    chunk_size: PosType,
) -> usize {
    length.div_ceil(chunk_size)
}
