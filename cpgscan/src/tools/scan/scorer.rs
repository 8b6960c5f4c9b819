use crate::data_structs::typedef::DensityType;
use crate::data_structs::{
    Chunk,
    ScoredChunk,
};
use crate::error::{
    Result,
    ScanError,
};

/// Scores `chunk` by its C/G fraction and classifies it against `threshold`.
///
/// A chunk qualifies when its score is greater than or equal to the
/// threshold. Zero-length chunks are never produced by the chunker and are
/// reported as [`ScanError::InvalidState`].
pub fn score<'a>(
    chunk: Chunk<'a>,
    threshold: DensityType,
) -> Result<ScoredChunk<'a>> {
    if chunk.is_empty() {
        return Err(ScanError::InvalidState(format!(
            "chunk {} at offset {} is empty",
            chunk.index(),
            chunk.start()
        )));
    }
    let score = chunk.gc_count() as DensityType / chunk.len() as DensityType;
    Ok(ScoredChunk::new(chunk, score, score >= threshold))
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::all_gc("CGCG", 1.0, true)]
    #[case::no_gc("AAAA", 0.0, false)]
    #[case::half("CGAT", 0.5, false)]
    #[case::at_threshold("CGCGCGAAAT", 0.6, true)]
    #[case::partial_last("CG", 1.0, true)]
    #[case::single_base("A", 0.0, false)]
    fn test_score(
        #[case] text: &str,
        #[case] expected: f64,
        #[case] qualifies: bool,
    ) {
        let scored = score(Chunk::new(0, 0, text), 0.6).unwrap();
        assert_approx_eq!(scored.score(), expected);
        assert_eq!(scored.qualifies(), qualifies);
        assert_eq!(scored.text(), text);
    }

    #[test]
    fn test_zero_threshold_qualifies_everything() {
        let scored = score(Chunk::new(0, 0, "ATAT"), 0.0).unwrap();
        assert!(scored.qualifies());
    }

    #[test]
    fn test_empty_chunk_is_invalid_state() {
        let err = score(Chunk::new(5, 20, ""), 0.6).unwrap_err();
        assert_eq!(
            err,
            ScanError::InvalidState("chunk 5 at offset 20 is empty".into())
        );
    }
}
