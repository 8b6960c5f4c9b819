/// Offsets and lengths within a [`Sequence`](super::Sequence).
pub type PosType = usize;
/// C/G fraction of a chunk, always in `[0.0, 1.0]`.
pub type DensityType = f64;

/// Accepted nucleotide alphabet, uppercase.
pub const NUCLEOTIDES: [u8; 4] = [b'C', b'G', b'A', b'T'];

/// Returns true for the bases counted towards a chunk's score.
#[inline]
pub fn is_gc(base: u8) -> bool {
    matches!(base, b'C' | b'G')
}
