use rand::seq::SliceRandom;
use rand::Rng;

use crate::data_structs::typedef::NUCLEOTIDES;
use crate::data_structs::Sequence;
use crate::error::{
    Result,
    ScanError,
};

/// Generates a uniformly random sequence of `length` bases from `rng`.
///
/// The random source is passed explicitly so that a seeded generator yields
/// the same sequence on every call.
pub fn generate_random_sequence<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> Result<Sequence> {
    if length == 0 {
        return Err(ScanError::invalid_argument(
            "length",
            "random sequence length must be at least 1",
        ));
    }
    let seq: String = (0..length)
        .map(|_| *NUCLEOTIDES.choose(rng).unwrap_or(&b'A') as char)
        .collect();
    Sequence::try_new(seq)
}
