#![allow(dead_code)]

use cpgscan::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn random_sequence(
    seed: u64,
    length: usize,
) -> Sequence {
    generate_random_sequence(&mut seeded_rng(seed), length).unwrap()
}

/// Random sequence with GC-rich stretches planted at random positions, so
/// that realistic thresholds produce islands.
pub fn planted_sequence(
    seed: u64,
    length: usize,
    n_islands: usize,
    island_length: usize,
) -> Sequence {
    let mut rng = seeded_rng(seed);
    let mut bases = generate_random_sequence(&mut rng, length)
        .unwrap()
        .into_inner()
        .into_bytes();
    for _ in 0..n_islands {
        let start = rng.gen_range(0..length.saturating_sub(island_length).max(1));
        for base in bases.iter_mut().skip(start).take(island_length) {
            *base = if rng.gen_bool(0.5) { b'C' } else { b'G' };
        }
    }
    Sequence::try_new(String::from_utf8(bases).unwrap()).unwrap()
}

pub fn tuples(islands: &[Island]) -> Vec<(String, usize, usize)> {
    islands.iter().cloned().map(Into::into).collect()
}
