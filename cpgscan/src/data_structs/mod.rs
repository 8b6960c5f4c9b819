//! Core data structures of the scanner.
//!
//! - [`Sequence`]: validated, uppercase nucleotide input.
//! - [`Chunk`] and [`ScoredChunk`]: fixed-size windows of a sequence, before
//!   and after scoring.
//! - [`CandidateIsland`] and [`Island`]: merged runs of qualifying chunks,
//!   before and after length filtering.
//! - [`typedef`]: type aliases for offsets and densities.

mod chunk;
mod island;
mod sequence;
pub mod typedef;


pub use chunk::{
    Chunk,
    ScoredChunk,
};
pub use island::{
    CandidateIsland,
    Island,
};
pub use sequence::Sequence;
