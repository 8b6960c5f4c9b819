//! Analytical tools built on the core data structures.
//!
//! - [`scan`]: parallel chunked scan for CpG islands.

pub mod scan;
