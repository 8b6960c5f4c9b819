//! # cpgscan
//!
//! `cpgscan` locates CpG islands in a nucleotide sequence: contiguous regions
//! whose C/G content reaches a configurable threshold and whose length
//! reaches a configurable minimum.
//!
//! The sequence is cut into fixed-size chunks, each chunk's C/G fraction is
//! scored on a worker pool, runs of consecutive qualifying chunks are merged
//! into candidate islands, and candidates shorter than the minimum length are
//! dropped. The result never depends on the number of workers.
//!
//! The default number of workers can be configured with the
//! `CPGSCAN_NUM_THREADS` environment variable.
//!
//! ## Structure
//!
//! * [`data_structs`]: sequences, chunks and islands.
//! * [`tools`]: the scan pipeline and its worker pool.
//! * [`io`]: rendering of scan results.
//! * [`utils`]: builder macros, defaults and random sequence generation.
//!
//! ## Usage
//!
//! ```
//! use cpgscan::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let sequence = Sequence::try_new("cgcgcgcgAAAAcg")?;
//!     let scanner = IslandScanner::new(
//!         ScanConfig::default()
//!             .with_threshold(0.6)
//!             .with_chunk_size(4)
//!             .with_min_length(8)
//!             .with_workers(2),
//!     )?;
//!
//!     let outcome = scanner.scan(&sequence)?;
//!     assert_eq!(format_islands(&outcome.islands), "[(CGCGCGCG, 0, 8)]");
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod error;
pub mod io;
pub mod prelude;
pub mod tools;
pub mod utils;

pub use tools::scan::scan;
