pub use crate::data_structs::typedef::{
    DensityType,
    PosType,
};
pub use crate::data_structs::{
    CandidateIsland,
    Chunk,
    Island,
    ScoredChunk,
    Sequence,
};
pub use crate::error::{
    Result,
    ScanError,
};
pub use crate::io::report::{
    format_chunks,
    format_islands,
    islands_to_json,
    write_chunks,
    write_report,
    ReportFormat,
};
pub use crate::tools::scan::{
    scan,
    score_all,
    IslandScanner,
    PoolStrategy,
    ScanConfig,
    ScanOutcome,
    WorkerPool,
};
pub use crate::utils::generate_random_sequence;
