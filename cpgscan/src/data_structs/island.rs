use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use super::chunk::ScoredChunk;
use super::sequence::Sequence;
use super::typedef::PosType;
use crate::error::ScanError;

/// Maximal run of consecutive qualifying chunks, before length filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateIsland {
    start:    PosType,
    length:   PosType,
    text:     String,
    n_chunks: usize,
}

impl CandidateIsland {
    /// Opens a run at `chunk`.
    pub(crate) fn open(chunk: &ScoredChunk<'_>) -> Self {
        Self {
            start:    chunk.start(),
            length:   chunk.len(),
            text:     chunk.text().to_owned(),
            n_chunks: 1,
        }
    }

    /// Appends the next chunk of the run. The caller guarantees adjacency.
    pub(crate) fn extend(
        &mut self,
        chunk: &ScoredChunk<'_>,
    ) {
        self.length += chunk.len();
        self.text.push_str(chunk.text());
        self.n_chunks += 1;
    }

    pub fn start(&self) -> PosType {
        self.start
    }

    pub fn end(&self) -> PosType {
        self.start + self.length
    }

    pub fn len(&self) -> PosType {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of chunks merged into this candidate.
    pub fn n_chunks(&self) -> usize {
        self.n_chunks
    }

    pub fn into_island(self) -> Island {
        Island {
            sequence: self.text,
            start:    self.start,
            length:   self.length,
        }
    }
}

/// CpG island reported to the caller, as `(sequence, start, length)`.
///
/// Deserialization checks that `length` matches the sequence and that the
/// island fits in the position range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IslandRecord")]
pub struct Island {
    sequence: String,
    start:    PosType,
    length:   PosType,
}

impl Island {
    pub fn new(
        sequence: impl Into<String>,
        start: PosType,
        length: PosType,
    ) -> Self {
        Self {
            sequence: sequence.into(),
            start,
            length,
        }
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn start(&self) -> PosType {
        self.start
    }

    pub fn end(&self) -> PosType {
        self.start + self.length
    }

    pub fn len(&self) -> PosType {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_tuple(&self) -> (&str, PosType, PosType) {
        (&self.sequence, self.start, self.length)
    }
}

#[derive(Deserialize)]
struct IslandRecord {
    sequence: Sequence,
    start:    PosType,
    length:   PosType,
}

impl TryFrom<IslandRecord> for Island {
    type Error = ScanError;

    fn try_from(value: IslandRecord) -> Result<Self, Self::Error> {
        if value.length != value.sequence.len() {
            return Err(ScanError::invalid_argument(
                "length",
                format!(
                    "island length {} does not match its {} character sequence",
                    value.length,
                    value.sequence.len()
                ),
            ));
        }
        if value.start.checked_add(value.length).is_none() {
            return Err(ScanError::invalid_argument(
                "start",
                format!("island at {} overflows the position range", value.start),
            ));
        }
        Ok(Self {
            sequence: value.sequence.into_inner(),
            start:    value.start,
            length:   value.length,
        })
    }
}

impl From<Island> for (String, PosType, PosType) {
    fn from(value: Island) -> Self {
        (value.sequence, value.start, value.length)
    }
}

impl Display for Island {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.sequence, self.start, self.length)
    }
}
