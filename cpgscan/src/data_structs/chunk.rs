use std::fmt::Display;

use super::typedef::{
    is_gc,
    DensityType,
    PosType,
};

/// Fixed-size window of a [`Sequence`](super::Sequence), the unit of
/// scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    index: usize,
    start: PosType,
    text:  &'a str,
}

impl<'a> Chunk<'a> {
    pub fn new(
        index: usize,
        start: PosType,
        text: &'a str,
    ) -> Self {
        Self { index, start, text }
    }

    /// Position of this chunk in the chunk list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn start(&self) -> PosType {
        self.start
    }

    /// Exclusive end offset.
    pub fn end(&self) -> PosType {
        self.start + self.text.len()
    }

    pub fn len(&self) -> PosType {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Number of `C` and `G` bases in the chunk.
    pub fn gc_count(&self) -> usize {
        self.text.bytes().filter(|b| is_gc(*b)).count()
    }
}

/// A [`Chunk`] with its C/G fraction and classification against a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredChunk<'a> {
    chunk:     Chunk<'a>,
    score:     DensityType,
    qualifies: bool,
}

impl<'a> ScoredChunk<'a> {
    pub(crate) fn new(
        chunk: Chunk<'a>,
        score: DensityType,
        qualifies: bool,
    ) -> Self {
        Self {
            chunk,
            score,
            qualifies,
        }
    }

    pub fn chunk(&self) -> &Chunk<'a> {
        &self.chunk
    }

    pub fn score(&self) -> DensityType {
        self.score
    }

    pub fn qualifies(&self) -> bool {
        self.qualifies
    }

    pub fn index(&self) -> usize {
        self.chunk.index()
    }

    pub fn start(&self) -> PosType {
        self.chunk.start()
    }

    pub fn end(&self) -> PosType {
        self.chunk.end()
    }

    pub fn len(&self) -> PosType {
        self.chunk.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunk.is_empty()
    }

    pub fn text(&self) -> &'a str {
        self.chunk.text()
    }
}

impl Display for ScoredChunk<'_> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.text(), self.score, self.len())
    }
}
