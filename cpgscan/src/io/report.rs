use std::fmt::Display;
use std::io::Write;

use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::{
    Island,
    ScoredChunk,
};

/// Output formats understood by [`write_report`].
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "console", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `[(CGCG, 0, 4), (CGCG, 8, 4)]`
    #[default]
    Tuples,
    /// JSON array of `{"sequence", "start", "length"}` objects.
    Json,
    /// Every scored chunk as `(text, score, length)`, one per line.
    Chunks,
}

impl Display for ReportFormat {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            ReportFormat::Tuples => write!(f, "tuples"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Chunks => write!(f, "chunks"),
        }
    }
}

/// Renders islands as a list of literal tuples, e.g.
/// `[(CTGGTGCG, 72, 8)]`.
pub fn format_islands(islands: &[Island]) -> String {
    format!("[{}]", islands.iter().join(", "))
}

/// Renders scored chunks one per line as `(text, score, length)`.
pub fn format_chunks(chunks: &[ScoredChunk<'_>]) -> String {
    chunks.iter().join("\n")
}

pub fn islands_to_json(islands: &[Island]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(islands)
}

/// Writes `islands` to `sink` in `format`, followed by a newline.
///
/// # Errors
///
/// [`ReportFormat::Chunks`] needs the scored chunks, which islands do not
/// carry; it fails with [`std::io::ErrorKind::InvalidInput`]. Use
/// [`write_chunks`] for it.
pub fn write_report<W: Write>(
    mut sink: W,
    islands: &[Island],
    format: ReportFormat,
) -> std::io::Result<()> {
    let body = match format {
        ReportFormat::Tuples => format_islands(islands),
        ReportFormat::Json => islands_to_json(islands)?,
        ReportFormat::Chunks => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "the chunks report is written from scored chunks, not islands",
            ))
        },
    };
    writeln!(sink, "{body}")
}

/// Writes `chunks` to `sink` as rendered by [`format_chunks`], followed by a
/// newline.
pub fn write_chunks<W: Write>(
    mut sink: W,
    chunks: &[ScoredChunk<'_>],
) -> std::io::Result<()> {
    writeln!(sink, "{}", format_chunks(chunks))
}
