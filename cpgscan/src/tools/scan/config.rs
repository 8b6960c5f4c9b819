use std::fmt::Display;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::{
    DensityType,
    PosType,
};
use crate::error::{
    Result,
    ScanError,
};
use crate::utils::default_workers;
use crate::with_field_fn;

/// How chunks are dispatched to workers. Both strategies return identical
/// results.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "console", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PoolStrategy {
    /// Dedicated rayon pool writing into index-disjoint result slots.
    #[default]
    Slots,
    /// Scoped worker threads fed through a bounded crossbeam channel.
    Channel,
}

impl Display for PoolStrategy {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            PoolStrategy::Slots => write!(f, "slots"),
            PoolStrategy::Channel => write!(f, "channel"),
        }
    }
}

/// Parameters of a single scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub threshold:  DensityType,
    pub chunk_size: PosType,
    pub min_length: PosType,
    pub workers:    usize,
    pub strategy:   PoolStrategy,
}

impl ScanConfig {
    with_field_fn!(threshold, DensityType);
    with_field_fn!(chunk_size, PosType);
    with_field_fn!(min_length, PosType);
    with_field_fn!(workers, usize);
    with_field_fn!(strategy, PoolStrategy);

    pub fn new(
        threshold: DensityType,
        chunk_size: PosType,
        min_length: PosType,
        workers: usize,
    ) -> Self {
        Self {
            threshold,
            chunk_size,
            min_length,
            workers,
            strategy: PoolStrategy::default(),
        }
    }

    /// Checks every parameter before any work is done.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(ScanError::invalid_argument(
                "threshold",
                format!("{} is outside [0, 1]", self.threshold),
            ));
        }
        check_positive("chunk_size", self.chunk_size)?;
        check_positive("min_length", self.min_length)?;
        check_positive("workers", self.workers)?;
        Ok(())
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            threshold:  0.6,
            chunk_size: 4,
            min_length: 8,
            workers:    default_workers(),
            strategy:   PoolStrategy::default(),
        }
    }
}

pub(crate) fn check_positive(
    parameter: &str,
    value: usize,
) -> Result<()> {
    if value == 0 {
        return Err(ScanError::invalid_argument(parameter, "must be at least 1"));
    }
    Ok(())
}
