//! Rendering of scan results.

pub mod report;
