//! Analysis error types

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Spectrum peak is zero, so the noise bandwidth is undefined
    #[error("Degenerate spectrum: peak magnitude is zero, noise bandwidth is undefined")]
    DegenerateSpectrum,

    #[error("Bin {bin} is outside the spectrum (length {len})")]
    BinOutOfRange { bin: usize, len: usize },
}
