//! Overlap-add Hann window response analysis

mod bandwidth;
mod error;
mod fft;
mod signal;
mod sweep;
mod window;

pub(crate) use bandwidth::noise_bandwidth;
pub(crate) use error::AnalysisError;
pub(crate) use fft::{DEFAULT_SAMPLE_RATE, OlaAnalyzer};
pub(crate) use sweep::{
    PLOT_RANGE, REFERENCE_FREQ_HZ, SweepConfig, WorstFrequency, log_magnitude_slice,
    magnitude_db, probe_bin, run_sweep,
};
