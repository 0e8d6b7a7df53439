//! Test tone synthesis

use std::f64::consts::PI;

/// Generate `2 * sample_rate` samples of a unit sine at `freq_hz`.
/// Frequencies above Nyquist are not rejected; they simply alias.
pub(crate) fn generate_sine(freq_hz: f64, sample_rate: usize) -> Vec<f64> {
    let sr = sample_rate as f64;
    (0..2 * sample_rate)
        .map(|i| (2.0 * PI * freq_hz * i as f64 / sr).sin())
        .collect()
}
