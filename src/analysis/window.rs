//! Hann window spanning two overlap-add frames

use std::f64::consts::PI;

/// Create a Hann window of length `2 * sample_rate`.
///
/// The taper rises from 0 at `i = 0` to 1 at `i = sample_rate` and falls back
/// towards 0. Adding its two halves together gives exactly 1 everywhere, which
/// is what makes the two-frame overlap-add fold a rectangular window.
pub(crate) fn create_ola_hann_window(sample_rate: usize) -> Vec<f64> {
    let n = sample_rate as f64;
    (0..2 * sample_rate)
        .map(|i| (1.0 - (PI * i as f64 / n).cos()) / 2.0)
        .collect()
}
