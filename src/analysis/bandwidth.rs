//! Equivalent noise bandwidth

use super::error::AnalysisError;

/// Equivalent noise bandwidth in bins: total spectral energy over peak energy.
///
/// A spectrum with a single nonzero bin gives exactly 1.0. Fails with
/// [`AnalysisError::DegenerateSpectrum`] when the peak is zero (including an
/// empty spectrum) instead of dividing by zero.
pub(crate) fn noise_bandwidth(spectrum: &[f64]) -> Result<f64, AnalysisError> {
    let peak = spectrum.iter().copied().fold(0.0f64, f64::max);
    if peak <= 0.0 {
        return Err(AnalysisError::DegenerateSpectrum);
    }

    let total: f64 = spectrum.iter().map(|r| r * r).sum();
    Ok(total / (peak * peak))
}
