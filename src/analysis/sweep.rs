//! Worst-case leakage sweep

use std::ops::Range;

use super::error::AnalysisError;
use super::fft::OlaAnalyzer;

/// Frequency used for the final noise bandwidth report (Hz)
pub(crate) const REFERENCE_FREQ_HZ: f64 = 1000.0;

/// Spectrum bins exported for plotting (one bin per Hz)
pub(crate) const PLOT_RANGE: Range<usize> = 900..1100;

/// Floor applied before taking log10 so silent bins stay finite
const MIN_MAGNITUDE: f64 = 1e-20;

/// Sweep parameters: `freq = start_hz + i * step_hz` for `i in 0..steps`,
/// probed at `probe_ratio * freq`
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SweepConfig {
    pub(crate) start_hz: f64,
    pub(crate) step_hz: f64,
    pub(crate) steps: usize,
    pub(crate) probe_ratio: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_hz: 1000.0,
            step_hz: 0.01,
            steps: 100,
            probe_ratio: 1.1,
        }
    }
}

impl SweepConfig {
    pub(crate) fn freq_at(&self, step: usize) -> f64 {
        self.start_hz + step as f64 * self.step_hz
    }

    /// Last frequency visited by the sweep
    pub(crate) fn end_hz(&self) -> f64 {
        self.freq_at(self.steps.saturating_sub(1))
    }
}

/// Tone frequency with the largest leakage seen so far
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WorstFrequency {
    pub(crate) freq_hz: f64,
    pub(crate) leakage: f64,
}

/// Spectrum bin probed for a tone at `freq_hz`.
/// Fractional frequencies truncate toward zero (negative values clamp to bin 0).
pub(crate) fn probe_bin(freq_hz: f64, probe_ratio: f64) -> usize {
    (freq_hz * probe_ratio) as usize
}

fn read_bin(spectrum: &[f64], bin: usize) -> Result<f64, AnalysisError> {
    spectrum
        .get(bin)
        .copied()
        .ok_or(AnalysisError::BinOutOfRange {
            bin,
            len: spectrum.len(),
        })
}

/// Magnitude leaked into the probe bin by a tone at `freq_hz`
fn probe_leakage(
    analyzer: &OlaAnalyzer,
    freq_hz: f64,
    probe_ratio: f64,
) -> Result<f64, AnalysisError> {
    let spectrum = analyzer.response(freq_hz);
    read_bin(&spectrum, probe_bin(freq_hz, probe_ratio))
}

/// Sweep the tone frequency and track the worst probe leakage.
///
/// The record only changes on a strictly greater leakage; `on_new_worst` is
/// called with each new record.
pub(crate) fn run_sweep<F>(
    analyzer: &OlaAnalyzer,
    config: &SweepConfig,
    mut on_new_worst: F,
) -> Result<WorstFrequency, AnalysisError>
where
    F: FnMut(&WorstFrequency),
{
    const LEAKAGE_SENTINEL: f64 = f64::NEG_INFINITY;

    let initial = WorstFrequency {
        freq_hz: 0.0,
        leakage: LEAKAGE_SENTINEL,
    };

    (0..config.steps).try_fold(initial, |worst, step| {
        let freq_hz = config.freq_at(step);
        let leakage = probe_leakage(analyzer, freq_hz, config.probe_ratio)?;

        if leakage > worst.leakage {
            let worst = WorstFrequency { freq_hz, leakage };
            on_new_worst(&worst);
            Ok(worst)
        } else {
            Ok(worst)
        }
    })
}

/// `20 * log10` magnitudes of `spectrum[range]`
pub(crate) fn log_magnitude_slice(
    spectrum: &[f64],
    range: Range<usize>,
) -> Result<Vec<f64>, AnalysisError> {
    let slice = spectrum
        .get(range.clone())
        .ok_or(AnalysisError::BinOutOfRange {
            bin: range.end.saturating_sub(1).max(range.start),
            len: spectrum.len(),
        })?;

    Ok(slice.iter().copied().map(magnitude_db).collect())
}

/// Convert a magnitude to dB using the same floor as the plot slice
pub(crate) fn magnitude_db(magnitude: f64) -> f64 {
    20.0 * magnitude.max(MIN_MAGNITUDE).log10()
}
