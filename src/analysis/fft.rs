//! Overlap-add FFT analysis

use std::sync::Arc;

use rustfft::FftPlanner;
use rustfft::num_complex::Complex;

use super::signal::generate_sine;
use super::window::create_ola_hann_window;

/// Sample rate used when none is given on the command line (Hz)
pub(crate) const DEFAULT_SAMPLE_RATE: usize = 10000;

/// Fold a two-frame buffer by adding its second half onto its first half
pub(crate) fn fold_overlap_add(windowed: &[f64]) -> Vec<f64> {
    let (first, second) = windowed.split_at(windowed.len() / 2);
    first.iter().zip(second).map(|(a, b)| a + b).collect()
}

/// Magnitude-spectrum analyzer for the two-frame OLA Hann scheme.
///
/// The FFT length equals the sample rate, so spectrum bin `k` is `k` Hz.
/// The window depends only on the sample rate and is built once.
pub(crate) struct OlaAnalyzer {
    sample_rate: usize,
    window: Vec<f64>,
    fft: Arc<dyn rustfft::Fft<f64>>,
}

impl OlaAnalyzer {
    pub(crate) fn new(sample_rate: usize) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(sample_rate);

        Self {
            sample_rate,
            window: create_ola_hann_window(sample_rate),
            fft,
        }
    }

    pub(crate) fn sample_rate(&self) -> usize {
        self.sample_rate
    }

    /// Number of bins returned by [`OlaAnalyzer::response`]
    pub(crate) fn spectrum_len(&self) -> usize {
        self.sample_rate / 2
    }

    /// Analyze a pure tone and return the first half of its magnitude spectrum
    pub(crate) fn response(&self, freq_hz: f64) -> Vec<f64> {
        let signal = generate_sine(freq_hz, self.sample_rate);

        let windowed: Vec<f64> = signal
            .iter()
            .zip(&self.window)
            .map(|(s, w)| s * w)
            .collect();

        let mut buffer: Vec<Complex<f64>> = fold_overlap_add(&windowed)
            .into_iter()
            .map(|x| Complex::new(x, 0.0))
            .collect();

        self.fft.process(&mut buffer);

        buffer[..self.spectrum_len()]
            .iter()
            .map(|c| c.norm())
            .collect()
    }
}
