//! Single tone response mode

use crate::analysis::{OlaAnalyzer, SweepConfig, magnitude_db, noise_bandwidth, probe_bin};
use crate::output::{
    print_bandwidth, print_leakage, print_legend, print_peak, print_sample_rate, print_section,
    print_warning,
};

use super::{ModeOptions, emit_plot_slice, exit_on_error};

/// Analyze a single tone and report its peak, probe leakage and noise bandwidth
pub fn run_response(sample_rate: usize, freq_hz: f64, options: &ModeOptions) {
    let analyzer = OlaAnalyzer::new(sample_rate);
    let nyquist = analyzer.spectrum_len() as f64;

    if freq_hz.abs() > nyquist {
        print_warning(&format!(
            "{} Hz is above Nyquist ({} Hz); the tone will alias",
            freq_hz, nyquist
        ));
    }

    if !options.quiet {
        println!("Response Analysis");
        print_sample_rate(analyzer.sample_rate());
        println!("Tone: {:.6} Hz", freq_hz);
        println!();
    }

    let response = analyzer.response(freq_hz);
    // Degenerate spectra are rejected here, before the peak lookup
    let bandwidth = exit_on_error(noise_bandwidth(&response));

    let (peak_bin, peak) = response
        .iter()
        .copied()
        .enumerate()
        .fold((0, 0.0f64), |best, (i, r)| if r > best.1 { (i, r) } else { best });

    if !options.quiet {
        print_section("Spectrum");
    }
    print_peak(peak_bin, magnitude_db(peak));

    let probe = probe_bin(freq_hz, SweepConfig::default().probe_ratio);
    if let Some(&leakage) = response.get(probe) {
        print_leakage("Probe:", probe, magnitude_db(leakage));
    }

    emit_plot_slice(
        &response,
        "OLA Hann Response",
        format!("Tone = {:.6} Hz", freq_hz),
        options,
    );

    if !options.quiet {
        println!();
        print_section("Noise Bandwidth");
    }
    print_bandwidth(bandwidth);

    if !options.quiet {
        println!();
        print_legend();
    }
}
