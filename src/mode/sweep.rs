//! Worst-case leakage sweep mode

use crate::analysis::{
    OlaAnalyzer, SweepConfig, magnitude_db, noise_bandwidth, probe_bin, run_sweep,
};
use crate::output::{
    print_bandwidth, print_leakage, print_legend, print_sample_rate, print_section,
    print_sweep_settings, print_worst_freq,
};

use super::{ModeOptions, emit_plot_slice, exit_on_error};

/// Sweep tone frequencies, report the worst probe leakage and the noise
/// bandwidth at `reference_hz`
pub fn run_sweep_mode(
    sample_rate: usize,
    config: &SweepConfig,
    reference_hz: f64,
    options: &ModeOptions,
) {
    let analyzer = OlaAnalyzer::new(sample_rate);

    if !options.quiet {
        println!("Sweep Analysis");
        print_sample_rate(analyzer.sample_rate());
        print_sweep_settings(config, reference_hz);
        print_section("Worst Frequency");
    }

    let worst = exit_on_error(run_sweep(&analyzer, config, print_worst_freq));

    if !options.quiet {
        print_leakage(
            "Leakage:",
            probe_bin(worst.freq_hz, config.probe_ratio),
            magnitude_db(worst.leakage),
        );
    }

    // Response at the worst frequency feeds the plot
    let worst_response = analyzer.response(worst.freq_hz);
    emit_plot_slice(
        &worst_response,
        "OLA Hann Response",
        format!("Worst freq = {:.6} Hz", worst.freq_hz),
        options,
    );

    let reference_response = analyzer.response(reference_hz);
    let bandwidth = exit_on_error(noise_bandwidth(&reference_response));

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
