use colored::*;

use crate::analysis::{SweepConfig, WorstFrequency};

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_section(title: &str) {
    println!("{}", style_label(&format!("[{}]", title)));
}

pub(crate) fn print_sample_rate(sample_rate: usize) {
    println!(
        "Sample rate: {} Hz, Window: Hann x {} samples, Hop: {} samples",
        sample_rate,
        2 * sample_rate,
        sample_rate
    );
}

pub(crate) fn print_sweep_settings(config: &SweepConfig, reference_hz: f64) {
    println!(
        "Sweep: {:.2}-{:.2} Hz, {} steps of {} Hz",
        config.start_hz,
        config.end_hz(),
        config.steps,
        config.step_hz
    );
    println!("Probe: {} x tone frequency", config.probe_ratio);
    println!("Reference: {:.2} Hz", reference_hz);
    println!();
}

pub(crate) fn print_worst_freq(worst: &WorstFrequency) {
    println!("Worst freq = {:.6}", worst.freq_hz);
}

pub(crate) fn print_bandwidth(bandwidth: f64) {
    println!("B = {:.6}", bandwidth);
}

pub(crate) fn print_leakage(label: &str, bin: usize, leakage_db: f64) {
    println!("{} {:.1} dB at bin {}", style_label(label), leakage_db, bin);
}

pub(crate) fn print_peak(bin: usize, peak_db: f64) {
    println!("{} {:.1} dB at bin {}", style_label("Peak:"), peak_db, bin);
}

/// One `<bin> <dB>` row per value, starting at `first_bin`
pub(crate) fn print_slice(first_bin: usize, values_db: &[f64]) {
    print_section("Response Slice");
    for (i, db) in values_db.iter().enumerate() {
        println!("{:>6} {:>9.2}", first_bin + i, db);
    }
}

pub(crate) fn print_legend() {
    println!("Worst freq: Tone frequency with the most energy leaked into the probe bin");
    println!("Leakage: Probe bin magnitude in dB (bin = probe ratio x tone frequency, truncated)");
    println!("B: Equivalent noise bandwidth in bins (total energy / peak energy)");
}
