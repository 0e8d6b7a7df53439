//! Integration tests for olastat CLI

mod common;

use common::{parse_slice_rows, parse_values, run_olastat};
use tempfile::TempDir;

// =============================================================================
// Basic functionality tests
// =============================================================================

#[test]
fn test_help_flag() {
    let output = run_olastat(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Overlap-add Hann window"));
    assert!(stdout.contains("--sample-rate"));
    assert!(stdout.contains("--freq"));
    assert!(stdout.contains("--probe-ratio"));
    assert!(stdout.contains("--image"));
}

#[test]
fn test_version_flag() {
    let output = run_olastat(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("olastat"));
}

// =============================================================================
// Sweep mode
// =============================================================================

#[test]
fn test_sweep_quiet_core_lines() {
    let output = run_olastat(&["-q"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        assert!(
            line.starts_with("Worst freq = ") || line.starts_with("B = "),
            "Unexpected line in quiet output: {}",
            line
        );
    }

    let worst = parse_values(&stdout, "Worst freq = ");
    assert!(!worst.is_empty(), "Should report at least one worst frequency");
    let last = *worst.last().unwrap();
    assert!(
        (1000.0..=1001.0).contains(&last),
        "Worst frequency should lie in the sweep range, got {}",
        last
    );

    // Each report is a new worst, so frequencies increase along the sweep
    for pair in worst.windows(2) {
        assert!(pair[1] > pair[0]);
    }

    assert_eq!(stdout.lines().last(), Some("B = 1.000000"));
}

#[test]
fn test_sweep_number_format() {
    let output = run_olastat(&["-q"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let first = stdout.lines().next().unwrap();
    // First iteration always beats the sentinel
    assert_eq!(first, "Worst freq = 1000.000000");
}

#[test]
fn test_sweep_verbose() {
    let output = run_olastat(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sweep Analysis"));
    assert!(stdout.contains("Sample rate: 10000 Hz"));
    assert!(stdout.contains("Sweep: 1000.00-1000.99 Hz, 100 steps"));
    assert!(stdout.contains("[Worst Frequency]"));
    assert!(stdout.contains("Leakage:"));
    assert!(stdout.contains("[Noise Bandwidth]"));
    assert!(stdout.contains("B = 1.000000"));
}

#[test]
fn test_sweep_lower_sample_rate() {
    let output = run_olastat(&["-q", "-r", "4000"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let worst = parse_values(&stdout, "Worst freq = ");
    assert!(!worst.is_empty());
    assert!(stdout.contains("B = 1.000000"));
}

#[test]
fn test_sweep_custom_range() {
    let output = run_olastat(&["-q", "--start", "1200", "--step", "0.1", "--steps", "10"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let worst = parse_values(&stdout, "Worst freq = ");
    let last = *worst.last().unwrap();
    assert!((1200.0..=1201.0).contains(&last), "got {}", last);
}

#[test]
fn test_sweep_with_slice() {
    let output = run_olastat(&["-q", "--slice"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows = parse_slice_rows(&stdout);
    assert_eq!(rows.len(), 200);
    assert_eq!(rows[0].0, 900);
    assert_eq!(rows[199].0, 1099);

    // The tone sits near 1000 Hz, so that bin dominates the slice
    let loudest = rows
        .iter()
        .copied()
        .fold((0, f64::NEG_INFINITY), |best, row| if row.1 > best.1 { row } else { best });
    assert!(
        (1000..=1001).contains(&loudest.0),
        "Loudest bin should be at the tone, got {}",
        loudest.0
    );
}

#[test]
fn test_sweep_with_image() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("response.png");

    let output = run_olastat(&["-q", "--image", image_path.to_str().unwrap()]);
    assert!(output.status.success());

    assert!(image_path.exists(), "Image file should be created");
    assert!(
        std::fs::metadata(&image_path).unwrap().len() > 0,
        "Image file should not be empty"
    );
}

// =============================================================================
// Single tone response mode
// =============================================================================

#[test]
fn test_response_on_bin() {
    let output = run_olastat(&["-q", "--freq", "1000"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("at bin 1000"));
    assert!(stdout.contains("Probe:"));
    assert!(stdout.contains("B = 1.000000"));
}

#[test]
fn test_response_off_bin_is_wider() {
    let output = run_olastat(&["-q", "--freq", "1000.5"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let b = parse_values(&stdout, "B = ");
    assert_eq!(b.len(), 1);
    assert!(b[0] > 1.0, "Off-bin tone should widen B, got {}", b[0]);
}

#[test]
fn test_response_above_nyquist_warning() {
    let output = run_olastat(&["-q", "--freq", "6000"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("above Nyquist"));
}

#[test]
fn test_response_with_image() {
    let temp_dir = TempDir::new().unwrap();
    let image_path = temp_dir.path().join("tone.png");

    let output = run_olastat(&[
        "-q",
        "--freq",
        "1000.25",
        "--image",
        image_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(image_path.exists());
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn test_zero_frequency_error() {
    let output = run_olastat(&["--freq", "0"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Degenerate spectrum"));
}

#[test]
fn test_sample_rate_too_low_error() {
    let output = run_olastat(&["-r", "1000"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Sample rate must be at least 2200 Hz"));
}

#[test]
fn test_zero_steps_error() {
    let output = run_olastat(&["--steps", "0"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--steps must be at least 1"));
}

#[test]
fn test_negative_step_error() {
    let output = run_olastat(&["--step", "-0.5"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--step must be positive"));
}

#[test]
fn test_sweep_flags_with_freq_error() {
    let output = run_olastat(&["--freq", "1000", "--steps", "5"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with --freq"));
}

#[test]
fn test_probe_out_of_range_error() {
    let output = run_olastat(&["-q", "--probe-ratio", "10"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("outside the spectrum"));
}

#[test]
fn test_image_invalid_directory_error() {
    let output = run_olastat(&["-q", "--image", "/nonexistent/dir/chart.png"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Directory does not exist"));
}

// =============================================================================
// Output format tests
// =============================================================================

#[test]
fn test_no_color_option() {
    let output = run_olastat(&["--no-color"]);
    assert!(output.status.success());

    // Output should not contain ANSI escape codes
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains("\x1b["),
        "Should not contain ANSI escape codes"
    );
}

#[test]
fn test_quiet_mode_reduces_output() {
    let verbose_output = run_olastat(&[]);
    let quiet_output = run_olastat(&["-q"]);

    let verbose_stdout = String::from_utf8_lossy(&verbose_output.stdout);
    let quiet_stdout = String::from_utf8_lossy(&quiet_output.stdout);

    // Quiet mode should have less output
    assert!(quiet_stdout.len() < verbose_stdout.len());

    // Quiet mode should not include legend
    assert!(!quiet_stdout.contains("Equivalent noise bandwidth"));
}
