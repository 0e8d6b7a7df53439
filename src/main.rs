mod analysis;
mod chart;
mod mode;
mod output;

use clap::Parser;

use analysis::{DEFAULT_SAMPLE_RATE, PLOT_RANGE, REFERENCE_FREQ_HZ, SweepConfig};
use mode::{ModeOptions, run_response, run_sweep_mode};
use output::print_error;

/// Smallest sample rate whose spectrum still covers the plot slice
const MIN_SAMPLE_RATE: usize = 2 * PLOT_RANGE.end;

#[derive(Parser)]
#[command(
    name = "olastat",
    version,
    about = "Overlap-add Hann window leakage and noise bandwidth analyzer",
    after_help = "Examples:
  olastat                                   Sweep 1000.00-1000.99 Hz, report worst leakage and B
  olastat -q                                Core report lines only
  olastat --image response.png              Also render the 900-1100 Hz response at the worst frequency
  olastat --steps 200 --step 0.005          Finer sweep
  olastat --freq 1000.5 --slice             Single tone response with dB slice
  olastat --no-color                        Disable colored output"
)]
struct Args {
    /// Sample rate in Hz (also the FFT length)
    #[arg(short = 'r', long, default_value_t = DEFAULT_SAMPLE_RATE, value_name = "HZ")]
    sample_rate: usize,

    /// Analyze a single tone instead of sweeping
    #[arg(short, long, value_name = "HZ", allow_negative_numbers = true)]
    freq: Option<f64>,

    /// Sweep start frequency [default: 1000]
    #[arg(long, value_name = "HZ", allow_negative_numbers = true)]
    start: Option<f64>,

    /// Sweep increment [default: 0.01]
    #[arg(long, value_name = "HZ", allow_negative_numbers = true)]
    step: Option<f64>,

    /// Number of sweep iterations [default: 100]
    #[arg(long, value_name = "N")]
    steps: Option<usize>,

    /// Probe bin as a multiple of the tone frequency [default: 1.1]
    #[arg(long, value_name = "RATIO", allow_negative_numbers = true)]
    probe_ratio: Option<f64>,

    /// Frequency used for the noise bandwidth report [default: 1000]
    #[arg(long, value_name = "HZ", allow_negative_numbers = true)]
    reference: Option<f64>,

    /// Print the 900-1100 Hz response slice in dB
    #[arg(long)]
    slice: bool,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output response chart as PNG image
    #[arg(long, value_name = "PATH")]
    image: Option<String>,
}

fn fail(msg: &str) -> ! {
    print_error(msg);
    std::process::exit(1);
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Validate sample rate
    if args.sample_rate < MIN_SAMPLE_RATE {
        fail(&format!("Sample rate must be at least {} Hz", MIN_SAMPLE_RATE));
    }

    // Validate option combinations
    let sweep_only = args.start.is_some()
        || args.step.is_some()
        || args.steps.is_some()
        || args.probe_ratio.is_some()
        || args.reference.is_some();
    if args.freq.is_some() && sweep_only {
        fail("--start, --step, --steps, --probe-ratio and --reference cannot be used with --freq");
    }

    let defaults = SweepConfig::default();
    let config = SweepConfig {
        start_hz: args.start.unwrap_or(defaults.start_hz),
        step_hz: args.step.unwrap_or(defaults.step_hz),
        steps: args.steps.unwrap_or(defaults.steps),
        probe_ratio: args.probe_ratio.unwrap_or(defaults.probe_ratio),
    };
    let reference_hz = args.reference.unwrap_or(REFERENCE_FREQ_HZ);

    // Validate sweep parameters
    if config.steps == 0 {
        fail("--steps must be at least 1");
    }
    if !config.start_hz.is_finite() {
        fail("--start must be a finite frequency");
    }
    if !(config.step_hz.is_finite() && config.step_hz > 0.0) {
        fail("--step must be positive");
    }
    if !(config.probe_ratio.is_finite() && config.probe_ratio > 0.0) {
        fail("--probe-ratio must be positive");
    }
    if !(reference_hz.is_finite() && reference_hz > 0.0) {
        fail("--reference must be positive");
    }
    if let Some(freq) = args.freq
        && !freq.is_finite()
    {
        fail("--freq must be a finite frequency");
    }

    // Validate image output path
    if let Some(ref path) = args.image {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fail(&format!("Directory does not exist: {}", parent.display()));
        }
    }

    let options = ModeOptions {
        quiet: args.quiet,
        show_slice: args.slice,
        image_path: args.image.as_deref(),
    };

    // Dispatch to appropriate mode
    match args.freq {
        Some(freq) => run_response(args.sample_rate, freq, &options),
        None => run_sweep_mode(args.sample_rate, &config, reference_hz, &options),
    }
}
