//! CLI mode implementations

mod response;
mod sweep;

pub use response::run_response;
pub use sweep::run_sweep_mode;

use crate::analysis::{AnalysisError, PLOT_RANGE, log_magnitude_slice};
use crate::chart;
use crate::output::{print_error, print_slice};

/// Options shared by every mode
pub struct ModeOptions<'a> {
    pub quiet: bool,
    pub show_slice: bool,
    pub image_path: Option<&'a str>,
}

/// Print the error and terminate; analysis failures abort the whole run
fn exit_on_error<T>(result: Result<T, AnalysisError>) -> T {
    result.unwrap_or_else(|e| {
        print_error(&e.to_string());
        std::process::exit(1);
    })
}

/// Hand the plot slice of `spectrum` to the slice printer and chart renderer
fn emit_plot_slice(spectrum: &[f64], title: &str, subtitle: String, options: &ModeOptions) {
    if !options.show_slice && options.image_path.is_none() {
        return;
    }

    let values_db = exit_on_error(log_magnitude_slice(spectrum, PLOT_RANGE));

    if options.show_slice {
        println!();
        print_slice(PLOT_RANGE.start, &values_db);
    }

    if let Some(path) = options.image_path {
        let chart_data = chart::ResponseChartData {
            title: title.to_string(),
            subtitle,
            first_bin: PLOT_RANGE.start,
            values_db,
        };

        if let Err(e) = chart::render_response_chart(&chart_data, path) {
            print_error(&e);
        } else {
            eprintln!("Chart saved to: {}", path);
        }
    }
}
