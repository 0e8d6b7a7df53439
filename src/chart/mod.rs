//! Chart rendering for OLA response plots

mod colors;
mod response;

pub use response::render_response_chart;

/// Data for a response slice chart
pub struct ResponseChartData {
    pub title: String,
    pub subtitle: String,
    /// Spectrum bin (Hz) of the first value
    pub first_bin: usize,
    /// Magnitudes in dB, one per bin
    pub values_db: Vec<f64>,
}

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2800;
pub(super) const CHART_HEIGHT: u32 = 1200;

/// Format frequency for display (e.g., 1000 -> "1k", 950 -> "950")
pub(super) fn format_freq(hz: usize) -> String {
    if hz >= 1000 && hz % 100 == 0 {
        if hz % 1000 == 0 {
            format!("{}k", hz / 1000)
        } else {
            format!("{:.1}k", hz as f64 / 1000.0)
        }
    } else {
        format!("{}", hz)
    }
}

#[cfg(test)]
mod tests {
    use super::format_freq;

    #[test]
    fn test_format_freq() {
        assert_eq!(format_freq(950), "950");
        assert_eq!(format_freq(1000), "1k");
        assert_eq!(format_freq(1100), "1.1k");
        assert_eq!(format_freq(1050), "1050");
    }
}
