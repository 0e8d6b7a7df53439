//! Response slice chart rendering (dB line over spectrum bins)

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Title},
    element::{
        AreaStyle, AxisLabel, AxisType, Color, ItemStyle, LineStyle, SplitLine, Symbol, TextStyle,
    },
    renderer::ImageFormat,
    series::Line,
};

use super::colors::{COLOR_BACKGROUND, COLOR_GRID, COLOR_RESPONSE, COLOR_RESPONSE_AREA, COLOR_TEXT};
use super::{CHART_HEIGHT, CHART_WIDTH, ResponseChartData, format_freq};

/// Render the response slice as a line chart to a PNG file
pub fn render_response_chart(data: &ResponseChartData, output_path: &str) -> Result<(), String> {
    if data.values_db.is_empty() {
        return Err("No data to render".to_string());
    }

    let bin_labels: Vec<String> = (0..data.values_db.len())
        .map(|i| format_freq(data.first_bin + i))
        .collect();

    // Round values to 2 decimal places for display
    let values: Vec<f64> = data
        .values_db
        .iter()
        .map(|v| (v * 100.0).round() / 100.0)
        .collect();

    let chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(&data.title)
                .subtext(&data.subtitle)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("5%")
                .right("3%")
                .bottom("7%")
                .top("15%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Hz")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .boundary_gap(false)
                .data(bin_labels)
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("dB")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(24))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(20))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        )
        .series(
            Line::new()
                .name("Magnitude")
                .data(values)
                .symbol(Symbol::None)
                .line_style(LineStyle::new().width(2).color(COLOR_RESPONSE))
                .item_style(ItemStyle::new().color(COLOR_RESPONSE))
                .area_style(AreaStyle::new().color(COLOR_RESPONSE_AREA).opacity(0.2)),
        );

    // Render to PNG
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}
