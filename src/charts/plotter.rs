//! Chart Plotter Module
//! Builds the metrics line chart and draws it using egui_plot.

use crate::config::{CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::data::MetricsTable;
use egui::Color32;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};

/// Series colors in draw order
pub const PALETTE: [Color32; 4] = [
    Color32::from_rgb(31, 119, 180),  // Blue
    Color32::from_rgb(255, 127, 14),  // Orange
    Color32::from_rgb(44, 160, 44),   // Green
    Color32::from_rgb(214, 39, 40),   // Red
];

/// One labeled line series.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub label: String,
    pub color: Color32,
    /// `[generation, value]` pairs in log order
    pub points: Vec<[f64; 2]>,
}

/// Everything needed to draw the metrics chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<LineSeries>,
}

impl ChartData {
    /// One series per metric, all sharing the generation column as x.
    pub fn from_table(table: &MetricsTable) -> Self {
        let series = table
            .metrics
            .iter()
            .enumerate()
            .map(|(i, metric)| LineSeries {
                label: metric.label.to_string(),
                color: PALETTE[i % PALETTE.len()],
                points: table
                    .generations
                    .iter()
                    .zip(metric.values.iter())
                    .map(|(&x, &y)| [x, y])
                    .collect(),
            })
            .collect();

        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            series,
        }
    }

    /// Points per series; all series share the same length.
    pub fn point_count(&self) -> usize {
        self.series.first().map(|s| s.points.len()).unwrap_or(0)
    }
}

/// Draws the metrics chart using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw all series against the generation axis with a legend
    pub fn draw_metrics_chart(ui: &mut egui::Ui, chart_data: &ChartData) {
        Plot::new("ga_metrics")
            .legend(Legend::default().position(Corner::RightTop))
            .x_axis_label(chart_data.x_label.clone())
            .y_axis_label(chart_data.y_label.clone())
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for series in &chart_data.series {
                    plot_ui.line(
                        Line::new(PlotPoints::from(series.points.clone()))
                            .color(series.color)
                            .width(1.5)
                            .name(&series.label),
                    );
                }
            });
    }
}
