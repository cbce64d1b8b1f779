//! Chart Viewer Widget
//! Central panel showing the title, the metrics plot and a status line.

use crate::charts::{ChartData, ChartPlotter};
use egui::RichText;

const TITLE_SIZE: f32 = 22.0;
const STATUS_HEIGHT: f32 = 24.0;

pub struct ChartViewer {
    pub chart_data: ChartData,
    pub status: String,
}

impl ChartViewer {
    pub fn new(chart_data: ChartData, status: impl Into<String>) -> Self {
        Self {
            chart_data,
            status: status.into(),
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&self.chart_data.title)
                    .size(TITLE_SIZE)
                    .strong(),
            );
        });
        ui.add_space(8.0);

        // Leave room for the status line below the plot
        let plot_height = (ui.available_height() - STATUS_HEIGHT).max(0.0);
        ui.allocate_ui(egui::vec2(ui.available_width(), plot_height), |ui| {
            ChartPlotter::draw_metrics_chart(ui, &self.chart_data);
        });

        ui.label(RichText::new(&self.status).size(12.0).weak());
    }
}
