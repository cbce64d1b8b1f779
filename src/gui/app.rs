//! Metrics Viewer Application
//! Single window presenting the GA metrics chart.

use crate::charts::ChartData;
use crate::config::ChartSettings;
use crate::gui::ChartViewer;

/// Main application window.
pub struct MetricsApp {
    chart_viewer: ChartViewer,
}

impl MetricsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart_data: ChartData, status: String) -> Self {
        Self {
            chart_viewer: ChartViewer::new(chart_data, status),
        }
    }

    /// Open the viewer and block until the window is closed.
    pub fn run(
        settings: &ChartSettings,
        chart_data: ChartData,
        status: String,
    ) -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(settings.window_size)
                .with_title(settings.window_title.clone()),
            ..Default::default()
        };

        log::info!(
            "Opening viewer ({}x{})",
            settings.window_size[0],
            settings.window_size[1]
        );

        eframe::run_native(
            &settings.window_title,
            options,
            Box::new(move |cc| Ok(Box::new(MetricsApp::new(cc, chart_data, status)))),
        )
    }
}

impl eframe::App for MetricsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
