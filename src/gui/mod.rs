//! GUI module - Viewer window

mod app;
mod chart_viewer;

pub use app::MetricsApp;
pub use chart_viewer::ChartViewer;
