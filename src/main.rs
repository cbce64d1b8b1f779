//! GA Metrics Chart - plots `log.csv` from the working directory.

use anyhow::Context;
use ga_metrics_chart::config::ChartSettings;
use ga_metrics_chart::gui::MetricsApp;
use ga_metrics_chart::prepare_chart;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = ChartSettings::default();

    let prepared = prepare_chart(&settings.log_path)
        .with_context(|| format!("Cannot chart {}", settings.log_path.display()))?;
    let status = prepared.status(&settings.log_path);

    // eframe::Error is not Send + Sync, so it cannot be wrapped with `context`
    MetricsApp::run(&settings, prepared.chart, status)
        .map_err(|e| anyhow::anyhow!("Viewer failed: {e}"))
}
