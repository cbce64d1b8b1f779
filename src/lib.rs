//! GA Metrics Chart - Genetic Algorithm Metrics Log Viewer
//!
//! Reads the per-generation log written by the genetic algorithm and shows
//! average, best, best-overall fitness and mutation rate as one line chart.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;

use charts::ChartData;
use data::{LoaderError, MetricsLoader, MetricsTable, ProcessorError};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Process(#[from] ProcessorError),
}

/// A chart ready for display together with the table it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedChart {
    pub table: MetricsTable,
    pub chart: ChartData,
}

impl PreparedChart {
    /// Status line shown under the plot.
    pub fn status(&self, log_path: &Path) -> String {
        format!(
            "Loaded {} generations from {}",
            self.table.row_count(),
            log_path.display()
        )
    }
}

/// Load the log and build the chart model. Nothing is drawn if this fails.
pub fn prepare_chart(log_path: &Path) -> Result<PreparedChart, ChartError> {
    let df = MetricsLoader::new(log_path).load()?;
    let table = MetricsTable::from_dataframe(&df)?;

    let summary = table.summary();
    log::info!(
        "Generations {:?}..{:?} ({} rows), final best overall fitness {:?}",
        summary.first_generation,
        summary.last_generation,
        summary.rows,
        summary.final_best_overall
    );

    let chart = ChartData::from_table(&table);
    log::debug!(
        "Built chart with {} series of {} points",
        chart.series.len(),
        chart.point_count()
    );

    Ok(PreparedChart { table, chart })
}
