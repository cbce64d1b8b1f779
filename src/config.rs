//! Fixed viewer settings.
//! The log location, column names and chart annotations are not configurable.

use std::path::PathBuf;

/// Log file written by the genetic algorithm, relative to the working directory.
pub const LOG_FILE: &str = "log.csv";

/// Field delimiter of the log file.
pub const FIELD_SEPARATOR: u8 = b';';

/// X-axis column.
pub const GENERATION_COL: &str = "Generation";

/// Plotted columns in draw order, paired with their legend labels.
pub const METRIC_COLUMNS: [(&str, &str); 4] = [
    ("AverageFitness", "Average Fitness"),
    ("BestFitness", "Best Fitness"),
    ("BestOverallFitness", "Best Overall Fitness"),
    ("MutationRate", "Mutation Rate"),
];

pub const CHART_TITLE: &str = "Genetic Algorithm Performance Metrics";
pub const X_AXIS_LABEL: &str = "Generation";
pub const Y_AXIS_LABEL: &str = "Values";

/// Figure size in inches (width, height).
pub const FIGURE_SIZE_INCHES: [f32; 2] = [20.0, 10.0];
const POINTS_PER_INCH: f32 = 100.0;

/// Settings used to load the log and open the viewer window.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    pub log_path: PathBuf,
    pub window_title: String,
    /// Inner window size in egui points.
    pub window_size: [f32; 2],
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(LOG_FILE),
            window_title: CHART_TITLE.to_string(),
            window_size: [
                FIGURE_SIZE_INCHES[0] * POINTS_PER_INCH,
                FIGURE_SIZE_INCHES[1] * POINTS_PER_INCH,
            ],
        }
    }
}

/// All columns the log must provide, x-axis first.
pub fn required_columns() -> impl Iterator<Item = &'static str> {
    std::iter::once(GENERATION_COL).chain(METRIC_COLUMNS.iter().map(|(col, _)| *col))
}
