//! Data module - metrics log loading and extraction

mod loader;
mod processor;

pub use loader::{LoaderError, MetricsLoader};
pub use processor::{MetricColumn, MetricsTable, ProcessorError, TableSummary};
