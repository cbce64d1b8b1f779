//! Charts module - Chart model and rendering

mod plotter;

pub use plotter::{ChartData, ChartPlotter, LineSeries, PALETTE};
