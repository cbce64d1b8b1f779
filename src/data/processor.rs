//! Metrics Table Module
//! Extracts the generation axis and the four metric columns as f64 vectors.

use crate::config::{required_columns, GENERATION_COL, METRIC_COLUMNS};
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Required column '{0}' not found in metrics log")]
    MissingColumn(String),
}

/// One metric column in file order. Empty cells are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricColumn {
    pub name: &'static str,
    pub label: &'static str,
    pub values: Vec<f64>,
}

/// Short description of a loaded log.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub rows: usize,
    pub first_generation: Option<f64>,
    pub last_generation: Option<f64>,
    pub final_best_overall: Option<f64>,
}

/// The generation axis plus the plotted metrics, in the order they appear in the log.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsTable {
    pub generations: Vec<f64>,
    pub metrics: Vec<MetricColumn>,
}

impl MetricsTable {
    /// Build the table from a loaded log.
    ///
    /// Every required column is checked for presence before any values are read,
    /// so a missing column never yields a partially filled table.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self, ProcessorError> {
        if let Some(missing) = required_columns().find(|name| df.get_column_index(name).is_none()) {
            return Err(ProcessorError::MissingColumn(missing.to_string()));
        }

        let generations = Self::numeric_column(df, GENERATION_COL)?;
        let metrics = METRIC_COLUMNS
            .iter()
            .map(|&(name, label)| {
                Ok(MetricColumn {
                    name,
                    label,
                    values: Self::numeric_column(df, name)?,
                })
            })
            .collect::<Result<Vec<_>, ProcessorError>>()?;

        Ok(Self {
            generations,
            metrics,
        })
    }

    /// Strict cast to f64. Text that is not a number fails; empty cells become NaN.
    fn numeric_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, ProcessorError> {
        let column = df.column(name)?.strict_cast(&DataType::Float64)?;
        let values = column.f64()?;

        Ok(values
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect())
    }

    /// Number of logged generations.
    pub fn row_count(&self) -> usize {
        self.generations.len()
    }

    pub fn metric(&self, name: &str) -> Option<&MetricColumn> {
        self.metrics.iter().find(|m| m.name == name)
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary {
            rows: self.row_count(),
            first_generation: self.generations.first().copied(),
            last_generation: self.generations.last().copied(),
            final_best_overall: self
                .metric("BestOverallFitness")
                .and_then(|m| m.values.last().copied()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        df!(
            "Generation" => [0i64, 1, 2],
            "AverageFitness" => [0.40, 0.45, 0.50],
            "BestFitness" => [0.60, 0.58, 0.70],
            "BestOverallFitness" => [0.60, 0.60, 0.70],
            "HydrophobicContacts" => [3i64, 3, 4],
            "MutationRate" => [0.10, 0.05, 0.06],
        )
        .unwrap()
    }

    #[test]
    fn extracts_metrics_in_draw_order() {
        let table = MetricsTable::from_dataframe(&sample_df()).unwrap();
        assert_eq!(table.generations, vec![0.0, 1.0, 2.0]);
        let names: Vec<&str> = table.metrics.iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec!["AverageFitness", "BestFitness", "BestOverallFitness", "MutationRate"]
        );
        assert_eq!(table.metric("MutationRate").unwrap().values, vec![0.10, 0.05, 0.06]);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let df = sample_df().drop("BestFitness").unwrap();
        match MetricsTable::from_dataframe(&df) {
            Err(ProcessorError::MissingColumn(col)) => assert_eq!(col, "BestFitness"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn null_value_becomes_nan() {
        let df = df!(
            "Generation" => [Some(0i64), Some(1)],
            "AverageFitness" => [Some(0.4), None],
            "BestFitness" => [Some(0.6), Some(0.6)],
            "BestOverallFitness" => [Some(0.6), Some(0.6)],
            "MutationRate" => [Some(0.1), Some(0.1)],
        )
        .unwrap();

        let table = MetricsTable::from_dataframe(&df).unwrap();
        assert_eq!(table.row_count(), 2);
        let average = &table.metric("AverageFitness").unwrap().values;
        assert_eq!(average[0], 0.4);
        assert!(average[1].is_nan());
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        let df = df!(
            "Generation" => [0i64],
            "AverageFitness" => ["abc"],
            "BestFitness" => [0.6],
            "BestOverallFitness" => [0.6],
            "MutationRate" => [0.1],
        )
        .unwrap();

        assert!(matches!(
            MetricsTable::from_dataframe(&df),
            Err(ProcessorError::PolarsError(_))
        ));
    }

    #[test]
    fn summary_reports_range_and_final_best() {
        let summary = MetricsTable::from_dataframe(&sample_df()).unwrap().summary();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.first_generation, Some(0.0));
        assert_eq!(summary.last_generation, Some(2.0));
        assert_eq!(summary.final_best_overall, Some(0.70));
    }
}
