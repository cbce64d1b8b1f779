//! Metrics Log Loader Module
//! Reads the semicolon-delimited, comma-decimal GA log using Polars.

use crate::config::FIELD_SEPARATOR;
use polars::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load metrics log {}: {source}", path.display())]
    CsvError {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
}

/// Loads the GA metrics log into a DataFrame.
pub struct MetricsLoader {
    file_path: PathBuf,
}

impl MetricsLoader {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Read the whole log. Parse failures are not skipped.
    pub fn load(&self) -> Result<DataFrame, LoaderError> {
        log::info!("Reading metrics log {}", self.file_path.display());

        let df = LazyCsvReader::new(&self.file_path)
            .with_has_header(true)
            .with_separator(FIELD_SEPARATOR)
            .with_decimal_comma(true)
            .with_infer_schema_length(None)
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(|source| LoaderError::CsvError {
                path: self.file_path.clone(),
                source,
            })?;

        log::info!("Loaded {} rows, {} columns", df.height(), df.width());
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_comma_decimals_as_floats() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Generation;AverageFitness").unwrap();
        writeln!(file, "1;0,50").unwrap();
        writeln!(file, "2;0,55").unwrap();
        file.flush().unwrap();

        let df = MetricsLoader::new(file.path()).load().unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("AverageFitness").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = MetricsLoader::new(dir.path().join("log.csv"));
        assert!(loader.load().is_err());
    }
}
