//! Labeled matrix reader with full input validation.

use std::path::{Path, PathBuf};

use classdist_compare::ClassLabel;
use classdist_dtw::TimeSeries;
use tracing::{debug, info, instrument};

use crate::IoError;
use crate::domain::LabeledDataset;

/// Reads a comma-delimited numeric matrix whose first column is a class label.
///
/// Expected format:
/// - No header row
/// - `label,x0,x1,...,xn`, one series per row
/// - The label is an integral number, possibly written as a float
///   (`-1`, `1.0`, `1.0000000e+00`)
/// - Every row has the same number of columns as the first
///
/// Surrounding whitespace in a cell is ignored.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::EmptyDataset`] | Zero rows |
/// | [`IoError::NoSamples`] | A row holds only a label |
/// | [`IoError::InconsistentRowLength`] | Row has a different column count than the first row |
/// | [`IoError::InvalidLabel`] | Label is not an integral number |
/// | [`IoError::NonFiniteValue`] | Sample is NaN, Inf, or unparseable |
pub struct LabeledMatrixReader {
    path: PathBuf,
}

impl LabeledMatrixReader {
    /// Create a new reader for the given file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read and validate the file, returning a [`LabeledDataset`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<LabeledDataset, IoError> {
        let file = std::fs::File::open(&self.path).map_err(|e| IoError::FileNotFound {
            path: self.path.clone(),
            source: e,
        })?;

        // flexible(true) lets short or long rows through to the
        // InconsistentRowLength check below.
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut labels = Vec::new();
        let mut series = Vec::new();
        let mut expected_cols = None;

        for (row_index, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| IoError::CsvParse {
                path: self.path.clone(),
                offset: e.position().map_or(0, |p| p.byte()),
                source: e,
            })?;

            let expected = *expected_cols.get_or_insert_with(|| {
                debug!(n_cols = record.len(), "column count fixed by first row");
                record.len()
            });
            if record.len() != expected {
                return Err(IoError::InconsistentRowLength {
                    path: self.path.clone(),
                    row_index,
                    expected,
                    got: record.len(),
                });
            }
            if record.len() < 2 {
                return Err(IoError::NoSamples {
                    path: self.path.clone(),
                    row_index,
                });
            }

            labels.push(self.parse_label(row_index, record.get(0).unwrap_or(""))?);

            let mut values = Vec::with_capacity(record.len() - 1);
            for (col_index, raw) in record.iter().skip(1).enumerate() {
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| IoError::NonFiniteValue {
                        path: self.path.clone(),
                        row_index,
                        col_index,
                        raw: raw.to_string(),
                    })?;
                values.push(value);
            }

            // Values are already non-empty and finite.
            let ts = TimeSeries::new(values).map_err(|_| IoError::NoSamples {
                path: self.path.clone(),
                row_index,
            })?;
            series.push(ts);
        }

        if labels.is_empty() {
            return Err(IoError::EmptyDataset {
                path: self.path.clone(),
            });
        }

        info!(
            n_rows = labels.len(),
            series_len = series.first().map_or(0, TimeSeries::len),
            "dataset loaded"
        );

        Ok(LabeledDataset { labels, series })
    }

    fn parse_label(&self, row_index: usize, raw: &str) -> Result<ClassLabel, IoError> {
        raw.parse::<f64>()
            .ok()
            .and_then(ClassLabel::from_f64)
            .ok_or_else(|| IoError::InvalidLabel {
                path: self.path.clone(),
                row_index,
                raw: raw.to_string(),
            })
    }
}
