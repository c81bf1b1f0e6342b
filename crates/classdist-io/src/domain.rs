//! Domain types for classdist-io.

use classdist_compare::ClassLabel;
use classdist_dtw::TimeSeries;

use crate::IoError;

/// A validated output file name.
///
/// Must be non-empty, must not be `.` or `..`, and must not contain a path
/// separator, so the report always lands inside the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputName(String);

impl OutputName {
    /// Parse and validate an output file name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidOutputName`] if the name is empty, a dot
    /// entry, or contains `/` or `\`.
    pub fn new(name: String) -> Result<Self, IoError> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(IoError::InvalidOutputName { name });
        }
        Ok(Self(name))
    }

    /// Return the file name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OutputName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rows of the input matrix: a class label and its time series.
///
/// Produced by [`LabeledMatrixReader`](crate::LabeledMatrixReader). Labels and
/// series are stored in parallel vectors, `labels[i]` belonging to
/// `series[i]`, in file order. Every series has the same length.
#[derive(Debug)]
pub struct LabeledDataset {
    /// Class label of each row.
    pub labels: Vec<ClassLabel>,
    /// Validated series in the same order as `labels`.
    pub series: Vec<TimeSeries>,
}

impl LabeledDataset {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Samples per row.
    #[must_use]
    pub fn series_len(&self) -> usize {
        self.series.first().map_or(0, TimeSeries::len)
    }

    /// Consume into `(label, series)` rows, ready for
    /// [`GroupSet::partition`](classdist_compare::GroupSet::partition).
    pub fn into_rows(self) -> impl Iterator<Item = (ClassLabel, TimeSeries)> {
        self.labels.into_iter().zip(self.series)
    }
}
