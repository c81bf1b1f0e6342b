//! I/O error types for classdist-io.

use std::path::PathBuf;

/// Errors from reading the input matrix and writing the report.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist or is unreadable.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the CSV parser encounters a malformed record.
    #[error("CSV parse error in {path} at byte offset {offset}")]
    CsvParse {
        /// Path to the input file.
        path: PathBuf,
        /// Byte offset where the error occurred.
        offset: u64,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Returned when the input file holds no rows.
    #[error("empty dataset (no rows) in {path}")]
    EmptyDataset {
        /// Path to the input file.
        path: PathBuf,
    },

    /// Returned when a row holds a label but no samples.
    #[error("row {row_index} in {path} has a label but no samples")]
    NoSamples {
        /// Path to the input file.
        path: PathBuf,
        /// Zero-based row index.
        row_index: usize,
    },

    /// Returned when a row has a different number of columns than the first row.
    #[error("inconsistent row length in {path}: row {row_index} has {got} columns, expected {expected}")]
    InconsistentRowLength {
        /// Path to the input file.
        path: PathBuf,
        /// Zero-based row index.
        row_index: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of this row.
        got: usize,
    },

    /// Returned when the label column is not an integral number.
    #[error("invalid class label in {path}: row {row_index}, raw value \"{raw}\"")]
    InvalidLabel {
        /// Path to the input file.
        path: PathBuf,
        /// Zero-based row index.
        row_index: usize,
        /// The raw label text.
        raw: String,
    },

    /// Returned when a sample is NaN, Inf, or not a float at all.
    #[error("non-finite value in {path}: row {row_index}, sample {col_index}, raw value \"{raw}\"")]
    NonFiniteValue {
        /// Path to the input file.
        path: PathBuf,
        /// Zero-based row index.
        row_index: usize,
        /// Zero-based sample index (excluding the label column).
        col_index: usize,
        /// The raw string value that failed to parse.
        raw: String,
    },

    /// Returned when an output file name is empty or contains a path separator.
    #[error("invalid output file name \"{name}\": must be a plain file name")]
    InvalidOutputName {
        /// The invalid name.
        name: String,
    },

    /// Returned when the output directory cannot be created.
    #[error("cannot create output directory {path}")]
    OutputDirCreate {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the report file cannot be written.
    #[error("cannot write file {path}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
