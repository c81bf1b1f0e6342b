//! Read, group, compare and write in one call.

use std::path::{Path, PathBuf};

use classdist_compare::{ClassMap, CompareConfig, CompareError, ComparisonReport, GroupSet};
use tracing::{info, instrument};

use crate::IoError;
use crate::domain::OutputName;
use crate::reader::LabeledMatrixReader;
use crate::writer::ReportWriter;

/// Errors from [`run_comparison`].
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Reading the input or writing the table failed.
    #[error(transparent)]
    Io(#[from] IoError),

    /// Grouping or comparing the series failed.
    #[error(transparent)]
    Compare(#[from] CompareError),
}

/// Outcome of a successful [`run_comparison`].
#[derive(Debug)]
pub struct ComparisonRun {
    /// Every group pair, in table order.
    pub report: ComparisonReport,
    /// Where the table was written.
    pub output: PathBuf,
    /// Rows read from the input file.
    pub n_rows: usize,
    /// Rows dropped because their label is not mapped.
    pub n_unmapped: usize,
    /// Samples per series.
    pub series_len: usize,
}

/// Compare the classes of `input` and write the table to
/// `{output_dir}/{output_name}`.
///
/// The output directory is only created once the whole report has been
/// computed, so a failing read or comparison leaves the filesystem untouched.
///
/// # Errors
///
/// [`RunError::Io`] for reader and writer failures, [`RunError::Compare`]
/// for grouping and comparison failures.
#[instrument(skip_all, fields(input = %input.display(), output_dir = %output_dir.display()))]
pub fn run_comparison(
    input: &Path,
    classes: &ClassMap,
    config: &CompareConfig,
    output_dir: &Path,
    output_name: OutputName,
) -> Result<ComparisonRun, RunError> {
    let dataset = LabeledMatrixReader::new(input).read()?;
    let n_rows = dataset.len();
    let series_len = dataset.series_len();

    let groups = GroupSet::partition(classes, dataset.into_rows())?;
    let report = config.compare(&groups)?;

    let output = ReportWriter::new(output_dir, output_name)?.write(&report)?;
    info!(n_pairs = report.len(), "comparison run complete");

    Ok(ComparisonRun {
        report,
        output,
        n_rows,
        n_unmapped: groups.unmapped(),
        series_len,
    })
}
