//! Tab-separated writer for comparison reports.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use classdist_compare::ComparisonReport;
use tracing::{debug, info, instrument};

use crate::IoError;
use crate::domain::OutputName;

/// Render a report as a tab-separated table.
///
/// The header row is `Pair of classes`, `Manhattan`, then one
/// `DTW, w = <band>` column per configured band. Each following row holds
/// one group pair, labelled `first:second`, with every average printed to
/// two decimals.
#[must_use]
pub fn render_table(report: &ComparisonReport) -> String {
    let mut out = String::from("Pair of classes\tManhattan");
    for band in &report.bands {
        // Writing into a String cannot fail.
        let _ = write!(out, "\tDTW, w = {band}");
    }
    out.push('\n');

    for pair in &report.pairs {
        out.push_str(&pair.label());
        for value in pair.averages.as_slice() {
            let _ = write!(out, "\t{value:.2}");
        }
        out.push('\n');
    }
    out
}

/// Writes comparison reports into an output directory.
///
/// Creates the output directory on construction if it does not exist.
pub struct ReportWriter {
    output_dir: PathBuf,
    file_name: OutputName,
}

impl ReportWriter {
    /// Create a new writer targeting `{output_dir}/{file_name}`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputDirCreate`] if the directory cannot be created.
    #[instrument(skip_all, fields(dir = %output_dir.display(), file = %file_name))]
    pub fn new(output_dir: &Path, file_name: OutputName) -> Result<Self, IoError> {
        fs::create_dir_all(output_dir).map_err(|e| IoError::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        debug!("output directory ready");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            file_name,
        })
    }

    /// Path the table is written to.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.output_dir.join(self.file_name.as_str())
    }

    /// Render and write the table, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFile`] if the file cannot be written.
    #[instrument(skip_all)]
    pub fn write(&self, report: &ComparisonReport) -> Result<PathBuf, IoError> {
        let path = self.path();
        fs::write(&path, render_table(report)).map_err(|e| IoError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), n_rows = report.len(), "comparison table written");
        Ok(path)
    }
}
