//! File I/O and validation for the classdist pipeline, and the end-to-end
//! [`run_comparison`] driver built on them.

mod domain;
mod error;
mod pipeline;
mod reader;
mod writer;

pub use domain::{LabeledDataset, OutputName};
pub use error::IoError;
pub use pipeline::{ComparisonRun, RunError, run_comparison};
pub use reader::LabeledMatrixReader;
pub use writer::{ReportWriter, render_table};
