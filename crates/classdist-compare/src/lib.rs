//! Pairwise dissimilarity between labeled groups of time series.
//!
//! For every unordered pair of classes, including a class against itself,
//! averages the Manhattan distance and the banded DTW cost of each configured
//! band width over all comparable member pairs.

mod aggregate;
mod class;
mod config;
mod error;
mod group;
mod result;

pub use class::{ClassLabel, ClassMap};
pub use config::{CompareConfig, parse_band_width};
pub use error::CompareError;
pub use group::{Group, GroupSet};
pub use result::{ComparisonReport, PairResult, ResultVector};
