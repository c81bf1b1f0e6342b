//! Manhattan distance and band-constrained DTW alignment cost.
//!
//! Pure math library with zero I/O. Provides the pointwise Manhattan distance
//! between equal-length series, Dynamic Time Warping with an optional
//! Sakoe-Chiba band, and the full accumulated-cost table.

mod constraint;
mod cost;
mod dtw;
mod error;
mod manhattan;
mod series;
mod table;

pub use constraint::BandConstraint;
pub use cost::AlignmentCost;
pub use dtw::Dtw;
pub use error::DtwError;
pub use manhattan::manhattan;
pub use series::{TimeSeries, TimeSeriesView};
pub use table::AlignmentTable;
