//! Validation errors for sample sequences.

/// Reasons a sequence of samples cannot become a [`TimeSeries`](crate::TimeSeries).
#[derive(Debug, thiserror::Error)]
pub enum DtwError {
    /// The sequence holds no samples.
    #[error("a time series needs at least one sample")]
    EmptySeries,

    /// A sample is NaN or infinite. Infinity is reserved for unreachable
    /// alignment cells and never appears in input data.
    #[error("sample {index} is not a finite number")]
    NonFiniteValue {
        /// Position of the first offending sample.
        index: usize,
    },
}
