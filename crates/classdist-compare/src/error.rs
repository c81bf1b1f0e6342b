use classdist_dtw::BandConstraint;

/// Errors from configuring or running a group comparison.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// Returned when a band width is below zero.
    #[error("band width must be non-negative, got {raw}")]
    NegativeBandWidth {
        /// The rejected text.
        raw: String,
    },

    /// Returned when a band width is neither an integer nor an infinity token.
    #[error("invalid band width \"{raw}\": expected a non-negative integer or \"inf\"")]
    InvalidBandWidth {
        /// The raw text that failed to parse.
        raw: String,
    },

    /// Returned when no band width is configured.
    #[error("at least one band width must be configured")]
    NoBandWidths,

    /// Returned when every configured band width is unconstrained.
    #[error("at least one finite band width is required, got {bands:?}")]
    NoFiniteBandWidth {
        /// The configured bands.
        bands: Vec<BandConstraint>,
    },

    /// Returned when a class mapping entry is not of the form `name=label`.
    #[error("invalid class entry \"{raw}\": expected name=label with an integral label")]
    InvalidClassEntry {
        /// The raw entry text.
        raw: String,
    },

    /// Returned when the class mapping has no entries.
    #[error("class mapping must contain at least one class")]
    EmptyClassMap,

    /// Returned when two classes share a name.
    #[error("class name \"{name}\" is mapped more than once")]
    DuplicateClassName {
        /// The repeated name.
        name: String,
    },

    /// Returned when two classes share a label.
    #[error("class label {label} is mapped more than once")]
    DuplicateClassLabel {
        /// The repeated label.
        label: i64,
    },

    /// Returned when a group set has no groups.
    #[error("no groups to compare")]
    NoGroups,

    /// Returned when a member series has a different length from the rest.
    #[error("series in group \"{group}\" has {got} samples, expected {expected}")]
    LengthMismatch {
        /// Name of the group holding the offending series.
        group: String,
        /// Length shared by the series seen so far.
        expected: usize,
        /// Length of the offending series.
        got: usize,
    },

    /// Returned when a group pair has no comparable member pair left after
    /// the self-comparison filter, so no average exists.
    #[error("no comparable series pairs for classes {first}:{second}")]
    EmptyComparison {
        /// Name of the first group.
        first: String,
        /// Name of the second group.
        second: String,
    },
}
