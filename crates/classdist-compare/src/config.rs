//! Band-width configuration for a group comparison.

use classdist_dtw::BandConstraint;
use tracing::instrument;

use crate::aggregate;
use crate::error::CompareError;
use crate::group::GroupSet;
use crate::result::ComparisonReport;

/// Tokens accepted for the unconstrained band, compared case-insensitively.
const UNCONSTRAINED_TOKENS: [&str; 4] = ["inf", "infinity", "unconstrained", "∞"];

/// Parse one band width: a non-negative integer, or an infinity token for the
/// unconstrained band.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`CompareError::NegativeBandWidth`] | A minus sign followed by digits, other than `-0` |
/// | [`CompareError::InvalidBandWidth`] | The text is neither an integer nor an infinity token |
pub fn parse_band_width(raw: &str) -> Result<BandConstraint, CompareError> {
    let token = raw.trim();
    if UNCONSTRAINED_TOKENS.iter().any(|t| t.eq_ignore_ascii_case(token)) {
        return Ok(BandConstraint::Unconstrained);
    }
    if let Ok(radius) = token.parse::<usize>() {
        return Ok(BandConstraint::SakoeChibaRadius(radius));
    }
    // Negative integers of any magnitude are a sign error, not a syntax error.
    if let Some(digits) = token.strip_prefix('-')
        && !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
    {
        if digits.bytes().all(|b| b == b'0') {
            return Ok(BandConstraint::SakoeChibaRadius(0));
        }
        return Err(CompareError::NegativeBandWidth {
            raw: token.to_string(),
        });
    }
    Err(CompareError::InvalidBandWidth {
        raw: raw.to_string(),
    })
}

/// Configuration for comparing groups of time series.
///
/// Construct via [`CompareConfig::new`] or [`CompareConfig::parse`], then
/// chain `with_*` methods to override defaults.
///
/// # Defaults
///
/// | Parameter  | Default |
/// |------------|---------|
/// | `parallel` | false   |
#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    pub(crate) bands: Vec<BandConstraint>,
    pub(crate) parallel: bool,
}

impl CompareConfig {
    /// Create a configuration evaluating DTW under each of `bands`, in order.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`CompareError::NoBandWidths`] | `bands` is empty |
    /// | [`CompareError::NoFiniteBandWidth`] | Every band is unconstrained |
    pub fn new(bands: Vec<BandConstraint>) -> Result<Self, CompareError> {
        if bands.is_empty() {
            return Err(CompareError::NoBandWidths);
        }
        if !bands.iter().any(BandConstraint::is_finite) {
            return Err(CompareError::NoFiniteBandWidth { bands });
        }
        Ok(Self {
            bands,
            parallel: false,
        })
    }

    /// Parse band widths from text, e.g. `["0", "10", "25", "inf"]`.
    ///
    /// # Errors
    ///
    /// Every error of [`parse_band_width`] and [`CompareConfig::new`].
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, CompareError> {
        let bands = raw
            .iter()
            .map(|s| parse_band_width(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(bands)
    }

    /// Evaluate the member pairs of each group pair on the rayon thread pool.
    /// Averages are identical to the sequential evaluation.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Return the configured bands in order.
    #[must_use]
    pub fn bands(&self) -> &[BandConstraint] {
        &self.bands
    }

    /// Return whether member pairs are evaluated in parallel.
    #[must_use]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Length of every [`ResultVector`](crate::ResultVector): one Manhattan
    /// average plus one DTW average per band.
    #[must_use]
    pub fn result_len(&self) -> usize {
        1 + self.bands.len()
    }

    /// Compare every unordered pair of groups in `groups`.
    ///
    /// Pairs are visited as `(g0, g0), (g0, g1), ..., (gK, gK)`. The whole
    /// report is computed before it is returned, so a failing pair never
    /// leaves partial output behind.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`CompareError::EmptyComparison`] | A group pair has no comparable member pair |
    #[instrument(skip_all, fields(n_groups = groups.len(), n_bands = self.bands.len()))]
    pub fn compare(&self, groups: &GroupSet) -> Result<ComparisonReport, CompareError> {
        aggregate::compare_groups(groups, self)
    }
}
