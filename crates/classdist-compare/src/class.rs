//! Class labels and the fixed label-to-name mapping.

use std::fmt;

use crate::error::CompareError;

/// Discrete class label taken from the first column of the input matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassLabel(i64);

impl ClassLabel {
    /// Create a label from its integer value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Convert a label read as a float, e.g. `-1` or `1.0000000e+00`.
    ///
    /// Returns `None` for non-finite or fractional values and for values
    /// outside the `i64` range.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
        (value.is_finite() && value.fract() == 0.0 && in_range).then(|| Self(value as i64))
    }

    /// Return the integer value.
    #[must_use]
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, immutable mapping from class name to label.
///
/// Built once at startup. The order of entries is the order of groups in the
/// comparison and therefore the order of rows in the output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMap {
    entries: Vec<(String, ClassLabel)>,
}

impl ClassMap {
    /// Build a mapping from `(name, label)` entries.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`CompareError::EmptyClassMap`] | `entries` is empty |
    /// | [`CompareError::InvalidClassEntry`] | A name is empty |
    /// | [`CompareError::DuplicateClassName`] | A name appears twice |
    /// | [`CompareError::DuplicateClassLabel`] | A label appears twice |
    pub fn new(entries: Vec<(String, ClassLabel)>) -> Result<Self, CompareError> {
        if entries.is_empty() {
            return Err(CompareError::EmptyClassMap);
        }
        for (idx, (name, label)) in entries.iter().enumerate() {
            if name.is_empty() {
                return Err(CompareError::InvalidClassEntry {
                    raw: format!("={label}"),
                });
            }
            let earlier = &entries[..idx];
            if earlier.iter().any(|(n, _)| n == name) {
                return Err(CompareError::DuplicateClassName { name: name.clone() });
            }
            if earlier.iter().any(|(_, l)| l == label) {
                return Err(CompareError::DuplicateClassLabel { label: label.value() });
            }
        }
        Ok(Self { entries })
    }

    /// Parse `name=label` entries, e.g. `["abnormal=-1", "normal=1"]`.
    ///
    /// # Errors
    ///
    /// [`CompareError::InvalidClassEntry`] for malformed entries, plus every
    /// error of [`ClassMap::new`].
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, CompareError> {
        let entries = raw
            .iter()
            .map(|entry| parse_entry(entry.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Return the position of `label` in the mapping.
    #[must_use]
    pub fn index_of(&self, label: ClassLabel) -> Option<usize> {
        self.entries.iter().position(|(_, l)| *l == label)
    }

    /// Iterate over `(name, label)` in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ClassLabel)> + '_ {
        self.entries.iter().map(|(name, label)| (name.as_str(), *label))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_entry(raw: &str) -> Result<(String, ClassLabel), CompareError> {
    let invalid = || CompareError::InvalidClassEntry { raw: raw.to_string() };
    let (name, label) = raw.split_once('=').ok_or_else(invalid)?;
    let label = label
        .trim()
        .parse::<f64>()
        .ok()
        .and_then(ClassLabel::from_f64)
        .ok_or_else(invalid)?;
    Ok((name.trim().to_string(), label))
}
