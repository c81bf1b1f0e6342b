//! Groups of equal-length series sharing a class label.

use classdist_dtw::TimeSeries;
use tracing::{debug, warn};

use crate::class::{ClassLabel, ClassMap};
use crate::error::CompareError;

/// The member series of one class. Membership is fixed once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    name: String,
    members: Vec<TimeSeries>,
}

impl Group {
    /// Create a group from its class name and members.
    #[must_use]
    pub fn new(name: impl Into<String>, members: Vec<TimeSeries>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn members(&self) -> &[TimeSeries] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Ordered groups whose members all share one length.
///
/// Uniform length is what lets the aggregator call the Manhattan distance
/// without checking lengths per pair.
#[derive(Debug, Clone)]
pub struct GroupSet {
    groups: Vec<Group>,
    series_len: Option<usize>,
    unmapped: usize,
}

impl GroupSet {
    /// Wrap `groups`, checking that every member has the same length.
    ///
    /// Empty groups are accepted here; any pair involving one fails later
    /// with [`CompareError::EmptyComparison`].
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`CompareError::NoGroups`] | `groups` is empty |
    /// | [`CompareError::LengthMismatch`] | A member's length differs from the first member seen |
    pub fn new(groups: Vec<Group>) -> Result<Self, CompareError> {
        if groups.is_empty() {
            return Err(CompareError::NoGroups);
        }

        let mut series_len: Option<usize> = None;
        for group in &groups {
            for series in group.members() {
                match series_len {
                    None => series_len = Some(series.len()),
                    Some(expected) if expected != series.len() => {
                        return Err(CompareError::LengthMismatch {
                            group: group.name.clone(),
                            expected,
                            got: series.len(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(Self {
            groups,
            series_len,
            unmapped: 0,
        })
    }

    /// Split labeled rows into one group per class of `classes`, in mapping
    /// order. Rows whose label is not mapped are dropped and counted.
    ///
    /// # Errors
    ///
    /// Same as [`GroupSet::new`].
    pub fn partition<I>(classes: &ClassMap, rows: I) -> Result<Self, CompareError>
    where
        I: IntoIterator<Item = (ClassLabel, TimeSeries)>,
    {
        let mut buckets: Vec<Vec<TimeSeries>> = vec![Vec::new(); classes.len()];
        let mut unmapped = 0usize;

        for (label, series) in rows {
            match classes.index_of(label) {
                Some(idx) => buckets[idx].push(series),
                None => unmapped += 1,
            }
        }

        if unmapped > 0 {
            warn!(unmapped, "rows with unmapped class labels were skipped");
        }

        let groups: Vec<Group> = classes
            .iter()
            .zip(buckets)
            .map(|((name, label), members)| {
                debug!(class = name, %label, n_members = members.len(), "group built");
                Group::new(name, members)
            })
            .collect();

        let mut set = Self::new(groups)?;
        set.unmapped = unmapped;
        Ok(set)
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Length shared by every member, or `None` if all groups are empty.
    #[must_use]
    pub fn series_len(&self) -> Option<usize> {
        self.series_len
    }

    /// Number of rows dropped by [`partition`](Self::partition) for having
    /// no class in the mapping.
    #[must_use]
    pub fn unmapped(&self) -> usize {
        self.unmapped
    }
}
