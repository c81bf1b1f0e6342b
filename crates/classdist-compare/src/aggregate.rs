//! Averaging of Manhattan and banded DTW distances over group pairs.

use classdist_dtw::{Dtw, TimeSeries, manhattan};
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::config::CompareConfig;
use crate::error::CompareError;
use crate::group::{Group, GroupSet};
use crate::result::{ComparisonReport, PairResult, ResultVector};

/// Running sums and pair count for one group pair.
#[derive(Debug, Clone)]
struct PairTotals {
    sums: Vec<f64>,
    count: usize,
}

impl PairTotals {
    fn new(width: usize) -> Self {
        Self {
            sums: vec![0.0; width],
            count: 0,
        }
    }

    fn add(mut self, metrics: &[f64]) -> Self {
        for (sum, value) in self.sums.iter_mut().zip(metrics) {
            *sum += value;
        }
        self.count += 1;
        self
    }

    /// Divide every sum by the pair count. A zero count has no average and
    /// is reported instead of producing NaN.
    fn into_averages(self, first: &Group, second: &Group) -> Result<ResultVector, CompareError> {
        if self.count == 0 {
            return Err(CompareError::EmptyComparison {
                first: first.name().to_string(),
                second: second.name().to_string(),
            });
        }
        let n = self.count as f64;
        Ok(ResultVector::new(self.sums.into_iter().map(|s| s / n).collect()))
    }
}

/// Manhattan distance followed by the DTW cost under each band.
fn pair_metrics(x: &TimeSeries, y: &TimeSeries, dtws: &[Dtw]) -> Vec<f64> {
    let (x, y) = (x.as_view(), y.as_view());
    std::iter::once(manhattan(x, y))
        .chain(dtws.iter().map(|dtw| dtw.distance(x, y).value()))
        .collect()
}

/// Cross product of the two groups' members.
///
/// When both sides are the same group, every pair whose two series hold
/// identical values is left out: the series against itself, and also two
/// distinct rows that happen to be equal.
fn retained_pairs<'a>(
    first: &'a Group,
    second: &'a Group,
    same_group: bool,
) -> impl Iterator<Item = (&'a TimeSeries, &'a TimeSeries)> + 'a {
    first
        .members()
        .iter()
        .flat_map(move |x| second.members().iter().map(move |y| (x, y)))
        .filter(move |(x, y)| !(same_group && x == y))
}

/// Average every metric over the retained member pairs of one group pair.
#[instrument(skip_all, fields(first = first.name(), second = second.name()))]
fn compare_pair(
    first: &Group,
    second: &Group,
    same_group: bool,
    config: &CompareConfig,
    dtws: &[Dtw],
) -> Result<PairResult, CompareError> {
    let empty = PairTotals::new(config.result_len());

    let totals = if config.parallel() {
        let pairs: Vec<_> = retained_pairs(first, second, same_group).collect();
        // Collect in pair order, then sum sequentially so the averages do not
        // depend on how rayon split the work.
        let metrics: Vec<Vec<f64>> = pairs
            .par_iter()
            .map(|(x, y)| pair_metrics(x, y, dtws))
            .collect();
        metrics.iter().fold(empty, |acc, m| acc.add(m))
    } else {
        retained_pairs(first, second, same_group)
            .fold(empty, |acc, (x, y)| acc.add(&pair_metrics(x, y, dtws)))
    };

    let n_pairs = totals.count;
    let n_skipped = first.len() * second.len() - n_pairs;
    if n_skipped > 0 {
        debug!(n_skipped, "identical pairs skipped");
    }

    let averages = totals.into_averages(first, second)?;
    info!(n_pairs, manhattan = averages.manhattan(), "group pair compared");

    Ok(PairResult {
        first: first.name().to_string(),
        second: second.name().to_string(),
        n_pairs,
        n_skipped,
        averages,
    })
}

/// Compare every unordered pair `(idx1, idx2)` with `idx1 <= idx2`.
pub(crate) fn compare_groups(
    groups: &GroupSet,
    config: &CompareConfig,
) -> Result<ComparisonReport, CompareError> {
    let dtws: Vec<Dtw> = config.bands().iter().map(|&band| Dtw::new(band)).collect();
    let all = groups.groups();

    let mut pairs = Vec::with_capacity(all.len() * (all.len() + 1) / 2);
    for (idx1, first) in all.iter().enumerate() {
        for (offset, second) in all[idx1..].iter().enumerate() {
            pairs.push(compare_pair(first, second, offset == 0, config, &dtws)?);
        }
    }

    Ok(ComparisonReport {
        bands: config.bands().to_vec(),
        pairs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(values: &[f64]) -> TimeSeries {
        TimeSeries::new(values.to_vec()).unwrap()
    }

    fn group(name: &str, members: &[&[f64]]) -> Group {
        Group::new(name, members.iter().map(|m| ts(m)).collect())
    }

    fn diagonal_and_free() -> CompareConfig {
        CompareConfig::parse(&["0", "inf"]).unwrap()
    }

    #[test]
    fn cross_group_average() {
        let g1 = group("g1", &[&[0.0, 0.0]]);
        let g2 = group("g2", &[&[1.0, 1.0], &[2.0, 2.0]]);
        let config = diagonal_and_free();
        let dtws = [Dtw::with_sakoe_chiba(0), Dtw::unconstrained()];

        let result = compare_pair(&g1, &g2, false, &config, &dtws).unwrap();
        assert_eq!(result.n_pairs, 2);
        assert_eq!(result.averages.manhattan(), 3.0);
        assert_eq!(result.averages.dtw(), &[3.0, 3.0]);
    }

    #[test]
    fn self_comparison_skips_value_equal_pairs() {
        // Rows 0 and 1 are distinct rows with identical values: all four
        // pairs among them are skipped, leaving (0,2), (1,2), (2,0), (2,1).
        let g = group("g", &[&[1.0, 1.0], &[1.0, 1.0], &[3.0, 1.0]]);
        let config = diagonal_and_free();
        let dtws = [Dtw::with_sakoe_chiba(0), Dtw::unconstrained()];

        let result = compare_pair(&g, &g, true, &config, &dtws).unwrap();
        assert_eq!(result.n_pairs, 4);
        assert_eq!(result.n_skipped, 5);
        assert_eq!(result.averages.manhattan(), 2.0);
    }

    #[test]
    fn all_identical_group_is_empty_comparison() {
        let g = group("g", &[&[1.0, 1.0], &[1.0, 1.0]]);
        let config = CompareConfig::parse(&["1", "inf"]).unwrap();
        let dtws = [Dtw::with_sakoe_chiba(1), Dtw::unconstrained()];

        let result = compare_pair(&g, &g, true, &config, &dtws);
        assert!(matches!(
            result,
            Err(CompareError::EmptyComparison { ref first, ref second }) if first == "g" && second == "g"
        ));
    }

    #[test]
    fn same_values_across_groups_are_kept() {
        let g1 = group("g1", &[&[1.0, 2.0]]);
        let g2 = group("g2", &[&[1.0, 2.0]]);
        let config = diagonal_and_free();
        let dtws = [Dtw::with_sakoe_chiba(0), Dtw::unconstrained()];

        let result = compare_pair(&g1, &g2, false, &config, &dtws).unwrap();
        assert_eq!(result.n_pairs, 1);
        assert_eq!(result.averages.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let g1 = group("g1", &[&[0.0, 1.0, 3.0, 2.0], &[1.0, 1.0, 0.5, 4.0], &[2.0, 0.0, 0.0, 1.0]]);
        let g2 = group("g2", &[&[3.0, 3.0, 1.0, 0.0], &[0.25, 1.0, 2.0, 2.0]]);
        let set = GroupSet::new(vec![g1, g2]).unwrap();

        let sequential = CompareConfig::parse(&["0", "1", "inf"]).unwrap();
        let parallel = sequential.clone().with_parallel(true);

        let a = compare_groups(&set, &sequential).unwrap();
        let b = compare_groups(&set, &parallel).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn visits_pairs_in_upper_triangle_order() {
        let set = GroupSet::new(vec![
            group("a", &[&[0.0], &[1.0]]),
            group("b", &[&[2.0], &[3.0]]),
            group("c", &[&[4.0], &[5.0]]),
        ])
        .unwrap();
        let report = compare_groups(&set, &diagonal_and_free()).unwrap();
        let labels: Vec<String> = report.pairs.iter().map(PairResult::label).collect();
        assert_eq!(labels, vec!["a:a", "a:b", "a:c", "b:b", "b:c", "c:c"]);
    }

    #[test]
    fn singleton_group_fails_whole_report() {
        let set = GroupSet::new(vec![
            group("a", &[&[0.0], &[1.0]]),
            group("b", &[&[2.0]]),
        ])
        .unwrap();
        let result = compare_groups(&set, &diagonal_and_free());
        assert!(matches!(
            result,
            Err(CompareError::EmptyComparison { ref first, .. }) if first == "b"
        ));
    }
}
