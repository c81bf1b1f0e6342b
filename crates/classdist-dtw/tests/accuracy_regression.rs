//! Accuracy regression tests for classdist-dtw.
//!
//! Reference costs were worked out by hand from the table recurrence and are
//! hardcoded to catch regressions in the banded DP.

use classdist_dtw::{AlignmentCost, BandConstraint, Dtw, TimeSeries, manhattan};

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

fn ts(values: &[f64]) -> TimeSeries {
    TimeSeries::new(values.to_vec()).expect("valid test series")
}

fn bands() -> [BandConstraint; 5] {
    [
        BandConstraint::SakoeChibaRadius(0),
        BandConstraint::SakoeChibaRadius(1),
        BandConstraint::SakoeChibaRadius(2),
        BandConstraint::SakoeChibaRadius(10),
        BandConstraint::Unconstrained,
    ]
}

// ---------------------------------------------------------------------------
// a) known costs
// ---------------------------------------------------------------------------

/// Unconstrained DTW costs for small pairs, computed by hand.
#[test]
fn unconstrained_costs_match_known_values() {
    let cases: Vec<(TimeSeries, TimeSeries, f64)> = vec![
        (ts(&[0.0, 0.0, 0.0]), ts(&[1.0, 1.0, 1.0]), 3.0),           // constant offset
        (ts(&[0.0, 1.0, 0.0]), ts(&[0.0, 0.0, 0.0]), 1.0),           // single peak
        (ts(&[1.0, 2.0, 3.0, 4.0]), ts(&[1.0, 2.0, 3.0, 4.0]), 0.0), // identical
        (ts(&[1.0, 2.0, 3.0]), ts(&[3.0, 2.0, 1.0]), 4.0),           // reversed
        (ts(&[1.0]), ts(&[5.0]), 4.0),                               // single point
        (ts(&[0.0, 0.0, 1.0]), ts(&[1.0, 0.0, 0.0]), 2.0),           // shifted peak
        (ts(&[1.0, 1.0, 2.0, 3.0]), ts(&[1.0, 2.0, 3.0, 3.0]), 0.0), // pure time shift
    ];

    let dtw = Dtw::unconstrained();
    for (i, (a, b, expected)) in cases.iter().enumerate() {
        let cost = dtw.distance(a.as_view(), b.as_view()).value();
        assert!(
            (cost - expected).abs() < 1e-12,
            "case {i}: got {cost}, expected {expected}"
        );
    }
}

// ---------------------------------------------------------------------------
// b) band monotonicity
// ---------------------------------------------------------------------------

/// Widening the band can only lower the cost, and the unconstrained cost is a
/// floor for every finite band.
#[test]
fn wider_band_never_costs_more() {
    let pairs = [
        (ts(&[0.0, 1.0, 2.0, 3.0]), ts(&[3.0, 2.0, 1.0, 0.0])),
        (ts(&[1.0, 5.0, 1.0, 5.0, 1.0]), ts(&[5.0, 1.0, 5.0, 1.0, 5.0])),
        (ts(&[0.0, 0.0, 0.0, 1.0]), ts(&[1.0, 0.0, 0.0, 0.0])),
        (ts(&[10.0, 0.0, 10.0, 2.0, 4.0, 4.0]), ts(&[0.0, 10.0, 0.0, 3.0, 3.0, 5.0])),
    ];

    for (i, (a, b)) in pairs.iter().enumerate() {
        let costs: Vec<f64> = bands()
            .iter()
            .map(|&band| Dtw::new(band).distance(a.as_view(), b.as_view()).value())
            .collect();
        for window in costs.windows(2) {
            assert!(window[1] <= window[0], "pair {i}: costs not monotone {costs:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// c) zero band equals Manhattan for equal lengths
// ---------------------------------------------------------------------------

/// With a zero band the only path is the diagonal, whose cost is the
/// Manhattan distance.
#[test]
fn zero_band_equals_manhattan() {
    let pairs = [
        (ts(&[0.5, 1.5, -2.0, 4.0]), ts(&[1.0, 1.0, 1.0, 1.0])),
        (ts(&[3.0, 1.0, 4.0, 1.0, 5.0]), ts(&[2.0, 7.0, 1.0, 8.0, 2.0])),
    ];
    let dtw = Dtw::with_sakoe_chiba(0);
    for (a, b) in &pairs {
        let lockstep = manhattan(a.as_view(), b.as_view());
        let cost = dtw.distance(a.as_view(), b.as_view()).value();
        assert!((lockstep - cost).abs() < 1e-12);
    }
}

// ---------------------------------------------------------------------------
// d) unequal lengths
// ---------------------------------------------------------------------------

/// A length gap larger than the radius makes the final cell unreachable.
#[test]
fn length_gap_beyond_radius_is_infinite() {
    let a = ts(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let b = ts(&[1.0, 5.0]);
    assert_eq!(Dtw::with_sakoe_chiba(0).distance(a.as_view(), b.as_view()), AlignmentCost::INFINITY);
    assert_eq!(Dtw::with_sakoe_chiba(2).distance(a.as_view(), b.as_view()), AlignmentCost::INFINITY);
    assert!(Dtw::with_sakoe_chiba(3).distance(a.as_view(), b.as_view()).is_reachable());
    assert!(Dtw::unconstrained().distance(a.as_view(), b.as_view()).is_reachable());
}

// ---------------------------------------------------------------------------
// e) rolling buffer matches full table
// ---------------------------------------------------------------------------

/// `distance()` must equal the final cell of `alignment_table()` for every band.
#[test]
fn rolling_matches_full_table() {
    let pairs = [
        (ts(&[1.0, 2.0, 3.0]), ts(&[3.0, 2.0, 1.0])),
        (ts(&[0.0, 5.0, 0.0, 5.0]), ts(&[5.0, 0.0, 5.0, 0.0])),
        (ts(&[0.0, 1.0, 4.0, 9.0, 16.0, 25.0]), ts(&[0.0, 2.0, 3.0, 8.0])),
        (ts(&[10.0, 5.0]), ts(&[1.0, 5.0, 10.0, 2.0])),
    ];

    for (i, (a, b)) in pairs.iter().enumerate() {
        for band in bands() {
            let dtw = Dtw::new(band);
            let rolling = dtw.distance(a.as_view(), b.as_view()).value();
            let full = dtw.alignment_table(a.as_view(), b.as_view()).final_cost();
            assert_eq!(rolling, full, "pair {i}, band {band}");
        }
    }
}
