//! Accuracy regression tests for elastic-dtw.
//!
//! Reference distances are hardcoded to catch regressions in the cost-matrix
//! fill, the cutoff pruning, and the warp path traceback.

use elastic_dtw::{BasicDtw, DtwDistance, MatrixState, TimeSeries};

// ---------------------------------------------------------------------------
// Helper
// ---------------------------------------------------------------------------

fn ts(values: Vec<f64>) -> TimeSeries {
    TimeSeries::new(values).expect("valid test series")
}

fn reference_pairs() -> Vec<(TimeSeries, TimeSeries, f64)> {
    vec![
        (ts(vec![0.0, 0.0, 0.0]), ts(vec![1.0, 1.0, 1.0]), 1.7320508075688772), // constant offset
        (ts(vec![0.0, 1.0, 0.0]), ts(vec![0.0, 0.0, 0.0]), 1.0),                // single peak
        (ts(vec![1.0, 2.0, 3.0, 4.0]), ts(vec![1.0, 2.0, 3.0, 4.0]), 0.0),      // identical
        (ts(vec![1.0, 2.0, 3.0]), ts(vec![3.0, 2.0, 1.0]), 2.8284271247461903), // reversed
        (ts(vec![0.0, 5.0, 0.0, 5.0]), ts(vec![5.0, 0.0, 5.0, 0.0]), 7.0710678118654755), // alternating
        (ts(vec![1.0]), ts(vec![5.0]), 4.0),                                    // single point
        (ts(vec![0.0, 0.0, 1.0]), ts(vec![1.0, 0.0, 0.0]), 1.4142135623730951), // shifted peak
        (ts(vec![0.0, 1.0, 2.0, 3.0, 4.0]), ts(vec![0.0, 0.0, 0.0, 0.0, 4.0]), 2.449489742783178), // late ramp
        (ts(vec![10.0, 10.0, 10.0]), ts(vec![10.1, 9.9, 10.0]), 0.14142135623730953), // tiny perturbation
        (ts(vec![5.0]), ts(vec![1.0, 2.0, 3.0]), 5.385164807134504),            // unequal lengths
    ]
}

// ---------------------------------------------------------------------------
// a) distances_match_known_values
// ---------------------------------------------------------------------------

#[test]
fn distances_match_known_values() {
    let mut dtw = BasicDtw::new();
    for (i, (a, b, expected)) in reference_pairs().iter().enumerate() {
        let dist = dtw.distance(a.as_view(), b.as_view()).value();
        assert!(
            (dist - expected).abs() < 1e-10,
            "pair {i}: got {dist:.15}, expected {expected:.15}"
        );
    }
}

// ---------------------------------------------------------------------------
// b) early_abandon_never_changes_a_feasible_result
// ---------------------------------------------------------------------------

/// With and without pruning the same pairs must agree whenever the cutoff
/// admits the true distance.
#[test]
fn early_abandon_never_changes_a_feasible_result() {
    let mut pruned = BasicDtw::with_early_abandon(true);
    let mut plain = BasicDtw::with_early_abandon(false);

    for (i, (a, b, expected)) in reference_pairs().iter().enumerate() {
        let cutoff = expected + 0.25;
        let with = pruned.distance_with_cutoff(a.as_view(), b.as_view(), cutoff);
        let without = plain.distance_with_cutoff(a.as_view(), b.as_view(), cutoff);
        assert_eq!(with, without, "pair {i}");
        assert_eq!(pruned.state(), MatrixState::Complete);
        assert_eq!(
            pruned.warp_path().unwrap(),
            plain.warp_path().unwrap(),
            "pair {i}: path differs under pruning"
        );
    }
}

// ---------------------------------------------------------------------------
// c) tight_cutoffs_are_infeasible
// ---------------------------------------------------------------------------

#[test]
fn tight_cutoffs_are_infeasible() {
    let mut dtw = BasicDtw::new();
    for (i, (a, b, expected)) in reference_pairs().iter().enumerate() {
        if *expected == 0.0 {
            continue;
        }
        let dist = dtw.distance_with_cutoff(a.as_view(), b.as_view(), expected * 0.99);
        assert_eq!(dist, DtwDistance::INFEASIBLE, "pair {i}");
    }

    // First cell alone already exceeds the cutoff.
    let a = ts(vec![0.0, 0.0, 0.0, 0.0]);
    let b = ts(vec![10.0, 10.0, 10.0, 10.0]);
    assert_eq!(
        dtw.distance_with_cutoff(a.as_view(), b.as_view(), 1.0),
        DtwDistance::INFEASIBLE
    );
}

// ---------------------------------------------------------------------------
// d) warp_paths_match_known_alignments
// ---------------------------------------------------------------------------

#[test]
fn warp_paths_match_known_alignments() {
    let cases: Vec<(TimeSeries, TimeSeries, Vec<(usize, usize)>)> = vec![
        (
            ts(vec![1.0, 2.0, 3.0]),
            ts(vec![1.0, 2.0, 3.0]),
            vec![(2, 2), (1, 1), (0, 0)],
        ),
        (
            ts(vec![0.0, 5.0, 0.0, 5.0]),
            ts(vec![5.0, 0.0, 5.0, 0.0]),
            vec![(3, 3), (2, 3), (1, 2), (0, 1), (0, 0)],
        ),
        (
            ts(vec![5.0]),
            ts(vec![1.0, 2.0, 3.0]),
            vec![(0, 2), (0, 1), (0, 0)],
        ),
        (
            ts(vec![1.0, 1.0, 2.0, 3.0]),
            ts(vec![1.0, 2.0, 3.0]),
            vec![(3, 2), (2, 1), (1, 0), (0, 0)],
        ),
    ];

    let mut dtw = BasicDtw::new();
    for (i, (a, b, expected)) in cases.iter().enumerate() {
        let (_, path) = dtw.distance_and_path(a.as_view(), b.as_view()).unwrap();
        let coords: Vec<(usize, usize)> = path.iter().map(|s| (s.a, s.b)).collect();
        assert_eq!(&coords, expected, "case {i}");
    }
}
