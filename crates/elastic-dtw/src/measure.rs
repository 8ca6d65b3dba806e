//! Capability trait for distances that accept a pruning cutoff.

use crate::distance::DtwDistance;
use crate::dtw::BasicDtw;
use crate::series::TimeSeriesView;

/// A distance that can stop early once it is certain to exceed `cutoff`.
///
/// Nearest-neighbour search with branch-and-bound passes its best distance so
/// far as `cutoff` and treats [`DtwDistance::INFEASIBLE`] as "not closer".
/// Implementations may keep scratch state between calls, hence `&mut self`.
pub trait CutoffDistance {
    /// Distance between `a` and `b`, or [`DtwDistance::INFEASIBLE`] if it
    /// exceeds `cutoff`.
    fn distance_with_cutoff(
        &mut self,
        a: TimeSeriesView<'_>,
        b: TimeSeriesView<'_>,
        cutoff: f64,
    ) -> DtwDistance;
}

impl CutoffDistance for BasicDtw {
    fn distance_with_cutoff(
        &mut self,
        a: TimeSeriesView<'_>,
        b: TimeSeriesView<'_>,
        cutoff: f64,
    ) -> DtwDistance {
        BasicDtw::distance_with_cutoff(self, a, b, cutoff)
    }
}
