//! DTW distance newtype wrapper.

use std::cmp::Ordering;
use std::fmt;

/// A non-negative DTW distance value, or the [`INFEASIBLE`][DtwDistance::INFEASIBLE]
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DtwDistance(f64);

impl DtwDistance {
    /// Sentinel returned when early abandoning finds no warp path within the cutoff.
    ///
    /// Holds `f64::MAX` so that it still orders after every real distance.
    /// The true distance is only known to be greater than the cutoff that was used.
    pub const INFEASIBLE: Self = Self(f64::MAX);

    /// Create a new DTW distance from a raw value.
    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    /// Return the raw distance value. The sentinel yields `f64::MAX`.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Return true unless this is the [`INFEASIBLE`][DtwDistance::INFEASIBLE] sentinel.
    #[must_use]
    pub fn is_feasible(self) -> bool {
        self.0 != f64::MAX
    }

    /// Total ordering comparison using [`f64::total_cmp`].
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for DtwDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_feasible() {
            write!(f, "{:.6}", self.0)
        } else {
            f.write_str("infeasible")
        }
    }
}
