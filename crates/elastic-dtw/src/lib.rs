//! Dynamic Time Warping distance with early abandoning.
//!
//! Pure math library, zero I/O. Provides unconstrained single-channel DTW over
//! squared differences, a cutoff-driven pruning mode for branch-and-bound
//! callers, and minimum-cost warp path reconstruction from the retained cost
//! matrix.

mod distance;
mod dtw;
mod error;
mod matrix;
mod measure;
mod path;
mod series;

pub use distance::DtwDistance;
pub use dtw::{BasicDtw, MatrixState};
pub use error::DtwError;
pub use matrix::CostMatrix;
pub use measure::CutoffDistance;
pub use path::{WarpPath, WarpStep};
pub use series::{TimeSeries, TimeSeriesView};
