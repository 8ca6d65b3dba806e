//! Error types for sequence validation and DTW engine state.

use crate::dtw::MatrixState;

/// Errors from time series validation and warp path reconstruction.
#[derive(Debug, thiserror::Error)]
pub enum DtwError {
    /// Returned when an empty slice is provided as a time series.
    #[error("time series must be non-empty")]
    EmptySeries,

    /// Returned when a time series contains NaN, infinity, or negative infinity.
    #[error("time series contains non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the first non-finite value found.
        index: usize,
    },

    /// Returned when a warp path is requested but the cost matrix does not
    /// hold a completed computation.
    #[error("cannot reconstruct warp path: cost matrix is {state}")]
    InvalidState {
        /// State of the cost matrix at the time of the request.
        state: MatrixState,
    },
}
