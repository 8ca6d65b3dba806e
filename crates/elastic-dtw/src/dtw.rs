//! DTW distance computation with early abandoning and warp path traceback.

use std::fmt;

use tracing::{debug, instrument};

use crate::distance::DtwDistance;
use crate::error::DtwError;
use crate::matrix::CostMatrix;
use crate::path::{WarpPath, WarpStep};
use crate::series::TimeSeriesView;

/// What the engine's cost matrix currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixState {
    /// No distance has been computed yet.
    Empty,
    /// The last computation filled the matrix to the final cell.
    Complete,
    /// The last computation returned [`DtwDistance::INFEASIBLE`]; the matrix is
    /// only partially filled.
    Abandoned,
}

impl fmt::Display for MatrixState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty (no distance computed yet)"),
            Self::Complete => f.write_str("complete"),
            Self::Abandoned => f.write_str("abandoned (last computation exceeded its cutoff)"),
        }
    }
}

/// Pruning bound in distance units, compared against squared cumulative costs.
#[derive(Debug, Clone, Copy)]
struct Cutoff {
    limit: f64,
    limit_sq: f64,
}

impl Cutoff {
    fn new(limit: f64) -> Self {
        // Squaring a negative limit would flip its sign.
        let limit_sq = if limit < 0.0 {
            f64::NEG_INFINITY
        } else {
            limit * limit
        };
        Self { limit, limit_sq }
    }

    /// Strict: a cost whose root equals the limit is kept. The squared test is
    /// a fast filter; the root confirms so that rounding in `limit_sq` never
    /// prunes a cell that lies within the limit.
    #[inline]
    fn exceeded_by(self, cost_sq: f64) -> bool {
        cost_sq > self.limit_sq && cost_sq.sqrt() > self.limit
    }
}

/// Unconstrained single-channel DTW engine.
///
/// Owns the cost matrix of its last computation so that the warp path and the
/// matrix itself can be inspected afterwards. Every computation takes
/// `&mut self` and rewrites the matrix; give each thread its own engine.
///
/// Local cost is the squared difference; the returned distance is the square
/// root of the cumulative cost at the final cell.
#[derive(Debug, Clone)]
pub struct BasicDtw {
    early_abandon: bool,
    matrix: CostMatrix,
    state: MatrixState,
}

impl Default for BasicDtw {
    fn default() -> Self {
        Self::new()
    }
}

impl BasicDtw {
    /// Create an engine with early abandoning enabled.
    ///
    /// With the default cutoff of `f64::INFINITY` nothing is ever abandoned, so
    /// this only matters for [`distance_with_cutoff`][Self::distance_with_cutoff].
    #[must_use]
    pub fn new() -> Self {
        Self::with_early_abandon(true)
    }

    /// Create an engine with early abandoning explicitly enabled or disabled.
    #[must_use]
    pub fn with_early_abandon(early_abandon: bool) -> Self {
        Self {
            early_abandon,
            matrix: CostMatrix::default(),
            state: MatrixState::Empty,
        }
    }

    /// Return whether cutoff pruning is applied.
    #[must_use]
    pub fn early_abandon(&self) -> bool {
        self.early_abandon
    }

    /// Enable or disable cutoff pruning for subsequent computations.
    pub fn set_early_abandon(&mut self, early_abandon: bool) {
        self.early_abandon = early_abandon;
    }

    /// Return what the cost matrix currently holds.
    #[must_use]
    pub fn state(&self) -> MatrixState {
        self.state
    }

    /// Read-only view of the cost matrix left by the last computation.
    ///
    /// After an abandoned computation the unreached and pruned cells hold
    /// `f64::MAX`. Before any computation the matrix is `0 × 0`.
    #[must_use]
    pub fn cost_matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Compute the DTW distance without a cutoff. Never abandons.
    #[instrument(skip(self, a, b), fields(n = a.len(), m = b.len()))]
    pub fn distance(&mut self, a: TimeSeriesView<'_>, b: TimeSeriesView<'_>) -> DtwDistance {
        self.fill(a.as_slice(), b.as_slice(), f64::INFINITY)
    }

    /// Compute the DTW distance, abandoning once it is certain to exceed `cutoff`.
    ///
    /// `cutoff` is in distance units. When early abandoning is enabled the
    /// result is exact: any `cutoff` at or above the true distance yields the
    /// true distance, any `cutoff` below it yields [`DtwDistance::INFEASIBLE`].
    /// When early abandoning is disabled `cutoff` is ignored.
    ///
    /// Abandon points:
    ///
    /// | Condition | Result |
    /// |---|---|
    /// | `(a[0] - b[0])²` exceeds the cutoff | `INFEASIBLE`, before any edge fill |
    /// | No interior cell of some row has a predecessor within the cutoff | `INFEASIBLE` |
    /// | The final cumulative cost exceeds the cutoff | `INFEASIBLE` |
    /// | Otherwise | `sqrt` of the final cumulative cost |
    #[instrument(skip(self, a, b), fields(n = a.len(), m = b.len(), early_abandon = self.early_abandon))]
    pub fn distance_with_cutoff(
        &mut self,
        a: TimeSeriesView<'_>,
        b: TimeSeriesView<'_>,
        cutoff: f64,
    ) -> DtwDistance {
        self.fill(a.as_slice(), b.as_slice(), cutoff)
    }

    /// Compute the unbounded DTW distance and its minimum-cost warp path.
    ///
    /// # Errors
    ///
    /// Never fails in practice: an unbounded computation always completes. The
    /// `Result` is that of [`warp_path`][Self::warp_path].
    pub fn distance_and_path(
        &mut self,
        a: TimeSeriesView<'_>,
        b: TimeSeriesView<'_>,
    ) -> Result<(DtwDistance, WarpPath), DtwError> {
        let dist = self.distance(a, b);
        let path = self.warp_path()?;
        Ok((dist, path))
    }

    /// Trace the minimum-cost warp path back through the last cost matrix.
    ///
    /// Starts at the final cell and ends at `(0, 0)`. When several predecessors
    /// hold the minimum, the diagonal wins, then up (`i - 1`), then left (`j - 1`).
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::InvalidState`] | No distance computed yet, or the last one was abandoned |
    pub fn warp_path(&self) -> Result<WarpPath, DtwError> {
        if self.state != MatrixState::Complete {
            return Err(DtwError::InvalidState { state: self.state });
        }

        let m = &self.matrix;
        let mut i = m.rows() - 1;
        let mut j = m.cols() - 1;
        let mut steps = Vec::with_capacity(m.rows() + m.cols() - 1);

        loop {
            steps.push(WarpStep {
                a: i,
                b: j,
                cost: m.get(i, j),
            });
            match (i, j) {
                (0, 0) => break,
                (_, 0) => i -= 1,
                (0, _) => j -= 1,
                _ => {
                    let diag = m.get(i - 1, j - 1);
                    let up = m.get(i - 1, j);
                    let left = m.get(i, j - 1);
                    if diag <= up && diag <= left {
                        i -= 1;
                        j -= 1;
                    } else if up <= left {
                        i -= 1;
                    } else {
                        j -= 1;
                    }
                }
            }
        }

        Ok(WarpPath::new(steps))
    }

    /// Fill the cost matrix for `a` × `b`.
    ///
    /// Cell `(i, j)` lives at flat index `i * m + j`. The edges are running sums
    /// and are never pruned; interior cells whose best predecessor already
    /// exceeds the cutoff keep the `f64::MAX` placed by the reset.
    #[allow(clippy::needless_range_loop)]
    fn fill(&mut self, a: &[f64], b: &[f64], cutoff: f64) -> DtwDistance {
        let n = a.len();
        let m = b.len();
        let cutoff = self.early_abandon.then(|| Cutoff::new(cutoff));

        self.matrix.reset(n, m);
        self.state = MatrixState::Abandoned;
        let cost = self.matrix.cells_mut();

        cost[0] = (a[0] - b[0]).powi(2);
        if let Some(c) = cutoff
            && c.exceeded_by(cost[0])
        {
            debug!(origin = cost[0], "first cell exceeds cutoff, abandoning");
            return DtwDistance::INFEASIBLE;
        }

        for j in 1..m {
            cost[j] = cost[j - 1] + (a[0] - b[j]).powi(2);
        }
        for i in 1..n {
            cost[i * m] = cost[(i - 1) * m] + (a[i] - b[0]).powi(2);
        }

        for i in 1..n {
            let row = i * m;
            let prev = (i - 1) * m;
            let mut row_feasible = false;

            for j in 1..m {
                let min_pred = cost[row + j - 1].min(cost[prev + j]).min(cost[prev + j - 1]);
                if let Some(c) = cutoff
                    && c.exceeded_by(min_pred)
                {
                    cost[row + j] = f64::MAX;
                    continue;
                }
                cost[row + j] = min_pred + (a[i] - b[j]).powi(2);
                row_feasible = true;
            }

            // Every warp path crosses every row, so a row with no feasible
            // interior cell bounds the final cost from below. With a single
            // column there are no interior cells and only the final check applies.
            if cutoff.is_some() && m > 1 && !row_feasible {
                debug!(row = i, "no interior cell within cutoff, abandoning");
                return DtwDistance::INFEASIBLE;
            }
        }

        let total = cost[n * m - 1];
        if let Some(c) = cutoff
            && c.exceeded_by(total)
        {
            debug!(total, "final cost exceeds cutoff, abandoning");
            return DtwDistance::INFEASIBLE;
        }

        self.state = MatrixState::Complete;
        DtwDistance::new(total.sqrt())
    }
}
