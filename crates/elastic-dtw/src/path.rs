//! Warp path types for DTW alignment.

use std::fmt;

/// A single cell on a warp path: index `a` in the first series aligned with
/// index `b` in the second, plus the cumulative cost stored at that cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpStep {
    /// Index in the first time series (row of the cost matrix).
    pub a: usize,
    /// Index in the second time series (column of the cost matrix).
    pub b: usize,
    /// Cumulative squared cost at `(a, b)`.
    pub cost: f64,
}

/// Minimum-cost warp path, ordered from the final cell `(n-1, m-1)` back to `(0, 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct WarpPath(Vec<WarpStep>);

impl WarpPath {
    /// Create a new warp path from steps already in end-to-start order.
    pub(crate) fn new(steps: Vec<WarpStep>) -> Self {
        Self(steps)
    }

    /// Return the steps in end-to-start order.
    #[must_use]
    pub fn steps(&self) -> &[WarpStep] {
        &self.0
    }

    /// Return the number of steps in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the path contains no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the steps in end-to-start order.
    pub fn iter(&self) -> std::slice::Iter<'_, WarpStep> {
        self.0.iter()
    }

    /// Iterate over the steps from `(0, 0)` to the final cell.
    pub fn chronological(&self) -> std::iter::Rev<std::slice::Iter<'_, WarpStep>> {
        self.0.iter().rev()
    }
}

impl<'a> IntoIterator for &'a WarpPath {
    type Item = &'a WarpStep;
    type IntoIter = std::slice::Iter<'a, WarpStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One line per step, `(a,b) = cost`, end to start.
impl fmt::Display for WarpPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.0 {
            writeln!(f, "({},{}) = {}", step.a, step.b, step.cost)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WarpPath {
        WarpPath::new(vec![
            WarpStep { a: 2, b: 1, cost: 3.0 },
            WarpStep { a: 1, b: 1, cost: 2.0 },
            WarpStep { a: 0, b: 0, cost: 1.5 },
        ])
    }

    #[test]
    fn display_lists_steps_end_to_start() {
        assert_eq!(sample().to_string(), "(2,1) = 3\n(1,1) = 2\n(0,0) = 1.5\n");
    }

    #[test]
    fn chronological_reverses_order() {
        let path = sample();
        let coords: Vec<(usize, usize)> = path.chronological().map(|s| (s.a, s.b)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn len_and_iter() {
        let path = sample();
        assert_eq!(path.len(), 3);
        assert!(!path.is_empty());
        assert_eq!(path.iter().count(), 3);
        assert_eq!((&path).into_iter().next().map(|s| s.a), Some(2));
    }
}
