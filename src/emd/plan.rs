use super::discrepancy::Discrepancy;
use super::discrepancy::Marginal;
use super::discrepancy::Stage;
use crate::Energy;
use crate::Probability;
use serde::Serialize;
use std::collections::BTreeMap;

/// Dense n×m transport plan, row-major, addressed by support indices.
///
/// Straight out of the solver a plan holds probability mass and its rows
/// and columns sum to the two distributions' masses. After
/// [`rescale`](Plan::rescale) it holds approximate sample counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    rows: usize,
    cols: usize,
    flows: Vec<Probability>,
}

impl Plan {
    /// Callers guarantee `flows.len() == rows * cols`.
    pub(crate) fn new(rows: usize, cols: usize, flows: Vec<Probability>) -> Self {
        debug_assert!(flows.len() == rows * cols, "plan shape mismatch");
        Self { rows, cols, flows }
    }
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, vec![0.; rows * cols])
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn get(&self, i: usize, j: usize) -> Probability {
        self.flows[i * self.cols + j]
    }
    /// Flows in row-major order.
    pub fn flows(&self) -> &[Probability] {
        &self.flows
    }
    pub fn row_sum(&self, i: usize) -> Probability {
        self.flows[i * self.cols..(i + 1) * self.cols].iter().sum()
    }
    pub fn col_sum(&self, j: usize) -> Probability {
        (0..self.rows).map(|i| self.get(i, j)).sum()
    }
    pub fn total(&self) -> Probability {
        self.flows.iter().sum()
    }
    /// Every cell with its `(i, j)` key.
    pub fn entries(&self) -> impl Iterator<Item = ((usize, usize), Probability)> + '_ {
        self.flows
            .iter()
            .enumerate()
            .map(|(k, &p)| ((k / self.cols, k % self.cols), p))
    }
    /// Plan as an `(i, j) → flow` map over every cell.
    pub fn to_map(&self) -> BTreeMap<(usize, usize), Probability> {
        self.entries().collect()
    }
    /// Multiplies every flow by `scale` and rounds to the nearest integer,
    /// ties to even.
    ///
    /// With `scale` the source sample count this turns probability mass back
    /// into sample multiplicities. Rounding each cell independently does
    /// not preserve row or column sums: this is an approximation, not an
    /// inverse of normalization.
    pub fn rescale(&self, scale: Probability) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            flows: self
                .flows
                .iter()
                .map(|p| (p * scale).round_ties_even())
                .map(|p| if p == 0. { 0. } else { p })
                .collect(),
        }
    }
    /// Compares row and column sums against expected marginals.
    pub fn discrepancies(
        &self,
        stage: Stage,
        rows: &[Probability],
        cols: &[Probability],
        tolerance: Energy,
    ) -> Vec<Discrepancy> {
        debug_assert!(rows.len() == self.rows && cols.len() == self.cols);
        std::iter::empty()
            .chain(rows.iter().enumerate().map(|(i, &expected)| {
                Discrepancy::check(stage, Marginal::Row(i), expected, self.row_sum(i), tolerance)
            }))
            .chain(cols.iter().enumerate().map(|(j, &expected)| {
                Discrepancy::check(stage, Marginal::Col(j), expected, self.col_sum(j), tolerance)
            }))
            .flatten()
            .collect()
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{:>8.3}", self.get(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_follow_layout() {
        let plan = Plan::new(2, 3, vec![0.1, 0.2, 0.0, 0.0, 0.3, 0.4]);
        assert!((plan.row_sum(1) - 0.7).abs() < 1e-12);
        assert!((plan.col_sum(1) - 0.5).abs() < 1e-12);
        assert!((plan.total() - 1.0).abs() < 1e-12);
        assert_eq!(plan.to_map()[&(1, 2)], 0.4);
    }
    #[test]
    fn rescale_rounds_each_cell() {
        let plan = Plan::new(1, 3, vec![0.124, 0.5, 0.376]).rescale(8.);
        assert_eq!(plan.flows(), &[1., 4., 3.]);
    }
    #[test]
    fn rescale_ties_to_even() {
        let plan = Plan::new(1, 2, vec![0.25, 0.75]).rescale(2.);
        assert_eq!(plan.flows(), &[0., 2.]);
    }
    #[test]
    fn rescale_can_break_marginals() {
        let plan = Plan::new(1, 3, vec![1. / 3., 1. / 3., 1. / 3.]);
        let scaled = plan.rescale(2.);
        assert_eq!(scaled.flows(), &[1., 1., 1.]);
        let found = scaled.discrepancies(Stage::Rescaled, &[2.], &[2. / 3.; 3], 0.5);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].marginal(), Marginal::Row(0));
    }
    #[test]
    fn exact_marginals_are_silent() {
        let plan = Plan::new(2, 2, vec![0.5, 0., 0., 0.5]);
        assert!(plan
            .discrepancies(Stage::Solution, &[0.5, 0.5], &[0.5, 0.5], 1e-9)
            .is_empty());
    }
}
