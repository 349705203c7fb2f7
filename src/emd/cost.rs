use super::distribution::Distribution;
use crate::EmdError;
use crate::Energy;
use crate::Measure;
use serde::Serialize;

/// Absolute difference between raw scalar values.
///
/// The only ground metric this crate transports under. On the real line it
/// makes the 1-Wasserstein distance equal to the L1 distance between CDFs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Absolute;

impl Measure for Absolute {
    type X = Energy;
    type Y = Energy;
    fn distance(&self, x: &Self::X, y: &Self::Y) -> Energy {
        (x - y).abs()
    }
}

/// Dense n×m ground costs between two supports, stored row-major.
///
/// Rows index the source support, columns the target support. Entries are
/// always looked up by *support* index, never by position in the raw
/// sample collection: with duplicated samples the two disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Energy>,
}

impl CostMatrix {
    /// Pairwise [`Absolute`] costs between `lhs[i]` and `rhs[j]`.
    pub fn new(lhs: &[Energy], rhs: &[Energy]) -> crate::Result<Self> {
        if lhs.is_empty() || rhs.is_empty() {
            return Err(EmdError::invalid(format!(
                "cannot build a {}x{} cost matrix",
                lhs.len(),
                rhs.len()
            )));
        }
        let cells = lhs
            .iter()
            .flat_map(|x| rhs.iter().map(move |y| Absolute.distance(x, y)))
            .collect::<Vec<_>>();
        if let Some(k) = cells.iter().position(|c| !c.is_finite()) {
            return Err(EmdError::invalid(format!(
                "ground cost overflows between {} and {}",
                lhs[k / rhs.len()],
                rhs[k % rhs.len()]
            )));
        }
        Ok(Self {
            rows: lhs.len(),
            cols: rhs.len(),
            cells,
        })
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn get(&self, i: usize, j: usize) -> Energy {
        debug_assert!(i < self.rows && j < self.cols);
        self.cells[i * self.cols + j]
    }
    pub fn row(&self, i: usize) -> &[Energy] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }
    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Energy] {
        &self.cells
    }
}

impl TryFrom<(&Distribution, &Distribution)> for CostMatrix {
    type Error = EmdError;
    fn try_from((source, target): (&Distribution, &Distribution)) -> Result<Self, Self::Error> {
        Self::new(source.points(), target.points())
    }
}

impl Measure for CostMatrix {
    type X = usize;
    type Y = usize;
    fn distance(&self, x: &Self::X, y: &Self::Y) -> Energy {
        self.get(*x, *y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_are_absolute_differences() {
        let ref cost = CostMatrix::new(&[1., 2., 3.], &[6., 9.]).unwrap();
        assert_eq!(cost.rows(), 3);
        assert_eq!(cost.cols(), 2);
        assert_eq!(cost.row(0), &[5., 8.]);
        assert_eq!(cost.get(2, 1), 6.);
        assert_eq!(cost.distance(&1, &0), 4.);
    }
    #[test]
    fn costs_are_indexed_by_support() {
        let ref p = Distribution::try_from(&[3., 1., 1., 3., 3.][..]).unwrap();
        let ref q = Distribution::try_from(&[8., 8., 4.][..]).unwrap();
        let ref cost = CostMatrix::try_from((p, q)).unwrap();
        assert_eq!(cost.rows(), 2);
        assert_eq!(cost.cols(), 2);
        assert_eq!(cost.cells(), &[3., 7., 1., 5.]);
    }
    #[test]
    fn empty_support_fails() {
        assert!(matches!(
            CostMatrix::new(&[], &[1.]),
            Err(EmdError::InvalidInput(_))
        ));
    }
    #[test]
    fn overflowing_cost_fails() {
        assert!(matches!(
            CostMatrix::new(&[0., 1e308], &[-1e308]),
            Err(EmdError::InvalidInput(_))
        ));
    }
    #[test]
    fn absolute_is_symmetric() {
        assert_eq!(Absolute.distance(&-2., &3.), 5.);
        assert_eq!(Absolute.distance(&3., &-2.), 5.);
        assert_eq!(Absolute.distance(&0.5, &0.5), 0.);
    }
}
