use super::cost::CostMatrix;
use super::distribution::Distribution;
use crate::EmdError;
use crate::Energy;
use crate::Probability;

/// One equality constraint of the transportation problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Everything leaving source point `i` sums to its mass.
    Supply { i: usize, mass: Probability },
    /// Everything arriving at target point `j` sums to its mass.
    Demand { j: usize, mass: Probability },
}

impl Constraint {
    /// Right-hand side of the equality.
    pub fn rhs(&self) -> Probability {
        match self {
            Constraint::Supply { mass, .. } => *mass,
            Constraint::Demand { mass, .. } => *mass,
        }
    }
}

/// The balanced transportation linear program.
///
/// ```text
/// minimize    Σ cost[i][j] · x[i][j]
/// subject to  Σ_j x[i][j] = supply[i]    for every i < n
///             Σ_i x[i][j] = demand[j]    for every j < m
///             x[i][j] ≥ 0
/// ```
///
/// Decision variables live in a dense row-major arena: variable `k` is
/// `x[k / m][k % m]`. That order is also the order in which solvers declare
/// variables and report their values.
///
/// When supply and demand each sum to 1 the program is always feasible, so
/// an infeasible verdict points at an upstream normalization bug.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    rows: usize,
    cols: usize,
    objective: Vec<Energy>,
    supply: Vec<Probability>,
    demand: Vec<Probability>,
}

impl Program {
    pub fn new(
        supply: &[Probability],
        demand: &[Probability],
        cost: &CostMatrix,
    ) -> crate::Result<Self> {
        if supply.len() != cost.rows() || demand.len() != cost.cols() {
            return Err(EmdError::invalid(format!(
                "masses {}x{} do not match cost matrix {}x{}",
                supply.len(),
                demand.len(),
                cost.rows(),
                cost.cols()
            )));
        }
        if let Some(m) = supply
            .iter()
            .chain(demand.iter())
            .find(|m| !m.is_finite() || **m < 0.)
        {
            return Err(EmdError::invalid(format!("mass {} is not a probability", m)));
        }
        Ok(Self {
            rows: cost.rows(),
            cols: cost.cols(),
            objective: cost.cells().to_vec(),
            supply: supply.to_vec(),
            demand: demand.to_vec(),
        })
    }
    /// Source support size.
    pub fn rows(&self) -> usize {
        self.rows
    }
    /// Target support size.
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// Number of decision variables.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Arena index of `x[i][j]`.
    pub fn variable(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }
    /// `(i, j)` of arena index `k`.
    pub fn position(&self, k: usize) -> (usize, usize) {
        (k / self.cols, k % self.cols)
    }
    /// Objective coefficients in declaration order.
    pub fn objective(&self) -> &[Energy] {
        &self.objective
    }
    pub fn cost(&self, i: usize, j: usize) -> Energy {
        self.objective[self.variable(i, j)]
    }
    pub fn supply(&self) -> &[Probability] {
        &self.supply
    }
    pub fn demand(&self) -> &[Probability] {
        &self.demand
    }
    /// All n + m equality constraints, supply rows first.
    pub fn constraints(&self) -> impl Iterator<Item = Constraint> + '_ {
        std::iter::empty()
            .chain(
                self.supply
                    .iter()
                    .enumerate()
                    .map(|(i, &mass)| Constraint::Supply { i, mass }),
            )
            .chain(
                self.demand
                    .iter()
                    .enumerate()
                    .map(|(j, &mass)| Constraint::Demand { j, mass }),
            )
    }
    /// Arena indices of the variables summed by a constraint.
    pub fn members(&self, constraint: &Constraint) -> Vec<usize> {
        match *constraint {
            Constraint::Supply { i, .. } => (0..self.cols).map(|j| self.variable(i, j)).collect(),
            Constraint::Demand { j, .. } => (0..self.rows).map(|i| self.variable(i, j)).collect(),
        }
    }
    /// Objective value of an assignment in declaration order.
    pub fn evaluate(&self, values: &[Energy]) -> Energy {
        debug_assert!(values.len() == self.len());
        self.objective
            .iter()
            .zip(values.iter())
            .map(|(c, x)| c * x)
            .sum()
    }
    /// Whether total supply matches total demand.
    pub fn is_balanced(&self, tolerance: Energy) -> bool {
        let supply = self.supply.iter().sum::<Probability>();
        let demand = self.demand.iter().sum::<Probability>();
        (supply - demand).abs() <= tolerance
    }
    /// Whether every 2x2 adjacent minor satisfies
    /// `c[i][j] + c[i+1][j+1] <= c[i][j+1] + c[i+1][j]`.
    /// Absolute difference over two ascending supports always does.
    pub fn is_monge(&self, tolerance: Energy) -> bool {
        (0..self.rows.saturating_sub(1))
            .flat_map(|i| (0..self.cols.saturating_sub(1)).map(move |j| (i, j)))
            .all(|(i, j)| {
                self.cost(i, j) + self.cost(i + 1, j + 1)
                    <= self.cost(i, j + 1) + self.cost(i + 1, j) + tolerance
            })
    }
}

impl TryFrom<(&Distribution, &Distribution, &CostMatrix)> for Program {
    type Error = EmdError;
    fn try_from(
        (source, target, cost): (&Distribution, &Distribution, &CostMatrix),
    ) -> Result<Self, Self::Error> {
        Self::new(source.masses(), target.masses(), cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> Program {
        let ref cost = CostMatrix::new(&[1., 2.], &[6., 7., 8.]).unwrap();
        Program::new(&[0.5, 0.5], &[0.25, 0.25, 0.5], cost).unwrap()
    }

    #[test]
    fn shape_is_row_major() {
        let ref lp = program();
        assert_eq!(lp.len(), 6);
        assert_eq!(lp.variable(1, 2), 5);
        assert_eq!(lp.position(4), (1, 1));
        assert_eq!(lp.objective(), &[5., 6., 7., 4., 5., 6.]);
    }
    #[test]
    fn one_constraint_per_row_and_column() {
        let ref lp = program();
        let constraints = lp.constraints().collect::<Vec<_>>();
        assert_eq!(constraints.len(), 5);
        assert_eq!(constraints[0], Constraint::Supply { i: 0, mass: 0.5 });
        assert_eq!(constraints[4], Constraint::Demand { j: 2, mass: 0.5 });
        assert_eq!(lp.members(&constraints[1]), vec![3, 4, 5]);
        assert_eq!(lp.members(&constraints[3]), vec![1, 4]);
    }
    #[test]
    fn evaluate_weights_costs() {
        let ref lp = program();
        let values = [0.25, 0.25, 0., 0., 0., 0.5];
        assert_eq!(lp.evaluate(&values), 0.25 * 5. + 0.25 * 6. + 0.5 * 6.);
    }
    #[test]
    fn absolute_costs_are_monge() {
        let ref lp = program();
        assert!(lp.is_balanced(crate::TRANSPORT_TOLERANCE));
        assert!(lp.is_monge(crate::TRANSPORT_TOLERANCE));
    }
    #[test]
    fn unsorted_costs_are_not_monge() {
        let ref cost = CostMatrix::new(&[2., 1.], &[1., 2.]).unwrap();
        let ref lp = Program::new(&[0.5, 0.5], &[0.5, 0.5], cost).unwrap();
        assert!(!lp.is_monge(crate::TRANSPORT_TOLERANCE));
    }
    #[test]
    fn mismatched_shapes_fail() {
        let ref cost = CostMatrix::new(&[1., 2.], &[3.]).unwrap();
        assert!(matches!(
            Program::new(&[1.], &[1.], cost),
            Err(EmdError::InvalidInput(_))
        ));
    }
    #[test]
    fn negative_masses_fail() {
        let ref cost = CostMatrix::new(&[1.], &[3.]).unwrap();
        assert!(Program::new(&[-1.], &[1.], cost).is_err());
    }
}
