use super::program::Program;
use super::solver::Solution;
use super::solver::Solver;
use super::solver::Status;
use crate::Energy;
use crate::Probability;

/// Specialized transportation backend using the north-west corner rule.
///
/// Walks the cost matrix from the top-left cell, moving as much mass as the
/// current row and column allow, then stepping down or right. The result is
/// the monotone coupling, which is optimal whenever the cost matrix is
/// Monge. Absolute difference over ascending supports always is, so for this
/// crate's programs it agrees with [`Simplex`](super::Simplex) in O(n + m).
///
/// Outside that domain the plan is merely feasible, and the solver says so
/// with [`Status::Other`] rather than claim optimality.
#[derive(Debug, Clone, Copy, Default)]
pub struct NorthWest;

impl NorthWest {
    /// Slack for the balance and Monge checks.
    const fn tolerance(&self) -> Energy {
        crate::TRANSPORT_TOLERANCE
    }
}

impl Solver for NorthWest {
    fn name(&self) -> &'static str {
        "north-west corner"
    }
    fn solve(&self, program: &Program) -> Solution {
        if !program.is_balanced(self.tolerance()) {
            return Solution::failed(Status::Infeasible);
        }
        if !program.is_monge(self.tolerance()) {
            return Solution::failed(Status::Other);
        }
        let ref mut supply = program.supply().to_vec();
        let ref mut demand = program.demand().to_vec();
        let mut values = vec![0.; program.len()];
        let (mut i, mut j) = (0, 0);
        while i < program.rows() && j < program.cols() {
            let mass = Probability::min(supply[i], demand[j]);
            values[program.variable(i, j)] = mass;
            if supply[i] <= demand[j] {
                demand[j] -= mass;
                i += 1;
            } else {
                supply[i] -= mass;
                j += 1;
            }
        }
        Solution::optimal(program.evaluate(&values), values)
    }
}
