use super::program::Program;
use super::solver::Solution;
use super::solver::Solver;
use super::solver::Status;

/// General-purpose LP backend, delegating to the `minilp` simplex solver.
///
/// Every call builds a fresh `minilp::Problem`: one nonnegative variable
/// per cell in declaration order, one equality per supply row and demand
/// column. Nothing survives between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simplex;

impl Solver for Simplex {
    fn name(&self) -> &'static str {
        "simplex"
    }
    fn solve(&self, program: &Program) -> Solution {
        let mut problem = minilp::Problem::new(minilp::OptimizationDirection::Minimize);
        let variables = program
            .objective()
            .iter()
            .map(|&c| problem.add_var(c, (0., f64::INFINITY)))
            .collect::<Vec<_>>();
        for ref constraint in program.constraints() {
            let mut expr = minilp::LinearExpr::empty();
            for k in program.members(constraint) {
                expr.add(variables[k], 1.);
            }
            problem.add_constraint(expr, minilp::ComparisonOp::Eq, constraint.rhs());
        }
        match problem.solve() {
            Ok(solution) => Solution::optimal(
                solution.objective(),
                variables.iter().map(|&v| solution[v]).collect(),
            ),
            Err(minilp::Error::Infeasible) => Solution::failed(Status::Infeasible),
            Err(minilp::Error::Unbounded) => Solution::failed(Status::Unbounded),
            #[allow(unreachable_patterns)]
            Err(_) => Solution::failed(Status::Other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CostMatrix;
    use crate::EmdError;

    #[test]
    fn solves_small_transport() {
        let ref cost = CostMatrix::new(&[0., 1.], &[0., 1.]).unwrap();
        let ref lp = Program::new(&[0.5, 0.5], &[0.25, 0.75], cost).unwrap();
        let solution = Simplex.solve(lp);
        assert_eq!(solution.status(), Status::Optimal);
        assert!((solution.objective() - 0.25).abs() < 1e-9);
        assert!((lp.evaluate(solution.values()) - solution.objective()).abs() < 1e-9);
    }
    #[test]
    fn unbalanced_masses_are_infeasible() {
        let ref cost = CostMatrix::new(&[0., 1.], &[0.]).unwrap();
        let ref lp = Program::new(&[0.5, 0.5], &[0.5], cost).unwrap();
        assert_eq!(Simplex.solve(lp).status(), Status::Infeasible);
        assert!(matches!(
            Simplex.optimize(lp),
            Err(EmdError::SolverInfeasible { .. })
        ));
    }
}
