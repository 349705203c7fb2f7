use super::plan::Plan;
use super::program::Program;
use crate::EmdError;
use crate::Energy;
use serde::Serialize;

/// Verdict of an LP solver on a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Optimal,
    Infeasible,
    Unbounded,
    /// Stopped without proving optimality, e.g. an iteration limit or a
    /// specialized algorithm applied outside its domain.
    Other,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Optimal => write!(f, "optimal"),
            Status::Infeasible => write!(f, "infeasible"),
            Status::Unbounded => write!(f, "unbounded"),
            Status::Other => write!(f, "non-optimal"),
        }
    }
}

/// Raw output of a solver: status, objective, and one value per variable
/// in declaration order. Objective and values are meaningless unless the
/// status is [`Status::Optimal`].
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    status: Status,
    objective: Energy,
    values: Vec<Energy>,
}

impl Solution {
    pub fn optimal(objective: Energy, values: Vec<Energy>) -> Self {
        Self {
            status: Status::Optimal,
            objective,
            values,
        }
    }
    /// A verdict without a usable primal solution.
    pub fn failed(status: Status) -> Self {
        Self {
            status,
            objective: Energy::NAN,
            values: Vec::new(),
        }
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn objective(&self) -> Energy {
        self.objective
    }
    pub fn values(&self) -> &[Energy] {
        &self.values
    }
}

/// A classified, optimal solve: the minimal cost and the fractional plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimum {
    objective: Energy,
    plan: Plan,
}

impl Optimum {
    pub fn objective(&self) -> Energy {
        self.objective
    }
    /// Fractional flows, shaped like the program.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }
}

/// An LP-solving capability.
///
/// Implementors are stateless: every call builds whatever internal
/// problem representation it needs from the [`Program`] and drops it on
/// return. Which algorithm runs underneath is irrelevant to callers.
pub trait Solver {
    /// Human-readable backend name for logs.
    fn name(&self) -> &'static str;
    /// Solves the program, reporting the raw verdict.
    fn solve(&self, program: &Program) -> Solution;
    /// Solves the program and classifies the verdict. This is the only
    /// place a non-optimal status turns into an error; an objective is
    /// never handed out unless the solver proved it optimal.
    fn optimize(&self, program: &Program) -> crate::Result<Optimum> {
        log::debug!(
            "solving {}x{} transportation program with {}",
            program.rows(),
            program.cols(),
            self.name()
        );
        let solution = self.solve(program);
        match solution.status() {
            Status::Optimal if solution.values().len() == program.len() => {
                log::info!("solution found: objective {:.6}", solution.objective());
                Ok(Optimum {
                    objective: solution.objective(),
                    plan: Plan::new(program.rows(), program.cols(), solution.values.clone()),
                })
            }
            Status::Optimal => {
                log::warn!(
                    "{} reported {} values for {} variables",
                    self.name(),
                    solution.values().len(),
                    program.len()
                );
                Err(EmdError::SolverFailed {
                    status: Status::Other,
                })
            }
            status @ (Status::Infeasible | Status::Unbounded) => {
                log::warn!("no feasible solution found: {} is {}", self.name(), status);
                Err(EmdError::SolverInfeasible { status })
            }
            status @ Status::Other => {
                log::warn!("{} stopped without an optimal solution", self.name());
                Err(EmdError::SolverFailed { status })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CostMatrix;

    /// Reports a fixed verdict regardless of the program.
    struct Stub(Solution);

    impl Solver for Stub {
        fn name(&self) -> &'static str {
            "stub"
        }
        fn solve(&self, _: &Program) -> Solution {
            self.0.clone()
        }
    }

    fn program() -> Program {
        let ref cost = CostMatrix::new(&[0.], &[1.]).unwrap();
        Program::new(&[1.], &[1.], cost).unwrap()
    }

    #[test]
    fn optimal_becomes_optimum() {
        let optimum = Stub(Solution::optimal(1., vec![1.]))
            .optimize(&program())
            .unwrap();
        assert_eq!(optimum.objective(), 1.);
        assert_eq!(optimum.plan().get(0, 0), 1.);
    }
    #[test]
    fn infeasible_is_surfaced() {
        let result = Stub(Solution::failed(Status::Infeasible)).optimize(&program());
        assert_eq!(
            result,
            Err(EmdError::SolverInfeasible {
                status: Status::Infeasible
            })
        );
    }
    #[test]
    fn unbounded_is_surfaced() {
        let result = Stub(Solution::failed(Status::Unbounded)).optimize(&program());
        assert!(matches!(result, Err(EmdError::SolverInfeasible { .. })));
    }
    #[test]
    fn other_is_surfaced() {
        let result = Stub(Solution::failed(Status::Other)).optimize(&program());
        assert!(matches!(result, Err(EmdError::SolverFailed { .. })));
    }
    #[test]
    fn truncated_values_are_rejected() {
        let result = Stub(Solution::optimal(0., vec![])).optimize(&program());
        assert!(matches!(result, Err(EmdError::SolverFailed { .. })));
    }
}
