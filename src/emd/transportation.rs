use super::cost::CostMatrix;
use super::distribution::Distribution;
use super::plan::Plan;
use super::program::Program;
use super::solver::Solver;
use crate::Coupling;
use crate::Energy;
use crate::Measure;
use crate::Probability;

/// Exact optimal transport between two empirical distributions, solved as
/// a linear program by any [`Solver`].
///
/// # Algorithm
///
/// 1. Formulate the balanced [`Program`] from the two masses and the costs
/// 2. Hand it to the solver and classify the verdict
/// 3. Keep the optimal objective and the fractional plan
///
/// The objective is the solver's own; [`Coupling::cost`] recomputes it from
/// the plan, and the two agree up to solver tolerance.
pub struct Transportation<'a, S: Solver> {
    /// Ground costs between support indices.
    metric: &'a CostMatrix,
    /// Source distribution.
    mu: &'a Distribution,
    /// Target distribution.
    nu: &'a Distribution,
    /// LP backend.
    solver: &'a S,
    /// Fractional flows; all zero until minimized.
    plan: Plan,
    /// Objective reported by the solver.
    objective: Energy,
}

impl<S: Solver> Transportation<'_, S> {
    /// Optimal objective as reported by the solver.
    pub fn objective(&self) -> Energy {
        self.objective
    }
    /// Fractional plan, in probability mass.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }
    pub fn source(&self) -> &Distribution {
        self.mu
    }
    pub fn target(&self) -> &Distribution {
        self.nu
    }
}

impl<'a, S: Solver> Coupling for Transportation<'a, S> {
    type X = usize;
    type Y = usize;
    type M = CostMatrix;
    type P = Distribution;
    type Q = Distribution;

    fn minimize(mut self) -> crate::Result<Self> {
        let ref program = Program::try_from((self.mu, self.nu, self.metric))?;
        let optimum = self.solver.optimize(program)?;
        self.objective = optimum.objective();
        self.plan = optimum.plan().clone();
        Ok(self)
    }
    fn flow(&self, x: &Self::X, y: &Self::Y) -> Probability {
        self.plan.get(*x, *y)
    }
    fn cost(&self) -> Energy {
        (0..self.mu.n())
            .flat_map(|x| (0..self.nu.n()).map(move |y| (x, y)))
            .map(|(x, y)| self.flow(&x, &y) * self.metric.distance(&x, &y))
            .inspect(|x| debug_assert!(x.is_finite()))
            .sum::<Energy>()
    }
}

impl<'a, S: Solver> From<(&'a Distribution, &'a Distribution, &'a CostMatrix, &'a S)>
    for Transportation<'a, S>
{
    fn from(
        (mu, nu, metric, solver): (&'a Distribution, &'a Distribution, &'a CostMatrix, &'a S),
    ) -> Self {
        Self {
            metric,
            mu,
            nu,
            solver,
            plan: Plan::zeros(mu.n(), nu.n()),
            objective: 0.,
        }
    }
}
