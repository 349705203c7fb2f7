use super::config::Config;
use super::cost::CostMatrix;
use super::discrepancy::Discrepancy;
use super::discrepancy::Marginal;
use super::discrepancy::Stage;
use super::distribution::Distribution;
use super::result::Emd;
use super::samples::Samples;
use super::simplex::Simplex;
use super::solver::Solver;
use super::transportation::Transportation;
use crate::Coupling;
use crate::Density;
use crate::Energy;
use crate::Probability;

/// One synchronous EMD computation from raw samples to [`Emd`].
///
/// # Stages
///
/// 1. Build both [`Distribution`]s (fails fast on invalid samples)
/// 2. Build the [`CostMatrix`] over their supports
/// 3. Formulate and solve the transportation LP via [`Transportation`]
/// 4. Rescale the plan by the source sample count and collect
///    [`Discrepancy`]s at every stage
///
/// Nothing is cached between calls; the pipeline only holds a stateless
/// solver and its tolerances.
#[derive(Debug, Clone, Default)]
pub struct Pipeline<S: Solver = Simplex> {
    solver: S,
    config: Config,
}

impl<S: Solver> Pipeline<S> {
    pub fn new(solver: S, config: Config) -> Self {
        Self { solver, config }
    }
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// EMD between two raw sample collections.
    pub fn compute(&self, a: &[Energy], b: &[Energy]) -> crate::Result<Emd> {
        let ref a = Samples::from(a);
        let ref b = Samples::from(b);
        let mu = Distribution::try_from(a)?;
        let nu = Distribution::try_from(b)?;
        let ref metric = CostMatrix::try_from((&mu, &nu))?;
        let transport = Transportation::from((&mu, &nu, metric, &self.solver)).minimize()?;
        let distance = transport.objective();
        let fractional = transport.plan().clone();
        let scale = mu.total() as Probability;
        let plan = fractional.rescale(scale);
        let discrepancies = std::iter::empty()
            .chain(self.normalization(&mu, &nu))
            .chain(fractional.discrepancies(
                Stage::Solution,
                mu.masses(),
                nu.masses(),
                self.config.tolerance(),
            ))
            .chain(plan.discrepancies(
                Stage::Rescaled,
                &mu.counts()
                    .iter()
                    .map(|&c| c as Probability)
                    .collect::<Vec<_>>(),
                &nu.masses().iter().map(|p| p * scale).collect::<Vec<_>>(),
                self.config.rescale(),
            ))
            .inspect(|d| log::warn!("{}", d))
            .collect::<Vec<_>>();
        log::debug!(
            "emd {:.6} over {}x{} supports with {} discrepancies",
            distance,
            mu.n(),
            nu.n(),
            discrepancies.len()
        );
        Ok(Emd::new(
            distance,
            plan,
            fractional.flows().to_vec(),
            mu,
            nu,
            discrepancies,
        ))
    }

    /// Probability totals that drifted away from 1.
    fn normalization(&self, mu: &Distribution, nu: &Distribution) -> Vec<Discrepancy> {
        let tolerance = self.config.tolerance();
        std::iter::empty()
            .chain(Discrepancy::check(
                Stage::Distribution,
                Marginal::Source,
                1.,
                mu.mass(),
                tolerance,
            ))
            .chain(Discrepancy::check(
                Stage::Distribution,
                Marginal::Target,
                1.,
                nu.mass(),
                tolerance,
            ))
            .collect()
    }
}

/// EMD between two raw sample collections with the [`Simplex`] backend and
/// default tolerances.
///
/// ```no_run
/// let emd = emd_lp::compute_emd(&[5.], &[5.]).unwrap();
/// assert_eq!(emd.distance(), 0.);
/// ```
pub fn compute_emd(a: &[Energy], b: &[Energy]) -> crate::Result<Emd> {
    Pipeline::<Simplex>::default().compute(a, b)
}
