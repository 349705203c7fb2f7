use super::discrepancy::Discrepancy;
use super::distribution::Distribution;
use super::plan::Plan;
use crate::Energy;
use crate::Probability;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one EMD computation.
///
/// - `distance` — the LP objective, unchanged
/// - `plan` — flows rescaled to source sample counts and rounded; row and
///   column sums are *approximately* the sample multiplicities
/// - `raw` — the solver's unrounded values in declaration (row-major) order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Emd {
    distance: Energy,
    plan: Plan,
    raw: Vec<Probability>,
    source: Distribution,
    target: Distribution,
    discrepancies: Vec<Discrepancy>,
}

impl Emd {
    pub(crate) fn new(
        distance: Energy,
        plan: Plan,
        raw: Vec<Probability>,
        source: Distribution,
        target: Distribution,
        discrepancies: Vec<Discrepancy>,
    ) -> Self {
        Self {
            distance,
            plan,
            raw,
            source,
            target,
            discrepancies,
        }
    }
    /// The 1-Wasserstein distance.
    pub fn distance(&self) -> Energy {
        self.distance
    }
    /// Rescaled, rounded plan keyed by support indices.
    pub fn plan(&self) -> &Plan {
        &self.plan
    }
    /// Rescaled, rounded plan as an `(i, j) → flow` map.
    pub fn transport_plan(&self) -> BTreeMap<(usize, usize), Probability> {
        self.plan.to_map()
    }
    /// Unrounded solver values, row-major.
    pub fn raw(&self) -> &[Probability] {
        &self.raw
    }
    /// Unrounded plan, in probability mass.
    pub fn fractional(&self) -> Plan {
        Plan::new(self.source.n(), self.target.n(), self.raw.clone())
    }
    pub fn source(&self) -> &Distribution {
        &self.source
    }
    pub fn target(&self) -> &Distribution {
        &self.target
    }
    /// Non-fatal tolerance violations found along the way.
    pub fn discrepancies(&self) -> &[Discrepancy] {
        &self.discrepancies
    }
}

impl std::fmt::Display for Emd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "distance {:.6}", self.distance)?;
        for ((i, j), flow) in self.plan.entries().filter(|(_, flow)| *flow != 0.) {
            writeln!(
                f,
                "{:>10.4} -> {:<10.4} x{}",
                self.source.point(i),
                self.target.point(j),
                flow
            )?;
        }
        for discrepancy in self.discrepancies.iter() {
            writeln!(f, "warning: {}", discrepancy)?;
        }
        Ok(())
    }
}
