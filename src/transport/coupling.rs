use super::density::Density;
use super::measure::Measure;
use super::support::Support;
use crate::Energy;
use crate::Probability;

/// A transport plan (coupling) between two probability distributions.
///
/// A coupling is a joint distribution π(x,y) whose marginals match the
/// source distribution P and target distribution Q. The transport cost is
/// the expected ground cost under this joint distribution.
///
/// # Algorithm Contract
///
/// After [`minimize`](Coupling::minimize) succeeds, [`cost`](Coupling::cost)
/// returns the optimal transport cost. A failed minimization consumes the
/// coupling, so no unoptimized plan can leak out of it.
pub trait Coupling {
    /// Source support space.
    type X: Support;
    /// Target support space.
    type Y: Support;
    /// Ground metric for transport costs.
    type M: Measure<X = Self::X, Y = Self::Y>;
    /// Source probability distribution.
    type P: Density<Support = Self::X>;
    /// Target probability distribution.
    type Q: Density<Support = Self::Y>;
    /// Optimizes the coupling to minimize total transport cost.
    fn minimize(self) -> crate::Result<Self>
    where
        Self: Sized;
    /// Returns the mass transported from `x` to `y` in the coupling.
    fn flow(&self, x: &Self::X, y: &Self::Y) -> Probability;
    /// Returns the total transport cost of this coupling.
    ///
    /// This is the sum of `flow(x, y) * distance(x, y)` over all pairs.
    fn cost(&self) -> Energy;
}
