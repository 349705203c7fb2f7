use super::support::Support;
use crate::Probability;

/// A discrete probability distribution over a support set.
///
/// Provides access to probability mass at each point and iteration over
/// the support. Transport algorithms only ever see a distribution through
/// this trait.
pub trait Density {
    /// The type of elements in the distribution's support.
    type Support: Support;
    /// Returns the probability mass at point `x`, or 0 if not in support.
    fn density(&self, x: &Self::Support) -> Probability;
    /// Iterates over all points of the support.
    fn support(&self) -> impl Iterator<Item = Self::Support>;
    /// Total mass over the support. 1 for a normalized distribution.
    fn mass(&self) -> Probability {
        self.support().map(|x| self.density(&x)).sum()
    }
}
