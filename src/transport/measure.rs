use super::support::Support;
use crate::Energy;

/// Ground metric between elements of two support spaces.
///
/// Defines the cost of transporting one unit of mass from a point in
/// the source space to a point in the target space. This is the "ground cost"
/// that optimal transport algorithms minimize over.
///
/// # Implementations
///
/// - **Absolute**: `|x - y|` between raw scalar values
/// - **CostMatrix**: the same metric precomputed over support indices
pub trait Measure {
    /// Source support space.
    type X: Support;
    /// Target support space.
    type Y: Support;
    /// Returns the cost of transporting mass from `x` to `y`.
    fn distance(&self, x: &Self::X, y: &Self::Y) -> Energy;
}
