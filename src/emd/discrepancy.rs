use crate::Energy;
use serde::Serialize;

/// Which stage of the pipeline a sum was checked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stage {
    /// Probabilities of an empirical distribution.
    Distribution,
    /// Unrounded solver flows against the probability marginals.
    Solution,
    /// Rounded flows against the sample-scaled marginals.
    Rescaled,
}

/// Which sum was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Marginal {
    /// Total mass of the source distribution.
    Source,
    /// Total mass of the target distribution.
    Target,
    Row(usize),
    Col(usize),
}

/// A sum that drifted beyond tolerance from its expected value.
///
/// Non-fatal: floating-point imprecision in the solver and rounding in the
/// rescaled plan both produce these, and neither invalidates the distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Discrepancy {
    stage: Stage,
    marginal: Marginal,
    expected: Energy,
    actual: Energy,
}

impl Discrepancy {
    /// Some(discrepancy) if `actual` is further than `tolerance` from `expected`.
    pub fn check(
        stage: Stage,
        marginal: Marginal,
        expected: Energy,
        actual: Energy,
        tolerance: Energy,
    ) -> Option<Self> {
        ((expected - actual).abs() > tolerance).then_some(Self {
            stage,
            marginal,
            expected,
            actual,
        })
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn marginal(&self) -> Marginal {
        self.marginal
    }
    pub fn expected(&self) -> Energy {
        self.expected
    }
    pub fn actual(&self) -> Energy {
        self.actual
    }
    pub fn drift(&self) -> Energy {
        (self.expected - self.actual).abs()
    }
}

impl std::fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stage = match self.stage {
            Stage::Distribution => "distribution",
            Stage::Solution => "solution",
            Stage::Rescaled => "rescaled plan",
        };
        match self.marginal {
            Marginal::Source => write!(f, "{} source mass", stage)?,
            Marginal::Target => write!(f, "{} target mass", stage)?,
            Marginal::Row(i) => write!(f, "{} row {}", stage, i)?,
            Marginal::Col(j) => write!(f, "{} column {}", stage, j)?,
        }
        write!(
            f,
            " sums to {:.6}, expected {:.6} (drift {:.2e})",
            self.actual,
            self.expected,
            self.drift()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_tolerance_is_silent() {
        assert!(Discrepancy::check(Stage::Solution, Marginal::Row(0), 0.5, 0.5 + 1e-9, 1e-6).is_none());
    }
    #[test]
    fn beyond_tolerance_is_reported() {
        let d = Discrepancy::check(Stage::Rescaled, Marginal::Col(2), 3., 4., 0.5).unwrap();
        assert_eq!(d.drift(), 1.);
        assert_eq!(d.marginal(), Marginal::Col(2));
        assert!(d.to_string().starts_with("rescaled plan column 2"));
    }
}
