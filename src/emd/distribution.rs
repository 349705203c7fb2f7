use super::samples::Samples;
use crate::Density;
use crate::EmdError;
use crate::Energy;
use crate::Probability;
use serde::Serialize;

/// Empirical distribution of a sample collection.
///
/// The support is the set of distinct sample values in ascending order.
/// Each support point carries its occurrence count and its probability,
/// `count / total`, where `total` is the number of samples.
///
/// # Normalization
///
/// Masses are normalized exactly once, by sample count. Dividing by the
/// sum of sample *values* instead would be dimensionally wrong and breaks
/// outright on zero-sum collections like `[-1, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    points: Vec<Energy>,
    counts: Vec<usize>,
    masses: Vec<Probability>,
    total: usize,
}

impl Distribution {
    /// Distinct sample values, ascending.
    pub fn points(&self) -> &[Energy] {
        &self.points
    }
    /// Occurrences of each support point.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
    /// Probability of each support point.
    pub fn masses(&self) -> &[Probability] {
        &self.masses
    }
    /// Number of samples the distribution was built from.
    pub fn total(&self) -> usize {
        self.total
    }
    /// Size of the support.
    pub fn n(&self) -> usize {
        self.points.len()
    }
    pub fn point(&self, i: usize) -> Energy {
        self.points[i]
    }
    /// Distance of the total mass from 1.
    pub fn drift(&self) -> Probability {
        (self.masses.iter().sum::<Probability>() - 1.).abs()
    }
}

impl TryFrom<&Samples> for Distribution {
    type Error = EmdError;
    fn try_from(samples: &Samples) -> Result<Self, Self::Error> {
        samples.validate()?;
        let mut sorted = samples.values().to_vec();
        sorted.sort_by(Energy::total_cmp);
        let (points, counts): (Vec<Energy>, Vec<usize>) = sorted
            .chunk_by(|a, b| a == b)
            .map(|run| (run[0], run.len()))
            .unzip();
        let total = counts.iter().sum::<usize>();
        if total == 0 {
            return Err(EmdError::invalid("normalization divisor is zero"));
        }
        let masses = counts
            .iter()
            .map(|&c| c as Probability / total as Probability)
            .collect::<Vec<_>>();
        log::debug!(
            "distribution over {} support points from {} samples",
            points.len(),
            total
        );
        Ok(Self {
            points,
            counts,
            masses,
            total,
        })
    }
}

impl TryFrom<&[Energy]> for Distribution {
    type Error = EmdError;
    fn try_from(values: &[Energy]) -> Result<Self, Self::Error> {
        Self::try_from(&Samples::from(values))
    }
}

impl Density for Distribution {
    type Support = usize;
    fn density(&self, x: &Self::Support) -> Probability {
        self.masses.get(*x).copied().unwrap_or(0.)
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        0..self.n()
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (x, (c, p)) in self
            .points
            .iter()
            .zip(self.counts.iter().zip(self.masses.iter()))
        {
            writeln!(f, "{:>10.4} x{:<4} {:.4}", x, c, p)?;
        }
        Ok(())
    }
}
