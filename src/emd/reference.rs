use super::distribution::Distribution;
use super::samples::Samples;
use crate::Energy;
use crate::Probability;

/// 1-Wasserstein distance on the real line, straight from the CDFs.
///
/// # Algorithm
///
/// On ℝ with ground cost `|x - y|`, EMD equals the L1 distance between the
/// two cumulative distribution functions:
///
/// ```text
/// W₁(P, Q) = ∫ |F_P(t) - F_Q(t)| dt
/// ```
///
/// Both CDFs are step functions, so the integral is a finite sum over the
/// intervals between consecutive support points of either distribution.
/// No LP involved; this is the yardstick the LP pipeline is checked against.
pub fn wasserstein(p: &Distribution, q: &Distribution) -> Energy {
    let mut breaks = p
        .points()
        .iter()
        .chain(q.points().iter())
        .copied()
        .collect::<Vec<_>>();
    breaks.sort_by(Energy::total_cmp);
    breaks.dedup();
    let ref mut lhs = p.points().iter().zip(p.masses().iter()).peekable();
    let ref mut rhs = q.points().iter().zip(q.masses().iter()).peekable();
    let mut cdf_p: Probability = 0.;
    let mut cdf_q: Probability = 0.;
    breaks
        .windows(2)
        .map(|w| {
            while let Some((_, m)) = lhs.next_if(|(x, _)| **x <= w[0]) {
                cdf_p += m;
            }
            while let Some((_, m)) = rhs.next_if(|(x, _)| **x <= w[0]) {
                cdf_q += m;
            }
            (cdf_p - cdf_q).abs() * (w[1] - w[0])
        })
        .sum::<Energy>()
}

/// [`wasserstein`] over raw sample collections.
pub fn wasserstein_samples(a: &[Energy], b: &[Energy]) -> crate::Result<Energy> {
    let ref p = Distribution::try_from(&Samples::from(a))?;
    let ref q = Distribution::try_from(&Samples::from(b))?;
    Ok(wasserstein(p, q))
}
