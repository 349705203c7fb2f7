use crate::Arbitrary;
use crate::EmdError;
use crate::Energy;
use serde::Serialize;

/// Raw scalar observations, in the order they were collected.
///
/// Neither deduplicated nor sorted. That is the job of
/// [`Distribution`](super::Distribution).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Samples(Vec<Energy>);

impl Samples {
    pub fn values(&self) -> &[Energy] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Rejects collections that cannot become a probability distribution:
    /// empty ones, and ones holding NaN or infinities.
    pub fn validate(&self) -> crate::Result<()> {
        if self.is_empty() {
            return Err(EmdError::invalid("sample collection is empty"));
        }
        match self.0.iter().position(|x| !x.is_finite()) {
            Some(i) => Err(EmdError::invalid(format!(
                "sample {} is not finite ({})",
                i, self.0[i]
            ))),
            None => Ok(()),
        }
    }
}

impl From<Vec<Energy>> for Samples {
    fn from(values: Vec<Energy>) -> Self {
        Self(values)
    }
}

impl From<&[Energy]> for Samples {
    fn from(values: &[Energy]) -> Self {
        Self(values.to_vec())
    }
}

impl Arbitrary for Samples {
    /// Small integer-valued collections, so duplicates and
    /// mixed signs show up often.
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let n = rng.random_range(1..=crate::SAMPLES_MAX_LEN);
        (0..n)
            .map(|_| rng.random_range(-crate::SAMPLES_RANGE..=crate::SAMPLES_RANGE))
            .map(Energy::from)
            .collect::<Vec<_>>()
            .into()
    }
}

impl std::fmt::Display for Samples {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_invalid() {
        let samples = Samples::default();
        assert!(matches!(samples.validate(), Err(EmdError::InvalidInput(_))));
    }
    #[test]
    fn nan_is_invalid() {
        let samples = Samples::from(vec![1., Energy::NAN, 2.]);
        assert!(matches!(samples.validate(), Err(EmdError::InvalidInput(_))));
    }
    #[test]
    fn infinity_is_invalid() {
        let samples = Samples::from(vec![Energy::INFINITY]);
        assert!(samples.validate().is_err());
    }
    #[test]
    fn order_is_preserved() {
        let samples = Samples::from(vec![3., 1., 3., 2.]);
        assert!(samples.validate().is_ok());
        assert_eq!(samples.values(), &[3., 1., 3., 2.]);
    }
    #[test]
    fn random_is_nonempty_and_bounded() {
        for _ in 0..64 {
            let samples = Samples::random();
            assert!(!samples.is_empty());
            assert!(samples.len() <= crate::SAMPLES_MAX_LEN);
            assert!(samples
                .values()
                .iter()
                .all(|x| x.abs() <= crate::SAMPLES_RANGE as Energy));
        }
    }
}
