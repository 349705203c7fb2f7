use crate::Energy;

/// Tolerances applied when checking sums along the pipeline.
///
/// Defaults come from the crate constants; [`Config::from_env`] lets
/// `EMD_TOLERANCE` and `EMD_RESCALE_TOLERANCE` override them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: Energy,
    rescale: Energy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: crate::TRANSPORT_TOLERANCE,
            rescale: crate::RESCALE_TOLERANCE,
        }
    }
}

impl Config {
    /// Defaults, overridden by any parseable environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }
    /// Defaults, overridden by whatever `lookup` yields for each key.
    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(tolerance) = Self::parse("EMD_TOLERANCE", lookup("EMD_TOLERANCE")) {
            config.tolerance = tolerance;
        }
        let rescale = lookup("EMD_RESCALE_TOLERANCE");
        if let Some(rescale) = Self::parse("EMD_RESCALE_TOLERANCE", rescale) {
            config.rescale = rescale;
        }
        config
    }
    pub fn with_tolerance(mut self, tolerance: Energy) -> Self {
        self.tolerance = tolerance;
        self
    }
    pub fn with_rescale(mut self, rescale: Energy) -> Self {
        self.rescale = rescale;
        self
    }
    /// Allowed drift of probability and raw plan sums.
    pub fn tolerance(&self) -> Energy {
        self.tolerance
    }
    /// Allowed drift of rescaled plan sums.
    pub fn rescale(&self) -> Energy {
        self.rescale
    }
    fn parse(key: &str, value: Option<String>) -> Option<Energy> {
        let value = value?;
        match value.trim().parse::<Energy>() {
            Ok(x) if x.is_finite() && x >= 0. => {
                log::info!("{} overridden to {}", key, x);
                Some(x)
            }
            _ => {
                log::warn!("ignoring {}={:?}, expected a nonnegative number", key, value);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_constants() {
        let config = Config::default();
        assert_eq!(config.tolerance(), crate::TRANSPORT_TOLERANCE);
        assert_eq!(config.rescale(), crate::RESCALE_TOLERANCE);
    }
    #[test]
    fn variables_override_defaults() {
        let config = Config::from_vars(|key| match key {
            "EMD_TOLERANCE" => Some(" 1e-4 ".to_string()),
            "EMD_RESCALE_TOLERANCE" => Some("1.5".to_string()),
            _ => None,
        });
        assert_eq!(config.tolerance(), 1e-4);
        assert_eq!(config.rescale(), 1.5);
    }
    #[test]
    fn unusable_variables_are_ignored() {
        let config = Config::from_vars(|key| match key {
            "EMD_TOLERANCE" => Some("-1".to_string()),
            "EMD_RESCALE_TOLERANCE" => Some("half".to_string()),
            _ => None,
        });
        assert_eq!(config, Config::default());
    }
    #[test]
    fn missing_variables_keep_defaults() {
        assert_eq!(Config::from_vars(|_| None), Config::default());
    }
    #[test]
    fn builders_override() {
        let config = Config::default().with_tolerance(1e-3).with_rescale(2.);
        assert_eq!(config.tolerance(), 1e-3);
        assert_eq!(config.rescale(), 2.);
    }
}
