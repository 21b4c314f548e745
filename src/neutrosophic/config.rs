//! Rule acceptance thresholds.

use crate::error::{EngineError, Result};

/// Acceptance thresholds for neutrosophic rule filtering.
///
/// A rule survives iff `truth >= truth_min` and
/// `indeterminacy <= indeterminacy_max` and `falsity <= falsity_max`,
/// with every boundary inclusive at the threshold value itself.
///
/// The defaults are tuned values, not derived constants.
///
/// # Examples
///
/// ```
/// use routerank::neutrosophic::NeutrosophicConfig;
///
/// let config = NeutrosophicConfig::default()
///     .with_truth_min(0.75)
///     .with_indeterminacy_max(0.15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeutrosophicConfig {
    /// Minimum truth degree for acceptance (inclusive).
    pub truth_min: f64,

    /// Maximum indeterminacy degree for acceptance (inclusive).
    pub indeterminacy_max: f64,

    /// Maximum falsity degree for acceptance (inclusive).
    pub falsity_max: f64,
}

impl Default for NeutrosophicConfig {
    fn default() -> Self {
        Self {
            truth_min: 0.80,
            indeterminacy_max: 0.10,
            falsity_max: 0.05,
        }
    }
}

impl NeutrosophicConfig {
    pub fn with_truth_min(mut self, t: f64) -> Self {
        self.truth_min = t;
        self
    }

    pub fn with_indeterminacy_max(mut self, i: f64) -> Self {
        self.indeterminacy_max = i;
        self
    }

    pub fn with_falsity_max(mut self, f: f64) -> Self {
        self.falsity_max = f;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("truth_min", self.truth_min),
            ("indeterminacy_max", self.indeterminacy_max),
            ("falsity_max", self.falsity_max),
        ] {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(EngineError::Configuration(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}
