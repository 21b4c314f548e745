//! Whitening configuration.

use crate::error::{EngineError, Result};

/// Configuration for the grey-system whitener.
///
/// All parameters are tuned defaults, not derived constants. The fusion
/// weights blend the three whitening curves when a value carries
/// magnitude, uncertainty, and confidence at once: linear alone ignores
/// confidence, exponential alone ignores magnitude.
///
/// # Examples
///
/// ```
/// use routerank::grey::WhiteningConfig;
///
/// let config = WhiteningConfig::default()
///     .with_lambda(0.2)
///     .with_resolution(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhiteningConfig {
    /// Linear whitening slope: `w = alpha * v + beta`.
    ///
    /// The caller is responsible for pre-scaling values into a
    /// comparable range; with the default `alpha = 1, beta = 0` a
    /// complete value passes through unchanged.
    pub alpha: f64,

    /// Linear whitening intercept.
    pub beta: f64,

    /// Exponential whitening rate: `w = 1 - exp(-lambda * u)`.
    ///
    /// Must be positive.
    pub lambda: f64,

    /// Fusion weight of the linear component.
    pub fusion_linear: f64,

    /// Fusion weight of the exponential component.
    pub fusion_exponential: f64,

    /// Fusion weight of the logarithmic component.
    pub fusion_logarithmic: f64,

    /// Distinguishing coefficient `rho` for the grey relational
    /// coefficient, in (0, 1].
    pub resolution: f64,
}

impl Default for WhiteningConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 0.0,
            lambda: 0.1,
            fusion_linear: 0.6,
            fusion_exponential: 0.3,
            fusion_logarithmic: 0.1,
            resolution: 0.4,
        }
    }
}

impl WhiteningConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    pub fn with_fusion_weights(mut self, linear: f64, exponential: f64, logarithmic: f64) -> Self {
        self.fusion_linear = linear;
        self.fusion_exponential = exponential;
        self.fusion_logarithmic = logarithmic;
        self
    }

    pub fn with_resolution(mut self, rho: f64) -> Self {
        self.resolution = rho;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(EngineError::Configuration(
                "linear whitening parameters must be finite".into(),
            ));
        }
        if !(self.lambda > 0.0) || !self.lambda.is_finite() {
            return Err(EngineError::Configuration(format!(
                "lambda must be positive, got {}",
                self.lambda
            )));
        }
        if !(self.resolution > 0.0 && self.resolution <= 1.0) {
            return Err(EngineError::Configuration(format!(
                "resolution must be in (0, 1], got {}",
                self.resolution
            )));
        }
        let fusion = [
            self.fusion_linear,
            self.fusion_exponential,
            self.fusion_logarithmic,
        ];
        if fusion.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(EngineError::Configuration(
                "fusion weights must be finite and non-negative".into(),
            ));
        }
        let sum: f64 = fusion.iter().sum();
        if (sum - 1.0).abs() > 1e-3 {
            return Err(EngineError::Configuration(format!(
                "fusion weights must sum to 1, got {sum}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WhiteningConfig::default();
        assert!((config.alpha - 1.0).abs() < 1e-10);
        assert!(config.beta.abs() < 1e-10);
        assert!((config.lambda - 0.1).abs() < 1e-10);
        assert!((config.resolution - 0.4).abs() < 1e-10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_lambda() {
        let config = WhiteningConfig::default().with_lambda(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_resolution() {
        assert!(WhiteningConfig::default()
            .with_resolution(0.0)
            .validate()
            .is_err());
        assert!(WhiteningConfig::default()
            .with_resolution(1.5)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_fusion_weights_must_sum_to_one() {
        let config = WhiteningConfig::default().with_fusion_weights(0.5, 0.3, 0.1);
        assert!(config.validate().is_err());

        let config = WhiteningConfig::default().with_fusion_weights(0.5, 0.4, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_fusion_weight() {
        let config = WhiteningConfig::default().with_fusion_weights(1.2, -0.1, -0.1);
        assert!(config.validate().is_err());
    }
}
