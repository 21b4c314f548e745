//! Whitening curves, fusion, and the grey relational metric.

use super::config::WhiteningConfig;
use super::types::GreyValue;
use crate::error::{EngineError, Result};

/// Converts grey values into crisp numbers.
///
/// All methods are pure functions of their inputs and the fixed
/// configuration (no randomness, no hidden state), so rankings built on
/// top of them are reproducible and auditable.
///
/// # Examples
///
/// ```
/// use routerank::grey::{GreyValue, RawValue, Whitener, WhiteningConfig};
///
/// let whitener = Whitener::new(WhiteningConfig::default()).unwrap();
/// let gv = GreyValue::classify(Some(RawValue::Number(5.0)));
///
/// // Complete values pass through the identity linear map unchanged.
/// assert!((whitener.whiten(&gv) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Whitener {
    config: WhiteningConfig,
}

impl Whitener {
    /// Creates a whitener after validating the configuration.
    pub fn new(config: WhiteningConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &WhiteningConfig {
        &self.config
    }

    /// Whitens a grey value into a single crisp number.
    ///
    /// Each variant has its own curve:
    ///
    /// - `Complete(v)`: linear `alpha * v + beta`. Not clamped: under
    ///   the default identity map the value passes through unchanged,
    ///   and pre-scaling into a comparable range is the caller's job.
    /// - `Uncertain`: exponential saturation of the uncertainty,
    ///   `1 - exp(-lambda * u)`.
    /// - `Incomplete`: midpoint plus relative span, blended by
    ///   [`Whitener::fuse`] with neutral confidence.
    /// - `Missing`: logarithmic whitening of the neutral saturation 0.5
    ///   (no information, assume median).
    pub fn whiten(&self, value: &GreyValue) -> f64 {
        match *value {
            GreyValue::Complete(v) => self.linear(v),

            GreyValue::Uncertain { uncertainty, .. } => self.exponential(uncertainty),

            GreyValue::Incomplete { min, max } => {
                let midpoint = (min + max) / 2.0;
                let denom = max + min;
                let uncertainty = if denom.abs() < f64::EPSILON {
                    0.0
                } else {
                    (max - min) / denom
                };
                self.fuse(midpoint, uncertainty, 0.5)
            }

            GreyValue::Missing => self.logarithmic(0.5),
        }
    }

    /// Blends all three whitening curves for a value that carries
    /// magnitude, uncertainty, and confidence at once.
    ///
    /// `fusion_linear * linear(value) + fusion_exponential *
    /// exponential(uncertainty) + fusion_logarithmic *
    /// logarithmic(confidence)`, clamped to [0, 1].
    pub fn fuse(&self, value: f64, uncertainty: f64, confidence: f64) -> f64 {
        let blended = self.config.fusion_linear * self.linear(value)
            + self.config.fusion_exponential * self.exponential(uncertainty)
            + self.config.fusion_logarithmic * self.logarithmic(confidence);
        blended.clamp(0.0, 1.0)
    }

    /// Mean grey relational coefficient between two sequences.
    ///
    /// Per element: `(min_diff + rho * max_diff) / (diff + rho * max_diff)`
    /// where `min_diff`/`max_diff` are the global extremes of the absolute
    /// element-wise differences. Identical sequences have relation exactly
    /// 1.0. This is an independent similarity metric; it does not feed the
    /// TOPSIS ranking.
    pub fn grey_relation(&self, reference: &[f64], comparison: &[f64]) -> Result<f64> {
        if reference.is_empty() {
            return Err(EngineError::DegenerateInput(
                "grey relation over empty sequences".into(),
            ));
        }
        if reference.len() != comparison.len() {
            return Err(EngineError::Configuration(format!(
                "sequence length mismatch: {} vs {}",
                reference.len(),
                comparison.len()
            )));
        }

        let diffs: Vec<f64> = reference
            .iter()
            .zip(comparison.iter())
            .map(|(r, c)| (r - c).abs())
            .collect();

        let max_diff = diffs.iter().cloned().fold(f64::MIN, f64::max);
        if max_diff < f64::EPSILON {
            return Ok(1.0);
        }
        let min_diff = diffs.iter().cloned().fold(f64::MAX, f64::min);

        let rho = self.config.resolution;
        let sum: f64 = diffs
            .iter()
            .map(|diff| (min_diff + rho * max_diff) / (diff + rho * max_diff))
            .sum();

        Ok(sum / diffs.len() as f64)
    }

    /// Linear whitening: `alpha * v + beta`.
    fn linear(&self, v: f64) -> f64 {
        self.config.alpha * v + self.config.beta
    }

    /// Exponential whitening: `1 - exp(-lambda * u)`.
    fn exponential(&self, u: f64) -> f64 {
        1.0 - (-self.config.lambda * u).exp()
    }

    /// Logarithmic whitening: `ln(1 + x) / ln(2)`, a saturating map of
    /// [0, 1] onto [0, 1].
    fn logarithmic(&self, x: f64) -> f64 {
        (1.0 + x.max(0.0)).ln() / std::f64::consts::LN_2
    }
}

impl Default for Whitener {
    fn default() -> Self {
        Self {
            config: WhiteningConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grey::RawValue;

    fn whitener() -> Whitener {
        Whitener::new(WhiteningConfig::default()).unwrap()
    }

    #[test]
    fn test_complete_identity_under_defaults() {
        let gv = GreyValue::classify(Some(RawValue::Number(5.0)));
        assert!((whitener().whiten(&gv) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_complete_linear_scaling() {
        let w = Whitener::new(WhiteningConfig::default().with_alpha(0.5).with_beta(0.1)).unwrap();
        let gv = GreyValue::Complete(0.8);
        assert!((w.whiten(&gv) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_uncertain_exponential_curve() {
        let gv = GreyValue::Uncertain {
            value: 100.0,
            uncertainty: 0.5,
            confidence: 0.9,
        };
        let expected = 1.0 - (-0.1f64 * 0.5).exp();
        assert!((whitener().whiten(&gv) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_missing_assumes_median() {
        let expected = 1.5f64.ln() / std::f64::consts::LN_2;
        assert!((whitener().whiten(&GreyValue::Missing) - expected).abs() < 1e-12);
        // The fallback sits just above the midpoint of [0, 1].
        assert!(expected > 0.5 && expected < 0.65);
    }

    #[test]
    fn test_incomplete_uses_midpoint_fusion() {
        let w = whitener();
        let gv = GreyValue::Incomplete { min: 0.2, max: 0.6 };
        let expected = w.fuse(0.4, (0.6 - 0.2) / (0.6 + 0.2), 0.5);
        assert!((w.whiten(&gv) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_incomplete_zero_sum_guard() {
        let w = whitener();
        let gv = GreyValue::Incomplete {
            min: -1.0,
            max: 1.0,
        };
        // max + min = 0: uncertainty defined as 0, midpoint 0.
        let expected = w.fuse(0.0, 0.0, 0.5);
        assert!((w.whiten(&gv) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_fuse_is_clamped() {
        let w = whitener();
        assert!((w.fuse(100.0, 1.0, 1.0) - 1.0).abs() < 1e-12);
        assert!(w.fuse(-100.0, 0.0, 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_fuse_blend_components() {
        let w = whitener();
        let expected: f64 = 0.6 * 0.5
            + 0.3 * (1.0 - (-0.1f64 * 0.2).exp())
            + 0.1 * (1.8f64.ln() / std::f64::consts::LN_2);
        assert!((w.fuse(0.5, 0.2, 0.8) - expected.clamp(0.0, 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_whiten_is_deterministic() {
        let w = whitener();
        let gv = GreyValue::Incomplete { min: 0.1, max: 0.9 };
        let first = w.whiten(&gv);
        for _ in 0..10 {
            assert_eq!(first.to_bits(), w.whiten(&gv).to_bits());
        }
    }

    #[test]
    fn test_grey_relation_identical_sequences() {
        let w = whitener();
        let seq = [0.2, 0.4, 0.8];
        let relation = w.grey_relation(&seq, &seq).unwrap();
        assert!((relation - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_grey_relation_known_value() {
        let w = whitener();
        // diffs = [0.0, 1.0]; min = 0, max = 1, rho = 0.4
        // coefficients: (0 + 0.4) / (0 + 0.4) = 1.0, (0 + 0.4) / (1 + 0.4) = 0.2857..
        let relation = w.grey_relation(&[1.0, 2.0], &[1.0, 3.0]).unwrap();
        let expected = (1.0 + 0.4 / 1.4) / 2.0;
        assert!((relation - expected).abs() < 1e-12);
    }

    #[test]
    fn test_grey_relation_uniform_offset_is_perfect_relation() {
        // Grey relation measures shape similarity: a uniformly shifted
        // sequence has identical diffs everywhere, so every coefficient
        // is 1.
        let w = whitener();
        let relation = w.grey_relation(&[0.1, 0.5, 0.9], &[0.2, 0.6, 1.0]).unwrap();
        assert!((relation - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_grey_relation_higher_resolution_softens_discrimination() {
        let sharp = Whitener::new(WhiteningConfig::default().with_resolution(0.4)).unwrap();
        let soft = Whitener::new(WhiteningConfig::default().with_resolution(1.0)).unwrap();
        // diffs = [0, 1]: rho = 0.4 gives mean (1 + 0.4/1.4)/2, rho = 1
        // gives mean (1 + 0.5)/2.
        let reference = [1.0, 2.0];
        let comparison = [1.0, 3.0];
        let r_sharp = sharp.grey_relation(&reference, &comparison).unwrap();
        let r_soft = soft.grey_relation(&reference, &comparison).unwrap();
        assert!(r_soft > r_sharp);
        assert!((r_soft - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_grey_relation_length_mismatch() {
        let w = whitener();
        assert!(matches!(
            w.grey_relation(&[1.0, 2.0], &[1.0]),
            Err(EngineError::Configuration(_))
        ));
    }

    #[test]
    fn test_grey_relation_empty() {
        let w = whitener();
        assert!(matches!(
            w.grey_relation(&[], &[]),
            Err(EngineError::DegenerateInput(_))
        ));
    }
}
