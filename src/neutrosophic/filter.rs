//! Rule filtering and rule-derived criterion weights.

use super::config::NeutrosophicConfig;
use super::types::{FilterOutcome, Rule, RuleRejection, ThresholdKind};
use crate::error::Result;

/// Filters rules by neutrosophic thresholds and derives criterion
/// weights from the survivors.
pub struct RuleFilter {
    config: NeutrosophicConfig,
}

impl RuleFilter {
    /// Creates a filter after validating the configuration.
    pub fn new(config: NeutrosophicConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &NeutrosophicConfig {
        &self.config
    }

    /// Partitions rules into survivors and rejections.
    ///
    /// A rule survives iff all three thresholds hold, boundaries
    /// inclusive. Each rejection records every threshold that failed,
    /// for later explanation surfaces.
    pub fn filter(&self, rules: &[Rule]) -> FilterOutcome {
        let mut outcome = FilterOutcome::default();

        for rule in rules {
            let mut failed = Vec::new();
            if rule.truth < self.config.truth_min {
                failed.push(ThresholdKind::Truth);
            }
            if rule.indeterminacy > self.config.indeterminacy_max {
                failed.push(ThresholdKind::Indeterminacy);
            }
            if rule.falsity > self.config.falsity_max {
                failed.push(ThresholdKind::Falsity);
            }

            if failed.is_empty() {
                outcome.valid.push(rule.clone());
            } else {
                outcome.rejections.push(RuleRejection {
                    rule_id: rule.id.clone(),
                    failed,
                });
            }
        }

        outcome
    }

    /// Derives a normalized weight vector over `criterion_names` from the
    /// surviving rules.
    ///
    /// Each rule contributes its weight to the criterion named by its
    /// `category`; negative weights contribute nothing. The aggregate is
    /// normalized to sum 1. When no surviving rule matches any criterion
    /// (including an empty `valid` slice), the vector degrades to equal
    /// weighting; this never divides by zero and never returns an empty
    /// vector for a non-empty criterion list.
    pub fn rule_weights(&self, valid: &[Rule], criterion_names: &[String]) -> Vec<f64> {
        let n = criterion_names.len();
        if n == 0 {
            return Vec::new();
        }

        let mut weights = vec![0.0f64; n];
        for rule in valid {
            if let Some(idx) = criterion_names.iter().position(|name| *name == rule.category) {
                weights[idx] += rule.weight.max(0.0);
            }
        }

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return vec![1.0 / n as f64; n];
        }

        for w in &mut weights {
            *w /= total;
        }
        weights
    }
}

impl Default for RuleFilter {
    fn default() -> Self {
        Self {
            config: NeutrosophicConfig::default(),
        }
    }
}
