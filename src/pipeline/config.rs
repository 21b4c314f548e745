//! Pipeline configuration.

use crate::error::Result;
use crate::grey::WhiteningConfig;
use crate::neutrosophic::NeutrosophicConfig;

/// Configuration for the full decision pipeline.
///
/// A plain value bundle of the two leaf configurations, constructed per
/// call or shared immutably (never a process-wide singleton), so
/// concurrent evaluations cannot interfere.
///
/// # Examples
///
/// ```
/// use routerank::neutrosophic::NeutrosophicConfig;
/// use routerank::pipeline::PipelineConfig;
///
/// let config = PipelineConfig::default()
///     .with_neutrosophic(NeutrosophicConfig::default().with_truth_min(0.7));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PipelineConfig {
    /// Rule acceptance thresholds.
    pub neutrosophic: NeutrosophicConfig,

    /// Whitening curve parameters.
    pub whitening: WhiteningConfig,
}

impl PipelineConfig {
    pub fn with_neutrosophic(mut self, config: NeutrosophicConfig) -> Self {
        self.neutrosophic = config;
        self
    }

    pub fn with_whitening(mut self, config: WhiteningConfig) -> Self {
        self.whitening = config;
        self
    }

    /// Validates both sub-configurations.
    pub fn validate(&self) -> Result<()> {
        self.neutrosophic.validate()?;
        self.whitening.validate()
    }
}
