//! Pipeline input/output types and engine status.

use crate::error::Degeneracy;
use crate::grey::RawValue;
use crate::neutrosophic::{Rule, RuleRejection};
use crate::topsis::RankingResult;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

/// Pipeline phase.
///
/// Phases always advance in the strict order
/// `Idle -> Neutrosophic -> Grey -> Topsis -> Complete`; an error resets
/// the reported phase to `Idle`. No phase can be skipped: TOPSIS has a
/// genuine data dependency on the rule-derived weights and the whitened
/// criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnginePhase {
    /// Not running.
    Idle,
    /// Filtering rules and deriving criterion weights.
    Neutrosophic,
    /// Classifying and whitening raw criterion values.
    Grey,
    /// Ranking alternatives.
    Topsis,
    /// Finished successfully.
    Complete,
}

impl fmt::Display for EnginePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EnginePhase::Idle => "idle",
            EnginePhase::Neutrosophic => "neutrosophic",
            EnginePhase::Grey => "grey",
            EnginePhase::Topsis => "topsis",
            EnginePhase::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// Snapshot of pipeline progress, reported to an observer callback.
///
/// `progress` is in [0, 100] and non-decreasing within one run (except
/// for the reset to 0 on failure). The engine itself never sleeps or
/// animates; progress reporting is synchronous and free for callers to
/// ignore.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineStatus {
    /// Current phase.
    pub phase: EnginePhase,
    /// Progress percentage in [0, 100].
    pub progress: f64,
    /// Description of the operation in flight.
    pub current_operation: String,
}

impl Default for EngineStatus {
    fn default() -> Self {
        Self {
            phase: EnginePhase::Idle,
            progress: 0.0,
            current_operation: String::new(),
        }
    }
}

/// A criterion as supplied to the pipeline: direction only.
///
/// The weight is derived from the surviving rules (equal-weight fallback
/// when no rule survives); callers with explicit weights use
/// [`crate::topsis::TopsisRanker`] directly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriterionSpec {
    /// Criterion name, matched against rule categories and alternative
    /// criterion maps.
    pub name: String,
    /// `true` if higher values are better.
    pub beneficial: bool,
}

impl CriterionSpec {
    pub fn new(name: impl Into<String>, beneficial: bool) -> Self {
        Self {
            name: name.into(),
            beneficial,
        }
    }
}

/// An alternative as supplied to the pipeline, with raw criterion values.
///
/// A criterion absent from the map whitens through the Missing fallback.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlternativeSpec {
    /// Unique alternative identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Raw criterion values by criterion name.
    pub criteria: HashMap<String, RawValue>,
}

impl AlternativeSpec {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            criteria: HashMap::new(),
        }
    }

    /// Adds a raw criterion value.
    pub fn with_criterion(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.criteria.insert(name.into(), value.into());
        self
    }
}

/// Immutable result of one pipeline run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolicResult {
    /// The top-ranked alternative.
    pub best_alternative: RankingResult,

    /// Full ranking, best first.
    pub ranking: Vec<RankingResult>,

    /// `(validRuleCount / totalRuleCount) * topAlternativeScore`,
    /// in [0, 1].
    pub confidence: f64,

    /// Rules that passed the neutrosophic filter.
    pub valid_rules: Vec<Rule>,

    /// Per-rule rejection records for explanation surfaces.
    pub rejections: Vec<RuleRejection>,

    /// Numeric degeneracies absorbed during the run.
    pub degeneracies: Vec<Degeneracy>,

    /// Human-readable summary of counts and elapsed time.
    pub methodology: String,

    /// Wall-clock duration of the run.
    pub processing_time: Duration,
}
