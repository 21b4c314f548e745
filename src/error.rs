//! Error taxonomy and absorbed-degeneracy metadata.
//!
//! The engine distinguishes three failure classes:
//!
//! - [`EngineError::Configuration`]: cardinality or shape mismatches and
//!   invalid configuration. Rejected before any computation runs.
//! - [`EngineError::DegenerateInput`]: inputs over which no meaningful
//!   ranking exists (zero alternatives, zero criteria, empty sequences).
//!   Also rejected up front.
//! - [`EngineError::Processing`]: an unexpected failure inside a pipeline
//!   phase. The pipeline resets its reported state and attaches the phase
//!   in which the failure occurred.
//!
//! Numeric degeneracies that have a documented fallback value (a
//! zero-norm criterion column, coincident ideal/anti-ideal points, an
//! empty rule set) are *not* errors: they are absorbed locally and
//! surfaced as [`Degeneracy`] flags in the result metadata, so a
//! successful call never contains NaN or infinity.

use crate::pipeline::EnginePhase;
use thiserror::Error;

/// Engine-wide error type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// Invalid configuration or mismatched input shapes.
    ///
    /// Examples: a weight vector whose length differs from the criteria
    /// count, a whitening resolution outside (0, 1], duplicate criterion
    /// names.
    #[error("configuration: {0}")]
    Configuration(String),

    /// Input too small or empty for any ranking to exist.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Unexpected failure inside a pipeline phase.
    ///
    /// Carries the phase that was executing so callers can attribute the
    /// failure in audit logs.
    #[error("{phase} phase failed: {message}")]
    Processing {
        /// Phase in which the failure occurred.
        phase: EnginePhase,
        /// Human-readable failure description.
        message: String,
    },
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

/// A numeric degeneracy that was absorbed with a documented fallback
/// value instead of failing the computation.
///
/// Flags are accumulated during a run and returned in the result
/// metadata. Consumers (explanation panels, audit logs) use them to
/// qualify how much discriminating information the input carried.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Degeneracy {
    /// A criterion column whose Euclidean norm is zero (all values 0).
    /// Normalization was skipped for that column.
    ZeroNormColumn {
        /// Name of the affected criterion.
        criterion: String,
    },

    /// A criterion column on which every alternative has the same value.
    /// The column carries no discriminating information.
    ZeroVarianceColumn {
        /// Name of the affected criterion.
        criterion: String,
    },

    /// An alternative coinciding with both the ideal and anti-ideal
    /// points (`d+ + d- = 0`). Its score was defined as 0.5.
    CoincidentReferencePoints {
        /// Id of the affected alternative.
        alternative_id: String,
    },

    /// Criterion weights did not sum to 1 within tolerance and were
    /// re-normalized.
    RenormalizedWeights {
        /// The weight sum before re-normalization.
        original_sum: f64,
    },

    /// No rules were supplied at all; criterion weights fell back to
    /// equal weighting and the rule factor of the confidence score is 0.
    EmptyRuleSet,
}
