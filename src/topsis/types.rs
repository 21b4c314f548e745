//! Criteria, candidates, and ranking results.

use crate::error::Degeneracy;

/// A decision criterion with weight and directionality.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Criterion {
    /// Criterion name (e.g. "cost", "reliability").
    pub name: String,

    /// Weight in [0, 1]. Across all criteria of one ranking call the
    /// weights sum to 1.0 within 1e-3 (re-normalized otherwise).
    pub weight: f64,

    /// Directionality: `true` if higher values are better (reliability),
    /// `false` for cost-like criteria (price, transit time, risk).
    pub beneficial: bool,
}

impl Criterion {
    pub fn new(name: impl Into<String>, weight: f64, beneficial: bool) -> Self {
        Self {
            name: name.into(),
            weight,
            beneficial,
        }
    }
}

/// An alternative whose criterion values are already whitened, in
/// criterion order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Alternative identifier, carried through to the ranking.
    pub id: String,

    /// Crisp criterion values, parallel to the ranker's criteria.
    pub values: Vec<f64>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }
}

/// Ranked outcome for one alternative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingResult {
    /// Id of the ranked alternative.
    pub alternative_id: String,

    /// Closeness coefficient in [0, 1]; higher is better.
    pub score: f64,

    /// 1-based dense rank. Tied scores share a rank; the next distinct
    /// score gets the previous rank plus one.
    pub rank: usize,

    /// Euclidean distance to the ideal point, >= 0.
    pub distance_to_ideal: f64,

    /// Euclidean distance to the anti-ideal point, >= 0.
    pub distance_to_anti_ideal: f64,
}

/// Result of a TOPSIS ranking pass.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopsisOutcome {
    /// Results in ranked order (best first).
    pub ranking: Vec<RankingResult>,

    /// Numeric degeneracies absorbed during the pass.
    pub degeneracies: Vec<Degeneracy>,
}
