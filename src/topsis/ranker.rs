//! TOPSIS ranking pass.

use super::types::{Candidate, Criterion, RankingResult, TopsisOutcome};
use crate::error::{Degeneracy, EngineError, Result};
use tracing::warn;

/// Floating-point tolerance for score ties.
const EPSILON: f64 = 1e-9;

/// Tolerance on the sum-to-1 weight invariant.
const WEIGHT_TOLERANCE: f64 = 1e-3;

/// Ranks alternatives by relative closeness to the ideal solution.
///
/// The ranker holds per-call criteria and weights: a plain value type,
/// constructed fresh for each ranking (or shared immutably), so
/// concurrent callers never interfere.
///
/// # Examples
///
/// ```
/// use routerank::topsis::{Candidate, Criterion, TopsisRanker};
///
/// let ranker = TopsisRanker::new(vec![
///     Criterion::new("cost", 0.5, false),
///     Criterion::new("reliability", 0.5, true),
/// ])
/// .unwrap();
///
/// let outcome = ranker
///     .rank(&[
///         Candidate::new("a", vec![2500.0, 0.95]),
///         Candidate::new("b", vec![8000.0, 0.98]),
///     ])
///     .unwrap();
/// assert_eq!(outcome.ranking[0].rank, 1);
/// ```
#[derive(Debug, Clone)]
pub struct TopsisRanker {
    criteria: Vec<Criterion>,
    renormalized_from: Option<f64>,
}

impl TopsisRanker {
    /// Creates a ranker, validating the criteria.
    ///
    /// Weights outside [0, 1] are a configuration error. A weight sum off
    /// by more than 1e-3 is repaired by re-normalization (logged and
    /// flagged in every subsequent outcome, never thrown).
    pub fn new(criteria: Vec<Criterion>) -> Result<Self> {
        if criteria.is_empty() {
            return Err(EngineError::DegenerateInput(
                "at least one criterion is required".into(),
            ));
        }
        for (i, a) in criteria.iter().enumerate() {
            if criteria[..i].iter().any(|b| b.name == a.name) {
                return Err(EngineError::Configuration(format!(
                    "duplicate criterion name: {}",
                    a.name
                )));
            }
        }

        let mut ranker = Self {
            criteria,
            renormalized_from: None,
        };
        let weights: Vec<f64> = ranker.criteria.iter().map(|c| c.weight).collect();
        ranker.set_weights(&weights)?;
        Ok(ranker)
    }

    /// Returns the criteria in column order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Returns the current weight vector.
    pub fn weights(&self) -> Vec<f64> {
        self.criteria.iter().map(|c| c.weight).collect()
    }

    /// Replaces the weight vector.
    ///
    /// The cardinality must equal the criteria count; the sum-to-1
    /// invariant is then re-validated exactly as in [`TopsisRanker::new`].
    pub fn update_weights(&mut self, weights: &[f64]) -> Result<()> {
        if weights.len() != self.criteria.len() {
            return Err(EngineError::Configuration(format!(
                "expected {} weights, got {}",
                self.criteria.len(),
                weights.len()
            )));
        }
        self.set_weights(weights)
    }

    fn set_weights(&mut self, weights: &[f64]) -> Result<()> {
        for w in weights {
            if !w.is_finite() || !(0.0..=1.0).contains(w) {
                return Err(EngineError::Configuration(format!(
                    "criterion weight must be in [0, 1], got {w}"
                )));
            }
        }
        let sum: f64 = weights.iter().sum();
        if sum <= 0.0 {
            return Err(EngineError::Configuration(
                "criterion weights sum to zero".into(),
            ));
        }

        self.renormalized_from = None;
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            warn!(sum, "criterion weights do not sum to 1, re-normalizing");
            self.renormalized_from = Some(sum);
            for (criterion, w) in self.criteria.iter_mut().zip(weights) {
                criterion.weight = w / sum;
            }
        } else {
            for (criterion, w) in self.criteria.iter_mut().zip(weights) {
                criterion.weight = *w;
            }
        }
        Ok(())
    }

    /// Ranks candidates by closeness coefficient, best first.
    ///
    /// Deterministic: vector-normalize each criterion column, weight,
    /// locate the ideal and anti-ideal points by criterion direction,
    /// measure Euclidean distances, score `d- / (d+ + d-)`, and assign
    /// dense 1-based ranks. Ties within 1e-9 keep first-seen input order
    /// and share a rank.
    pub fn rank(&self, candidates: &[Candidate]) -> Result<TopsisOutcome> {
        self.validate_candidates(candidates)?;

        let m = candidates.len();
        let n = self.criteria.len();
        let mut degeneracies = Vec::new();
        if let Some(original_sum) = self.renormalized_from {
            degeneracies.push(Degeneracy::RenormalizedWeights { original_sum });
        }

        // Normalize and weight, column by column.
        let mut weighted = vec![vec![0.0f64; n]; m];
        for (j, criterion) in self.criteria.iter().enumerate() {
            let column: Vec<f64> = candidates.iter().map(|c| c.values[j]).collect();
            let norm = column.iter().map(|v| v * v).sum::<f64>().sqrt();

            let max = column.iter().cloned().fold(f64::MIN, f64::max);
            let min = column.iter().cloned().fold(f64::MAX, f64::min);
            if norm < EPSILON {
                // All-zero column: skip normalization rather than divide
                // by zero.
                degeneracies.push(Degeneracy::ZeroNormColumn {
                    criterion: criterion.name.clone(),
                });
            } else if (max - min).abs() < EPSILON {
                degeneracies.push(Degeneracy::ZeroVarianceColumn {
                    criterion: criterion.name.clone(),
                });
            }

            for (i, value) in column.iter().enumerate() {
                let normalized = if norm < EPSILON { *value } else { value / norm };
                weighted[i][j] = normalized * criterion.weight;
            }
        }

        // Ideal and anti-ideal points by criterion direction.
        let mut ideal = vec![0.0f64; n];
        let mut anti_ideal = vec![0.0f64; n];
        for (j, criterion) in self.criteria.iter().enumerate() {
            let column = weighted.iter().map(|row| row[j]);
            let max = column.clone().fold(f64::MIN, f64::max);
            let min = column.fold(f64::MAX, f64::min);
            if criterion.beneficial {
                ideal[j] = max;
                anti_ideal[j] = min;
            } else {
                ideal[j] = min;
                anti_ideal[j] = max;
            }
        }

        // Distances and closeness coefficients.
        let mut scores = vec![0.0f64; m];
        let mut distances = vec![(0.0f64, 0.0f64); m];
        for (i, row) in weighted.iter().enumerate() {
            let d_plus = euclidean(row, &ideal);
            let d_minus = euclidean(row, &anti_ideal);
            distances[i] = (d_plus, d_minus);

            scores[i] = if d_plus + d_minus < EPSILON {
                // Candidate coincides with both reference points
                // (single-candidate input, or no discriminating column).
                degeneracies.push(Degeneracy::CoincidentReferencePoints {
                    alternative_id: candidates[i].id.clone(),
                });
                0.5
            } else {
                d_minus / (d_plus + d_minus)
            };
        }

        // Sort descending by score; the stable sort keeps first-seen
        // input order for ties.
        let mut indices: Vec<usize> = (0..m).collect();
        indices.sort_by(|&a, &b| {
            if (scores[a] - scores[b]).abs() > EPSILON {
                scores[b]
                    .partial_cmp(&scores[a])
                    .unwrap_or(std::cmp::Ordering::Equal)
            } else {
                std::cmp::Ordering::Equal
            }
        });

        // Dense 1-based ranks: tied scores share a rank.
        let mut ranking = Vec::with_capacity(m);
        let mut rank = 0usize;
        let mut previous_score = f64::MAX;
        for &i in &indices {
            if (previous_score - scores[i]).abs() > EPSILON {
                rank += 1;
                previous_score = scores[i];
            }
            ranking.push(RankingResult {
                alternative_id: candidates[i].id.clone(),
                score: scores[i],
                rank,
                distance_to_ideal: distances[i].0,
                distance_to_anti_ideal: distances[i].1,
            });
        }

        Ok(TopsisOutcome {
            ranking,
            degeneracies,
        })
    }

    fn validate_candidates(&self, candidates: &[Candidate]) -> Result<()> {
        if candidates.is_empty() {
            return Err(EngineError::DegenerateInput(
                "no alternatives to rank".into(),
            ));
        }
        let n = self.criteria.len();
        for candidate in candidates {
            if candidate.values.len() != n {
                return Err(EngineError::Configuration(format!(
                    "alternative {} has {} values, expected {}",
                    candidate.id,
                    candidate.values.len(),
                    n
                )));
            }
            if candidate.values.iter().any(|v| !v.is_finite()) {
                return Err(EngineError::Configuration(format!(
                    "alternative {} has a non-finite criterion value",
                    candidate.id
                )));
            }
        }
        Ok(())
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
