//! TOPSIS ranking.
//!
//! Technique for Order Preference by Similarity to Ideal Solution: ranks
//! alternatives by their relative Euclidean distance to an ideal (best on
//! every criterion) and an anti-ideal (worst on every criterion) point in
//! weighted, vector-normalized criteria space. The closeness coefficient
//! `d- / (d+ + d-)` lies in [0, 1]; higher is better.
//!
//! # References
//!
//! - Hwang & Yoon (1981), "Multiple Attribute Decision Making: Methods
//!   and Applications"
//! - Behzadian et al. (2012), "A state-of-the-art survey of TOPSIS
//!   applications"

mod ranker;
mod types;

pub use ranker::TopsisRanker;
pub use types::{Candidate, Criterion, RankingResult, TopsisOutcome};
