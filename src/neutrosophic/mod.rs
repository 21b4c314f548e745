//! Neutrosophic rule filtering.
//!
//! Extends fuzzy acceptance with three independent membership degrees
//! (Truth, Indeterminacy, Falsity), each in [0, 1] with no sum
//! constraint.
//! Rules that clear all three thresholds survive; the survivors' weights
//! are aggregated per targeted criterion into a normalized weight vector
//! for the downstream ranking.
//!
//! # References
//!
//! - Smarandache, F. (1998), "Neutrosophy: Neutrosophic Probability, Set,
//!   and Logic"
//! - Wang et al. (2010), "Single valued neutrosophic sets"

mod config;
mod filter;
mod types;

pub use config::NeutrosophicConfig;
pub use filter::RuleFilter;
pub use types::{FilterOutcome, Rule, RuleRejection, ThresholdKind};
