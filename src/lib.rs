//! Symbolic multi-criteria decision engine for logistics ranking.
//!
//! Composes three numeric subsystems into one deterministic pipeline:
//!
//! - **Neutrosophic rule filter**: accepts or rejects decision rules by
//!   independent Truth/Indeterminacy/Falsity thresholds and derives
//!   per-criterion weights from the surviving rules.
//! - **Grey-system whitener**: converts possibly-incomplete or uncertain
//!   criterion inputs (point values, ranges, estimates with confidence)
//!   into crisp numbers via fixed whitening curves.
//! - **TOPSIS ranker**: vector-normalizes, weights, measures distances to
//!   the ideal and anti-ideal points, and produces a dense 1-based ranking
//!   by closeness coefficient.
//! - **Pipeline**: sequences the three phases as a strict state machine,
//!   aggregates a confidence score, and returns one immutable result with
//!   an audit trail.
//!
//! # Architecture
//!
//! The engine is a leaf library: it performs no I/O, holds no cross-call
//! state, and contains no domain-specific ingestion. CSV import,
//! persistence, and presentation layers are consumers at higher layers.
//! Every computation is a pure function of its inputs and fixed
//! configuration, so identical inputs reproduce identical rankings.

pub mod error;
pub mod grey;
pub mod neutrosophic;
pub mod pipeline;
pub mod topsis;
