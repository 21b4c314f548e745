//! Pipeline orchestration.
//!
//! Sequences the three subsystems as a strict state machine,
//! `Idle -> Neutrosophic -> Grey -> Topsis -> Complete`, because TOPSIS
//! has a genuine data dependency on the rule-derived weights and the
//! whitened criteria. One blocking, synchronous computation per
//! invocation; progress is reported through an optional observer
//! callback so presentation layers can animate without the core ever
//! touching a timer. Any failure resets the reported status and
//! propagates a typed error; no partial result is ever returned.

mod config;
mod runner;
mod types;

pub use config::PipelineConfig;
pub use runner::{PipelineRunner, StatusObserver};
pub use types::{
    AlternativeSpec, CriterionSpec, EnginePhase, EngineStatus, SymbolicResult,
};
