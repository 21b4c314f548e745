//! Sequential three-phase pipeline execution.

use super::config::PipelineConfig;
use super::types::{AlternativeSpec, CriterionSpec, EnginePhase, EngineStatus, SymbolicResult};
use crate::error::{Degeneracy, EngineError, Result};
use crate::grey::{GreyValue, Whitener};
use crate::neutrosophic::{Rule, RuleFilter};
use crate::topsis::{Candidate, Criterion, TopsisRanker};
use std::time::Instant;
use tracing::debug;

/// Observer callback invoked at every status transition.
pub type StatusObserver<'a> = &'a mut dyn FnMut(&EngineStatus);

/// Tracks and reports pipeline status.
///
/// Progress is non-decreasing within a run; the only backwards move is
/// the reset to `Idle`/0 after a failure.
struct ProgressReporter<'a> {
    status: EngineStatus,
    observer: Option<StatusObserver<'a>>,
}

impl<'a> ProgressReporter<'a> {
    fn new(observer: Option<StatusObserver<'a>>) -> Self {
        Self {
            status: EngineStatus::default(),
            observer,
        }
    }

    fn advance(&mut self, phase: EnginePhase, progress: f64, operation: &str) {
        debug_assert!(progress >= self.status.progress);
        self.status.phase = phase;
        self.status.progress = progress;
        self.status.current_operation = operation.into();
        debug!(phase = %phase, progress, operation, "pipeline status");
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.status);
        }
    }

    fn reset(&mut self) {
        self.status = EngineStatus {
            phase: EnginePhase::Idle,
            progress: 0.0,
            current_operation: "reset after failure".into(),
        };
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.status);
        }
    }
}

/// Runs the three-phase symbolic decision pipeline.
///
/// One blocking, synchronous computation per invocation. The runner
/// holds only configuration; all per-call state lives on the stack, so
/// concurrent callers sharing one runner are fully independent.
///
/// # Examples
///
/// ```
/// use routerank::pipeline::{AlternativeSpec, CriterionSpec, PipelineConfig, PipelineRunner};
///
/// let runner = PipelineRunner::new(PipelineConfig::default()).unwrap();
/// let alternatives = vec![
///     AlternativeSpec::new("sea", "Sea freight").with_criterion("cost", 2500.0),
///     AlternativeSpec::new("air", "Air freight").with_criterion("cost", 8000.0),
/// ];
/// let criteria = vec![CriterionSpec::new("cost", false)];
///
/// let result = runner.run(&alternatives, &criteria, &[]).unwrap();
/// assert_eq!(result.best_alternative.alternative_id, "sea");
/// ```
pub struct PipelineRunner {
    config: PipelineConfig,
}

impl PipelineRunner {
    /// Creates a runner after validating the configuration.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the pipeline without progress reporting.
    pub fn run(
        &self,
        alternatives: &[AlternativeSpec],
        criteria: &[CriterionSpec],
        rules: &[Rule],
    ) -> Result<SymbolicResult> {
        self.run_with_observer(alternatives, criteria, rules, None)
    }

    /// Runs the pipeline, reporting each status transition to an
    /// optional observer.
    ///
    /// The observer is called synchronously; the engine itself contains
    /// no timers or artificial delays; any progress animation belongs
    /// to the caller.
    pub fn run_with_observer(
        &self,
        alternatives: &[AlternativeSpec],
        criteria: &[CriterionSpec],
        rules: &[Rule],
        observer: Option<StatusObserver<'_>>,
    ) -> Result<SymbolicResult> {
        let mut reporter = ProgressReporter::new(observer);
        let result = self.execute(alternatives, criteria, rules, &mut reporter);
        if result.is_err() {
            reporter.reset();
        }
        result
    }

    fn execute(
        &self,
        alternatives: &[AlternativeSpec],
        criteria: &[CriterionSpec],
        rules: &[Rule],
        reporter: &mut ProgressReporter<'_>,
    ) -> Result<SymbolicResult> {
        let started = Instant::now();

        validate_input(alternatives, criteria)?;

        // Phase 1: rule filtering and rule-derived weights.
        reporter.advance(EnginePhase::Neutrosophic, 10.0, "filtering rules");
        let filter = RuleFilter::new(self.config.neutrosophic.clone())?;
        let filtered = filter.filter(rules);

        reporter.advance(EnginePhase::Neutrosophic, 25.0, "deriving criterion weights");
        let names: Vec<String> = criteria.iter().map(|c| c.name.clone()).collect();
        let weights = filter.rule_weights(&filtered.valid, &names);
        debug!(
            valid = filtered.valid.len(),
            total = rules.len(),
            "rule filtering complete"
        );

        // Phase 2: classify and whiten every raw criterion value.
        reporter.advance(EnginePhase::Grey, 40.0, "whitening criterion values");
        let whitener = Whitener::new(self.config.whitening.clone())?;
        let mut candidates = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            let mut values = Vec::with_capacity(criteria.len());
            for criterion in criteria {
                let grey =
                    GreyValue::classify(alternative.criteria.get(&criterion.name).copied());
                let white = whitener.whiten(&grey);
                if !white.is_finite() {
                    return Err(EngineError::Processing {
                        phase: EnginePhase::Grey,
                        message: format!(
                            "whitening criterion {} of alternative {} produced a non-finite value",
                            criterion.name, alternative.id
                        ),
                    });
                }
                values.push(white);
            }
            candidates.push(Candidate::new(alternative.id.clone(), values));
        }

        // Phase 3: TOPSIS over the whitened matrix with derived weights.
        reporter.advance(EnginePhase::Topsis, 70.0, "ranking alternatives");
        let topsis_criteria: Vec<Criterion> = criteria
            .iter()
            .zip(&weights)
            .map(|(spec, w)| Criterion::new(spec.name.clone(), *w, spec.beneficial))
            .collect();
        let ranker = TopsisRanker::new(topsis_criteria)?;
        let ranked = ranker.rank(&candidates)?;

        reporter.advance(EnginePhase::Topsis, 90.0, "aggregating confidence");
        let mut degeneracies = ranked.degeneracies;
        let rule_factor = if rules.is_empty() {
            degeneracies.push(Degeneracy::EmptyRuleSet);
            0.0
        } else {
            filtered.valid.len() as f64 / rules.len() as f64
        };
        let best_alternative = ranked.ranking[0].clone();
        let confidence = (rule_factor * best_alternative.score).clamp(0.0, 1.0);

        let processing_time = started.elapsed();
        let methodology = format!(
            "neutrosophic filter kept {}/{} rules; grey whitening over {} alternatives x {} criteria; TOPSIS ranking completed in {:.2?}",
            filtered.valid.len(),
            rules.len(),
            alternatives.len(),
            criteria.len(),
            processing_time,
        );

        reporter.advance(EnginePhase::Complete, 100.0, "complete");

        Ok(SymbolicResult {
            best_alternative,
            ranking: ranked.ranking,
            confidence,
            valid_rules: filtered.valid,
            rejections: filtered.rejections,
            degeneracies,
            methodology,
            processing_time,
        })
    }
}

fn validate_input(alternatives: &[AlternativeSpec], criteria: &[CriterionSpec]) -> Result<()> {
    if alternatives.is_empty() {
        return Err(EngineError::DegenerateInput(
            "no alternatives supplied".into(),
        ));
    }
    if criteria.is_empty() {
        return Err(EngineError::DegenerateInput("no criteria supplied".into()));
    }
    for (i, a) in criteria.iter().enumerate() {
        if criteria[..i].iter().any(|b| b.name == a.name) {
            return Err(EngineError::Configuration(format!(
                "duplicate criterion name: {}",
                a.name
            )));
        }
    }
    for (i, a) in alternatives.iter().enumerate() {
        if alternatives[..i].iter().any(|b| b.id == a.id) {
            return Err(EngineError::Configuration(format!(
                "duplicate alternative id: {}",
                a.id
            )));
        }
    }
    Ok(())
}
