//! Decision rule types and filtering outcomes.

/// A decision rule with neutrosophic membership degrees.
///
/// Truth, indeterminacy, and falsity are independent degrees in [0, 1]
/// with no sum constraint: a rule can be simultaneously quite true and
/// somewhat indeterminate. `category` names the criterion the rule
/// targets; `weight` is the rule's contribution to that criterion's
/// derived weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// Unique rule identifier.
    pub id: String,
    /// Human-readable rule statement.
    pub statement: String,
    /// Truth degree in [0, 1].
    pub truth: f64,
    /// Indeterminacy degree in [0, 1].
    pub indeterminacy: f64,
    /// Falsity degree in [0, 1].
    pub falsity: f64,
    /// Name of the criterion this rule targets.
    pub category: String,
    /// Weight contributed to the targeted criterion.
    pub weight: f64,
}

/// Which threshold a rejected rule failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThresholdKind {
    /// Truth below the acceptance minimum.
    Truth,
    /// Indeterminacy above the acceptance maximum.
    Indeterminacy,
    /// Falsity above the acceptance maximum.
    Falsity,
}

/// Record of a rejected rule and every threshold it failed.
///
/// Consumed by explanation surfaces; the downstream phases never read
/// rejections.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleRejection {
    /// Id of the rejected rule.
    pub rule_id: String,
    /// Thresholds the rule failed, in T/I/F order.
    pub failed: Vec<ThresholdKind>,
}

/// Result of filtering a rule set.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterOutcome {
    /// Rules that passed every threshold, in input order.
    pub valid: Vec<Rule>,
    /// One rejection record per discarded rule, in input order.
    pub rejections: Vec<RuleRejection>,
}
