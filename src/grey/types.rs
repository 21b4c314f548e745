//! Raw criterion shapes and the grey value variant set.

use tracing::warn;

/// A raw criterion value as supplied by the caller.
///
/// This is the closed union of input shapes accepted at the parsing
/// boundary. Classification into a [`GreyValue`] happens exactly once,
/// in [`GreyValue::classify`]; the whitening math never re-inspects
/// shapes.
///
/// With the `serde` feature enabled this deserializes untagged, so a
/// plain JSON number, a `{"min": .., "max": ..}` object, and an
/// `{"estimate": .., "uncertainty": .., "confidence": ..}` object all
/// parse directly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawValue {
    /// A known, exact measurement.
    Number(f64),

    /// A bounded range with unknown distribution inside the bounds.
    Range {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// A point estimate qualified by uncertainty and confidence.
    Estimate {
        /// The estimated value.
        estimate: f64,
        /// Uncertainty magnitude, typically in [0, 1].
        uncertainty: f64,
        /// Confidence in the estimate, in [0, 1].
        confidence: f64,
    },
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self {
        RawValue::Number(v)
    }
}

/// A criterion value after boundary classification.
///
/// Produced once per raw input and consumed immediately by the whitener;
/// never persisted. The variant set is closed: downstream code matches
/// exhaustively instead of sniffing shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GreyValue {
    /// Fully known value.
    Complete(f64),

    /// Estimate with quantified uncertainty and confidence.
    Uncertain {
        /// The estimated value.
        value: f64,
        /// Uncertainty magnitude.
        uncertainty: f64,
        /// Confidence in the estimate, in [0, 1].
        confidence: f64,
    },

    /// Value known only as a bounded interval.
    Incomplete {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// No information at all.
    Missing,
}

impl GreyValue {
    /// Classifies a raw input shape into its grey variant.
    ///
    /// An absent value classifies as [`GreyValue::Missing`], as does any
    /// shape containing a non-finite number (NaN or infinity carries no
    /// usable information). A reversed range is repaired by swapping its
    /// bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use routerank::grey::{GreyValue, RawValue};
    ///
    /// let gv = GreyValue::classify(Some(RawValue::Number(5.0)));
    /// assert_eq!(gv, GreyValue::Complete(5.0));
    ///
    /// assert_eq!(GreyValue::classify(None), GreyValue::Missing);
    /// ```
    pub fn classify(raw: Option<RawValue>) -> GreyValue {
        match raw {
            None => GreyValue::Missing,

            Some(RawValue::Number(v)) => {
                if v.is_finite() {
                    GreyValue::Complete(v)
                } else {
                    GreyValue::Missing
                }
            }

            Some(RawValue::Range { min, max }) => {
                if !min.is_finite() || !max.is_finite() {
                    return GreyValue::Missing;
                }
                if min > max {
                    warn!(min, max, "reversed grey range, swapping bounds");
                    GreyValue::Incomplete { min: max, max: min }
                } else {
                    GreyValue::Incomplete { min, max }
                }
            }

            Some(RawValue::Estimate {
                estimate,
                uncertainty,
                confidence,
            }) => {
                if !estimate.is_finite() || !uncertainty.is_finite() || !confidence.is_finite() {
                    return GreyValue::Missing;
                }
                GreyValue::Uncertain {
                    value: estimate,
                    uncertainty,
                    confidence,
                }
            }
        }
    }

    /// Returns true if this value carries no information.
    pub fn is_missing(&self) -> bool {
        matches!(self, GreyValue::Missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_number() {
        assert_eq!(
            GreyValue::classify(Some(RawValue::Number(2500.0))),
            GreyValue::Complete(2500.0)
        );
    }

    #[test]
    fn test_classify_range() {
        assert_eq!(
            GreyValue::classify(Some(RawValue::Range { min: 1.0, max: 3.0 })),
            GreyValue::Incomplete { min: 1.0, max: 3.0 }
        );
    }

    #[test]
    fn test_classify_estimate() {
        let gv = GreyValue::classify(Some(RawValue::Estimate {
            estimate: 0.9,
            uncertainty: 0.2,
            confidence: 0.8,
        }));
        assert_eq!(
            gv,
            GreyValue::Uncertain {
                value: 0.9,
                uncertainty: 0.2,
                confidence: 0.8,
            }
        );
    }

    #[test]
    fn test_classify_absent_is_missing() {
        assert!(GreyValue::classify(None).is_missing());
    }

    #[test]
    fn test_classify_non_finite_is_missing() {
        assert!(GreyValue::classify(Some(RawValue::Number(f64::NAN))).is_missing());
        assert!(GreyValue::classify(Some(RawValue::Number(f64::INFINITY))).is_missing());
        assert!(GreyValue::classify(Some(RawValue::Range {
            min: f64::NAN,
            max: 1.0
        }))
        .is_missing());
        assert!(GreyValue::classify(Some(RawValue::Estimate {
            estimate: 1.0,
            uncertainty: f64::NEG_INFINITY,
            confidence: 0.5,
        }))
        .is_missing());
    }

    #[test]
    fn test_classify_reversed_range_swaps() {
        assert_eq!(
            GreyValue::classify(Some(RawValue::Range { min: 3.0, max: 1.0 })),
            GreyValue::Incomplete { min: 1.0, max: 3.0 }
        );
    }
}
