use assert_approx_eq::assert_approx_eq;
use serde::{Deserialize, Serialize};

pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// One pure strategy together with the probability mass a mixed strategy
/// puts on it. Labels are opaque display identifiers and need not be
/// unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixedStrategyEntry {
    pub label: String,
    pub probability: f64,
}

/// Ordered per-pure-strategy probabilities, index-aligned with the
/// corresponding label list (and so with the payoff matrix axis).
pub type MixedStrategy = Vec<MixedStrategyEntry>;

pub fn total_probability(strategy: &[MixedStrategyEntry]) -> f64 {
    strategy.iter().map(|entry| entry.probability).sum()
}

/// Zips labels with solved probabilities, index for index.
pub fn zip_strategy(labels: &[String], probabilities: &[f64]) -> MixedStrategy {
    labels
        .iter()
        .zip(probabilities.iter())
        .map(|(label, &probability)| MixedStrategyEntry {
            label: label.clone(),
            probability,
        })
        .collect()
}

/// Checks that the strategy is a legitimate probability distribution:
/// mass sums to 1 within tolerance and no entry is meaningfully negative
/// (tiny negative solver noise is allowed). Panics upon failure.
pub fn validate_mixed_strategy(strategy: &[MixedStrategyEntry]) {
    assert_approx_eq!(total_probability(strategy), 1.0, PROBABILITY_TOLERANCE);
    for entry in strategy {
        assert!(
            entry.probability >= -1e-9,
            "negative probability {} on {:?}",
            entry.probability,
            entry.label
        );
    }
}
