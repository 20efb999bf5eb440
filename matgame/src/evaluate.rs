//! Expected-payoff evaluation for (possibly non-equilibrium) mixed
//! strategies. These run on every slider tick in a UI, so they are plain
//! O(N*M) loops over immutable data with no solver involvement.

use crate::game::MixedStrategyEntry;

/// Expected payoff of committing to each pure strategy (row of `matrix`)
/// against the given opponent mix over the columns. The opponent strategy
/// must be in column order; a missing entry at index `j` counts as
/// probability 0.
pub fn evaluate_pure_strategies(
    matrix: &[Vec<f64>],
    opponent_strategy: &[MixedStrategyEntry],
) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(j, payoff)| {
                    let probability = opponent_strategy
                        .get(j)
                        .map(|entry| entry.probability)
                        .unwrap_or(0.0);
                    payoff * probability
                })
                .sum()
        })
        .collect()
}

/// Scalar expected payoff when both sides play their given mixes:
/// `sum_i sum_j my[i] * matrix[i][j] * opponent[j]`.
pub fn evaluate_mixed_strategy_matchup(
    matrix: &[Vec<f64>],
    my_strategy: &[MixedStrategyEntry],
    opponent_strategy: &[MixedStrategyEntry],
) -> f64 {
    evaluate_pure_strategies(matrix, opponent_strategy)
        .iter()
        .enumerate()
        .map(|(i, row_value)| {
            let probability = my_strategy
                .get(i)
                .map(|entry| entry.probability)
                .unwrap_or(0.0);
            row_value * probability
        })
        .sum()
}
