use serde::{Deserialize, Serialize};

use crate::evaluate::evaluate_mixed_strategy_matchup;
use crate::game::strategy::MixedStrategy;
use crate::matrix::PayoffMatrix;

/// Output of a successful equilibrium solve. Constructed once per solve
/// and never mutated afterwards; a plain serializable value object.
///
/// `payoff_matrix12` is the input matrix `A` (Player 1 rows, Player 2
/// columns); `payoff_matrix21` is `transpose_and_negate(A)`, the same
/// game seen from Player 2's side. Both are carried so downstream
/// evaluation never has to recompute them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub player1_strategy: MixedStrategy,
    pub player2_strategy: MixedStrategy,
    pub payoff_matrix12: PayoffMatrix,
    pub payoff_matrix21: PayoffMatrix,
    pub game_value: f64,
}

impl GameResult {
    /// Derives a new result from this one with edited strategies, e.g.
    /// after a user drags a probability slider away from equilibrium.
    /// Matrices are reused; the expected payoff is recomputed for the
    /// given (possibly non-equilibrium) pair of mixes.
    pub fn with_strategies(
        &self,
        player1_strategy: MixedStrategy,
        player2_strategy: MixedStrategy,
    ) -> GameResult {
        let game_value = evaluate_mixed_strategy_matchup(
            &self.payoff_matrix12,
            &player1_strategy,
            &player2_strategy,
        );
        GameResult {
            player1_strategy,
            player2_strategy,
            payoff_matrix12: self.payoff_matrix12.clone(),
            payoff_matrix21: self.payoff_matrix21.clone(),
            game_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::strategy::zip_strategy;
    use assert_approx_eq::assert_approx_eq;

    fn pennies_result() -> GameResult {
        let labels = vec!["heads".to_string(), "tails".to_string()];
        GameResult {
            player1_strategy: zip_strategy(&labels, &[0.5, 0.5]),
            player2_strategy: zip_strategy(&labels, &[0.5, 0.5]),
            payoff_matrix12: vec![vec![1.0, -1.0], vec![-1.0, 1.0]],
            payoff_matrix21: vec![vec![-1.0, 1.0], vec![1.0, -1.0]],
            game_value: 0.0,
        }
    }

    #[test]
    fn with_strategies_recomputes_the_expected_payoff() {
        let result = pennies_result();
        let labels = vec!["heads".to_string(), "tails".to_string()];
        let perturbed = result.with_strategies(
            zip_strategy(&labels, &[1.0, 0.0]),
            zip_strategy(&labels, &[0.5, 0.5]),
        );
        assert_approx_eq!(perturbed.game_value, 0.0, 1e-12);
        let lopsided = result.with_strategies(
            zip_strategy(&labels, &[1.0, 0.0]),
            zip_strategy(&labels, &[0.0, 1.0]),
        );
        assert_approx_eq!(lopsided.game_value, -1.0, 1e-12);
        // The original result is untouched.
        assert_eq!(result.game_value, 0.0);
    }

    #[test]
    fn serde_round_trip() {
        let result = pennies_result();
        let encoded = serde_json::to_string(&result).unwrap();
        let decoded: GameResult = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, result);
    }
}
