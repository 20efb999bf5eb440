//! The minimax reduction: one LP per player, shared sub-routine
//! `solve_min_v`, results zipped with the strategy labels into a
//! `GameResult`.

use std::error::Error;
use std::fmt;

use log::debug;

use matgame::game::{zip_strategy, GameInput, GameResult, Player};
use matgame::matrix::transpose_and_negate;

use crate::linear_program::{
    Constraint, Direction, LinearProgram, LpSolver, LpStatus, Objective, Relation, Term, Variable,
    VariableBound,
};

/// Either player's LP reached a non-optimal status, so no equilibrium
/// could be computed. Never produced for well-formed finite matrices;
/// not retried and never replaced by a default result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverError {
    pub player: Player,
    pub status: LpStatus,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "no equilibrium could be computed: {} program terminated with status {}",
            self.player, self.status
        )
    }
}

impl Error for SolverError {}

#[derive(Debug, Clone)]
pub struct MinVSolution {
    pub status: LpStatus,
    /// Optimal `v`: the best worst-case outcome the row player of the
    /// solved matrix can force against the mix `x`.
    pub value: f64,
    /// Column-probability vector, in column order of the solved matrix.
    pub x: Vec<f64>,
}

/// Finds the column mix `x` minimizing the worst row of `matrix` against
/// it:
///
///   minimize v
///   s.t.     v - sum_j matrix[i][j] * x_j >= 0   for every row i
///            sum_j x_j = 1
///            x_j >= 0, v free
pub fn solve_min_v(backend: &dyn LpSolver, matrix: &[Vec<f64>]) -> MinVSolution {
    let n = matrix.len();
    let m = matrix[0].len();

    let mut variables = Vec::with_capacity(m + 1);
    variables.push(Variable {
        name: "v".to_string(),
        bound: VariableBound::Free,
    });
    for j in 0..m {
        variables.push(Variable {
            name: format!("x{}", j),
            bound: VariableBound::NonNegative,
        });
    }

    let mut constraints = Vec::with_capacity(n + 1);
    for i in 0..n {
        let mut terms = Vec::with_capacity(m + 1);
        terms.push(Term::new("v", 1.0));
        for j in 0..m {
            terms.push(Term::new(format!("x{}", j), -matrix[i][j]));
        }
        constraints.push(Constraint {
            name: format!("ineq_row{}", i),
            terms,
            relation: Relation::GreaterEq,
            rhs: 0.0,
        });
    }
    constraints.push(Constraint {
        name: "sum_to_one".to_string(),
        terms: (0..m).map(|j| Term::new(format!("x{}", j), 1.0)).collect(),
        relation: Relation::Equal,
        rhs: 1.0,
    });

    let program = LinearProgram {
        name: "min_value_mixture".to_string(),
        objective: Objective {
            direction: Direction::Minimize,
            terms: vec![Term::new("v", 1.0)],
        },
        constraints,
        variables,
    };

    let solution = backend.solve(&program);
    MinVSolution {
        status: solution.status,
        value: solution.value_of("v"),
        x: (0..m)
            .map(|j| solution.value_of(&format!("x{}", j)))
            .collect(),
    }
}

/// Computes the mixed-strategy Nash equilibrium of the zero-sum game
/// given by `input.payoff_matrix` (Player 1 maximizes, Player 2
/// minimizes the same scalar).
///
/// Player 1's mix comes from `solve_min_v` on the transposed-negated
/// matrix, Player 2's from `solve_min_v` on the matrix itself. The two
/// solves are independent pure calls over read-only input. The reported
/// `game_value` is Player 1's guaranteed expected payoff v*; by duality
/// Player 1's own LP optimum is `-v*`.
pub fn solve_game(backend: &dyn LpSolver, input: &GameInput) -> Result<GameResult, SolverError> {
    let a = &input.payoff_matrix;
    let negated_transpose = transpose_and_negate(a);

    let player1_solution = solve_min_v(backend, &negated_transpose);
    let player2_solution = solve_min_v(backend, a);

    if player1_solution.status != LpStatus::Optimal {
        return Err(SolverError {
            player: Player::Player1,
            status: player1_solution.status,
        });
    }
    if player2_solution.status != LpStatus::Optimal {
        return Err(SolverError {
            player: Player::Player2,
            status: player2_solution.status,
        });
    }
    debug!(
        "lp values: player1 {}, player2 {}",
        player1_solution.value, player2_solution.value
    );

    Ok(GameResult {
        player1_strategy: zip_strategy(&input.strategy_labels1, &player1_solution.x),
        player2_strategy: zip_strategy(&input.strategy_labels2, &player2_solution.x),
        payoff_matrix12: a.clone(),
        payoff_matrix21: negated_transpose,
        game_value: player2_solution.value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::SimplexSolver;
    use assert_approx_eq::assert_approx_eq;
    use matgame::evaluate::{evaluate_mixed_strategy_matchup, evaluate_pure_strategies};
    use matgame::game::{total_probability, validate_mixed_strategy};
    use matgame::parse::parse_game_input;
    use matgame::presets;

    fn game(labels1: &[&str], labels2: &[&str], matrix: Vec<Vec<f64>>) -> GameInput {
        GameInput {
            strategy_labels1: labels1.iter().map(|s| s.to_string()).collect(),
            strategy_labels2: labels2.iter().map(|s| s.to_string()).collect(),
            payoff_matrix: matrix,
        }
    }

    fn probabilities(strategy: &[matgame::game::MixedStrategyEntry]) -> Vec<f64> {
        strategy.iter().map(|entry| entry.probability).collect()
    }

    fn assert_distribution(strategy: &[matgame::game::MixedStrategyEntry]) {
        assert_approx_eq!(total_probability(strategy), 1.0, 1e-6);
        for entry in strategy {
            assert!(entry.probability >= -1e-9, "{:?}", entry);
        }
    }

    #[test]
    fn rock_paper_scissors_is_uniform() {
        let matrix = vec![
            vec![0.0, -1.0, 1.0],
            vec![1.0, 0.0, -1.0],
            vec![-1.0, 1.0, 0.0],
        ];
        let input = game(&["r", "p", "s"], &["r", "p", "s"], matrix);
        let backend = SimplexSolver::default();
        let result = solve_game(&backend, &input).unwrap();

        for probability in probabilities(&result.player1_strategy)
            .iter()
            .chain(probabilities(&result.player2_strategy).iter())
        {
            assert_approx_eq!(*probability, 1.0 / 3.0, 1e-4);
        }
        assert_approx_eq!(result.game_value, 0.0, 1e-4);
        assert_distribution(&result.player1_strategy);
        assert_distribution(&result.player2_strategy);
    }

    #[test]
    fn matching_pennies_is_half_half() {
        let input = game(
            &["h", "t"],
            &["h", "t"],
            vec![vec![1.0, -1.0], vec![-1.0, 1.0]],
        );
        let backend = SimplexSolver::default();
        let result = solve_game(&backend, &input).unwrap();

        assert_approx_eq!(result.player1_strategy[0].probability, 0.5, 1e-4);
        assert_approx_eq!(result.player1_strategy[1].probability, 0.5, 1e-4);
        assert_approx_eq!(result.player2_strategy[0].probability, 0.5, 1e-4);
        assert_approx_eq!(result.player2_strategy[1].probability, 0.5, 1e-4);
        assert_approx_eq!(result.game_value, 0.0, 1e-4);
    }

    #[test]
    fn asymmetric_regression_fixture() {
        // Pinned equilibrium for [[1000, -1500], [0, 5000]]:
        // P1 = (2/3, 1/3), P2 = (13/15, 2/15), value 2000/3.
        let input = game(
            &["a", "b"],
            &["x", "y"],
            vec![vec![1000.0, -1500.0], vec![0.0, 5000.0]],
        );
        let backend = SimplexSolver::default();
        let result = solve_game(&backend, &input).unwrap();

        assert_approx_eq!(result.player1_strategy[0].probability, 2.0 / 3.0, 1e-6);
        assert_approx_eq!(result.player1_strategy[1].probability, 1.0 / 3.0, 1e-6);
        assert_approx_eq!(result.player2_strategy[0].probability, 13.0 / 15.0, 1e-6);
        assert_approx_eq!(result.player2_strategy[1].probability, 2.0 / 15.0, 1e-6);
        assert_approx_eq!(result.game_value, 2000.0 / 3.0, 1e-6);
    }

    #[test]
    fn duality_holds_between_the_two_programs() {
        let input = game(
            &["a", "b"],
            &["x", "y"],
            vec![vec![1000.0, -1500.0], vec![0.0, 5000.0]],
        );
        let backend = SimplexSolver::default();

        let player1 = solve_min_v(&backend, &transpose_and_negate(&input.payoff_matrix));
        let player2 = solve_min_v(&backend, &input.payoff_matrix);
        assert_eq!(player1.status, LpStatus::Optimal);
        assert_eq!(player2.status, LpStatus::Optimal);
        assert_approx_eq!(player1.value, -player2.value, 1e-6);
    }

    #[test]
    fn matchup_at_equilibrium_equals_the_game_value() {
        let input = game(
            &["o", "l", "w"],
            &["sb", "cb", "rv"],
            vec![
                vec![0.0, 3860.0, -1500.0],
                vec![4740.0, 0.0, -1500.0],
                vec![0.0, 0.0, 6150.0],
            ],
        );
        let backend = SimplexSolver::default();
        let result = solve_game(&backend, &input).unwrap();

        let matchup = evaluate_mixed_strategy_matchup(
            &result.payoff_matrix12,
            &result.player1_strategy,
            &result.player2_strategy,
        );
        assert_approx_eq!(matchup, result.game_value, 1e-6);
        validate_mixed_strategy(&result.player1_strategy);
        validate_mixed_strategy(&result.player2_strategy);
    }

    #[test]
    fn no_pure_strategy_beats_the_equilibrium_value() {
        let input = game(
            &["a", "b"],
            &["x", "y"],
            vec![vec![1000.0, -1500.0], vec![0.0, 5000.0]],
        );
        let backend = SimplexSolver::default();
        let result = solve_game(&backend, &input).unwrap();

        // Against the equilibrium opponent, every pure strategy does no
        // better than the game value (from each player's perspective).
        for payoff in
            evaluate_pure_strategies(&result.payoff_matrix12, &result.player2_strategy)
        {
            assert!(payoff <= result.game_value + 1e-6);
        }
        for payoff in
            evaluate_pure_strategies(&result.payoff_matrix21, &result.player1_strategy)
        {
            assert!(payoff <= -result.game_value + 1e-6);
        }
    }

    #[test]
    fn dominant_strategy_game_collapses_to_pure() {
        // Row 0 dominates; column 0 is Player 2's best reply.
        let input = game(
            &["top", "bottom"],
            &["left", "right"],
            vec![vec![2.0, 4.0], vec![1.0, 3.0]],
        );
        let backend = SimplexSolver::default();
        let result = solve_game(&backend, &input).unwrap();

        assert_approx_eq!(result.player1_strategy[0].probability, 1.0, 1e-6);
        assert_approx_eq!(result.player2_strategy[0].probability, 1.0, 1e-6);
        assert_approx_eq!(result.game_value, 2.0, 1e-6);
    }

    #[test]
    fn single_cell_game() {
        let input = game(&["only"], &["only"], vec![vec![7.0]]);
        let backend = SimplexSolver::default();
        let result = solve_game(&backend, &input).unwrap();
        assert_approx_eq!(result.player1_strategy[0].probability, 1.0, 1e-9);
        assert_approx_eq!(result.player2_strategy[0].probability, 1.0, 1e-9);
        assert_approx_eq!(result.game_value, 7.0, 1e-9);
    }

    #[test]
    fn presets_solve_end_to_end() {
        let backend = SimplexSolver::default();
        for name in presets::PRESET_NAMES.iter() {
            let input = parse_game_input(&presets::by_name(name).unwrap()).unwrap();
            let result = solve_game(&backend, &input).unwrap();
            assert_distribution(&result.player1_strategy);
            assert_distribution(&result.player2_strategy);
        }
    }

    #[test]
    fn labels_follow_matrix_order() {
        let input = game(
            &["h", "t"],
            &["H", "T"],
            vec![vec![1.0, -1.0], vec![-1.0, 1.0]],
        );
        let backend = SimplexSolver::default();
        let result = solve_game(&backend, &input).unwrap();
        assert_eq!(result.player1_strategy[0].label, "h");
        assert_eq!(result.player1_strategy[1].label, "t");
        assert_eq!(result.player2_strategy[0].label, "H");
        assert_eq!(result.player2_strategy[1].label, "T");
    }
}
