use serde::{Deserialize, Serialize};

use crate::matrix::PayoffMatrix;

/// Raw, user-facing game input. Payoff cells are still strings; labels and
/// cells come straight from a table widget or a CSV import and have not
/// been checked for anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameInputUi {
    pub strategy_labels1: Vec<String>,
    pub strategy_labels2: Vec<String>,
    pub payoff_matrix: Vec<Vec<String>>,
}

/// Validated game input: a rectangular, fully numeric payoff matrix whose
/// dimensions agree with both label lists. Produced by
/// [`crate::parse::parse_game_input`]; the solver only ever sees this form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameInput {
    pub strategy_labels1: Vec<String>,
    pub strategy_labels2: Vec<String>,
    pub payoff_matrix: PayoffMatrix,
}
