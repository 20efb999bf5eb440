//! Validation of raw table input. Dimension problems are reported first;
//! cell problems are collected in a single full pass so a UI can
//! highlight every offending cell at once.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::{GameInput, GameInputUi, Player};
use crate::matrix::is_rectangular;

pub const PAYOFF_MIN: f64 = -1e6;
pub const PAYOFF_MAX: f64 = 1e6;

/// A cell is a valid payoff if, after trimming, it is non-empty and
/// parses to a finite f64. Rust's float parser accepts "inf", "Infinity"
/// and "NaN"; the finiteness check rejects all of them.
pub fn is_valid_number(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) => parsed.is_finite(),
        Err(_) => false,
    }
}

/// One syntactically invalid payoff cell, with the text that was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellError {
    pub row: usize,
    pub col: usize,
    pub value: String,
}

/// Label counts or matrix shape disagree. Checked before any per-cell
/// parsing; a matrix with the wrong shape never reaches the solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DimensionError {
    EmptyMatrix,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    LabelCountMismatch {
        player: Player,
        labels: usize,
        strategies: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    Dimension(DimensionError),
    /// Every syntactically invalid cell found in one pass, in row-major
    /// order. Never reported short of the complete set.
    Cells(Vec<CellError>),
}

impl fmt::Display for DimensionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DimensionError::EmptyMatrix => {
                write!(f, "payoff matrix must have at least one row and one column")
            }
            DimensionError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            DimensionError::LabelCountMismatch {
                player,
                labels,
                strategies,
            } => write!(
                f,
                "{} has {} labels for {} strategies",
                player, labels, strategies
            ),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::Dimension(err) => write!(f, "{}", err),
            ValidationError::Cells(errors) => {
                write!(f, "{} invalid payoff cell(s):", errors.len())?;
                for error in errors {
                    write!(f, " ({},{})={:?}", error.row, error.col, error.value)?;
                }
                Ok(())
            }
        }
    }
}

impl Error for DimensionError {}
impl Error for ValidationError {}

fn check_dimensions(input: &GameInputUi) -> Result<(), DimensionError> {
    let rows = input.payoff_matrix.len();
    if rows == 0 || input.payoff_matrix[0].is_empty() {
        return Err(DimensionError::EmptyMatrix);
    }
    let cols = input.payoff_matrix[0].len();
    if !is_rectangular(&input.payoff_matrix) {
        let (row, found) = input
            .payoff_matrix
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != cols)
            .map(|(i, r)| (i, r.len()))
            .unwrap_or((0, cols));
        return Err(DimensionError::RaggedRow {
            row,
            expected: cols,
            found,
        });
    }
    if input.strategy_labels1.len() != rows {
        return Err(DimensionError::LabelCountMismatch {
            player: Player::Player1,
            labels: input.strategy_labels1.len(),
            strategies: rows,
        });
    }
    if input.strategy_labels2.len() != cols {
        return Err(DimensionError::LabelCountMismatch {
            player: Player::Player2,
            labels: input.strategy_labels2.len(),
            strategies: cols,
        });
    }
    Ok(())
}

/// Turns raw string cells into a numeric `GameInput`, or reports why it
/// cannot. Policy is uniform reject-all: an invalid cell is never silently
/// treated as zero or dropped.
pub fn parse_game_input(input: &GameInputUi) -> Result<GameInput, ValidationError> {
    check_dimensions(input).map_err(ValidationError::Dimension)?;

    let mut errors = Vec::new();
    let mut parsed_matrix = Vec::with_capacity(input.payoff_matrix.len());

    for (i, row) in input.payoff_matrix.iter().enumerate() {
        let mut parsed_row = Vec::with_capacity(row.len());
        for (j, cell) in row.iter().enumerate() {
            let trimmed = cell.trim();
            if is_valid_number(trimmed) {
                // The is_valid_number check guarantees this parse.
                parsed_row.push(trimmed.parse::<f64>().unwrap_or(0.0));
            } else {
                errors.push(CellError {
                    row: i,
                    col: j,
                    value: cell.clone(),
                });
            }
        }
        parsed_matrix.push(parsed_row);
    }

    if !errors.is_empty() {
        return Err(ValidationError::Cells(errors));
    }

    Ok(GameInput {
        strategy_labels1: input.strategy_labels1.clone(),
        strategy_labels2: input.strategy_labels2.clone(),
        payoff_matrix: parsed_matrix,
    })
}

pub fn clamp_value(n: f64) -> f64 {
    n.max(PAYOFF_MIN).min(PAYOFF_MAX)
}

/// Bounds every valid cell into `[PAYOFF_MIN, PAYOFF_MAX]` so the solver
/// never sees a badly scaled program. Idempotent. Invalid cells are left
/// untouched for the validator to reject.
pub fn clamp_game_input_ui(input: &GameInputUi) -> GameInputUi {
    GameInputUi {
        strategy_labels1: input.strategy_labels1.clone(),
        strategy_labels2: input.strategy_labels2.clone(),
        payoff_matrix: input
            .payoff_matrix
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        let trimmed = cell.trim();
                        if is_valid_number(trimmed) {
                            let clamped = clamp_value(trimmed.parse::<f64>().unwrap_or(0.0));
                            format!("{}", clamped)
                        } else {
                            cell.clone()
                        }
                    })
                    .collect()
            })
            .collect(),
    }
}
