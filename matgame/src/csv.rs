//! CSV import/export of the payoff table. Layout: the header row is an
//! empty corner cell followed by Player 2's labels; every data row is a
//! Player 1 label followed by that row's payoff cells. Cells are plain
//! comma-separated text (no quoting), so labels must not contain commas.
//!
//! Import failures here are whole-table problems; per-cell numeric
//! validation stays with [`crate::parse`]. Unparseable payoff cells are
//! blanked on import and the validator then reports them as empty.

use std::error::Error;
use std::fmt;

use itertools::Itertools;

use crate::game::GameInputUi;
use crate::parse::is_valid_number;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// Fewer than two rows or two columns: there is no room for labels
    /// plus at least a 1x1 payoff matrix.
    TooSmall,
    RaggedRows,
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CsvError::TooSmall => write!(
                f,
                "csv table too small: need a label header plus at least a 1x1 payoff matrix"
            ),
            CsvError::RaggedRows => write!(f, "csv rows do not all have the same column count"),
        }
    }
}

impl Error for CsvError {}

pub fn parse_csv_input(text: &str) -> Result<GameInputUi, CsvError> {
    let lines: Vec<Vec<String>> = text
        .trim()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split(',').map(|cell| cell.trim().to_string()).collect())
        .collect();

    if lines.len() < 2 || lines[0].len() < 2 {
        return Err(CsvError::TooSmall);
    }
    let col_count = lines[0].len();
    if !lines.iter().all(|row| row.len() == col_count) {
        return Err(CsvError::RaggedRows);
    }

    let strategy_labels2: Vec<String> = lines[0][1..].to_vec();
    let mut strategy_labels1 = Vec::with_capacity(lines.len() - 1);
    let mut payoff_matrix = Vec::with_capacity(lines.len() - 1);

    for row in &lines[1..] {
        strategy_labels1.push(row[0].clone());
        payoff_matrix.push(
            row[1..]
                .iter()
                .map(|cell| {
                    if is_valid_number(cell) {
                        cell.clone()
                    } else {
                        String::new()
                    }
                })
                .collect(),
        );
    }

    Ok(GameInputUi {
        strategy_labels1,
        strategy_labels2,
        payoff_matrix,
    })
}

pub fn csv_from_game_input_ui(input: &GameInputUi) -> String {
    let header = std::iter::once(String::new())
        .chain(input.strategy_labels2.iter().cloned())
        .join(",");
    let rows = input
        .strategy_labels1
        .iter()
        .zip(input.payoff_matrix.iter())
        .map(|(label, cells)| {
            std::iter::once(label.clone())
                .chain(cells.iter().cloned())
                .join(",")
        });
    std::iter::once(header).chain(rows).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    #[test]
    fn parses_a_labelled_table() {
        let text = ",heads,tails\nheads,1,-1\ntails,-1,1\n";
        let input = parse_csv_input(text).unwrap();
        assert_eq!(input.strategy_labels1, vec!["heads", "tails"]);
        assert_eq!(input.strategy_labels2, vec!["heads", "tails"]);
        assert_eq!(
            input.payoff_matrix,
            vec![vec!["1", "-1"], vec!["-1", "1"]]
        );
    }

    #[test]
    fn blank_lines_are_skipped_and_cells_trimmed() {
        let text = "\n, c0 , c1\n\nr0, 1 , 2 \n";
        let input = parse_csv_input(text).unwrap();
        assert_eq!(input.strategy_labels2, vec!["c0", "c1"]);
        assert_eq!(input.payoff_matrix, vec![vec!["1", "2"]]);
    }

    #[test]
    fn unparseable_cells_are_blanked() {
        let text = ",c0,c1\nr0,oops,3\n";
        let input = parse_csv_input(text).unwrap();
        assert_eq!(input.payoff_matrix, vec![vec!["", "3"]]);
    }

    #[test]
    fn too_small_and_ragged_tables_are_rejected() {
        assert_eq!(parse_csv_input("a,b"), Err(CsvError::TooSmall));
        assert_eq!(parse_csv_input("x\ny"), Err(CsvError::TooSmall));
        assert_eq!(
            parse_csv_input(",c0,c1\nr0,1\n"),
            Err(CsvError::RaggedRows)
        );
    }

    #[test]
    fn round_trips_a_preset() {
        let input = presets::matching_pennies();
        let text = csv_from_game_input_ui(&input);
        let parsed = parse_csv_input(&text).unwrap();
        assert_eq!(parsed, input);
    }
}
