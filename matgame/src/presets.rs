//! Canonical example games, usable both as demo inputs and as test
//! fixtures with known equilibria.

use crate::game::GameInputUi;

fn input(labels1: &[&str], labels2: &[&str], cells: &[&[&str]]) -> GameInputUi {
    GameInputUi {
        strategy_labels1: labels1.iter().map(|s| s.to_string()).collect(),
        strategy_labels2: labels2.iter().map(|s| s.to_string()).collect(),
        payoff_matrix: cells
            .iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

/// Rock-paper-scissors. Equilibrium is uniform 1/3 for both players,
/// game value 0.
pub fn rock_paper_scissors() -> GameInputUi {
    input(
        &["rock", "scissors", "paper"],
        &["rock", "scissors", "paper"],
        &[
            &["0", "1", "-1"],
            &["-1", "0", "1"],
            &["1", "-1", "0"],
        ],
    )
}

/// Rock-paper-scissors with asymmetric stakes (the "glico" step game:
/// winning with different hands is worth a different number of steps).
pub fn weighted_rps() -> GameInputUi {
    input(
        &["glico", "chocolate", "pineapple"],
        &["glico", "chocolate", "pineapple"],
        &[
            &["0", "3", "-6"],
            &["-3", "0", "6"],
            &["6", "-6", "0"],
        ],
    )
}

/// A fighting-game wakeup mixup: attacker rows versus defender columns,
/// payoffs in expected damage.
pub fn okizeme() -> GameInputUi {
    input(
        &["overhead", "low", "wait"],
        &["stand block", "crouch block", "reversal"],
        &[
            &["0", "3860", "-1500"],
            &["4740", "0", "-1500"],
            &["0", "0", "6150"],
        ],
    )
}

/// Matching pennies. Both equilibrium strategies are (1/2, 1/2),
/// game value 0.
pub fn matching_pennies() -> GameInputUi {
    input(
        &["heads", "tails"],
        &["heads", "tails"],
        &[&["1", "-1"], &["-1", "1"]],
    )
}

pub const PRESET_NAMES: [&str; 4] = [
    "rps",
    "weighted_rps",
    "okizeme",
    "matching_pennies",
];

pub fn by_name(name: &str) -> Option<GameInputUi> {
    match name {
        "rps" => Some(rock_paper_scissors()),
        "weighted_rps" => Some(weighted_rps()),
        "okizeme" => Some(okizeme()),
        "matching_pennies" => Some(matching_pennies()),
        _ => None,
    }
}
