// Core library for two-player zero-sum matrix games: payoff matrices,
// mixed strategies, input validation and expected-payoff evaluation.
// Equilibrium computation itself lives in the `zero_sum_solving` crate.

pub mod csv;
pub mod evaluate;
pub mod game;
pub mod matrix;
pub mod parse;
pub mod presets;
