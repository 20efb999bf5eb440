// Equilibrium solving for two-player zero-sum matrix games via the
// standard minimax reduction to two linear programs. The LP itself is
// described backend-agnostically in `linear_program`; `simplex` is the
// bundled backend.

pub mod linear_program;
pub mod minimax;
pub mod simplex;

pub use crate::linear_program::{LpSolution, LpSolver, LpStatus};
pub use crate::minimax::{solve_game, solve_min_v, MinVSolution, SolverError};
pub use crate::simplex::SimplexSolver;
