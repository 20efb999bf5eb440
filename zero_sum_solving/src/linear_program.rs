//! Backend-agnostic description of a linear program, plus the one-method
//! seam every backend implements. The minimax reduction only ever talks
//! to `LpSolver`, so swapping the bundled simplex for an external solver
//! binding means writing one adapter.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Minimize,
    Maximize,
}

/// Constraint sense: linear expression vs. a scalar right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    LessEq,
    GreaterEq,
    Equal,
}

/// The two variable-bound kinds the minimax programs need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableBound {
    NonNegative,
    Free,
}

#[derive(Debug, Clone)]
pub struct Term {
    pub variable: String,
    pub coefficient: f64,
}

impl Term {
    pub fn new(variable: impl Into<String>, coefficient: f64) -> Term {
        Term {
            variable: variable.into(),
            coefficient,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub bound: VariableBound,
}

#[derive(Debug, Clone)]
pub struct Constraint {
    pub name: String,
    pub terms: Vec<Term>,
    pub relation: Relation,
    pub rhs: f64,
}

#[derive(Debug, Clone)]
pub struct Objective {
    pub direction: Direction,
    pub terms: Vec<Term>,
}

#[derive(Debug, Clone)]
pub struct LinearProgram {
    pub name: String,
    pub objective: Objective,
    pub constraints: Vec<Constraint>,
    pub variables: Vec<Variable>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LpStatus {
    Optimal,
    Infeasible,
    Unbounded,
    /// Malformed program (undeclared or duplicate variable, non-finite
    /// coefficient) or the backend gave up, e.g. on an iteration limit.
    Error,
}

impl fmt::Display for LpStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LpStatus::Optimal => write!(f, "optimal"),
            LpStatus::Infeasible => write!(f, "infeasible"),
            LpStatus::Unbounded => write!(f, "unbounded"),
            LpStatus::Error => write!(f, "error"),
        }
    }
}

/// Solve outcome. `values` and `objective` are only meaningful when
/// `status` is `Optimal`; callers must check.
#[derive(Debug, Clone)]
pub struct LpSolution {
    pub status: LpStatus,
    pub objective: f64,
    pub values: HashMap<String, f64>,
}

impl LpSolution {
    pub fn value_of(&self, variable: &str) -> f64 {
        self.values.get(variable).copied().unwrap_or(0.0)
    }
}

/// A stateless LP backend: one call, one program, one solution. Backends
/// keep no state across calls, so one instance may be reused freely.
pub trait LpSolver {
    fn solve(&self, program: &LinearProgram) -> LpSolution;
}
