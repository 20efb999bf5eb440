//! Dense two-phase primal simplex. Adequate for the small programs the
//! minimax reduction produces (one constraint per pure strategy); free
//! variables are split into positive and negative parts, inequality rows
//! get slack or surplus columns and phase 1 drives artificials to zero.
//! Bland's rule throughout, so no cycling.

use std::collections::HashMap;

use log::{debug, trace};

use crate::linear_program::{
    Direction, LinearProgram, LpSolution, LpSolver, LpStatus, Relation, VariableBound,
};

const PIVOT_EPS: f64 = 1e-9;
const FEASIBILITY_EPS: f64 = 1e-7;

pub struct SimplexSolver {
    /// Upper bound on pivots per phase. Bland's rule already guarantees
    /// termination; this is the backstop for numerically hostile input,
    /// reported as `LpStatus::Error`.
    pub max_iterations: usize,
}

impl Default for SimplexSolver {
    fn default() -> SimplexSolver {
        SimplexSolver {
            max_iterations: 10_000,
        }
    }
}

impl LpSolver for SimplexSolver {
    fn solve(&self, program: &LinearProgram) -> LpSolution {
        match self.run(program) {
            Ok(solution) => solution,
            Err(status) => LpSolution {
                status,
                objective: f64::NAN,
                values: HashMap::new(),
            },
        }
    }
}

/// Column indices a declared variable occupies: `minus` is present only
/// for free variables, whose value is `plus - minus`.
struct VariableColumns {
    plus: usize,
    minus: Option<usize>,
}

impl SimplexSolver {
    fn run(&self, program: &LinearProgram) -> Result<LpSolution, LpStatus> {
        // Column layout: structural columns first (free variables split in
        // two), then slack/surplus, then artificials.
        let mut column_of = HashMap::new();
        let mut columns = Vec::with_capacity(program.variables.len());
        let mut n_structural = 0;
        for (index, variable) in program.variables.iter().enumerate() {
            if column_of.insert(variable.name.as_str(), index).is_some() {
                debug!("duplicate variable {:?}", variable.name);
                return Err(LpStatus::Error);
            }
            let plus = n_structural;
            n_structural += 1;
            let minus = match variable.bound {
                VariableBound::Free => {
                    n_structural += 1;
                    Some(plus + 1)
                }
                VariableBound::NonNegative => None,
            };
            columns.push(VariableColumns { plus, minus });
        }

        let expand_terms = |terms: &[crate::linear_program::Term]| -> Result<Vec<f64>, LpStatus> {
            let mut row = vec![0f64; n_structural];
            for term in terms {
                if !term.coefficient.is_finite() {
                    return Err(LpStatus::Error);
                }
                let variable = match column_of.get(term.variable.as_str()) {
                    Some(&index) => &columns[index],
                    None => {
                        debug!("undeclared variable {:?}", term.variable);
                        return Err(LpStatus::Error);
                    }
                };
                row[variable.plus] += term.coefficient;
                if let Some(minus) = variable.minus {
                    row[minus] -= term.coefficient;
                }
            }
            Ok(row)
        };

        // Rows, with right-hand sides made non-negative up front.
        let m = program.constraints.len();
        let mut rows = Vec::with_capacity(m);
        for constraint in &program.constraints {
            if !constraint.rhs.is_finite() {
                return Err(LpStatus::Error);
            }
            let mut coefficients = expand_terms(&constraint.terms)?;
            let mut rhs = constraint.rhs;
            let mut relation = constraint.relation;
            if rhs < 0.0 {
                for coefficient in coefficients.iter_mut() {
                    *coefficient = -*coefficient;
                }
                rhs = -rhs;
                relation = match relation {
                    Relation::LessEq => Relation::GreaterEq,
                    Relation::GreaterEq => Relation::LessEq,
                    Relation::Equal => Relation::Equal,
                };
            }
            rows.push((coefficients, relation, rhs));
        }

        let n_slack = rows
            .iter()
            .filter(|(_, relation, _)| *relation != Relation::Equal)
            .count();
        let n_artificial = rows
            .iter()
            .filter(|(_, relation, _)| *relation != Relation::LessEq)
            .count();
        let n_total = n_structural + n_slack + n_artificial;

        // Tableau: one row per constraint, columns then rhs.
        let mut tableau = Vec::with_capacity(m);
        let mut basis = Vec::with_capacity(m);
        let mut is_artificial = vec![false; n_total];
        let mut next_slack = n_structural;
        let mut next_artificial = n_structural + n_slack;
        for (coefficients, relation, rhs) in rows {
            let mut row = vec![0f64; n_total + 1];
            row[..n_structural].copy_from_slice(&coefficients);
            row[n_total] = rhs;
            match relation {
                Relation::LessEq => {
                    row[next_slack] = 1.0;
                    basis.push(next_slack);
                    next_slack += 1;
                }
                Relation::GreaterEq => {
                    row[next_slack] = -1.0;
                    next_slack += 1;
                    row[next_artificial] = 1.0;
                    is_artificial[next_artificial] = true;
                    basis.push(next_artificial);
                    next_artificial += 1;
                }
                Relation::Equal => {
                    row[next_artificial] = 1.0;
                    is_artificial[next_artificial] = true;
                    basis.push(next_artificial);
                    next_artificial += 1;
                }
            }
            tableau.push(row);
        }

        let mut banned = vec![false; n_total];

        // Phase 1: minimize the sum of artificials.
        if n_artificial > 0 {
            let mut phase1_costs = vec![0f64; n_total];
            for (column, &artificial) in is_artificial.iter().enumerate() {
                if artificial {
                    phase1_costs[column] = 1.0;
                }
            }
            match self.optimize(&mut tableau, &mut basis, &phase1_costs, &banned) {
                Ok(()) => {}
                // Phase 1 is bounded below by zero; anything else is
                // numerical failure.
                Err(LpStatus::Unbounded) => return Err(LpStatus::Error),
                Err(status) => return Err(status),
            }
            let infeasibility = objective_value(&tableau, &basis, &phase1_costs);
            if infeasibility > FEASIBILITY_EPS {
                debug!(
                    "{}: phase 1 residual {:e}, infeasible",
                    program.name, infeasibility
                );
                return Err(LpStatus::Infeasible);
            }
            for (column, &artificial) in is_artificial.iter().enumerate() {
                if artificial {
                    banned[column] = true;
                }
            }
            // Pivot still-basic artificials out where possible; a row with
            // no eligible pivot is redundant and its artificial stays
            // basic at zero.
            for row in 0..tableau.len() {
                if is_artificial[basis[row]] {
                    let pivot_column = (0..n_total)
                        .find(|&column| !banned[column] && tableau[row][column].abs() > PIVOT_EPS);
                    if let Some(column) = pivot_column {
                        pivot(&mut tableau, &mut basis, row, column);
                    }
                }
            }
        }

        // Phase 2: the real objective, in minimization form.
        let objective_row = expand_terms(&program.objective.terms)?;
        let sign = match program.objective.direction {
            Direction::Minimize => 1.0,
            Direction::Maximize => -1.0,
        };
        let mut phase2_costs = vec![0f64; n_total];
        phase2_costs[..n_structural].copy_from_slice(&objective_row);
        for cost in phase2_costs.iter_mut() {
            *cost *= sign;
        }
        self.optimize(&mut tableau, &mut basis, &phase2_costs, &banned)?;

        // Read the solution back off the basis.
        let mut column_values = vec![0f64; n_total];
        for (row, &column) in basis.iter().enumerate() {
            column_values[column] = tableau[row][n_total];
        }
        let mut values = HashMap::with_capacity(program.variables.len());
        for (variable, layout) in program.variables.iter().zip(columns.iter()) {
            let value = column_values[layout.plus]
                - layout.minus.map(|minus| column_values[minus]).unwrap_or(0.0);
            values.insert(variable.name.clone(), value);
        }
        let objective = sign * objective_value(&tableau, &basis, &phase2_costs);

        debug!("{}: optimal, objective {}", program.name, objective);
        Ok(LpSolution {
            status: LpStatus::Optimal,
            objective,
            values,
        })
    }

    /// Runs the simplex loop to optimality for the given cost vector.
    /// Entering column: lowest-index negative reduced cost; leaving row:
    /// minimum ratio, ties broken by lowest basis index (Bland).
    fn optimize(
        &self,
        tableau: &mut Vec<Vec<f64>>,
        basis: &mut Vec<usize>,
        costs: &[f64],
        banned: &[bool],
    ) -> Result<(), LpStatus> {
        let m = tableau.len();
        let n = costs.len();
        for iteration in 0..self.max_iterations {
            let mut entering = None;
            for column in 0..n {
                if banned[column] {
                    continue;
                }
                let mut reduced = costs[column];
                for row in 0..m {
                    reduced -= costs[basis[row]] * tableau[row][column];
                }
                if reduced < -PIVOT_EPS {
                    entering = Some(column);
                    break;
                }
            }
            let entering = match entering {
                Some(column) => column,
                None => {
                    trace!("optimal after {} pivots", iteration);
                    return Ok(());
                }
            };

            let mut leaving: Option<(usize, f64)> = None;
            for row in 0..m {
                let coefficient = tableau[row][entering];
                if coefficient <= PIVOT_EPS {
                    continue;
                }
                let ratio = tableau[row][n] / coefficient;
                leaving = match leaving {
                    None => Some((row, ratio)),
                    Some((best_row, best_ratio)) => {
                        if ratio < best_ratio - 1e-12
                            || (ratio < best_ratio + 1e-12 && basis[row] < basis[best_row])
                        {
                            Some((row, ratio))
                        } else {
                            Some((best_row, best_ratio))
                        }
                    }
                };
            }
            let (leaving, _) = match leaving {
                Some(found) => found,
                None => return Err(LpStatus::Unbounded),
            };
            pivot(tableau, basis, leaving, entering);
        }
        debug!("iteration limit {} exhausted", self.max_iterations);
        Err(LpStatus::Error)
    }
}

fn objective_value(tableau: &[Vec<f64>], basis: &[usize], costs: &[f64]) -> f64 {
    let rhs = costs.len();
    basis
        .iter()
        .enumerate()
        .map(|(row, &column)| costs[column] * tableau[row][rhs])
        .sum()
}

fn pivot(tableau: &mut [Vec<f64>], basis: &mut [usize], pivot_row: usize, pivot_column: usize) {
    let scale = tableau[pivot_row][pivot_column];
    for value in tableau[pivot_row].iter_mut() {
        *value /= scale;
    }
    let pivot_values = tableau[pivot_row].clone();
    for (row, values) in tableau.iter_mut().enumerate() {
        if row == pivot_row {
            continue;
        }
        let factor = values[pivot_column];
        if factor == 0.0 {
            continue;
        }
        for (value, &pivot_value) in values.iter_mut().zip(pivot_values.iter()) {
            *value -= factor * pivot_value;
        }
    }
    basis[pivot_row] = pivot_column;
}
