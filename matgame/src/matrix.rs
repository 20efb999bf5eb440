/// Payoff matrix of the row player. `A[i][j]` is the payoff to Player 1
/// when Player 1 plays pure strategy `i` and Player 2 plays `j`; Player 2
/// receives `-A[i][j]` under the zero-sum assumption.
pub type PayoffMatrix = Vec<Vec<f64>>;

/// Returns true iff every row has the same length as the first.
/// Vacuously true for an empty matrix; emptiness is checked separately.
pub fn is_rectangular<T>(rows: &[Vec<T>]) -> bool {
    match rows.first() {
        Some(first) => rows.iter().all(|row| row.len() == first.len()),
        None => true,
    }
}

/// `B[j][i] = A[i][j]`. Requires a rectangular matrix with at least one
/// row and one column; upstream validation guarantees this.
pub fn transpose(a: &[Vec<f64>]) -> PayoffMatrix {
    let n = a.len();
    let m = a[0].len();
    let mut b = vec![vec![0f64; n]; m];
    for i in 0..n {
        for j in 0..m {
            b[j][i] = a[i][j];
        }
    }
    b
}

/// `B[j][i] = -A[i][j]`. This is the game seen from Player 2's side:
/// Player 2 minimizes Player 1's payoff, which is the same as maximizing
/// the negated, transposed matrix.
pub fn transpose_and_negate(a: &[Vec<f64>]) -> PayoffMatrix {
    let n = a.len();
    let m = a[0].len();
    let mut b = vec![vec![0f64; n]; m];
    for i in 0..n {
        for j in 0..m {
            b[j][i] = -a[i][j];
        }
    }
    b
}
