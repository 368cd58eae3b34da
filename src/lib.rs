//! Twentyfour - A library for solving the 24 Points playing-card puzzle
//!
//! This library searches for an arithmetic expression over four card values
//! that equals 24, combining the values with `+ - * /` and free
//! parenthesization. All arithmetic is exact (arbitrary-precision rationals),
//! and solutions whose intermediate results stay strictly positive are
//! preferred over ones that pass through zero or negative values.

pub mod deck;
pub mod format;
pub mod operand;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use format::trim_outer_parens;
pub use operand::Operand;
pub use solver::{Solution, Solver, SolverError};
pub use utils::{UtilsError, validate_hand};

/// Solve the 24 Points puzzle for the given card values
///
/// This is a convenience function that creates a default solver (target 24)
/// and attempts to find a matching expression.
///
/// # Arguments
///
/// * `values` - The card values to combine; the shipping game uses four, but
///   any non-empty slice is accepted
///
/// # Returns
///
/// * `Ok(Some(Solution))` - If a matching expression is found
/// * `Ok(None)` - If no matching expression exists (a normal outcome)
/// * `Err(SolverError)` - If the hand is malformed
///
/// # Errors
///
/// This function will return an error if the hand is empty.
///
/// # Examples
///
/// ```
/// use twentyfour::solve_hand;
///
/// match solve_hand(&[1, 2, 3, 4]) {
///     Ok(Some(solution)) => println!("Found: {}", solution.expression),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve_hand(values: &[i64]) -> Result<Option<Solution>, SolverError> {
    validate_hand(values)?;

    let solver = Solver::new();
    Ok(solver.solve(values))
}
