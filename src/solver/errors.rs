use thiserror::Error;

use crate::utils::UtilsError;

/// Errors that can occur during solving
///
/// Exhausting the search space without reaching the target is not an error;
/// the solver reports it as `None`.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Hand error: {0}")]
    UtilsError(#[from] UtilsError),
}
