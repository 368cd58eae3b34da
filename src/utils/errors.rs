use thiserror::Error;

/// Errors that can occur in validation helpers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Hand cannot be empty")]
    EmptyHand,
}
