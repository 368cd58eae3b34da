use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the hand contains no values. Card values themselves
/// originate from a well-formed deck, so nothing further is checked; the
/// solver handles any integer, including zero, without faulting.
pub fn validate_hand(values: &[i64]) -> Result<(), UtilsError> {
    debug!("Validating hand: {:?}", values);

    if values.is_empty() {
        warn!("Hand is empty");
        return Err(UtilsError::EmptyHand);
    }

    debug!("Hand validation successful");
    Ok(())
}
