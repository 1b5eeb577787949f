//! Argument Checks
//!
//! Blank-string checks applied before any remote call is made.

use crate::utils::error::{BridgeError, BridgeResult};

/// True for empty or whitespace-only strings.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fail with a validation error naming `field` when `value` is blank.
pub fn require_non_blank(value: &str, field: &str) -> BridgeResult<()> {
    if is_blank(value) {
        return Err(BridgeError::validation(format!(
            "The {} is required and cannot be blank",
            field
        )));
    }
    Ok(())
}
