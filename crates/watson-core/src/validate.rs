//! Required-parameter validation, performed before any network call.

use crate::{Error, Result};

/// Reject an empty required parameter.
pub fn not_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} cannot be empty", name)));
    }
    Ok(())
}
