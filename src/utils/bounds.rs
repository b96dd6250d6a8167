//! Bounds validation utilities

use crate::error::{Error, Result};

/// Reject inputs larger than `max` bytes before any parsing happens
pub(crate) fn validate_input_size(input: &str, max: usize) -> Result<()> {
    if input.len() > max {
        return Err(Error::InputTooLarge {
            size: input.len(),
            max,
        });
    }
    Ok(())
}
