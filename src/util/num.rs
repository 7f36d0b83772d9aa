use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Parses a command argument as a machine integer.
///
/// Integer arguments to commands like `range` and `subscript` go through
/// the string rendition directly, so a float such as `3.0` is rejected the
/// same way a non-number is.
///
/// # Errors
/// Returns `RuntimeError::InvalidInteger` when the argument does not parse.
pub fn int_argument(value: &Value) -> Result<i64, RuntimeError> {
    value.as_str()
         .parse::<i64>()
         .map_err(|_| RuntimeError::InvalidInteger { text: value.as_str().to_string() })
}

/// Converts a signed index to `usize`, returning `None` for negative
/// values.
#[must_use]
pub fn index_to_usize(index: i64) -> Option<usize> {
    usize::try_from(index).ok()
}
