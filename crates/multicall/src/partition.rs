//! Splitting calls into relay sized batches.

use {
    crate::{Error, Result},
    std::slice::Chunks,
};

/// Splits `calls` into consecutive batches of at most `batch_size` elements.
/// Only the last batch may be smaller.
///
/// Fails for a `batch_size` of zero.
pub fn partition<T>(calls: &[T], batch_size: usize) -> Result<Chunks<'_, T>> {
    if batch_size == 0 {
        return Err(Error::Configuration(
            "batch size must be greater than zero".into(),
        ));
    }
    Ok(calls.chunks(batch_size))
}
