use std::str::Utf8Error;
use thiserror::Error;

/// Result type for filter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while checking a message.
///
/// A failed check leaves the [`Filter`](crate::Filter) untouched; later checks are unaffected.
#[derive(Debug, Error)]
pub enum Error {
    /// The diacritic stage could not process the message, because it was not valid UTF-8.
    /// Only raised when [`Options::NORMALIZE`](crate::Options::NORMALIZE) is enabled.
    #[error("cannot normalize message: {0}")]
    Normalization(#[from] Utf8Error),
}
