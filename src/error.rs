//! Error type shared by every structure in the crate.
//!
//! Absence is never an error: lookups that miss return `None`. An `Error` is
//! only produced when a call is rejected at the API boundary, before any
//! state has been touched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument was outside the domain the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A positional access past the end of a sequence.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
