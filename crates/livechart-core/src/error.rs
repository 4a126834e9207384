// File: crates/livechart-core/src/error.rs
// Summary: Error taxonomy shared by series access, configuration setters and frame rendering.

use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Indexed series access outside `0..len`.
    #[error("index {index} out of range for series of length {len}")]
    OutOfRange { index: isize, len: usize },
    /// Degenerate bounds or nonsensical styling, rejected at the setter.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Host surface or drawing backend failure.
    #[error("backend failure: {0}")]
    Backend(#[from] BackendError),
}

pub type Result<T> = std::result::Result<T, ChartError>;

impl ChartError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ChartError::InvalidConfiguration(msg.into())
    }
}
