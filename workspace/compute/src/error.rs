use model::ModelError;
use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from the period data store
    #[error("Data store error: {0}")]
    Model(#[from] ModelError),
}

impl ComputeError {
    /// Logs the error and hands it back, for use in `map_err`.
    pub(crate) fn logged(self) -> Self {
        error!(err = %self, "Compute error");
        self
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
