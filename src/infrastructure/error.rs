//! Infrastructure-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// Infrastructure errors wrap application errors and add process-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("gpg command failed: {message}")]
    Gpg {
        message: String,
        exit_code: Option<i32>,
    },

    #[error("git command failed: {message}")]
    Git {
        message: String,
        exit_code: Option<i32>,
    },
}
