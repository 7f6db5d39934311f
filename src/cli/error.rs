//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::exitcode;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl CliError {
    /// Whether this is the decrypt naming-convention precondition.
    ///
    /// Its message is printed as a plain line instead of an error line,
    /// keeping the tool's original wording intact.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            CliError::Infra(InfraError::Application(ApplicationError::Domain(
                DomainError::NotEncrypted(_)
            )))
        )
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exitcode::USAGE,
            CliError::Infra(InfraError::Application(app)) => match app {
                ApplicationError::Domain(_) => exitcode::DATAERR,
                ApplicationError::Config { .. } => exitcode::CONFIG,
                // A child that ran and failed is SOFTWARE; a child that
                // could not be spawned at all is UNAVAILABLE.
                ApplicationError::OperationFailed { source, .. } => {
                    if source.downcast_ref::<InfraError>().is_some() {
                        exitcode::SOFTWARE
                    } else {
                        exitcode::UNAVAILABLE
                    }
                }
            },
            CliError::Infra(_) => exitcode::SOFTWARE,
        }
    }
}
