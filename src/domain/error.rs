//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Domain errors represent violations of the file naming convention.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The base name lacks the marker prefix, so there is nothing to decrypt.
    /// The wording is the tool's user-facing message and is kept verbatim.
    #[error("File is not encrypted.")]
    NotEncrypted(PathBuf),

    #[error("invalid file name: {0}")]
    InvalidFileName(PathBuf),
}
