//! GPG encryption/decryption service
//!
//! Thin wrapper around the external gpg binary: each operation is a single
//! blocking invocation with the output path derived from the marker prefix.
//! gpg owns the passphrase prompt and all byte-level cryptography.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{DomainError, MarkedPath};
use crate::infrastructure::traits::CommandRunner;
use crate::infrastructure::InfraError;

/// GPG file encryption service.
pub struct CryptoService {
    cmd: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
}

impl CryptoService {
    /// Create a new crypto service.
    pub fn new(cmd: Arc<dyn CommandRunner>, settings: Arc<Settings>) -> Self {
        Self { cmd, settings }
    }

    /// Encrypt a single file symmetrically.
    ///
    /// The output is written to `encrypted-<base>` in the input's directory
    /// (overwriting a pre-existing file there); the input itself is left
    /// untouched. Existence of the input is not checked locally, gpg reports
    /// missing files itself.
    ///
    /// # Arguments
    /// * `input` - Path to the plaintext file
    ///
    /// # Returns
    /// Path to the encrypted output file
    pub fn encrypt(&self, input: &Path) -> ApplicationResult<PathBuf> {
        debug!("encrypt: input={}", input.display());

        let marked = MarkedPath::new(input)?;
        let output = marked.encrypted_path();

        let args = [
            "--output",
            output.to_str().unwrap_or_default(),
            "--symmetric",
            input.to_str().unwrap_or_default(),
        ];
        self.run_gpg("Encryption failed", &args)?;

        debug!("encrypt: output={}", output.display());
        Ok(output)
    }

    /// Decrypt a single file.
    ///
    /// Precondition: the base name starts with `encrypted-`. This is a pure
    /// string check; file contents are never inspected. The output name is
    /// the base name with the leading marker stripped, written into the same
    /// directory.
    ///
    /// # Arguments
    /// * `input` - Path to the encrypted file
    ///
    /// # Returns
    /// Path to the decrypted output file
    pub fn decrypt(&self, input: &Path) -> ApplicationResult<PathBuf> {
        debug!("decrypt: input={}", input.display());

        let marked = MarkedPath::new(input)?;
        if !marked.is_marked() {
            return Err(DomainError::NotEncrypted(input.to_path_buf()).into());
        }
        let output = marked.unmarked_path();

        let args = [
            "--output",
            output.to_str().unwrap_or_default(),
            "--decrypt",
            input.to_str().unwrap_or_default(),
        ];
        self.run_gpg("Decryption failed", &args)?;

        debug!("decrypt: output={}", output.display());
        Ok(output)
    }

    /// Run gpg once, blocking, and map a failure into an error.
    ///
    /// Stdio is inherited, so gpg's interactive passphrase prompt reaches
    /// the terminal unmodified.
    fn run_gpg(&self, context: &str, args: &[&str]) -> ApplicationResult<()> {
        let status = self
            .cmd
            .status(&self.settings.gpg_bin, args)
            .map_err(|e| ApplicationError::OperationFailed {
                context: context.to_string(),
                source: Box::new(e),
            })?;

        if !status.success() {
            debug!("run_gpg: {}: {}", context, status);
            return Err(ApplicationError::OperationFailed {
                context: context.to_string(),
                source: Box::new(InfraError::Gpg {
                    message: status.to_string(),
                    exit_code: status.code(),
                }),
            });
        }
        Ok(())
    }
}
