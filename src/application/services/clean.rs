//! Working-tree cleanup service
//!
//! Delegates entirely to git: `git clean -f -d -x` removes every untracked
//! file and directory, including ignored ones, from the current working
//! tree. Destructive and irreversible: no dry-run, no confirmation, no path
//! restriction.

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::infrastructure::traits::CommandRunner;
use crate::infrastructure::InfraError;

/// Untracked-file removal service.
pub struct CleanService {
    cmd: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
}

impl CleanService {
    /// Create a new clean service.
    pub fn new(cmd: Arc<dyn CommandRunner>, settings: Arc<Settings>) -> Self {
        Self { cmd, settings }
    }

    /// Remove untracked files and directories from the current working tree.
    pub fn clean(&self) -> ApplicationResult<()> {
        debug!("clean: removing untracked files");

        let status = self
            .cmd
            .status(&self.settings.git_bin, &["clean", "-f", "-d", "-x"])
            .map_err(|e| ApplicationError::OperationFailed {
                context: "Clean failed".to_string(),
                source: Box::new(e),
            })?;

        if !status.success() {
            return Err(ApplicationError::OperationFailed {
                context: "Clean failed".to_string(),
                source: Box::new(InfraError::Git {
                    message: status.to_string(),
                    exit_code: status.code(),
                }),
            });
        }
        Ok(())
    }
}
