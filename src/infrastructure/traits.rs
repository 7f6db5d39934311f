//! I/O boundary traits for testability
//!
//! These traits abstract external process invocation, allowing services
//! to be tested with mock implementations.

use std::io;
use std::process::{Command, ExitStatus};

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run a command with arguments, inheriting stdio, and wait for it.
    ///
    /// Stdio is inherited so interactive tools keep their terminal: gpg
    /// prompts for the passphrase itself, and this program neither supplies
    /// nor suppresses that prompt.
    fn status(&self, cmd: &str, args: &[&str]) -> io::Result<ExitStatus>;
}

/// Real command runner implementation.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn status(&self, cmd: &str, args: &[&str]) -> io::Result<ExitStatus> {
        Command::new(cmd).args(args).status()
    }
}
