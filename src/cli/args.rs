//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser, ValueHint};
use clap_complete::Shell;

/// GPG-backed file vault: symmetric per-file encryption and working-tree cleanup
#[derive(Parser, Debug)]
#[command(name = "gpgvault")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("operation").multiple(false)))]
pub struct Cli {
    /// Encrypt FILE (writes encrypted-<name> next to it)
    #[arg(
        short = 'e',
        long = "encrypt",
        value_name = "FILE",
        group = "operation",
        value_hint = ValueHint::FilePath
    )]
    pub encrypt: Option<PathBuf>,

    /// Decrypt FILE (its name must carry the encrypted- prefix)
    #[arg(
        short = 'd',
        long = "decrypt",
        value_name = "FILE",
        group = "operation",
        value_hint = ValueHint::FilePath
    )]
    pub decrypt: Option<PathBuf>,

    /// Remove all untracked files and directories from the working tree
    #[arg(long, group = "operation")]
    pub clean: bool,

    /// Enable verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL", group = "operation")]
    pub completions: Option<Shell>,
}

/// One CLI invocation performs exactly one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Encrypt a file with gpg
    Encrypt(PathBuf),
    /// Decrypt a previously encrypted file
    Decrypt(PathBuf),
    /// Remove untracked files via git
    Clean,
}

impl Cli {
    /// The selected operation, if any.
    ///
    /// Selectors are mutually exclusive; clap rejects combinations before
    /// this is reached.
    pub fn operation(&self) -> Option<Operation> {
        if let Some(file) = &self.encrypt {
            Some(Operation::Encrypt(file.clone()))
        } else if let Some(file) = &self.decrypt {
            Some(Operation::Decrypt(file.clone()))
        } else if self.clean {
            Some(Operation::Clean)
        } else {
            None
        }
    }
}
