//! gpgvault: GPG-backed file vault
//!
//! Thin wrapper around two external tools: gpg for symmetric per-file
//! encryption and git for removing untracked files. All byte-level
//! cryptography and working-tree bookkeeping is delegated; this crate owns
//! the naming convention, the CLI surface, and the exit-code mapping.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
