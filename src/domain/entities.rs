//! Domain entities: the encrypted-file naming convention

use std::path::{Path, PathBuf};

use crate::domain::DomainError;

/// Marker prefix identifying a file as encrypted.
///
/// This string on the base name is the only signal the tool has for whether
/// a file is in encrypted form; file contents are never inspected.
pub const ENCRYPTED_PREFIX: &str = "encrypted-";

/// Decomposition of an input path into directory and base name, carrying
/// the marker-prefix logic. Output paths are always computed in the input
/// file's directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedPath {
    /// Directory component (empty for bare file names)
    directory: PathBuf,
    /// UTF-8 base name
    base: String,
}

impl MarkedPath {
    /// Split a path into directory and base name.
    ///
    /// The base name must be valid UTF-8: the marker is defined on strings,
    /// and the external tool's argument vector needs UTF-8 anyway.
    pub fn new(path: &Path) -> Result<Self, DomainError> {
        let base = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DomainError::InvalidFileName(path.to_path_buf()))?
            .to_string();
        let directory = path.parent().unwrap_or_else(|| Path::new("")).to_path_buf();
        Ok(Self { directory, base })
    }

    /// Base name of the input file.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Whether the base name carries the leading marker prefix.
    pub fn is_marked(&self) -> bool {
        self.base.starts_with(ENCRYPTED_PREFIX)
    }

    /// Output path for encryption: `encrypted-<base>` next to the input.
    pub fn encrypted_path(&self) -> PathBuf {
        self.directory
            .join(format!("{}{}", ENCRYPTED_PREFIX, self.base))
    }

    /// Output path for decryption: the leading marker stripped once, same
    /// directory. A second occurrence later in the name is preserved, so
    /// `encrypted-a-encrypted-b` decrypts to `a-encrypted-b`.
    pub fn unmarked_path(&self) -> PathBuf {
        let name = self
            .base
            .strip_prefix(ENCRYPTED_PREFIX)
            .unwrap_or(&self.base);
        self.directory.join(name)
    }
}

/// Expand environment variables in a path string.
///
/// Supports:
/// - `$VAR` syntax
/// - `${VAR}` syntax
/// - `~` for home directory
///
/// Uses shellexpand crate for robust expansion.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
