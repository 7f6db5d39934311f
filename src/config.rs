//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/gpgvault/gpgvault.toml`
//! 3. Environment variables: `GPGVAULT_*` prefix
//!
//! Only the external binaries are configurable; the operation surface is
//! fixed on the command line.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// Unified configuration for gpgvault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// GPG executable (default: "gpg" on PATH)
    pub gpg_bin: String,
    /// git executable (default: "git" on PATH)
    pub git_bin: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gpg_bin: "gpg".into(),
            git_bin: "git".into(),
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub gpg_bin: Option<String>,
    pub git_bin: Option<String>,
}

/// Get the XDG config directory for gpgvault.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "gpgvault").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("gpgvault.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins if Some.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            gpg_bin: overlay
                .gpg_bin
                .clone()
                .unwrap_or_else(|| self.gpg_bin.clone()),
            git_bin: overlay
                .git_bin
                .clone()
                .unwrap_or_else(|| self.git_bin.clone()),
        }
    }

    /// Expand shell variables and tilde in the binary paths.
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax, so binaries may live under
    /// `~/bin` or `$HOMEBREW_PREFIX/bin`.
    fn expand_paths(&mut self) {
        self.gpg_bin = expand_env_vars(&self.gpg_bin);
        self.git_bin = expand_env_vars(&self.git_bin);
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/gpgvault/gpgvault.toml`
    /// 3. Environment variables: `GPGVAULT_*` prefix (explicit override)
    pub fn load() -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path-like fields
        current.expand_paths();

        Ok(current)
    }

    /// Apply GPGVAULT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let builder = Config::builder().add_source(Environment::with_prefix("GPGVAULT"));
        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("gpg_bin") {
            settings.gpg_bin = val;
        }
        if let Ok(val) = config.get_string("git_bin") {
            settings.git_bin = val;
        }

        Ok(settings)
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_defaulting_then_uses_path_binaries() {
        let settings = Settings::default();
        assert_eq!(settings.gpg_bin, "gpg");
        assert_eq!(settings.git_bin, "git");
    }

    #[test]
    fn given_overlay_when_merging_then_overlay_wins_if_set() {
        let base = Settings::default();
        let overlay = RawSettings {
            gpg_bin: Some("gpg2".to_string()),
            git_bin: None,
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.gpg_bin, "gpg2");
        assert_eq!(result.git_bin, "git");
    }

    #[test]
    fn given_tilde_in_gpg_bin_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            gpg_bin: "~/bin/gpg".to_string(),
            git_bin: "git".to_string(),
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(
            settings.gpg_bin.starts_with(&home),
            "gpg_bin should start with home dir: {}",
            settings.gpg_bin
        );
        assert!(
            !settings.gpg_bin.contains('~'),
            "gpg_bin should not contain tilde: {}",
            settings.gpg_bin
        );
        assert_eq!(settings.git_bin, "git");
    }

    #[test]
    fn given_env_var_in_git_bin_when_expand_paths_then_expands_variable() {
        let mut settings = Settings {
            gpg_bin: "gpg".to_string(),
            git_bin: "${HOME}/bin/git".to_string(),
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(
            settings.git_bin.starts_with(&home),
            "git_bin should expand ${{HOME}}"
        );
    }
}
