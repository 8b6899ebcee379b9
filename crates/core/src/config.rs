//! Configuration paths and user defaults for comment-rules.
//!
//! This module resolves the optional configuration file path, the base
//! directory rules are installed into, and describes the defaults the
//! configuration file may override.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rules::{RuleChoice, Scope};

/// Default path for the optional configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.comment-rules/config.yml";

/// Defaults read from the configuration file.
///
/// Every field is optional; anything not set falls back to the built-in
/// default (project scope, the JSDoc rule).
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scope used when neither `--global` nor the wizard picks one
    pub scope: Option<Scope>,
    /// Rule choice used when `--rule` is not given
    pub rule: Option<RuleChoice>,
}

impl Config {
    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope.unwrap_or_default()
    }

    #[must_use]
    pub fn rule(&self) -> RuleChoice {
        self.rule.unwrap_or_default()
    }
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use comment_rules_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Resolves the directory rule files are installed under.
///
/// An explicit directory wins (with `~` expanded); otherwise global scope uses
/// the home directory and project scope the current working directory.
///
/// # Errors
///
/// Returns an error if the current working directory cannot be determined.
pub fn resolve_base_dir(scope: Scope, directory_arg: &Option<String>) -> Result<PathBuf> {
    if let Some(directory) = directory_arg {
        return Ok(PathBuf::from(shellexpand::tilde(directory).as_ref()));
    }

    match scope {
        Scope::Global => Ok(PathBuf::from(shellexpand::tilde("~").as_ref())),
        Scope::Project => env::current_dir().map_err(|e| {
            Error::io_error(
                "working directory".to_string(),
                ".".to_string(),
                e,
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/config.yml".to_string());
        let result = get_config_path(&custom_path);
        assert_eq!(result, "/custom/path/config.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".comment-rules/config.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_resolve_base_dir_with_directory_override() {
        let result = resolve_base_dir(Scope::Global, &Some("/tmp/rules".to_string())).unwrap();
        assert_eq!(result, PathBuf::from("/tmp/rules"));
    }

    #[test]
    fn test_resolve_base_dir_project_is_current_dir() {
        let result = resolve_base_dir(Scope::Project, &None).unwrap();
        assert_eq!(result, env::current_dir().unwrap());
    }

    #[test]
    fn test_resolve_base_dir_global_expands_home() {
        let result = resolve_base_dir(Scope::Global, &None).unwrap();
        assert!(!result.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.scope(), Scope::Project);
        assert_eq!(config.rule(), RuleChoice::Jsdoc);
    }
}
