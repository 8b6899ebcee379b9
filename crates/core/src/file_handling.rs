//! File handling for comment-rules.
//!
//! This module reads the optional configuration file and writes rule files,
//! creating parent directories as needed.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn get_config_reader(config_path: &str) -> Result<Option<File>> {
    if !Path::exists(Path::new(config_path)) {
        return Ok(None);
    }

    match get_reader("config", config_path) {
        Ok(f) => Ok(Some(f)),
        Err(e) => Err(e),
    }
}

/// Reads the configuration file.
///
/// A missing file is not an error: the built-in defaults are returned. An
/// empty file is treated the same way.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML or unknown keys
pub fn get_config(config_path: &str) -> Result<Config> {
    let Some(mut config_reader) = get_config_reader(config_path)? else {
        debug!("No config file at `{config_path}`, using defaults");
        return Ok(Config::default());
    };

    let mut raw = String::new();
    config_reader
        .read_to_string(&mut raw)
        .map_err(|e| Error::io_error("config".to_string(), config_path.to_string(), e))?;

    if raw.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: serde_yaml::Result<Config> = serde_yaml::from_str(&raw);

    match config {
        Ok(config) => Ok(config),
        Err(e) => Err(Error::yaml_error(
            "reading".to_string(),
            "config".to_string(),
            config_path.to_string(),
            e,
        )),
    }
}

/// Writes a rule file, creating any missing parent directories.
///
/// # Errors
///
/// Returns an error naming the path if the directory cannot be created or the
/// file cannot be written.
pub fn write_rule_file(path: &Path, content: &str) -> Result<()> {
    let display_path = path.display().to_string();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io_error("rule directory".to_string(), parent.display().to_string(), e)
            })?;
        }
    }

    fs::write(path, content).map_err(|e| Error::io_error("rule".to_string(), display_path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RuleChoice, Scope};
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_get_config_file_not_exists() {
        let result = get_config("/non/existent/path/config.yml").unwrap();
        assert_eq!(result, Config::default());
    }

    #[test]
    fn test_get_config_valid_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "scope: global\nrule: manual-cleanup-comments\n").unwrap();

        let config = get_config(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.scope, Some(Scope::Global));
        assert_eq!(config.rule, Some(RuleChoice::Manual));
    }

    #[test]
    fn test_get_config_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let config = get_config(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_get_config_invalid_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "scope: [project\n").unwrap();

        let result = get_config(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }

    #[test]
    fn test_get_config_unknown_key() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "editors: [cursor]\n").unwrap();

        let result = get_config(temp_file.path().to_str().unwrap());
        assert!(result.is_err());
    }

    #[test]
    fn test_write_rule_file_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".cursor/rules/example.mdc");

        write_rule_file(&path, "content").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_write_rule_file_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("AGENTS.md");

        write_rule_file(&path, "first").unwrap();
        write_rule_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_rule_file_reports_path_on_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = write_rule_file(&blocker.join("nested/file.md"), "content");
        match result {
            Err(Error::Io { path, .. }) => assert!(path.contains("blocker")),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
