//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate and works out which of the run modes the arguments ask for.

use clap::Parser;

use crate::wizard::Presets;
use comment_rules_core::config::Config;
use comment_rules_core::rules::{RuleChoice, Scope};

/// Editor argument treated the same as `--all`
const ALL_EDITORS_KEY: &str = "all";

/// What a run of the binary does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Print the supported editors and exit
    List,
    /// Install for every supported editor
    All,
    /// Install for the named editors
    Editors(Vec<String>),
    /// No editors given: ask interactively
    Wizard,
}

/// Command-line arguments for the comment-rules installer.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use comment_rules_cli::cli_args::{Args, RunMode};
///
/// let args = Args::parse_from(["comment-rules", "cursor", "--rule", "all"]);
/// assert_eq!(args.run_mode(), RunMode::Editors(vec!["cursor".to_string()]));
/// ```
#[derive(Parser, Debug)]
#[command(
    name = "comment-rules",
    about = "Install comment policy rules for AI code editors",
    term_width = 0
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Editors to install for, e.g. `cursor claude`.
    ///
    /// Without editors (and without `--all` or `--list`) an interactive
    /// wizard is shown.
    pub editors: Vec<String>,

    /// Install to the home directory instead of the current directory.
    #[arg(long, short = 'g', action)]
    pub global: bool,

    /// Install for all supported editors.
    #[arg(long, short = 'a', action)]
    pub all: bool,

    /// List all supported editors.
    #[arg(long, short = 'l', action)]
    pub list: bool,

    /// Rule to install: `jsdoc`, `manual` or `all`.
    ///
    /// Defaults to the configured rule, or `jsdoc`.
    #[arg(long, short = 'r', value_parser = parse_rule_choice)]
    pub rule: Option<RuleChoice>,

    /// Path to the configuration file YAML.
    ///
    /// If not provided, defaults to `~/.comment-rules/config.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Install underneath this directory instead of the scope's default.
    #[arg(long, short = 'C')]
    pub directory: Option<String>,

    /// Show which files would be written without writing them.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,
}

fn parse_rule_choice(value: &str) -> Result<RuleChoice, String> {
    value.parse().map_err(|e| format!("{e}"))
}

impl Args {
    #[must_use]
    pub fn run_mode(&self) -> RunMode {
        if self.list {
            return RunMode::List;
        }

        if self.all
            || self
                .editors
                .iter()
                .any(|editor| editor.eq_ignore_ascii_case(ALL_EDITORS_KEY))
        {
            return RunMode::All;
        }

        if self.editors.is_empty() {
            RunMode::Wizard
        } else {
            RunMode::Editors(self.editors.clone())
        }
    }

    /// `--global` wins over the configured scope.
    #[must_use]
    pub fn scope(&self, config: &Config) -> Scope {
        if self.global {
            Scope::Global
        } else {
            config.scope()
        }
    }

    /// `--rule` wins over the configured rule.
    #[must_use]
    pub fn rule_choice(&self, config: &Config) -> RuleChoice {
        self.rule.unwrap_or_else(|| config.rule())
    }

    /// Wizard answers given on the command line; configured defaults do not
    /// skip wizard steps.
    #[must_use]
    pub fn presets(&self) -> Presets {
        Presets {
            scope: self.global.then_some(Scope::Global),
            rule: self.rule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["comment-rules"]);

        assert!(args.editors.is_empty());
        assert!(!args.global);
        assert!(!args.all);
        assert!(!args.list);
        assert!(args.rule.is_none());
        assert!(args.config_path.is_none());
        assert!(args.directory.is_none());
        assert!(!args.dry_run);
        assert_eq!(args.run_mode(), RunMode::Wizard);
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from([
            "comment-rules",
            "-g",
            "-r",
            "manual",
            "-c",
            "/custom/config.yml",
            "-C",
            "/tmp/project",
            "-d",
            "cursor",
        ]);

        assert!(args.global);
        assert_eq!(args.rule, Some(RuleChoice::Manual));
        assert_eq!(args.config_path, Some("/custom/config.yml".to_string()));
        assert_eq!(args.directory, Some("/tmp/project".to_string()));
        assert!(args.dry_run);
        assert_eq!(args.editors, vec!["cursor".to_string()]);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "comment-rules",
            "--global",
            "--rule",
            "all",
            "--config-path",
            "/custom/config.yml",
            "--directory",
            "/tmp/project",
            "--dry-run",
            "--all",
        ]);

        assert!(args.global);
        assert!(args.all);
        assert_eq!(args.rule, Some(RuleChoice::All));
        assert!(args.dry_run);
        assert_eq!(args.run_mode(), RunMode::All);
    }

    #[test]
    fn test_rule_accepts_full_names() {
        let args = Args::parse_from(["comment-rules", "--rule", "manual-cleanup-comments"]);
        assert_eq!(args.rule, Some(RuleChoice::Manual));
    }

    #[test]
    fn test_unknown_rule_is_rejected() {
        let result = Args::try_parse_from(["comment-rules", "--rule", "everything"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_multiple_editors() {
        let args = Args::parse_from(["comment-rules", "cursor", "claude", "zed"]);
        assert_eq!(
            args.run_mode(),
            RunMode::Editors(vec![
                "cursor".to_string(),
                "claude".to_string(),
                "zed".to_string()
            ])
        );
    }

    #[test]
    fn test_list_wins() {
        let args = Args::parse_from(["comment-rules", "--all", "--list", "cursor"]);
        assert_eq!(args.run_mode(), RunMode::List);
    }

    #[test]
    fn test_all_editor_argument_means_all() {
        let args = Args::parse_from(["comment-rules", "cursor", "ALL"]);
        assert_eq!(args.run_mode(), RunMode::All);
    }

    #[test]
    fn test_scope_and_rule_fall_back_to_config() {
        let config = Config {
            scope: Some(Scope::Global),
            rule: Some(RuleChoice::All),
        };

        let args = Args::parse_from(["comment-rules", "cursor"]);
        assert_eq!(args.scope(&config), Scope::Global);
        assert_eq!(args.rule_choice(&config), RuleChoice::All);

        let args = Args::parse_from(["comment-rules", "cursor", "-r", "jsdoc"]);
        assert_eq!(args.rule_choice(&config), RuleChoice::Jsdoc);

        let args = Args::parse_from(["comment-rules", "cursor"]);
        assert_eq!(args.scope(&Config::default()), Scope::Project);
        assert_eq!(args.rule_choice(&Config::default()), RuleChoice::Jsdoc);
    }

    #[test]
    fn test_presets_only_from_flags() {
        let args = Args::parse_from(["comment-rules"]);
        assert_eq!(args.presets(), Presets::default());

        let args = Args::parse_from(["comment-rules", "-g", "-r", "manual"]);
        assert_eq!(
            args.presets(),
            Presets {
                scope: Some(Scope::Global),
                rule: Some(RuleChoice::Manual),
            }
        );
    }
}
