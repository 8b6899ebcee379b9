//! Integration tests for comment-rules-core
//!
//! These tests verify that the registry, installer and configuration work
//! together by installing rules into temporary directories.

use comment_rules_core::{
    config::{get_config_path, resolve_base_dir},
    editors::{find_editor, EDITORS},
    file_handling::get_config,
    installer::{describe_rules, Installer, COMBINED_RULE_SEPARATOR},
    rules::{Rule, RuleChoice, Scope},
};
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

/// Test installing a single rule for a per-rule editor with frontmatter
#[test]
fn test_install_per_rule_editor_with_frontmatter() {
    let dir = tempdir().unwrap();
    let installer = Installer::new(dir.path());
    let cursor = find_editor("cursor").unwrap();

    let written = installer.install(cursor, &RuleChoice::Jsdoc.rules()).unwrap();

    assert_eq!(written, vec![".cursor/rules/jsdoc-over-inline-comments.mdc"]);
    let content =
        fs::read_to_string(dir.path().join(".cursor/rules/jsdoc-over-inline-comments.mdc"))
            .unwrap();
    assert!(content.starts_with("---\ndescription:"));
    assert!(content.contains("alwaysApply: true"));
    assert!(content.contains("# Comment Policy (STRICT)"));
}

/// Test installing both rules for a per-rule editor writes two files
#[test]
fn test_install_all_rules_per_rule_editor() {
    let dir = tempdir().unwrap();
    let installer = Installer::new(dir.path());
    let zed = find_editor("zed").unwrap();

    let written = installer.install(zed, &RuleChoice::All.rules()).unwrap();

    assert_eq!(
        written,
        vec![
            ".zed/rules/jsdoc-over-inline-comments.md",
            ".zed/rules/manual-cleanup-comments.md",
        ]
    );
    for path in &written {
        assert!(dir.path().join(path).is_file(), "{path} was not written");
    }
}

/// Test that single-file editors receive one combined file
#[test]
fn test_install_all_rules_single_file_editor_combines() {
    let dir = tempdir().unwrap();
    let installer = Installer::new(dir.path());
    let claude = find_editor("claude").unwrap();

    let written = installer.install(claude, &RuleChoice::All.rules()).unwrap();

    assert_eq!(written, vec!["CLAUDE.md"]);
    let content = fs::read_to_string(dir.path().join("CLAUDE.md")).unwrap();
    let expected = format!(
        "{}{}{}",
        Rule::JsdocOverInlineComments.body(),
        COMBINED_RULE_SEPARATOR,
        Rule::ManualCleanupComments.body()
    );
    assert_eq!(content, expected);
}

/// Test that a single rule for a single-file editor is written verbatim
#[test]
fn test_install_single_rule_single_file_editor() {
    let dir = tempdir().unwrap();
    let installer = Installer::new(dir.path());
    let copilot = find_editor("copilot").unwrap();

    let written = installer
        .install(copilot, &RuleChoice::Manual.rules())
        .unwrap();

    assert_eq!(written, vec![".github/copilot-instructions.md"]);
    let content = fs::read_to_string(dir.path().join(".github/copilot-instructions.md")).unwrap();
    assert_eq!(content, Rule::ManualCleanupComments.body());
}

/// Test that a dry run plans files without touching the disk
#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let installer = Installer::new(dir.path()).dry_run(true);
    let windsurf = find_editor("windsurf").unwrap();

    let written = installer.install(windsurf, &RuleChoice::Jsdoc.rules()).unwrap();

    assert_eq!(written, vec![".windsurfrules"]);
    assert!(!dir.path().join(".windsurfrules").exists());
}

/// Test installing for every editor in one pass
#[test]
fn test_install_all_editors_workflow() {
    let dir = tempdir().unwrap();
    let installer = Installer::new(dir.path());
    let editors: Vec<_> = EDITORS.iter().collect();

    let reports = installer
        .install_all(&editors, &RuleChoice::All.rules())
        .unwrap();

    assert_eq!(reports.len(), EDITORS.len());
    for report in &reports {
        let expected_files = if report.editor.is_single_file() { 1 } else { 2 };
        assert_eq!(report.files.len(), expected_files, "{}", report.editor.key);
        for file in &report.files {
            assert!(dir.path().join(file).is_file(), "{file} missing");
        }
    }
}

/// Test the configuration file feeding the install defaults
#[test]
fn test_config_defaults_workflow() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "scope: global\nrule: all\n").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let config = get_config(&get_config_path(&Some(temp_path))).unwrap();
    assert_eq!(config.scope(), Scope::Global);
    assert_eq!(config.rule().rules().len(), 2);
    assert_eq!(
        describe_rules(&config.rule().rules()),
        "jsdoc-over-inline-comments, manual-cleanup-comments"
    );

    let base_dir = resolve_base_dir(config.scope(), &Some("/srv/rules".to_string())).unwrap();
    assert_eq!(base_dir.to_str().unwrap(), "/srv/rules");
}
