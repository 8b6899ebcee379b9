//! Resolves destination files for an editor and writes rule content to them.

use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, info};

use crate::editors::Editor;
use crate::error::Result;
use crate::file_handling::write_rule_file;
use crate::rules::Rule;

/// Separator placed between rules sharing a single file.
pub const COMBINED_RULE_SEPARATOR: &str = "\n---\n\n";

/// A file the installer is about to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path relative to the install base directory
    pub relative_path: String,
    pub content: String,
}

/// Files written (or planned, on a dry run) for one editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorReport {
    pub editor: &'static Editor,
    pub files: Vec<String>,
}

/// Writes rules for editors underneath a base directory.
#[derive(Debug, Clone)]
pub struct Installer {
    base_dir: PathBuf,
    dry_run: bool,
}

impl Installer {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            dry_run: false,
        }
    }

    /// When enabled, files are planned and reported but never written.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Works out which files an editor needs for the given rules.
    ///
    /// Single-file editors receiving several rules get one file with the rule
    /// contents joined by [`COMBINED_RULE_SEPARATOR`]; everything else gets one
    /// file per rule.
    ///
    /// # Errors
    ///
    /// Returns an error if a per-rule path template cannot be rendered.
    pub fn plan(&self, editor: &Editor, rules: &[Rule]) -> Result<Vec<PlannedFile>> {
        if editor.is_single_file() && rules.len() > 1 {
            let content = rules
                .iter()
                .map(|rule| editor.content_for(*rule))
                .join(COMBINED_RULE_SEPARATOR);

            return Ok(vec![PlannedFile {
                relative_path: editor.rule_path(rules[0])?,
                content,
            }]);
        }

        rules
            .iter()
            .map(|rule| -> Result<PlannedFile> {
                Ok(PlannedFile {
                    relative_path: editor.rule_path(*rule)?,
                    content: editor.content_for(*rule),
                })
            })
            .collect()
    }

    /// Installs the given rules for one editor, returning the relative paths written.
    ///
    /// # Errors
    ///
    /// Returns an error if a path cannot be resolved or a file cannot be written.
    pub fn install(&self, editor: &Editor, rules: &[Rule]) -> Result<Vec<String>> {
        let planned = self.plan(editor, rules)?;
        let mut written = Vec::with_capacity(planned.len());

        for file in planned {
            let full_path = self.base_dir.join(&file.relative_path);
            if self.dry_run {
                info!("Dry run, not writing `{}`", full_path.display());
            } else {
                debug!("Writing `{}`", full_path.display());
                write_rule_file(&full_path, &file.content)?;
            }
            written.push(file.relative_path);
        }

        Ok(written)
    }

    /// Installs the given rules for each editor in turn.
    ///
    /// Stops at the first failure; editors before it have already been written.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn install_all(
        &self,
        editors: &[&'static Editor],
        rules: &[Rule],
    ) -> Result<Vec<EditorReport>> {
        editors
            .iter()
            .map(|&editor| -> Result<EditorReport> {
                Ok(EditorReport {
                    editor,
                    files: self.install(editor, rules)?,
                })
            })
            .collect()
    }
}

/// Comma separated rule file stems, as shown in progress messages.
#[must_use]
pub fn describe_rules(rules: &[Rule]) -> String {
    rules.iter().map(|rule| rule.file_stem()).join(", ")
}
