//! Supported editors and where each one reads its rules from.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use leon::Template;

use crate::error::Result;
use crate::rules::Rule;

/// Placeholder substituted with the rule's file stem in per-rule paths.
pub const RULE_PLACEHOLDER: &str = "rule";

/// How rule content is written for an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Plain Markdown body.
    Markdown,
    /// Markdown body prefixed with a YAML frontmatter block (`.mdc` files).
    MarkdownWithFrontmatter,
}

/// Where an editor looks for rule files, relative to the install base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One shared file; several rules are concatenated into it.
    SingleFile(&'static str),
    /// One file per rule; the template contains a `{rule}` placeholder.
    PerRule(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub key: &'static str,
    pub name: &'static str,
    pub format: Format,
    pub layout: Layout,
}

impl Editor {
    const fn single(key: &'static str, name: &'static str, path: &'static str) -> Self {
        Self {
            key,
            name,
            format: Format::Markdown,
            layout: Layout::SingleFile(path),
        }
    }

    const fn per_rule(key: &'static str, name: &'static str, template: &'static str) -> Self {
        Self {
            key,
            name,
            format: Format::Markdown,
            layout: Layout::PerRule(template),
        }
    }

    #[must_use]
    pub fn is_single_file(&self) -> bool {
        matches!(self.layout, Layout::SingleFile(_))
    }

    /// Resolves the relative path the given rule is written to.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor's path template cannot be parsed or rendered.
    pub fn rule_path(&self, rule: Rule) -> Result<String> {
        match self.layout {
            Layout::SingleFile(path) => Ok(path.to_string()),
            Layout::PerRule(template) => {
                let template = Template::parse(template)?;
                let context: HashMap<String, String> = HashMap::from([(
                    RULE_PLACEHOLDER.to_string(),
                    rule.file_stem().to_string(),
                )]);
                Ok(template.render(&context)?)
            }
        }
    }

    /// Formats a rule's content for this editor.
    #[must_use]
    pub fn content_for(&self, rule: Rule) -> String {
        match self.format {
            Format::Markdown => rule.body().to_string(),
            Format::MarkdownWithFrontmatter => format!("{}{}", rule.frontmatter(), rule.body()),
        }
    }
}

impl Display for Editor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Every supported editor, in display order.
pub static EDITORS: &[Editor] = &[
    Editor::per_rule("antigravity", "Antigravity", ".antigravity/rules/{rule}.md"),
    Editor::single("aider", "Aider", "CONVENTIONS.md"),
    Editor::single("claude", "Claude Code", "CLAUDE.md"),
    Editor::single("cline", "Cline", ".clinerules"),
    Editor::per_rule("codebuddy", "CodeBuddy", ".codebuddy/rules/{rule}.md"),
    Editor::single("codex", "Codex", "AGENTS.md"),
    Editor::per_rule("commandcode", "Command Code", ".commandcode/rules/{rule}.md"),
    Editor::per_rule("continue", "Continue", ".continue/rules/{rule}.md"),
    Editor::per_rule("crush", "Crush", ".crush/rules/{rule}.md"),
    Editor {
        key: "cursor",
        name: "Cursor",
        format: Format::MarkdownWithFrontmatter,
        layout: Layout::PerRule(".cursor/rules/{rule}.mdc"),
    },
    Editor::per_rule("droid", "Droid", ".droid/rules/{rule}.md"),
    Editor::single("gemini", "Gemini CLI", "GEMINI.md"),
    Editor::single("copilot", "GitHub Copilot", ".github/copilot-instructions.md"),
    Editor::per_rule("goose", "Goose", ".goose/rules/{rule}.md"),
    Editor::per_rule("junie", "Junie", ".junie/rules/{rule}.md"),
    Editor::per_rule("kilocode", "Kilo Code", ".kilocode/rules/{rule}.md"),
    Editor::per_rule("kiro", "Kiro CLI", ".kiro/rules/{rule}.md"),
    Editor::per_rule("kode", "Kode", ".kode/rules/{rule}.md"),
    Editor::per_rule("mcpjam", "MCPJam", ".mcpjam/rules/{rule}.md"),
    Editor::per_rule("moltbot", "Moltbot", ".moltbot/rules/{rule}.md"),
    Editor::per_rule("mux", "Mux", ".mux/rules/{rule}.md"),
    Editor::per_rule("neovate", "Neovate", ".neovate/rules/{rule}.md"),
    Editor::per_rule("opencode", "OpenCode", ".opencode/rules/{rule}.md"),
    Editor::per_rule("openhands", "OpenHands", ".openhands/rules/{rule}.md"),
    Editor::per_rule("pi", "Pi", ".pi/rules/{rule}.md"),
    Editor::per_rule("pochi", "Pochi", ".pochi/rules/{rule}.md"),
    Editor::per_rule("qoder", "Qoder", ".qoder/rules/{rule}.md"),
    Editor::per_rule("qwencode", "Qwen Code", ".qwencode/rules/{rule}.md"),
    Editor::per_rule("roocode", "Roo Code", ".roo/rules/{rule}.md"),
    Editor::per_rule("trae", "Trae", ".trae/rules/{rule}.md"),
    Editor::single("windsurf", "Windsurf", ".windsurfrules"),
    Editor::per_rule("zed", "Zed", ".zed/rules/{rule}.md"),
    Editor::per_rule("zencoder", "Zencoder", ".zencoder/rules/{rule}.md"),
];

/// Looks up an editor by key, ignoring ASCII case.
#[must_use]
pub fn find_editor(key: &str) -> Option<&'static Editor> {
    EDITORS
        .iter()
        .find(|editor| editor.key.eq_ignore_ascii_case(key.trim()))
}

/// Splits user-supplied keys into known editors and unknown keys, keeping order
/// and dropping repeated keys.
#[must_use]
pub fn partition_editor_keys<S: AsRef<str>>(keys: &[S]) -> (Vec<&'static Editor>, Vec<String>) {
    let mut known: Vec<&'static Editor> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();

    for key in keys {
        match find_editor(key.as_ref()) {
            Some(editor) => {
                if !known.contains(&editor) {
                    known.push(editor);
                }
            }
            None => unknown.push(key.as_ref().to_lowercase()),
        }
    }

    (known, unknown)
}
