//! Plain-text messages printed before and after an install.

use std::fmt::Write;

use comment_rules_core::editors::{Editor, EDITORS};
use comment_rules_core::installer::{describe_rules, EditorReport};
use comment_rules_core::rules::{Rule, Scope};

/// Width of the key column in the editor list
const KEY_COLUMN_WIDTH: usize = 14;

/// Every supported editor key and name, an `all` entry and the total.
#[must_use]
pub fn editor_list() -> String {
    let mut text = String::from("\n[i] Supported editors/agents:\n\n");

    for editor in EDITORS {
        let _ = writeln!(
            text,
            "    {:<width$} - {}",
            editor.key,
            editor.name,
            width = KEY_COLUMN_WIDTH
        );
    }
    let _ = writeln!(
        text,
        "    {:<width$} - Install for all editors",
        "all",
        width = KEY_COLUMN_WIDTH
    );
    let _ = writeln!(text, "\n    Total: {} editors", EDITORS.len());

    text
}

#[must_use]
pub fn unknown_editors(keys: &[String]) -> String {
    format!("\n[!] Unknown editor(s): {}", keys.join(", "))
}

/// Announces an install for a list of editors.
#[must_use]
pub fn install_header(rules: &[Rule], editor_count: usize) -> String {
    format!(
        "\n[+] Installing {} for {editor_count} editor(s)...\n",
        describe_rules(rules)
    )
}

/// Announces an install for every supported editor.
#[must_use]
pub fn install_all_header(rules: &[Rule], scope: Scope) -> String {
    format!(
        "\n[+] Installing {} for all editors ({})...\n",
        describe_rules(rules),
        scope.location()
    )
}

/// One line per editor; on a dry run the planned files are listed beneath it.
#[must_use]
pub fn editor_done(report: &EditorReport, dry_run: bool) -> String {
    let mut text = editor_ok(report.editor);

    if dry_run {
        for file in &report.files {
            let _ = write!(text, "\n        [dry-run] {file}");
        }
    }

    text
}

fn editor_ok(editor: &Editor) -> String {
    format!("    [ok] {}", editor.name)
}

#[must_use]
pub fn install_complete(dry_run: bool) -> String {
    if dry_run {
        "\n[*] Dry run complete, nothing was written.\n".to_string()
    } else {
        "\n[*] Install complete!\n".to_string()
    }
}
