//! The interactive install wizard.
//!
//! Walks through scope, rules, editors and a final confirmation, one
//! [`Selector`] per step, with the progress line showing where the user is.
//! Steps already answered on the command line are skipped.

use log::debug;

use crate::selector::{Choice, Selector, SelectorOption};
use comment_rules_core::editors::{partition_editor_keys, Editor, EDITORS};
use comment_rules_core::error::{Error, Result};
use comment_rules_core::installer::describe_rules;
use comment_rules_core::rules::{RuleChoice, Scope};

pub const SCOPE_STEP: usize = 0;
pub const RULES_STEP: usize = 1;
pub const EDITORS_STEP: usize = 2;
pub const CONFIRM_STEP: usize = 3;

const INSTALL_KEY: &str = "install";
const CANCEL_KEY: &str = "cancel";

/// Runs a selector and hands back what the user chose.
pub trait Prompter {
    /// # Errors
    ///
    /// Returns an error if the selector cannot run.
    fn choose(&mut self, selector: Selector) -> Result<Choice>;
}

/// Prompts on the real terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn choose(&mut self, selector: Selector) -> Result<Choice> {
        selector.run()
    }
}

/// Answers already known before the wizard starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Presets {
    pub scope: Option<Scope>,
    pub rule: Option<RuleChoice>,
}

/// Everything the wizard collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSelection {
    pub scope: Scope,
    pub rule: RuleChoice,
    pub editors: Vec<&'static Editor>,
}

#[must_use]
pub fn scope_options() -> Vec<SelectorOption> {
    Scope::ALL
        .iter()
        .map(|scope| SelectorOption::new(scope.key(), scope.description()))
        .collect()
}

#[must_use]
pub fn rule_options() -> Vec<SelectorOption> {
    RuleChoice::MENU_ORDER
        .iter()
        .map(|choice| SelectorOption::new(choice.key(), choice.menu_label()))
        .collect()
}

#[must_use]
pub fn editor_options() -> Vec<SelectorOption> {
    EDITORS
        .iter()
        .map(|editor| SelectorOption::new(editor.key, editor.name))
        .collect()
}

#[must_use]
pub fn confirm_options() -> Vec<SelectorOption> {
    vec![
        SelectorOption::new(INSTALL_KEY, "Install"),
        SelectorOption::new(CANCEL_KEY, "Cancel"),
    ]
}

/// Runs the wizard.
///
/// Returns `None` when the user cancels at the confirmation step.
///
/// # Errors
///
/// Returns an error if a selector fails or returns a key it was not offered.
pub fn run_wizard<P: Prompter>(
    prompter: &mut P,
    presets: Presets,
) -> Result<Option<WizardSelection>> {
    let scope = match presets.scope {
        Some(scope) => scope,
        None => {
            let selector = Selector::single("=== Comment Rules Installer ===", scope_options())?
                .with_step(SCOPE_STEP);
            single_key(prompter.choose(selector)?)?.parse()?
        }
    };
    debug!("Wizard scope: {scope:?}");

    let rule = match presets.rule {
        Some(rule) => rule,
        None => {
            let title = format!("=== Select Rules [{}] ===", scope.location());
            let selector = Selector::single(title, rule_options())?.with_step(RULES_STEP);
            single_key(prompter.choose(selector)?)?.parse()?
        }
    };
    debug!("Wizard rule: {rule:?}");

    let title = format!("=== Select Editors [{}] ===", scope.location());
    let selector = Selector::multi(title, editor_options())?.with_step(EDITORS_STEP);
    let choice = prompter.choose(selector)?;
    let (editors, unknown) = partition_editor_keys(choice.keys());
    if !unknown.is_empty() {
        return Err(Error::UnknownEditors(unknown.join(", ")));
    }
    debug!("Wizard editors: {}", choice.keys().join(", "));

    let title = format!(
        "=== Install {} for {} editor(s) [{}]? ===",
        describe_rules(&rule.rules()),
        editors.len(),
        scope.location()
    );
    let selector = Selector::single(title, confirm_options())?.with_step(CONFIRM_STEP);
    if single_key(prompter.choose(selector)?)? != INSTALL_KEY {
        debug!("Wizard cancelled at confirmation");
        return Ok(None);
    }

    Ok(Some(WizardSelection {
        scope,
        rule,
        editors,
    }))
}

fn single_key(choice: Choice) -> Result<String> {
    match choice {
        Choice::One(key) => Ok(key),
        Choice::Many(keys) => Err(Error::Misc(format!(
            "Expected a single choice, got: {}",
            keys.join(", ")
        ))),
    }
}
