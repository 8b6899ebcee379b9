//! Rule templates, rule choices and install scopes.
//!
//! A [`Rule`] is one policy document shipped with the installer. The
//! user picks rules through a [`RuleChoice`], which may expand to several
//! rules, and an install [`Scope`] deciding which base directory receives
//! the files.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Where rule files are installed.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The current working directory.
    #[default]
    Project,
    /// The user's home directory.
    Global,
}

impl Scope {
    pub const ALL: [Scope; 2] = [Scope::Project, Scope::Global];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Scope::Project => "project",
            Scope::Global => "global",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Scope::Project => "Project",
            Scope::Global => "Global",
        }
    }

    /// Short form naming the base directory, e.g. `project (.)`.
    #[must_use]
    pub fn location(self) -> &'static str {
        match self {
            Scope::Project => "project (.)",
            Scope::Global => "global (~)",
        }
    }

    /// Longer description used by the interactive scope menu.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Scope::Project => "Project - Install to current directory (.)",
            Scope::Global => "Global  - Install to home directory (~)",
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .into_iter()
            .find(|scope| scope.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownScope(s.to_string()))
    }
}

/// A single installable policy document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    JsdocOverInlineComments,
    ManualCleanupComments,
}

impl Rule {
    pub const ALL: [Rule; 2] = [Rule::JsdocOverInlineComments, Rule::ManualCleanupComments];

    /// File name without extension, also used in per-rule editor paths.
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            Rule::JsdocOverInlineComments => "jsdoc-over-inline-comments",
            Rule::ManualCleanupComments => "manual-cleanup-comments",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Rule::JsdocOverInlineComments => "JSDoc Over Inline Comments (always apply)",
            Rule::ManualCleanupComments => "Manual Cleanup Comments (on-demand skill)",
        }
    }

    /// Markdown body of the rule.
    #[must_use]
    pub fn body(self) -> &'static str {
        match self {
            Rule::JsdocOverInlineComments => {
                include_str!("../templates/jsdoc-over-inline-comments.md")
            }
            Rule::ManualCleanupComments => include_str!("../templates/manual-cleanup-comments.md"),
        }
    }

    /// Frontmatter block prepended for editors reading `.mdc` files.
    #[must_use]
    pub fn frontmatter(self) -> &'static str {
        match self {
            Rule::JsdocOverInlineComments => {
                include_str!("../templates/jsdoc-over-inline-comments.frontmatter.md")
            }
            Rule::ManualCleanupComments => {
                include_str!("../templates/manual-cleanup-comments.frontmatter.md")
            }
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// What the user asked to install: one rule, or all of them.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuleChoice {
    #[default]
    #[serde(alias = "jsdoc-over-inline-comments")]
    Jsdoc,
    #[serde(alias = "manual-cleanup-comments")]
    Manual,
    All,
}

impl RuleChoice {
    /// Order in which the interactive rule menu lists the choices.
    pub const MENU_ORDER: [RuleChoice; 3] = [RuleChoice::All, RuleChoice::Jsdoc, RuleChoice::Manual];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            RuleChoice::Jsdoc => "jsdoc",
            RuleChoice::Manual => "manual",
            RuleChoice::All => "all",
        }
    }

    #[must_use]
    pub fn menu_label(self) -> &'static str {
        match self {
            RuleChoice::All => "All rules (both below)",
            RuleChoice::Jsdoc => "jsdoc-over-inline-comments (always apply - prefer JSDoc)",
            RuleChoice::Manual => {
                "manual-cleanup-comments (on-demand skill - clean up comments)"
            }
        }
    }

    /// Expands the choice into the rules to install, in install order.
    #[must_use]
    pub fn rules(self) -> Vec<Rule> {
        match self {
            RuleChoice::Jsdoc => vec![Rule::JsdocOverInlineComments],
            RuleChoice::Manual => vec![Rule::ManualCleanupComments],
            RuleChoice::All => Rule::ALL.to_vec(),
        }
    }
}

impl FromStr for RuleChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jsdoc" | "jsdoc-over-inline-comments" => Ok(RuleChoice::Jsdoc),
            "manual" | "manual-cleanup-comments" => Ok(RuleChoice::Manual),
            "all" => Ok(RuleChoice::All),
            _ => Err(Error::UnknownRule(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_choice_from_str_aliases() {
        assert_eq!("jsdoc".parse::<RuleChoice>().unwrap(), RuleChoice::Jsdoc);
        assert_eq!(
            "JSDoc-Over-Inline-Comments".parse::<RuleChoice>().unwrap(),
            RuleChoice::Jsdoc
        );
        assert_eq!("Manual".parse::<RuleChoice>().unwrap(), RuleChoice::Manual);
        assert_eq!(
            "manual-cleanup-comments".parse::<RuleChoice>().unwrap(),
            RuleChoice::Manual
        );
        assert_eq!("ALL".parse::<RuleChoice>().unwrap(), RuleChoice::All);
    }

    #[test]
    fn test_rule_choice_from_str_unknown() {
        let result = "everything".parse::<RuleChoice>();
        assert!(matches!(result, Err(Error::UnknownRule(ref s)) if s == "everything"));
    }

    #[test]
    fn test_rule_choice_keys_round_trip_through_from_str() {
        for choice in RuleChoice::MENU_ORDER {
            assert_eq!(choice.key().parse::<RuleChoice>().unwrap(), choice);
        }
    }

    #[test]
    fn test_all_expands_to_both_rules_in_order() {
        assert_eq!(
            RuleChoice::All.rules(),
            vec![Rule::JsdocOverInlineComments, Rule::ManualCleanupComments]
        );
        assert_eq!(RuleChoice::Manual.rules(), vec![Rule::ManualCleanupComments]);
    }

    #[test]
    fn test_scope_from_str() {
        assert_eq!("global".parse::<Scope>().unwrap(), Scope::Global);
        assert_eq!(" Project ".parse::<Scope>().unwrap(), Scope::Project);
        assert!("home".parse::<Scope>().is_err());
    }

    #[test]
    fn test_frontmatter_is_a_closed_yaml_block() {
        for rule in Rule::ALL {
            let frontmatter = rule.frontmatter();
            assert!(frontmatter.starts_with("---\n"));
            assert!(frontmatter.trim_end().ends_with("---"));
        }
    }

    #[test]
    fn test_bodies_start_with_heading() {
        for rule in Rule::ALL {
            assert!(rule.body().starts_with("# "), "{rule} has no heading");
        }
    }
}
