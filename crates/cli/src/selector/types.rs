//! Type definitions for the selector.
//!
//! This module defines the options a selector is built from, the abstract
//! actions it reacts to, what a run produces, and the repaint plan each
//! action leaves behind.

use std::fmt::{Display, Formatter};

/// One selectable entry.
///
/// The key is what the caller gets back; the label is what the user sees.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SelectorOption {
    pub key: String,
    pub label: String,
}

impl SelectorOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

impl Display for SelectorOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Whether the selector resolves to one key or a set of keys.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Single,
    Multi,
}

/// Input the selector reacts to, decoupled from terminal key codes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Home,
    End,
    /// Flip the option under the cursor (multi-select only)
    Toggle,
    /// Select every option (multi-select only)
    SelectAll,
    /// Clear the selection (multi-select only)
    SelectNone,
    Confirm,
    Interrupt,
    /// The terminal now has this many rows
    Resize { rows: u16 },
    /// Anything the selector does not handle
    Ignored,
}

/// The keys a selector resolved to.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Choice {
    One(String),
    /// Selected keys in the order they were selected
    Many(Vec<String>),
}

impl Choice {
    /// All chosen keys; a single choice is a one-element slice.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        match self {
            Choice::One(key) => std::slice::from_ref(key),
            Choice::Many(keys) => keys,
        }
    }
}

/// How a selector run ended.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Chosen(Choice),
    Interrupted,
}

/// Screen regions left stale by an action.
///
/// `items` holds option indexes, not screen rows; indexes outside the
/// visible window are skipped when painting.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Damage {
    /// Everything, including the header (viewport geometry changed)
    pub full: bool,
    /// Both scroll indicators and every visible item row
    pub viewport: bool,
    pub items: Vec<usize>,
    pub status: bool,
    pub message: bool,
}

impl Damage {
    #[must_use]
    pub fn full() -> Self {
        Self {
            full: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.full && !self.viewport && self.items.is_empty() && !self.status && !self.message
    }
}

/// Result of applying one action to the selector state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Transition {
    pub damage: Damage,
    /// Set when the action ends the run
    pub outcome: Option<Outcome>,
}

impl Transition {
    #[must_use]
    pub fn unchanged() -> Self {
        Self::repaint(Damage::default())
    }

    #[must_use]
    pub fn repaint(damage: Damage) -> Self {
        Self {
            damage,
            outcome: None,
        }
    }

    #[must_use]
    pub fn finish(outcome: Outcome) -> Self {
        Self {
            damage: Damage::default(),
            outcome: Some(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_option_display_uses_label() {
        let option = SelectorOption::new("cursor", "Cursor");
        assert_eq!(format!("{option}"), "Cursor");
    }

    #[test]
    fn test_choice_keys() {
        let one = Choice::One("project".to_string());
        assert_eq!(one.keys(), ["project".to_string()]);

        let many = Choice::Many(vec!["zed".to_string(), "aider".to_string()]);
        assert_eq!(many.keys(), ["zed".to_string(), "aider".to_string()]);
    }

    #[test]
    fn test_damage_is_empty() {
        assert!(Damage::default().is_empty());
        assert!(!Damage::full().is_empty());

        let status_only = Damage {
            status: true,
            ..Damage::default()
        };
        assert!(!status_only.is_empty());
    }

    #[test]
    fn test_transition_unchanged_has_no_outcome() {
        let transition = Transition::unchanged();
        assert!(transition.damage.is_empty());
        assert!(transition.outcome.is_none());
    }
}
