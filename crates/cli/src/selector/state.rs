//! Cursor, scroll and selection state for one selector run.
//!
//! [`SelectorState::apply`] is the whole navigation state machine: it takes an
//! [`Action`], mutates the state and reports the rows it left stale so the
//! painter can repaint exactly those.

use std::collections::HashSet;
use std::ops::Range;

use indexmap::IndexSet;

use super::types::{Action, Choice, Damage, Mode, Outcome, SelectorOption, Transition};
use comment_rules_core::error::{Error, Result};

/// Terminal rows taken by everything except the item rows
pub const RESERVED_ROWS: u16 = 10;
pub const MIN_VISIBLE: usize = 5;
pub const MAX_VISIBLE: usize = 20;

/// Shown when a multi-select is confirmed with nothing selected
pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least 1 option";

/// Number of item rows shown for a terminal of `terminal_rows` rows.
#[must_use]
pub fn visible_count(terminal_rows: u16, total: usize) -> usize {
    let available =
        usize::from(terminal_rows.saturating_sub(RESERVED_ROWS)).clamp(MIN_VISIBLE, MAX_VISIBLE);
    available.min(total)
}

/// Rejects option lists a selector cannot run with.
///
/// # Errors
///
/// Returns [`Error::EmptySelector`] for an empty list and
/// [`Error::DuplicateOptionKey`] when two options share a key.
pub fn validate_options(options: &[SelectorOption]) -> Result<()> {
    if options.is_empty() {
        return Err(Error::EmptySelector);
    }

    let mut keys = HashSet::new();
    for option in options {
        if !keys.insert(option.key.as_str()) {
            return Err(Error::DuplicateOptionKey(option.key.clone()));
        }
    }

    Ok(())
}

#[derive(Clone, PartialEq, Debug)]
pub struct SelectorState {
    options: Vec<SelectorOption>,
    mode: Mode,
    cursor: usize,
    scroll: usize,
    selected: IndexSet<String>,
    visible: usize,
    message: Option<String>,
}

impl SelectorState {
    /// Creates the state for a terminal with `terminal_rows` rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the options fail [`validate_options`].
    pub fn new(options: Vec<SelectorOption>, mode: Mode, terminal_rows: u16) -> Result<Self> {
        validate_options(&options)?;
        let visible = visible_count(terminal_rows, options.len());

        Ok(Self {
            options,
            mode,
            cursor: 0,
            scroll: 0,
            selected: IndexSet::new(),
            visible,
            message: None,
        })
    }

    pub fn options(&self) -> &[SelectorOption] {
        &self.options
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn total(&self) -> usize {
        self.options.len()
    }

    pub fn selected(&self) -> &IndexSet<String> {
        &self.selected
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.options
            .get(index)
            .is_some_and(|option| self.selected.contains(&option.key))
    }

    pub fn max_scroll(&self) -> usize {
        self.total().saturating_sub(self.visible)
    }

    /// Option indexes currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        self.scroll..(self.scroll + self.visible).min(self.total())
    }

    pub fn hidden_above(&self) -> usize {
        self.scroll
    }

    pub fn hidden_below(&self) -> usize {
        self.total() - self.visible_range().end
    }

    /// Moves the window so the cursor is inside it; returns whether it moved.
    pub fn update_scroll(&mut self) -> bool {
        let previous = self.scroll;
        let max_scroll = self.max_scroll();

        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + self.visible {
            self.scroll = (self.cursor + 1 - self.visible).min(max_scroll);
        }

        self.scroll = self.scroll.min(max_scroll);

        self.scroll != previous
    }

    /// Applies one action.
    pub fn apply(&mut self, action: Action) -> Transition {
        let last = self.total() - 1;
        let multi = self.mode == Mode::Multi;

        match action {
            Action::MoveUp => self.move_cursor_to(self.cursor.saturating_sub(1)),
            Action::MoveDown => self.move_cursor_to((self.cursor + 1).min(last)),
            Action::PageUp => self.move_cursor_to(self.cursor.saturating_sub(self.visible)),
            Action::PageDown => self.move_cursor_to((self.cursor + self.visible).min(last)),
            Action::Home => self.move_cursor_to(0),
            Action::End => self.move_cursor_to(last),
            Action::Toggle if multi => self.toggle(),
            Action::SelectAll if multi => self.select_all(),
            Action::SelectNone if multi => self.select_none(),
            Action::Confirm => self.confirm(),
            Action::Interrupt => Transition::finish(Outcome::Interrupted),
            Action::Resize { rows } => self.resize(rows),
            _ => Transition::unchanged(),
        }
    }

    fn clear_message(&mut self) -> bool {
        self.message.take().is_some()
    }

    fn move_cursor_to(&mut self, target: usize) -> Transition {
        let previous = self.cursor;
        let mut damage = Damage {
            message: self.clear_message(),
            ..Damage::default()
        };

        if target == previous {
            return Transition::repaint(damage);
        }

        self.cursor = target;
        if self.update_scroll() {
            damage.viewport = true;
        } else {
            damage.items = vec![previous, target];
        }
        damage.status = true;

        Transition::repaint(damage)
    }

    fn toggle(&mut self) -> Transition {
        let key = self.options[self.cursor].key.clone();
        if !self.selected.shift_remove(&key) {
            self.selected.insert(key);
        }

        Transition::repaint(Damage {
            items: vec![self.cursor],
            status: true,
            message: self.clear_message(),
            ..Damage::default()
        })
    }

    fn select_all(&mut self) -> Transition {
        let before = self.selected.len();
        for option in &self.options {
            self.selected.insert(option.key.clone());
        }
        let changed = self.selected.len() != before;
        self.selection_repaint(changed)
    }

    fn select_none(&mut self) -> Transition {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        self.selection_repaint(changed)
    }

    fn selection_repaint(&mut self, changed: bool) -> Transition {
        let mut damage = Damage {
            message: self.clear_message(),
            ..Damage::default()
        };

        if changed {
            damage.items = self.visible_range().collect();
            damage.status = true;
        }

        Transition::repaint(damage)
    }

    fn confirm(&mut self) -> Transition {
        match self.mode {
            Mode::Single => Transition::finish(Outcome::Chosen(Choice::One(
                self.options[self.cursor].key.clone(),
            ))),
            Mode::Multi if self.selected.is_empty() => {
                self.message = Some(EMPTY_SELECTION_MESSAGE.to_string());
                Transition::repaint(Damage {
                    message: true,
                    ..Damage::default()
                })
            }
            Mode::Multi => Transition::finish(Outcome::Chosen(Choice::Many(
                self.selected.iter().cloned().collect(),
            ))),
        }
    }

    fn resize(&mut self, rows: u16) -> Transition {
        self.visible = visible_count(rows, self.total());
        self.update_scroll();
        Transition::repaint(Damage::full())
    }
}
