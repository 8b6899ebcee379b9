//! Drawing the selector onto the terminal.
//!
//! Rows are 1-indexed from the top of the screen:
//!
//! | Row              | Content                               |
//! |------------------|---------------------------------------|
//! | 1                | blank                                 |
//! | 2                | wizard progress (blank without step)  |
//! | 3                | blank                                 |
//! | 4                | title                                 |
//! | 5                | key hints                             |
//! | 6                | "... N more above"                    |
//! | 7 .. 7+visible-1 | items                                 |
//! | 7+visible        | "... N more below"                    |
//! | 8+visible        | position and selection count          |
//! | 9+visible        | validation message                    |

use std::io::Write;

use crossterm::cursor::{self, MoveTo};
use crossterm::queue;
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{Clear, ClearType};
use itertools::Itertools;

use super::colors::Palette;
use super::state::SelectorState;
use super::terminal::ClearScreen;
use super::types::{Damage, Mode};
use comment_rules_core::error::Result;

/// Wizard steps shown in the progress line
pub const STEPS: [&str; 4] = ["Scope", "Rules", "Editors", "Confirm"];

const PROGRESS_ROW: u16 = 2;
const TITLE_ROW: u16 = 4;
const HINT_ROW: u16 = 5;
const MORE_ABOVE_ROW: u16 = 6;
const FIRST_ITEM_ROW: u16 = 7;

/// Writes selector frames to `out`.
pub struct Painter<W: Write> {
    out: W,
    title: String,
    step: Option<usize>,
    palette: Palette,
}

impl<W: Write> Painter<W> {
    pub fn new(out: W, title: impl Into<String>, step: Option<usize>, palette: Palette) -> Self {
        Self {
            out,
            title: title.into(),
            step,
            palette,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Clears the screen and draws every row.
    pub fn draw_full(&mut self, state: &SelectorState) -> Result<()> {
        queue!(self.out, ClearScreen, cursor::Hide)?;
        self.draw_header(state)?;
        self.draw_scroll_indicators(state)?;
        self.draw_items(state)?;
        self.draw_status(state)?;
        self.draw_message(state)?;
        self.out.flush()?;
        Ok(())
    }

    /// Repaints only the regions in `damage`; writes nothing when it is empty.
    pub fn draw(&mut self, state: &SelectorState, damage: &Damage) -> Result<()> {
        if damage.is_empty() {
            return Ok(());
        }

        if damage.full {
            return self.draw_full(state);
        }

        if damage.viewport {
            self.draw_scroll_indicators(state)?;
            self.draw_items(state)?;
        } else {
            for &index in &damage.items {
                self.draw_item(state, index)?;
            }
        }

        if damage.status {
            self.draw_status(state)?;
        }

        if damage.message {
            self.draw_message(state)?;
        }

        self.out.flush()?;
        Ok(())
    }

    fn line(&mut self, row: u16, text: &str) -> Result<()> {
        queue!(
            self.out,
            MoveTo(0, row - 1),
            Clear(ClearType::CurrentLine),
            Print(text)
        )?;
        Ok(())
    }

    fn draw_header(&mut self, state: &SelectorState) -> Result<()> {
        let progress = match self.step {
            Some(step) => format!("  {}", self.progress_line(step)),
            None => String::new(),
        };
        let title = format!("  {}", self.palette.title(self.title.as_str()));
        let hints = self.hint_line(state.mode());

        self.line(1, "")?;
        self.line(PROGRESS_ROW, &progress)?;
        self.line(3, "")?;
        self.line(TITLE_ROW, &title)?;
        self.line(HINT_ROW, &hints)
    }

    fn progress_line(&self, current: usize) -> String {
        let separator = format!(" {} ", ">".dim());

        STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| match i.cmp(&current) {
                std::cmp::Ordering::Less => self.palette.checked(*step).bold().to_string(),
                std::cmp::Ordering::Equal => self.palette.accent(format!("[{step}]")).to_string(),
                std::cmp::Ordering::Greater => (*step).dim().to_string(),
            })
            .join(&separator)
    }

    fn hint_line(&self, mode: Mode) -> String {
        let key = |label: &str| self.palette.accent(label);
        let confirm = self.palette.warning("[Enter]").bold();

        match mode {
            Mode::Multi => format!(
                "  {} {}  {} {}  {} {}  {} {}",
                key("[Space]"),
                "Toggle".dim(),
                key("[A]"),
                "All".dim(),
                key("[N]"),
                "None".dim(),
                confirm,
                "Confirm".dim()
            ),
            Mode::Single => format!(
                "  {} {}  {} {}",
                key("[Up/Down]"),
                "Move".dim(),
                confirm,
                "Select".dim()
            ),
        }
    }

    fn draw_scroll_indicators(&mut self, state: &SelectorState) -> Result<()> {
        let above = match state.hidden_above() {
            0 => String::new(),
            n => format!("  {}", format!("... {n} more above").dim()),
        };
        let below = match state.hidden_below() {
            0 => String::new(),
            n => format!("  {}", format!("... {n} more below").dim()),
        };

        self.line(MORE_ABOVE_ROW, &above)?;
        self.line(more_below_row(state), &below)
    }

    fn draw_items(&mut self, state: &SelectorState) -> Result<()> {
        for index in state.visible_range() {
            self.draw_item(state, index)?;
        }
        Ok(())
    }

    fn draw_item(&mut self, state: &SelectorState, index: usize) -> Result<()> {
        if !state.visible_range().contains(&index) {
            return Ok(());
        }

        let row = FIRST_ITEM_ROW + (index - state.scroll()) as u16;
        let text = self.item_line(state, index);
        self.line(row, &text)
    }

    fn item_line(&self, state: &SelectorState, index: usize) -> String {
        let label = &state.options()[index].label;
        let is_cursor = index == state.cursor();

        match state.mode() {
            Mode::Multi => {
                let checked = state.is_selected(index);
                match (is_cursor, checked) {
                    (true, true) => format!(
                        "  {}{}",
                        self.palette.accent("> "),
                        self.palette.checked(format!("[x] {label}")).bold()
                    ),
                    (true, false) => format!("  {}", self.palette.accent(format!("> [ ] {label}"))),
                    (false, true) => format!("    {}", self.palette.checked(format!("[x] {label}"))),
                    (false, false) => format!("    [ ] {label}"),
                }
            }
            Mode::Single => {
                if is_cursor {
                    format!("  {}", self.palette.accent(format!("> {label}")))
                } else {
                    format!("    {}", label.clone().dim())
                }
            }
        }
    }

    fn draw_status(&mut self, state: &SelectorState) -> Result<()> {
        let position = format!("[{}/{}]", state.cursor() + 1, state.total());
        let status = match state.mode() {
            Mode::Multi => format!("{position}  Selected: {}", state.selected().len()),
            Mode::Single => position,
        };

        self.line(status_row(state), &format!("  {}", status.dim()))
    }

    fn draw_message(&mut self, state: &SelectorState) -> Result<()> {
        let message = match state.message() {
            Some(message) => format!("  {}", self.palette.warning(format!("[!] {message}"))),
            None => String::new(),
        };

        self.line(message_row(state), &message)
    }
}

fn more_below_row(state: &SelectorState) -> u16 {
    FIRST_ITEM_ROW + state.visible() as u16
}

fn status_row(state: &SelectorState) -> u16 {
    more_below_row(state) + 1
}

fn message_row(state: &SelectorState) -> u16 {
    more_below_row(state) + 2
}
