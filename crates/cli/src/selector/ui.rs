use std::io::{stdout, Write};

use crossterm::terminal;
use log::debug;

use super::colors::Palette;
use super::input::{ActionSource, TerminalEvents};
use super::render::Painter;
use super::state::{validate_options, SelectorState};
use super::terminal::TerminalGuard;
use super::types::{Choice, Mode, Outcome, SelectorOption};
use comment_rules_core::error::Result;

/// An interactive list menu.
///
/// Built once, then [`run`](Selector::run) takes over the terminal until the
/// user confirms. Ctrl+C restores the terminal and exits the process.
#[derive(Clone, Debug)]
pub struct Selector {
    title: String,
    options: Vec<SelectorOption>,
    mode: Mode,
    step: Option<usize>,
    palette: Palette,
}

impl Selector {
    /// # Errors
    ///
    /// Returns an error if `options` is empty or two options share a key.
    pub fn new(title: impl Into<String>, options: Vec<SelectorOption>, mode: Mode) -> Result<Self> {
        validate_options(&options)?;

        Ok(Self {
            title: title.into(),
            options,
            mode,
            step: None,
            palette: Palette::default(),
        })
    }

    /// # Errors
    ///
    /// See [`Selector::new`].
    pub fn single(title: impl Into<String>, options: Vec<SelectorOption>) -> Result<Self> {
        Self::new(title, options, Mode::Single)
    }

    /// # Errors
    ///
    /// See [`Selector::new`].
    pub fn multi(title: impl Into<String>, options: Vec<SelectorOption>) -> Result<Self> {
        Self::new(title, options, Mode::Multi)
    }

    /// Shows wizard progress with `step` (0-based) as the current step.
    #[must_use]
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = Some(step);
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn step(&self) -> Option<usize> {
        self.step
    }

    /// Runs the selector on the real terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched to raw mode, read
    /// from or written to.
    pub fn run(self) -> Result<Choice> {
        let (_, rows) = terminal::size()?;
        let guard = TerminalGuard::acquire()?;

        match self.run_with(&mut TerminalEvents, stdout(), rows)? {
            Outcome::Chosen(choice) => Ok(choice),
            Outcome::Interrupted => {
                drop(guard);
                std::process::exit(0);
            }
        }
    }

    /// Runs the selector against any action source and output.
    ///
    /// Every action is applied and its repaint fully written before the next
    /// action is read.
    ///
    /// # Errors
    ///
    /// Returns an error if reading an action or writing output fails.
    pub fn run_with<S, W>(&self, source: &mut S, out: W, terminal_rows: u16) -> Result<Outcome>
    where
        S: ActionSource,
        W: Write,
    {
        let mut state = SelectorState::new(self.options.clone(), self.mode, terminal_rows)?;
        let mut painter = Painter::new(out, self.title.as_str(), self.step, self.palette.clone());

        debug!(
            "Selector '{}' started with {} options, {} visible",
            self.title,
            state.total(),
            state.visible()
        );
        painter.draw_full(&state)?;

        loop {
            let action = source.next_action()?;
            let transition = state.apply(action);

            if let Some(outcome) = transition.outcome {
                debug!("Selector '{}' finished: {:?}", self.title, outcome);
                return Ok(outcome);
            }

            painter.draw(&state, &transition.damage)?;
        }
    }
}
