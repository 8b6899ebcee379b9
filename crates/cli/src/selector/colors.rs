use crossterm::style::{Color, StyledContent, Stylize};

/// Colors the painter draws with.
///
/// Passed to the painter explicitly so nothing about styling lives in
/// global state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Palette {
    /// Cursor row and the active wizard step
    pub accent: Color,
    /// Checked items and completed wizard steps
    pub checked: Color,
    /// Confirm key hint and validation messages
    pub warning: Color,
    pub title: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            checked: Color::Green,
            warning: Color::Yellow,
            title: Color::White,
        }
    }
}

impl Palette {
    pub fn accent(&self, text: impl Into<String>) -> StyledContent<String> {
        text.into().with(self.accent).bold()
    }

    pub fn checked(&self, text: impl Into<String>) -> StyledContent<String> {
        text.into().with(self.checked)
    }

    pub fn warning(&self, text: impl Into<String>) -> StyledContent<String> {
        text.into().with(self.warning)
    }

    pub fn title(&self, text: impl Into<String>) -> StyledContent<String> {
        text.into().with(self.title).bold()
    }
}
