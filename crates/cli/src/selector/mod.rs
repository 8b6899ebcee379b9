//! Interactive list selection in the terminal.
//!
//! A [`Selector`] shows a titled list of options and lets the user pick one
//! (single-select) or any non-empty subset (multi-select). Only the rows an
//! action changes are repainted, so long lists stay flicker-free.
//!
//! # Key Bindings
//!
//! - Up/Down (or k/j) move the cursor, PageUp/PageDown move a window at a time
//! - Home/End jump to the first and last option
//! - Space toggles, A selects all, N clears (multi-select only)
//! - Enter confirms
//! - Ctrl+C restores the terminal and exits
//!
//! The state machine in [`state`] has no terminal dependency; [`render`] and
//! [`input`] translate between it and crossterm.

pub mod colors;
pub mod input;
pub mod render;
pub mod state;
pub mod terminal;
pub mod types;
pub mod ui;

pub use types::{Choice, Mode, SelectorOption};
pub use ui::Selector;
