//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - The active section, offset and dimmed while a transition plays
//! - The bottom navigation bar and the copy toast
//! - The optional log panel
//! - Theme management

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub use render::render;
pub use theme::{ColorSpec, Theme};
