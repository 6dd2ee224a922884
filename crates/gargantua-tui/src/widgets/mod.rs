//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`StatusBar`] - Top bar with title, route, module count
//! - [`FooterHints`] - Bottom keybinding hints and path prompt
//! - [`Pane`] - Generic pane with border and optional title
//! - [`ModuleList`] - Left pane listing modules

mod footer_hints;
mod module_list;
mod pane;
mod status_bar;

pub use footer_hints::{hints_for_focus, FooterHints};
pub use module_list::ModuleList;
pub use pane::Pane;
pub use status_bar::{StatusBar, StatusBarContent};
