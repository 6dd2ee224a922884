//! Layout components for the TUI.
//!
//! This module provides:
//! - [`render_shell`] - Main shell layout renderer
//! - [`FocusedPane`] - Which pane has keyboard focus

mod focus;
mod shell;

pub use focus::FocusedPane;
pub use shell::render_shell;

#[cfg(test)]
pub(crate) use shell::render_to_buffer;
