//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Color palette (Catppuccin Mocha)
//! - [`BorderSet`] - Border characters with Unicode/ASCII fallback

mod borders;
mod colors;

pub use borders::{BorderMode, BorderSet};
pub use colors::Theme;
