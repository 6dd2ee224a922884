//! Border sets for Unicode and ASCII fallback.
//!
//! Supports `NO_COLOR` environment variable by using ASCII-leaning borders.

use ratatui::symbols::border;

/// Which family of border glyphs to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Rounded and thick box-drawing characters.
    #[default]
    Unicode,
    /// Plain and double lines only.
    Ascii,
}

impl BorderMode {
    /// Pick the mode from the environment, respecting `NO_COLOR`.
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            Self::Ascii
        } else {
            Self::Unicode
        }
    }
}

/// Border set based on border mode.
#[derive(Debug, Clone, Default)]
pub struct BorderSet {
    mode: BorderMode,
}

impl BorderSet {
    /// Create a new border set with the specified mode.
    pub fn new(mode: BorderMode) -> Self {
        Self { mode }
    }

    /// Get the current mode.
    pub fn mode(&self) -> BorderMode {
        self.mode
    }

    /// Unfocused pane borders.
    pub fn normal(&self) -> border::Set {
        match self.mode {
            BorderMode::Unicode => border::ROUNDED,
            BorderMode::Ascii => border::PLAIN,
        }
    }

    /// Focused pane borders.
    pub fn focused(&self) -> border::Set {
        match self.mode {
            BorderMode::Unicode => border::THICK,
            BorderMode::Ascii => border::DOUBLE,
        }
    }
}
