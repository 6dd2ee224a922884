//! Pane focus for the two-pane shell.

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPane {
    /// Module list (left).
    #[default]
    List,
    /// Detail view (right).
    Detail,
}

impl FocusedPane {
    /// Toggle focus to the other pane.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::List => Self::Detail,
            Self::Detail => Self::List,
        }
    }
}
