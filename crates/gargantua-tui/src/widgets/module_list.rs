//! Module list widget for the left pane.
//!
//! ```text
//! ╭ Modules ─────────────╮
//! │▸ user_profile        │
//! │  orders              │
//! ╰──────────────────────╯
//! ```
//!
//! Each entry is a link to `/<name>`. The entry matching the current route
//! is marked; the cursor row is highlighted.

use gargantua_engine::ModuleLister;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::Pane;
use crate::theme::{BorderSet, Theme};

/// Module list widget.
pub struct ModuleList<'a> {
    lister: &'a ModuleLister,
    selected: usize,
    active: Option<&'a str>,
    focused: bool,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> ModuleList<'a> {
    /// Create a new module list.
    pub fn new(lister: &'a ModuleLister, theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            lister,
            selected: 0,
            active: None,
            focused: false,
            theme,
            borders,
        }
    }

    /// Set the cursor row.
    #[must_use]
    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Set the module the current route points at.
    #[must_use]
    pub fn active(mut self, active: Option<&'a str>) -> Self {
        self.active = active;
        self
    }

    /// Set whether this list is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// Truncate `text` to `width` columns, ending in `…` when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

impl Widget for ModuleList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let pane = Pane::new(self.theme, self.borders)
            .title(" Modules ")
            .focused(self.focused);
        let inner = pane.inner(area);

        let modules = self.lister.modules();
        if modules.is_empty() {
            let message = if self.lister.is_loaded() {
                "No modules"
            } else {
                "Loading..."
            };
            pane.content(message)
                .content_style(Style::default().fg(self.theme.muted))
                .render(area, buf);
            return;
        }
        pane.render(area, buf);

        let height = inner.height as usize;
        if height == 0 {
            return;
        }
        let offset = self.selected.saturating_sub(height - 1);
        let name_width = (inner.width as usize).saturating_sub(2);

        let lines: Vec<Line<'_>> = modules
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, module)| {
                let is_active = self.active == Some(module.name.as_str());
                let marker = if is_active { "▸ " } else { "  " };

                let mut style = if is_active {
                    Style::default().fg(self.theme.primary)
                } else {
                    Style::default().fg(self.theme.text)
                };
                if i == self.selected && self.focused {
                    style = style.bg(self.theme.surface).add_modifier(Modifier::BOLD);
                }

                Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(truncate(&module.name, name_width), style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
