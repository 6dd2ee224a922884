//! Footer hints widget.
//!
//! Format: `Modules            [j/k] move │ [Enter] open │ [Tab] focus │ [?] help`
//!
//! While the path prompt is open the footer shows the prompt instead:
//! `Go to: /user_pro█`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::layout::FocusedPane;
use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Tab", "Enter").
    pub key: String,
    /// The action description (e.g., "focus", "open").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    focused_pane: Option<FocusedPane>,
    prompt: Option<&'a str>,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            focused_pane: None,
            prompt: None,
        }
    }

    /// Set focused pane to display.
    #[must_use]
    pub fn focused_pane(mut self, pane: FocusedPane) -> Self {
        self.focused_pane = Some(pane);
        self
    }

    /// Show the path prompt with the given input instead of hints.
    #[must_use]
    pub fn prompt(mut self, input: Option<&'a str>) -> Self {
        self.prompt = input;
        self
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(input) = self.prompt {
            let line = Line::from(vec![
                Span::styled("Go to: ", Style::default().fg(self.theme.primary)),
                Span::styled(input, Style::default().fg(self.theme.text)),
                Span::styled("█", Style::default().fg(self.theme.subtext)),
            ]);
            Paragraph::new(line)
                .style(Style::default().bg(self.theme.surface))
                .render(area, buf);
            return;
        }

        let mut left_spans = Vec::new();
        let mut right_spans = Vec::new();

        if let Some(pane) = self.focused_pane {
            let pane_str = match pane {
                FocusedPane::List => "Modules",
                FocusedPane::Detail => "Detail",
            };
            left_spans.push(Span::styled(pane_str, Style::default().fg(self.theme.primary)));
        }
        let left_width: usize = left_spans.iter().map(|s| s.content.width()).sum();

        // Hints that do not fit after a one-column gap are dropped from the right
        let available = (area.width as usize).saturating_sub(left_width + 1);
        let mut right_width = 0;
        for (i, hint) in self.hints.iter().enumerate() {
            let separator = if i > 0 { 3 } else { 0 };
            let width = separator + hint.key.width() + hint.action.width() + 3;
            if right_width + width > available {
                break;
            }
            right_width += width;

            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }
            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(&hint.key, Style::default().fg(self.theme.primary)));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(&hint.action, Style::default().fg(self.theme.subtext)));
        }

        let padding = (area.width as usize).saturating_sub(left_width + right_width);
        if padding > 0 {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }
        left_spans.extend(right_spans);

        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(self.theme.surface))
            .render(area, buf);
    }
}

/// Hints for the focused pane.
#[must_use]
pub fn hints_for_focus(focused: FocusedPane) -> Vec<KeyHint> {
    let mut hints = match focused {
        FocusedPane::List => vec![KeyHint::new("j/k", "move"), KeyHint::new("Enter", "open")],
        FocusedPane::Detail => vec![KeyHint::new("j/k", "scroll")],
    };
    hints.push(KeyHint::new("g", "go to"));
    hints.push(KeyHint::new("Esc", "back"));
    hints.push(KeyHint::new("Tab", "focus"));
    hints.push(KeyHint::new("?", "help"));
    hints
}
