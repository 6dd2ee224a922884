//! Title bar widget for the top of the TUI.
//!
//! Format: `● Gargantua │ /user_profile │ 2 modules │ → hint`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// Status bar content.
#[derive(Debug, Clone, Default)]
pub struct StatusBarContent {
    /// Application title.
    pub title: String,
    /// Current route path.
    pub route: String,
    /// Module count, once the listing has loaded.
    pub modules: Option<usize>,
    /// Next action hint.
    pub hint: Option<String>,
}

impl StatusBarContent {
    /// Content for the given route and module count.
    pub fn new(route: impl Into<String>, modules: Option<usize>) -> Self {
        Self {
            title: "Gargantua".into(),
            route: route.into(),
            modules,
            hint: None,
        }
    }

    /// Create a "terminal too small" warning.
    pub fn too_small(min_width: u16, min_height: u16) -> Self {
        Self {
            title: "Gargantua".into(),
            route: "Terminal too small".into(),
            modules: None,
            hint: Some(format!("Resize to at least {min_width}x{min_height}")),
        }
    }

    /// Attach a hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Status bar widget.
pub struct StatusBar<'a> {
    content: &'a StatusBarContent,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget.
    pub fn new(content: &'a StatusBarContent, theme: &'a Theme) -> Self {
        Self { content, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = Span::styled(" │ ", Style::default().fg(self.theme.muted));

        let mut spans = vec![
            Span::styled("● ", Style::default().fg(self.theme.primary)),
            Span::styled(
                &self.content.title,
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::styled(&self.content.route, Style::default().fg(self.theme.subtext)),
        ];

        if let Some(count) = self.content.modules {
            spans.push(separator.clone());
            let label = if count == 1 { "module" } else { "modules" };
            spans.push(Span::styled(
                format!("{count} {label}"),
                Style::default().fg(self.theme.info),
            ));
        }

        if let Some(ref hint) = self.content.hint {
            spans.push(separator);
            spans.push(Span::styled(
                format!("→ {hint}"),
                Style::default().fg(self.theme.secondary),
            ));
        }

        let line = Line::from(spans);
        let paragraph = Paragraph::new(line).style(Style::default().bg(self.theme.surface));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn test_renders_route_and_count() {
        let theme = Theme::default();
        let content = StatusBarContent::new("/orders", Some(2));
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(&content, &theme).render(area, &mut buf);

        assert_eq!(buffer_to_string(&buf), "● Gargantua │ /orders │ 2 modules");
    }

    #[test]
    fn test_renders_hint() {
        let theme = Theme::default();
        let content = StatusBarContent::new("/", None).with_hint("Enter to open");
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(&content, &theme).render(area, &mut buf);

        assert_eq!(buffer_to_string(&buf), "● Gargantua │ / │ → Enter to open");
    }

    #[test]
    fn test_too_small_content() {
        let content = StatusBarContent::too_small(40, 10);
        assert!(content.route.contains("too small"));
        assert_eq!(content.hint.as_deref(), Some("Resize to at least 40x10"));
    }
}
