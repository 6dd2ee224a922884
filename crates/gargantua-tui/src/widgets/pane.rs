//! Generic pane widget with border and optional title.
//!
//! Supports focused/unfocused states with different border styles.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::theme::{BorderSet, Theme};

/// Generic pane with border and optional title.
pub struct Pane<'a> {
    title: Option<&'a str>,
    focused: bool,
    content: Option<&'a str>,
    content_style: Option<Style>,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> Pane<'a> {
    /// Create a new pane widget.
    pub fn new(theme: &'a Theme, borders: &'a BorderSet) -> Self {
        Self {
            title: None,
            focused: false,
            content: None,
            content_style: None,
            theme,
            borders,
        }
    }

    /// Set the pane title.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set whether the pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set plain text content.
    #[must_use]
    pub fn content(mut self, content: &'a str) -> Self {
        self.content = Some(content);
        self
    }

    /// Override the content style (defaults to subtext).
    #[must_use]
    pub fn content_style(mut self, style: Style) -> Self {
        self.content_style = Some(style);
        self
    }

    /// The bordered block this pane draws.
    pub fn block(&self) -> Block<'a> {
        let (border_set, border_color, title_color) = if self.focused {
            (
                self.borders.focused(),
                self.theme.border_focused,
                self.theme.primary,
            )
        } else {
            (self.borders.normal(), self.theme.border, self.theme.subtext)
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(border_set)
            .border_style(Style::default().fg(border_color));

        if let Some(title) = self.title {
            block = block.title(title).title_style(Style::default().fg(title_color));
        }
        block
    }

    /// Area left inside the border.
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }
}

impl Widget for Pane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(text) = self.content {
            let style = self
                .content_style
                .unwrap_or_else(|| Style::default().fg(self.theme.subtext));
            Paragraph::new(text)
                .style(style)
                .wrap(Wrap { trim: false })
                .render(inner, buf);
        }
    }
}
