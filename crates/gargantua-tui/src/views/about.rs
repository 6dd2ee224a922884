//! Application information view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{DetailView, ViewContext};

/// Version, endpoint, and registry summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct About;

impl DetailView for About {
    fn title(&self) -> String {
        "About".into()
    }

    fn render(&self, ctx: &ViewContext<'_>, area: Rect, buf: &mut Buffer) {
        let theme = ctx.theme;
        let label = Style::default().fg(theme.muted);
        let value = Style::default().fg(theme.subtext);

        let mut lines = vec![
            Line::from(Span::styled(
                format!("Gargantua {}", crate::tui_version()),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("API:          ", label),
                Span::styled(ctx.config.api_base_url.as_str(), value),
            ]),
            Line::from(vec![
                Span::styled("Listing:      ", label),
                Span::styled(ctx.config.listing_url(), value),
            ]),
            Line::from(vec![
                Span::styled("View version: ", label),
                Span::styled(ctx.config.view_version(), value),
            ]),
            Line::from(""),
            Line::from(Span::styled("Registered views", label)),
        ];

        for identifier in ctx.identifiers {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(identifier.as_str(), Style::default().fg(theme.secondary)),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((ctx.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, test_context};
    use gargantua_engine::Config;

    #[test]
    fn test_shows_endpoints_and_views() {
        let config = Config::default();
        let ctx = test_context(&config, &[], "about");

        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        About.render(&ctx, area, &mut buf);
        let text = buffer_to_string(&buf);

        assert!(text.contains("API:          http://127.0.0.1:8000"));
        assert!(text.contains("View version: v4"));
        assert!(text.contains("  About"));
        assert!(text.contains("  CrudModule"));
    }
}
