//! Module catalog view.
//!
//! ```text
//! Modules
//!
//! Source: http://127.0.0.1:8000/v4/modules/
//! 2 modules
//!
//!   user_profile   /user_profile
//!   orders         /orders
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{DetailView, ViewContext};

/// Catalog of every module the listing returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrudModule;

impl DetailView for CrudModule {
    fn title(&self) -> String {
        "CrudModule".into()
    }

    fn render(&self, ctx: &ViewContext<'_>, area: Rect, buf: &mut Buffer) {
        let theme = ctx.theme;
        let name_width = ctx
            .modules
            .iter()
            .map(|m| m.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = vec![
            Line::from(Span::styled(
                "Modules",
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Source: ", Style::default().fg(theme.muted)),
                Span::styled(ctx.config.listing_url(), Style::default().fg(theme.subtext)),
            ]),
            Line::from(Span::styled(
                match ctx.modules.len() {
                    1 => "1 module".to_string(),
                    n => format!("{n} modules"),
                },
                Style::default().fg(theme.subtext),
            )),
            Line::from(""),
        ];

        for module in ctx.modules {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<name_width$}", module.name),
                    Style::default().fg(theme.text),
                ),
                Span::raw("   "),
                Span::styled(module.href(), Style::default().fg(theme.secondary)),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((ctx.scroll, 0))
            .render(area, buf);
    }
}
