//! Main shell layout with 4 regions.
//!
//! Regions:
//! 1. Status Bar (top, 1 line)
//! 2. Module List Pane (left, 30%)
//! 3. Detail Pane (right, 70%)
//! 4. Footer Hints (bottom, 1 line)

use gargantua_engine::{DetailState, Route};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use super::FocusedPane;
use crate::app::App;
use crate::widgets::{hints_for_focus, FooterHints, ModuleList, Pane, StatusBar, StatusBarContent};

/// Minimum terminal width.
pub const MIN_WIDTH: u16 = 40;
/// Minimum terminal height.
pub const MIN_HEIGHT: u16 = 10;

/// Render the whole shell for `app`.
pub fn render_shell(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    render_to_buffer(app, area, frame.buffer_mut());
}

/// Render the shell into a buffer.
pub(crate) fn render_to_buffer(app: &App, area: Rect, buf: &mut Buffer) {
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let content = StatusBarContent::too_small(MIN_WIDTH, MIN_HEIGHT);
        StatusBar::new(&content, &app.theme).render(area, buf);
        return;
    }

    // Divide into: StatusBar | MainArea | FooterHints
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(0),    // Main area (expands)
            Constraint::Length(1), // Footer hints
        ])
        .split(area);

    let module_count = app.lister.is_loaded().then(|| app.lister.modules().len());
    let mut status_content = StatusBarContent::new(app.navigator.current().path(), module_count);
    if app.path_input.is_some() {
        status_content = status_content.with_hint("Enter to open, Esc to cancel");
    }
    StatusBar::new(&status_content, &app.theme).render(chunks[0], buf);

    // 30% Modules | 70% Detail
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    ModuleList::new(&app.lister, &app.theme, &app.borders)
        .selected(app.selected)
        .active(app.navigator.current().module_name())
        .focused(app.focused_pane == FocusedPane::List)
        .render(panes[0], buf);

    render_detail_pane(app, panes[1], buf);

    let hints = hints_for_focus(app.focused_pane);
    FooterHints::new(&hints, &app.theme)
        .focused_pane(app.focused_pane)
        .prompt(app.path_input.as_deref())
        .render(chunks[2], buf);

    if app.show_help {
        render_help_overlay(app, area, buf);
    }
}

/// Render the right pane from the current route and load state.
fn render_detail_pane(app: &App, area: Rect, buf: &mut Buffer) {
    let focused = app.focused_pane == FocusedPane::Detail;
    let pane = Pane::new(&app.theme, &app.borders).focused(focused);

    match app.navigator.current() {
        Route::Home => {
            pane.title(" Detail ")
                .content("Select a module to open it.")
                .render(area, buf);
        }
        Route::NotFound { path } => {
            let message = format!("No route matches {path}");
            pane.title(" Detail ")
                .content(&message)
                .content_style(Style::default().fg(app.theme.warning))
                .render(area, buf);
        }
        Route::Module { module_name } => {
            let title = format!(" {module_name} ");
            match app.detail.state() {
                DetailState::Loading { .. } | DetailState::Idle => {
                    pane.title(&title).content("Loading...").render(area, buf);
                }
                DetailState::Loaded { view, .. } => {
                    let title = format!(" {} ", view.title());
                    let pane = pane.title(&title);
                    let inner = pane.inner(area);
                    pane.render(area, buf);
                    view.render(&app.view_context(module_name), inner, buf);
                }
                DetailState::Failed { error, .. } => {
                    let message = error.to_string();
                    pane.title(&title)
                        .content(&message)
                        .content_style(Style::default().fg(app.theme.error))
                        .render(area, buf);
                }
            }
        }
    }
}

/// Rect of `width` x `height` centered in `area`.
fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_help_overlay(app: &App, area: Rect, buf: &mut Buffer) {
    let help_text = r"
  j/k or Up/Down    Move / scroll
  Enter             Open module
  g or /            Go to path
  Esc               Back
  Tab               Switch pane
  q                 Quit
  ?                 Toggle this help
";

    let overlay = centered(44, 11, area);
    Clear.render(overlay, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(app.theme.primary))
        .borders(Borders::ALL)
        .border_set(app.borders.focused())
        .border_style(Style::default().fg(app.theme.border_focused))
        .style(Style::default().bg(app.theme.base));

    Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(app.theme.text))
        .render(overlay, buf);
}
