//! Test utilities for gargantua-tui rendering and integration tests.
//!
//! Helpers for building apps in known states, rendering them to buffers,
//! and converting buffers to strings for assertions.

use std::sync::OnceLock;

use gargantua_engine::{Config, Module, ModuleLister};
use ratatui::{buffer::Buffer, layout::Rect};

use crate::app::App;
use crate::layout::render_to_buffer;
use crate::theme::{BorderSet, Theme};
use crate::views::{default_registry, ViewContext};

pub use crate::headless::buffer_to_string;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Module names the test app's listing returns, in response order.
pub const TEST_MODULES: &[&str] = &["user_profile", "orders", "crud_module", "about"];

/// A lister whose mount fetch returned `names`.
pub fn lister_with(names: &[&str]) -> ModuleLister {
    let mut lister = ModuleLister::new();
    let ticket = lister.begin_mount().expect("fresh lister mounts");
    lister.finish_mount(ticket, names.iter().map(|n| Module::new(*n)).collect());
    lister
}

/// Create a test app with the listing already loaded.
///
/// Borders are pinned to Unicode so renders do not depend on `NO_COLOR`.
pub fn create_test_app() -> App {
    let mut app = App::new(Config::default());
    app.borders = BorderSet::default();
    let ticket = app.start_listing().expect("fresh app mounts the listing");
    app.finish_listing(ticket, TEST_MODULES.iter().map(|n| Module::new(*n)).collect());
    app
}

/// Resolve every pending view load synchronously.
pub fn resolve_pending(app: &mut App) {
    for ticket in app.take_pending_loads() {
        let result = app.registry.resolve(ticket.module_name());
        app.complete_load(ticket, result);
    }
}

/// A view context over `modules` using the default registry's identifiers.
pub fn test_context<'a>(
    config: &'a Config,
    modules: &'a [Module],
    module_name: &'a str,
) -> ViewContext<'a> {
    static THEME: OnceLock<Theme> = OnceLock::new();
    static IDENTIFIERS: OnceLock<Vec<String>> = OnceLock::new();

    let identifiers = IDENTIFIERS.get_or_init(|| {
        default_registry(&Config::default())
            .identifiers()
            .map(String::from)
            .collect()
    });

    ViewContext {
        module_name,
        modules,
        config,
        identifiers,
        theme: THEME.get_or_init(Theme::default),
        scroll: 0,
    }
}

/// Render the whole shell at the default test size.
pub fn render_app_to_string(app: &App) -> String {
    render_app_to_string_sized(app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render the whole shell at a custom size.
pub fn render_app_to_string_sized(app: &App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    render_to_buffer(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert!(app.lister.is_loaded());
        assert_eq!(app.lister.modules().len(), TEST_MODULES.len());
    }

    #[test]
    fn test_lister_with_preserves_order() {
        let lister = lister_with(&["b", "a"]);
        let names: Vec<&str> = lister.modules().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert_eq!(result, "Hello\nWorld\n");
    }
}
