//! gargantua-tui: Terminal UI for the gargantua module browser
//!
//! This crate provides the TUI layer for gargantua, including:
//! - The two-pane shell (module list | detail view)
//! - Built-in detail views and their registry
//! - Headless mode for testing and automation

mod app;
mod event;
pub mod headless;
mod layout;
mod tasks;
#[cfg(test)]
pub mod test_utils;
mod theme;
pub mod views;
mod widgets;

pub use app::App;
pub use event::{Action, Event, EventHandler};
pub use gargantua_engine;

use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gargantua_engine::{Config, HttpModuleSource, ModuleSource};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use tracing::info;

use tasks::Tasks;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, mounts the module list against the configured
/// listing endpoint, runs the event loop, and restores the terminal on exit.
/// `initial_path`, if given, is navigated to before the first frame.
pub async fn run_tui(
    config: Config,
    initial_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let source: Arc<dyn ModuleSource> = Arc::new(HttpModuleSource::new(&config));

    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(config.tick_rate_ms);
    let mut app = App::new(config);
    if let Some(path) = initial_path {
        app.navigate(path);
    }
    info!(listing = %app.config.listing_url(), "starting TUI");

    let result = run_loop(&mut terminal, &mut app, &mut events, Tasks::new(source)).await;

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    mut tasks: Tasks,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tasks.spawn_pending(app);

        terminal.draw(|frame| layout::render_shell(frame, app))?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if !app.handle_prompt_key(key) {
                        app.handle_action(event::key_to_action(key));
                    }
                }
                // Tick and resize only need a redraw
                Event::Tick | Event::Resize(_, _) => {}
            }
        }

        tasks.collect_finished(app).await;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}


#[cfg(test)]
mod render_tests {
    use crate::test_utils::*;
    use insta::assert_snapshot;

    const WIDTH: u16 = 110;
    const HEIGHT: u16 = 14;

    #[test]
    fn test_home_screen() {
        let app = create_test_app();
        let screen = render_app_to_string_sized(&app, WIDTH, HEIGHT);

        assert_snapshot!(screen, @r"
        ● Gargantua │ / │ 4 modules
        ┏ Modules ━━━━━━━━━━━━━━━━━━━━━━┓╭ Detail ───────────────────────────────────────────────────────────────────╮
        ┃  user_profile                 ┃│Select a module to open it.                                                │
        ┃  orders                       ┃│                                                                           │
        ┃  crud_module                  ┃│                                                                           │
        ┃  about                        ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛╰───────────────────────────────────────────────────────────────────────────╯
        Modules                            [j/k] move │ [Enter] open │ [g] go to │ [Esc] back │ [Tab] focus │ [?] help
        ");
    }

    #[test]
    fn test_loading_fallback() {
        let mut app = create_test_app();
        app.navigate("/crud_module");
        let screen = render_app_to_string_sized(&app, WIDTH, HEIGHT);

        assert_snapshot!(screen, @r"
        ● Gargantua │ /crud_module │ 4 modules
        ┏ Modules ━━━━━━━━━━━━━━━━━━━━━━┓╭ crud_module ──────────────────────────────────────────────────────────────╮
        ┃  user_profile                 ┃│Loading...                                                                 │
        ┃  orders                       ┃│                                                                           │
        ┃▸ crud_module                  ┃│                                                                           │
        ┃  about                        ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛╰───────────────────────────────────────────────────────────────────────────╯
        Modules                            [j/k] move │ [Enter] open │ [g] go to │ [Esc] back │ [Tab] focus │ [?] help
        ");
    }

    #[test]
    fn test_loaded_view() {
        let mut app = create_test_app();
        app.navigate("/crud_module");
        resolve_pending(&mut app);
        let screen = render_app_to_string_sized(&app, WIDTH, HEIGHT);

        assert_snapshot!(screen, @r"
        ● Gargantua │ /crud_module │ 4 modules
        ┏ Modules ━━━━━━━━━━━━━━━━━━━━━━┓╭ CrudModule ───────────────────────────────────────────────────────────────╮
        ┃  user_profile                 ┃│Modules                                                                    │
        ┃  orders                       ┃│                                                                           │
        ┃▸ crud_module                  ┃│Source: http://127.0.0.1:8000/v4/modules/                                  │
        ┃  about                        ┃│4 modules                                                                  │
        ┃                               ┃│                                                                           │
        ┃                               ┃│  user_profile   /user_profile                                             │
        ┃                               ┃│  orders         /orders                                                   │
        ┃                               ┃│  crud_module    /crud_module                                              │
        ┃                               ┃│  about          /about                                                    │
        ┃                               ┃│                                                                           │
        ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛╰───────────────────────────────────────────────────────────────────────────╯
        Modules                            [j/k] move │ [Enter] open │ [g] go to │ [Esc] back │ [Tab] focus │ [?] help
        ");
    }

    #[test]
    fn test_missing_view_shows_error() {
        let mut app = create_test_app();
        app.navigate("/orders");
        resolve_pending(&mut app);
        let screen = render_app_to_string_sized(&app, WIDTH, HEIGHT);

        assert_snapshot!(screen, @r"
        ● Gargantua │ /orders │ 4 modules
        ┏ Modules ━━━━━━━━━━━━━━━━━━━━━━┓╭ orders ───────────────────────────────────────────────────────────────────╮
        ┃  user_profile                 ┃│no detail view registered for `Orders` (expected at orders/v4/Orders)      │
        ┃▸ orders                       ┃│                                                                           │
        ┃  crud_module                  ┃│                                                                           │
        ┃  about                        ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛╰───────────────────────────────────────────────────────────────────────────╯
        Modules                            [j/k] move │ [Enter] open │ [g] go to │ [Esc] back │ [Tab] focus │ [?] help
        ");
    }

    #[test]
    fn test_not_found_route() {
        let mut app = create_test_app();
        app.navigate("/a/b");
        let screen = render_app_to_string_sized(&app, WIDTH, HEIGHT);

        assert_snapshot!(screen, @r"
        ● Gargantua │ /a/b │ 4 modules
        ┏ Modules ━━━━━━━━━━━━━━━━━━━━━━┓╭ Detail ───────────────────────────────────────────────────────────────────╮
        ┃  user_profile                 ┃│No route matches /a/b                                                      │
        ┃  orders                       ┃│                                                                           │
        ┃  crud_module                  ┃│                                                                           │
        ┃  about                        ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┃                               ┃│                                                                           │
        ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛╰───────────────────────────────────────────────────────────────────────────╯
        Modules                            [j/k] move │ [Enter] open │ [g] go to │ [Esc] back │ [Tab] focus │ [?] help
        ");
    }

    #[test]
    fn test_empty_listing_renders_empty_list() {
        let mut app = crate::App::new(gargantua_engine::Config::default());
        let ticket = app.start_listing().unwrap();
        app.finish_listing(ticket, Vec::new());
        let screen = render_app_to_string(&app);

        assert!(screen.contains("No modules"));
        assert!(screen.contains("0 modules"));
    }

    #[test]
    fn test_listing_in_flight() {
        let mut app = crate::App::new(gargantua_engine::Config::default());
        app.start_listing().unwrap();
        let screen = render_app_to_string(&app);

        assert!(screen.starts_with("● Gargantua │ /\n"));
        assert!(screen.contains("Loading..."));
    }

    #[test]
    fn test_path_prompt_shows_hint() {
        let mut app = create_test_app();
        app.handle_action(crate::Action::GoTo);
        let screen = render_app_to_string(&app);

        assert!(screen.starts_with("● Gargantua │ / │ 4 modules │ → Enter to open, Esc to cancel"));
        assert!(screen.ends_with("Go to: /█"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = create_test_app();
        app.show_help = true;
        let screen = render_app_to_string(&app);

        assert!(screen.contains(" Help "));
        assert!(screen.contains("Go to path"));
    }

    #[test]
    fn test_too_small_terminal() {
        let app = create_test_app();
        let screen = render_app_to_string_sized(&app, 39, 8);

        assert!(screen.contains("Terminal too small"));
    }
}
