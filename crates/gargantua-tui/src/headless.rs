//! Headless mode for the gargantua TUI.
//!
//! This module provides a way to run the TUI without a real terminal,
//! enabling E2E testing and automation. Input is sent via channels
//! and screen state is captured after each render.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::KeyEvent;
use gargantua_engine::{Config, ModuleSource};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::app::App;
use crate::event::Action;
use crate::layout;
use crate::tasks::Tasks;

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// State captured from the headless TUI after each render.
#[derive(Debug, Clone, Default)]
pub struct HeadlessState {
    /// Path of the current route.
    pub route: String,
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
    /// Whether the TUI should quit.
    pub should_quit: bool,
    /// Whether help overlay is visible.
    pub show_help: bool,
    /// Number of listed modules, once the listing has loaded.
    pub module_count: Option<usize>,
}

#[derive(Debug)]
enum Input {
    Action(Action),
    Key(KeyEvent),
}

/// Handle to control a headless TUI instance.
///
/// Use this to send input and observe state changes.
pub struct HeadlessHandle {
    input_tx: mpsc::UnboundedSender<Input>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Send an action to the TUI.
    ///
    /// Returns `true` if the action was sent successfully.
    pub fn send_action(&self, action: Action) -> bool {
        self.input_tx.send(Input::Action(action)).is_ok()
    }

    /// Send a raw key, routed through the path prompt when it is open.
    pub fn send_key(&self, key: KeyEvent) -> bool {
        self.input_tx.send(Input::Key(key)).is_ok()
    }

    /// Get the current state of the TUI.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Wait until a condition is met on the state.
    ///
    /// Returns the state when the condition is met, or `None` if timed out.
    pub async fn wait_for<F>(&mut self, condition: F, timeout: Duration) -> Option<HeadlessState>
    where
        F: Fn(&HeadlessState) -> bool,
    {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let state = self.state();
            if condition(&state) {
                return Some(state);
            }

            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }

            match tokio::time::timeout(remaining, self.state_rx.changed()).await {
                Ok(Ok(())) => {}
                // Timed out, or the loop exited and dropped the sender
                Ok(Err(_)) | Err(_) => return None,
            }
        }
    }

    /// Wait for specific text to appear on screen.
    pub async fn wait_for_text(&mut self, text: &str, timeout: Duration) -> Option<HeadlessState> {
        self.wait_for(|s| s.screen_contents.contains(text), timeout)
            .await
    }

    /// Check if the TUI has quit.
    pub fn has_quit(&self) -> bool {
        self.state().should_quit
    }
}

/// Configuration for headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
    /// Tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_ms: 50, // Faster tick rate for testing
        }
    }
}

/// Run the TUI in headless mode against `source`.
///
/// Returns a handle to control the TUI and a join handle for the background task.
///
/// # Example
///
/// ```ignore
/// let source = Arc::new(HttpModuleSource::new(&config));
/// let (mut handle, task) = run_tui_headless(config, source, HeadlessConfig::default());
///
/// handle.wait_for_text("orders", Duration::from_secs(1)).await;
/// handle.send_action(Action::Select);
///
/// handle.send_action(Action::Quit);
/// task.await.unwrap();
/// ```
pub fn run_tui_headless(
    config: Config,
    source: Arc<dyn ModuleSource>,
    headless: HeadlessConfig,
) -> (HeadlessHandle, JoinHandle<Result<(), String>>) {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    let task = tokio::spawn(async move {
        run_headless_loop(config, source, headless, input_rx, state_tx)
            .await
            .map_err(|e| e.to_string())
    });

    let handle = HeadlessHandle { input_tx, state_rx };

    (handle, task)
}

async fn run_headless_loop(
    config: Config,
    source: Arc<dyn ModuleSource>,
    headless: HeadlessConfig,
    mut input_rx: mpsc::UnboundedReceiver<Input>,
    state_tx: watch::Sender<HeadlessState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let backend = TestBackend::new(headless.width, headless.height);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let mut tasks = Tasks::new(source);
    let tick_duration = Duration::from_millis(headless.tick_rate_ms);

    loop {
        tasks.spawn_pending(&mut app);

        terminal.draw(|frame| layout::render_shell(frame, &app))?;

        let screen_contents = buffer_to_string(terminal.backend().buffer());
        let module_count = app.lister.is_loaded().then(|| app.lister.modules().len());
        let _ = state_tx.send(HeadlessState {
            route: app.navigator.current().path(),
            screen_contents,
            should_quit: app.should_quit,
            show_help: app.show_help,
            module_count,
        });

        if app.should_quit {
            break;
        }

        // Wait for input or tick
        let input = tokio::select! {
            Some(input) = input_rx.recv() => Some(input),
            () = tokio::time::sleep(tick_duration) => None,
        };

        match input {
            Some(Input::Key(key)) => {
                if !app.handle_prompt_key(key) {
                    app.handle_action(crate::event::key_to_action(key));
                }
            }
            Some(Input::Action(action)) => app.handle_action(action),
            None => {}
        }

        tasks.collect_finished(&mut app).await;
    }

    Ok(())
}

/// Convert a terminal buffer to a string, one line per row.
///
/// Trailing spaces on each row are trimmed.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}
