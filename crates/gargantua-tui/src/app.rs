//! Application state and update logic for the gargantua TUI.
//!
//! `App` is synchronous: it records what must happen (a listing fetch, a
//! view resolution) and the event loop in [`crate::tasks`] runs the work and
//! feeds results back.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gargantua_engine::{
    Completion, Config, DetailLoader, LoadTicket, Module, ModuleLister, MountTicket, Navigator,
    ResolveError, Route, ViewRegistry,
};
use tracing::debug;

use crate::event::Action;
use crate::layout::FocusedPane;
use crate::theme::{BorderMode, BorderSet, Theme};
use crate::views::{default_registry, ViewContext, ViewHandle};

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Active configuration.
    pub config: Config,

    /// Module listing state (left pane).
    pub lister: ModuleLister,

    /// Cursor row in the module list.
    pub selected: usize,

    /// Current route and back stack.
    pub navigator: Navigator,

    /// Detail pane load state (right pane).
    pub detail: DetailLoader<ViewHandle>,

    /// Registered detail views.
    pub registry: Arc<ViewRegistry<ViewHandle>>,

    /// Which pane has keyboard focus.
    pub focused_pane: FocusedPane,

    /// Scroll offset of the detail view.
    pub detail_scroll: u16,

    /// Path prompt input, while the prompt is open.
    pub path_input: Option<String>,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Whether the app should quit.
    pub should_quit: bool,

    /// Theme colors.
    pub theme: Theme,

    /// Border set based on environment.
    pub borders: BorderSet,

    identifiers: Vec<String>,
    pending_loads: Vec<LoadTicket>,
}

impl App {
    /// Create the app with the built-in view registry.
    pub fn new(config: Config) -> Self {
        let registry = default_registry(&config);
        Self::with_registry(config, registry)
    }

    /// Create the app with a caller-supplied view registry.
    pub fn with_registry(config: Config, registry: ViewRegistry<ViewHandle>) -> Self {
        let identifiers = registry.identifiers().map(String::from).collect();
        Self {
            config,
            lister: ModuleLister::new(),
            selected: 0,
            navigator: Navigator::new(),
            detail: DetailLoader::new(),
            registry: Arc::new(registry),
            focused_pane: FocusedPane::default(),
            detail_scroll: 0,
            path_input: None,
            show_help: false,
            should_quit: false,
            theme: Theme::default(),
            borders: BorderSet::new(BorderMode::from_env()),
            identifiers,
            pending_loads: Vec::new(),
        }
    }

    /// Mount the module list.
    ///
    /// Returns a ticket the first time, when the caller must start the fetch.
    pub fn start_listing(&mut self) -> Option<MountTicket> {
        self.lister.begin_mount()
    }

    /// Store the fetched modules.
    pub fn finish_listing(&mut self, ticket: MountTicket, modules: Vec<Module>) {
        if !self.lister.finish_mount(ticket, modules) {
            return;
        }
        self.sync_selection();
        if self.selected >= self.lister.modules().len() {
            self.selected = 0;
        }
    }

    /// Navigate to `path`.
    pub fn navigate(&mut self, path: &str) {
        if self.navigator.navigate(path) {
            self.on_route_changed();
        }
    }

    /// Navigate back. Returns `false` if there was no history.
    pub fn back(&mut self) -> bool {
        if self.navigator.back() {
            self.on_route_changed();
            true
        } else {
            false
        }
    }

    fn on_route_changed(&mut self) {
        self.detail_scroll = 0;
        match self.navigator.current().clone() {
            Route::Module { module_name } => {
                let ticket = self.detail.begin(module_name);
                self.pending_loads.push(ticket);
                self.sync_selection();
            }
            Route::Home | Route::NotFound { .. } => self.detail.reset(),
        }
    }

    /// Move the list cursor onto the module the route points at, if listed.
    fn sync_selection(&mut self) {
        let Some(name) = self.navigator.current().module_name() else {
            return;
        };
        if let Some(index) = self.lister.modules().iter().position(|m| m.name == name) {
            self.selected = index;
        }
    }

    /// Take view resolutions requested since the last call.
    pub fn take_pending_loads(&mut self) -> Vec<LoadTicket> {
        std::mem::take(&mut self.pending_loads)
    }

    /// Deliver a view resolution result.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<ViewHandle, ResolveError>,
    ) -> Completion {
        self.detail.complete(ticket, result)
    }

    /// Registered view identifiers, sorted.
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Context handed to detail views.
    pub fn view_context<'a>(&'a self, module_name: &'a str) -> ViewContext<'a> {
        ViewContext {
            module_name,
            modules: self.lister.modules(),
            config: &self.config,
            identifiers: &self.identifiers,
            theme: &self.theme,
            scroll: self.detail_scroll,
        }
    }

    /// Handle a key while the path prompt is open.
    ///
    /// Returns `true` if the key was consumed by the prompt.
    pub fn handle_prompt_key(&mut self, key: KeyEvent) -> bool {
        let Some(input) = self.path_input.as_mut() else {
            return false;
        };

        match key.code {
            KeyCode::Enter => {
                let path = std::mem::take(input);
                self.path_input = None;
                debug!(%path, "path prompt submitted");
                self.navigate(&path);
            }
            KeyCode::Esc => self.path_input = None,
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.push(c),
            _ => {}
        }
        true
    }

    /// Handle a key action.
    pub fn handle_action(&mut self, action: Action) {
        if self.show_help {
            if matches!(action, Action::Help | Action::Back | Action::Quit) {
                self.show_help = false;
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::Back => {
                self.back();
            }
            Action::NextPane => self.focused_pane = self.focused_pane.toggle(),
            Action::GoTo => self.path_input = Some("/".into()),
            Action::Up => match self.focused_pane {
                FocusedPane::List => self.selected = self.selected.saturating_sub(1),
                FocusedPane::Detail => self.detail_scroll = self.detail_scroll.saturating_sub(1),
            },
            Action::Down => match self.focused_pane {
                FocusedPane::List => {
                    if self.selected + 1 < self.lister.modules().len() {
                        self.selected += 1;
                    }
                }
                FocusedPane::Detail => self.detail_scroll = self.detail_scroll.saturating_add(1),
            },
            Action::Select => {
                if self.focused_pane == FocusedPane::List {
                    if let Some(module) = self.lister.modules().get(self.selected) {
                        let href = module.href();
                        self.navigate(&href);
                    }
                }
            }
            Action::None => {}
        }
    }
}
