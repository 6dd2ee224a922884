//! Built-in detail views.
//!
//! Detail views are registered by component identifier at startup; the
//! right pane resolves them through the [`ViewRegistry`] when the route
//! changes.

mod about;
mod crud_module;

use std::fmt;
use std::sync::Arc;

use gargantua_engine::{Config, Module, ViewRegistry};
use ratatui::{buffer::Buffer, layout::Rect};

use crate::theme::Theme;

pub use about::About;
pub use crud_module::CrudModule;

/// Shared handle to a constructed detail view.
pub type ViewHandle = Arc<dyn DetailView>;

/// Everything a detail view may read while rendering.
///
/// Passed down explicitly from the app; views hold no global state.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    /// The route segment that selected this view.
    pub module_name: &'a str,
    /// Modules currently held by the lister.
    pub modules: &'a [Module],
    /// Active configuration.
    pub config: &'a Config,
    /// Identifiers registered in the view registry.
    pub identifiers: &'a [String],
    /// Color palette.
    pub theme: &'a Theme,
    /// Vertical scroll offset requested by the user.
    pub scroll: u16,
}

/// A per-module detail view.
pub trait DetailView: fmt::Debug + Send + Sync {
    /// Title shown on the detail pane border.
    fn title(&self) -> String;

    /// Render the view into `area`.
    fn render(&self, ctx: &ViewContext<'_>, area: Rect, buf: &mut Buffer);
}

/// Build the registry of built-in views.
pub fn default_registry(config: &Config) -> ViewRegistry<ViewHandle> {
    let mut registry = ViewRegistry::new(config.view_version());
    registry.register("CrudModule", || Arc::new(CrudModule) as ViewHandle);
    registry.register("About", || Arc::new(About) as ViewHandle);
    registry
}
