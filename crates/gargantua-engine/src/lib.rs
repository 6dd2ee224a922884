//! gargantua-engine: Headless engine for the gargantua module browser
//!
//! This crate provides the UI-independent parts of gargantua:
//! - Configuration
//! - The module listing client and lister state
//! - Route matching and component identifier derivation
//! - The detail view registry and load state machine

pub mod config;
pub mod detail;
pub mod listing;
pub mod module;
pub mod registry;
pub mod route;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use detail::{Completion, DetailLoader, DetailState, LoadTicket};
pub use listing::{
    load_modules, HttpModuleSource, ListingError, ModuleLister, ModuleSource, MountTicket,
};
pub use module::Module;
pub use registry::{ResolveError, ViewRegistry};
pub use route::{component_identifier, view_path, Navigator, Route};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
