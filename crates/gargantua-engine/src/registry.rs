//! Detail view registry.
//!
//! Maps component identifiers to lazily constructed views. The registry is
//! populated at startup; resolving a module whose identifier was never
//! registered is a checked [`ResolveError`], not a deferred failure.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::route::{component_identifier, view_path};

type Factory<V> = Box<dyn Fn() -> V + Send + Sync>;

/// Errors that can occur when resolving a detail view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No view is registered under the derived identifier.
    #[error("no detail view registered for `{identifier}` (expected at {path})")]
    NotRegistered { identifier: String, path: String },

    /// The view was registered but could not be constructed.
    #[error("detail view `{identifier}` failed to load: {reason}")]
    Failed { identifier: String, reason: String },
}

struct Entry<V> {
    factory: Factory<V>,
    view: OnceLock<V>,
}

/// Registry of detail views keyed by component identifier.
pub struct ViewRegistry<V> {
    version: String,
    entries: BTreeMap<String, Entry<V>>,
}

impl<V> fmt::Debug for ViewRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("version", &self.version)
            .field("identifiers", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<V: Clone> ViewRegistry<V> {
    /// Create an empty registry whose views live under `version`.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Version folder used in view path labels.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Register a view factory under `identifier`.
    ///
    /// The factory runs at most once, the first time the view is resolved.
    /// Registering an identifier twice replaces the earlier factory.
    pub fn register<F>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        let identifier = identifier.into();
        debug!(%identifier, "register detail view");
        self.entries.insert(
            identifier,
            Entry {
                factory: Box::new(factory),
                view: OnceLock::new(),
            },
        );
    }

    /// Resolve the view for a module name.
    pub fn resolve(&self, module_name: &str) -> Result<V, ResolveError> {
        let identifier = component_identifier(module_name);
        match self.entries.get(&identifier) {
            Some(entry) => {
                let view = entry.view.get_or_init(|| {
                    debug!(%identifier, "constructing detail view");
                    (entry.factory)()
                });
                Ok(view.clone())
            }
            None => {
                let path = view_path(module_name, &self.version);
                warn!(%identifier, %path, "no detail view registered");
                Err(ResolveError::NotRegistered { identifier, path })
            }
        }
    }

    /// Whether a view is registered for the module name.
    pub fn contains(&self, module_name: &str) -> bool {
        self.entries.contains_key(&component_identifier(module_name))
    }

    /// Registered identifiers, sorted.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered views.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no views are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
