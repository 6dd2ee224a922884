//! Route matching for the detail pane.
//!
//! The shell has a single dynamic route, `/:moduleName`. A module name maps
//! to a component identifier by splitting on `_` and capitalizing the first
//! character of each word (`user_profile` -> `UserProfile`).

use std::fmt;

use tracing::debug;

/// A matched route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// The root path; no detail view is shown.
    #[default]
    Home,
    /// `/:moduleName`.
    Module {
        /// The captured path segment.
        module_name: String,
    },
    /// A path that matches no route.
    NotFound {
        /// The path as given.
        path: String,
    },
}

impl Route {
    /// Match a path against the route table.
    ///
    /// The leading `/` is optional and a single trailing `/` is accepted.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let inner = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let inner = inner.strip_suffix('/').unwrap_or(inner);

        if inner.is_empty() {
            return Self::Home;
        }
        if inner.contains('/') {
            return Self::NotFound {
                path: trimmed.to_string(),
            };
        }
        Self::Module {
            module_name: inner.to_string(),
        }
    }

    /// Route for a module's detail view.
    pub fn module(module_name: impl Into<String>) -> Self {
        Self::Module {
            module_name: module_name.into(),
        }
    }

    /// Path this route was matched from.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::Module { module_name } => format!("/{module_name}"),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Captured module name, if this is a module route.
    pub fn module_name(&self) -> Option<&str> {
        match self {
            Self::Module { module_name } => Some(module_name),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Derive the component identifier for a module name.
///
/// Each `_`-separated word has its first character upper-cased and the rest
/// kept as-is; empty words contribute nothing.
pub fn component_identifier(module_name: &str) -> String {
    module_name
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Location label for a module's detail view: `<module>/<version>/<Identifier>`.
pub fn view_path(module_name: &str, version: &str) -> String {
    format!(
        "{module_name}/{version}/{}",
        component_identifier(module_name)
    )
}

/// Navigation state: the current route and a back stack.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Navigator {
    /// Create a navigator at `/`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a navigator starting at `path`.
    pub fn at(path: &str) -> Self {
        Self {
            current: Route::parse(path),
            history: Vec::new(),
        }
    }

    /// The current route.
    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Navigate to `path`.
    ///
    /// Returns `true` if the route changed. Navigating to the current route
    /// is a no-op and does not grow the history.
    pub fn navigate(&mut self, path: &str) -> bool {
        let route = Route::parse(path);
        if route == self.current {
            return false;
        }
        debug!(from = %self.current, to = %route, "navigate");
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        true
    }

    /// Return to the previous route.
    ///
    /// Returns `false` if there is no history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => {
                debug!(from = %self.current, to = %route, "navigate back");
                self.current = route;
                true
            }
            None => false,
        }
    }

    /// Number of entries in the back stack.
    pub fn depth(&self) -> usize {
        self.history.len()
    }
}
