//! Detail pane load state.
//!
//! Each navigation to a module route starts a load:
//! `Idle -> Loading -> Loaded | Failed`. Loads are not cancelled when the
//! user navigates away; instead every load carries a ticket and completions
//! for anything but the latest ticket are discarded.

use tracing::debug;

use crate::registry::ResolveError;

/// State of the detail pane.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState<V> {
    /// No module selected.
    #[default]
    Idle,
    /// Resolution in flight; the loading fallback is shown.
    Loading { module_name: String },
    /// View resolved and ready to render.
    Loaded { module_name: String, view: V },
    /// Resolution failed.
    Failed {
        module_name: String,
        error: ResolveError,
    },
}

impl<V> DetailState<V> {
    /// Module the state refers to, if any.
    pub fn module_name(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Loading { module_name }
            | Self::Loaded { module_name, .. }
            | Self::Failed { module_name, .. } => Some(module_name),
        }
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// Identifies one load started by [`DetailLoader::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    module_name: String,
}

impl LoadTicket {
    /// Module being loaded.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }
}

/// Outcome of delivering a load result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result was applied to the pane.
    Applied,
    /// A newer navigation superseded this load; the result was dropped.
    Stale,
}

/// Drives [`DetailState`] transitions.
#[derive(Debug, Clone, Default)]
pub struct DetailLoader<V> {
    state: DetailState<V>,
    generation: u64,
}

impl<V> DetailLoader<V> {
    /// Create an idle loader.
    pub fn new() -> Self {
        Self {
            state: DetailState::Idle,
            generation: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> &DetailState<V> {
        &self.state
    }

    /// Start loading `module_name`, superseding any load in flight.
    pub fn begin(&mut self, module_name: impl Into<String>) -> LoadTicket {
        let module_name = module_name.into();
        self.generation += 1;
        debug!(module = %module_name, generation = self.generation, "detail load started");
        self.state = DetailState::Loading {
            module_name: module_name.clone(),
        };
        LoadTicket {
            generation: self.generation,
            module_name,
        }
    }

    /// Deliver the result of the load identified by `ticket`.
    pub fn complete(&mut self, ticket: LoadTicket, result: Result<V, ResolveError>) -> Completion {
        if ticket.generation != self.generation || !self.state.is_loading() {
            debug!(
                module = %ticket.module_name,
                generation = ticket.generation,
                current = self.generation,
                "discarding stale detail load"
            );
            return Completion::Stale;
        }

        let module_name = ticket.module_name;
        self.state = match result {
            Ok(view) => DetailState::Loaded { module_name, view },
            Err(error) => DetailState::Failed { module_name, error },
        };
        Completion::Applied
    }

    /// Return to idle, superseding any load in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = DetailState::Idle;
    }
}
