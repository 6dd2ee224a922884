//! Background work driven by the event loop.
//!
//! The listing fetch runs as a tokio task; view resolution runs on the
//! blocking pool since view factories are synchronous. Handles are polled
//! once per loop iteration and results are fed back into [`App`].

use std::sync::Arc;

use gargantua_engine::{
    component_identifier, load_modules, LoadTicket, Module, ModuleSource, MountTicket,
    ResolveError,
};
use tokio::task::JoinHandle;
use tracing::error;

use crate::app::App;
use crate::views::ViewHandle;

/// In-flight background tasks.
///
/// Tickets are held here rather than inside the tasks so a task that
/// panics still settles the state it was started for.
pub(crate) struct Tasks {
    source: Arc<dyn ModuleSource>,
    listing: Option<(MountTicket, JoinHandle<Vec<Module>>)>,
    loads: Vec<(LoadTicket, JoinHandle<Result<ViewHandle, ResolveError>>)>,
}

impl Tasks {
    pub(crate) fn new(source: Arc<dyn ModuleSource>) -> Self {
        Self {
            source,
            listing: None,
            loads: Vec::new(),
        }
    }

    /// Start whatever the app has asked for since the last call.
    pub(crate) fn spawn_pending(&mut self, app: &mut App) {
        if let Some(ticket) = app.start_listing() {
            let source = Arc::clone(&self.source);
            let handle = tokio::spawn(async move { load_modules(&*source).await });
            self.listing = Some((ticket, handle));
        }

        for ticket in app.take_pending_loads() {
            let registry = Arc::clone(&app.registry);
            let module_name = ticket.module_name().to_string();
            let handle = tokio::task::spawn_blocking(move || registry.resolve(&module_name));
            self.loads.push((ticket, handle));
        }
    }

    /// Feed finished tasks back into the app without waiting on running ones.
    pub(crate) async fn collect_finished(&mut self, app: &mut App) {
        if self.listing.as_ref().is_some_and(|(_, handle)| handle.is_finished()) {
            if let Some((ticket, handle)) = self.listing.take() {
                match handle.await {
                    Ok(modules) => app.finish_listing(ticket, modules),
                    Err(e) => {
                        error!(error = %e, "module listing task failed");
                        app.finish_listing(ticket, Vec::new());
                    }
                }
            }
        }

        let mut finished = Vec::new();
        for (i, (_, handle)) in self.loads.iter().enumerate() {
            if handle.is_finished() {
                finished.push(i);
            }
        }
        for i in finished.into_iter().rev() {
            let (ticket, handle) = self.loads.remove(i);
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => {
                    error!(module = %ticket.module_name(), error = %e, "detail view task failed");
                    Err(ResolveError::Failed {
                        identifier: component_identifier(ticket.module_name()),
                        reason: e.to_string(),
                    })
                }
            };
            app.complete_load(ticket, result);
        }
    }

    #[cfg(test)]
    fn is_idle(&self) -> bool {
        self.listing.is_none() && self.loads.is_empty()
    }
}
