//! Module listing: fetching the catalog and holding it for display.
//!
//! The listing is fetched exactly once per mount. Failures of any kind are
//! logged and leave the list empty; there is no retry and no error state.

use async_trait::async_trait;
use tracing::{debug, error};

use crate::config::Config;
use crate::module::Module;

/// Errors that can occur while fetching the module listing.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// The request could not be sent or the body could not be read.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The body was not a JSON array of objects with a string `name`.
    #[error("malformed listing from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A source of module listings.
#[async_trait]
pub trait ModuleSource: Send + Sync {
    /// Fetch the full module listing, in backend order.
    async fn fetch_modules(&self) -> Result<Vec<Module>, ListingError>;

    /// Human-readable description of where modules come from (for logs).
    fn describe(&self) -> String;
}

/// Module source backed by the HTTP listing endpoint.
#[derive(Debug, Clone)]
pub struct HttpModuleSource {
    client: reqwest::Client,
    url: String,
}

impl HttpModuleSource {
    /// Create a source for the listing endpoint named by `config`.
    pub fn new(config: &Config) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a source using an existing client.
    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            url: config.listing_url(),
        }
    }

    /// The listing URL this source requests.
    pub fn listing_url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ModuleSource for HttpModuleSource {
    async fn fetch_modules(&self) -> Result<Vec<Module>, ListingError> {
        debug!(url = %self.url, "fetching module listing");

        let response =
            self.client
                .get(&self.url)
                .send()
                .await
                .map_err(|source| ListingError::Request {
                    url: self.url.clone(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ListingError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ListingError::Request {
                url: self.url.clone(),
                source,
            })?;

        let modules: Vec<Module> =
            serde_json::from_slice(&body).map_err(|source| ListingError::Decode {
                url: self.url.clone(),
                source,
            })?;

        debug!(count = modules.len(), "module listing received");
        Ok(modules)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Fetch modules from `source`, logging and swallowing any failure.
///
/// Returns an empty list when the fetch fails.
pub async fn load_modules<S: ModuleSource + ?Sized>(source: &S) -> Vec<Module> {
    match source.fetch_modules().await {
        Ok(modules) => modules,
        Err(e) => {
            error!(
                source = %source.describe(),
                error = %e,
                "There was an error fetching the modules"
            );
            Vec::new()
        }
    }
}

/// Identifies one mount started by [`ModuleLister::begin_mount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountTicket {
    generation: u64,
}

/// Listing state: the fetched modules plus the once-per-mount guard.
#[derive(Debug, Clone, Default)]
pub struct ModuleLister {
    modules: Vec<Module>,
    mounted: bool,
    loaded: bool,
    generation: u64,
}

impl ModuleLister {
    /// Create an unmounted, empty lister.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount the lister, fetching from `source` if this is the first mount.
    ///
    /// Returns `true` if a fetch was performed.
    pub async fn mount<S: ModuleSource + ?Sized>(&mut self, source: &S) -> bool {
        let Some(ticket) = self.begin_mount() else {
            return false;
        };
        let modules = load_modules(source).await;
        self.finish_mount(ticket, modules);
        true
    }

    /// Mark the lister mounted.
    ///
    /// Returns `None` if it was already mounted, in which case the caller
    /// must not fetch again. Otherwise the ticket must be handed back to
    /// [`finish_mount`](Self::finish_mount) with the fetch result.
    pub fn begin_mount(&mut self) -> Option<MountTicket> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        self.generation += 1;
        Some(MountTicket {
            generation: self.generation,
        })
    }

    /// Store the result of the mount fetch.
    ///
    /// Ignored if the lister was unmounted since `ticket` was issued, even
    /// if it has been mounted again. Returns `true` if the modules were kept.
    pub fn finish_mount(&mut self, ticket: MountTicket, modules: Vec<Module>) -> bool {
        if !self.mounted || ticket.generation != self.generation {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                "discarding module listing from an earlier mount"
            );
            return false;
        }
        self.modules = modules;
        self.loaded = true;
        true
    }

    /// Discard held modules; the next mount fetches again.
    pub fn unmount(&mut self) {
        self.modules.clear();
        self.mounted = false;
        self.loaded = false;
    }

    /// Whether the lister has been mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the mount fetch has completed (successfully or not).
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Modules in response order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// `(name, href)` pairs for each module, in response order.
    pub fn links(&self) -> Vec<(&str, String)> {
        self.modules
            .iter()
            .map(|m| (m.name.as_str(), m.href()))
            .collect()
    }
}
