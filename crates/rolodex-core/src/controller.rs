// ── Directory facade ──
//
// Bundles the data source with the three stores and owns the fetch
// lifecycle: the single list fetch at startup and detail fetches on
// navigation. The CLI uses the raw `fetch_*` methods; the TUI uses the
// stores.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinHandle;
use tracing::{debug, info};

use rolodex_api::{DirectoryClient, TransportConfig};

use crate::config::DirectoryConfig;
use crate::error::CoreError;
use crate::model::{Person, PersonId};
use crate::route::Route;
use crate::source::PeopleSource;
use crate::store::{DetailStore, DirectoryStore, ThemeStore};

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<DirectoryInner>`.
#[derive(Clone)]
pub struct Directory {
    inner: Arc<DirectoryInner>,
}

struct DirectoryInner {
    config: DirectoryConfig,
    source: Arc<dyn PeopleSource>,
    people: DirectoryStore,
    detail: DetailStore,
    theme: ThemeStore,
    started: AtomicBool,
}

impl Directory {
    /// Build a directory backed by the HTTP client. Does NOT fetch --
    /// call [`start()`](Self::start) for that.
    pub fn new(config: DirectoryConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let client = DirectoryClient::new(config.base_url.as_str(), &transport)?;
        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Build a directory over any source.
    pub fn with_source(config: DirectoryConfig, source: Arc<dyn PeopleSource>) -> Self {
        let theme = ThemeStore::new(config.theme);
        Self {
            inner: Arc::new(DirectoryInner {
                people: DirectoryStore::new(source.clone()),
                detail: DetailStore::new(source.clone()),
                theme,
                source,
                config,
                started: AtomicBool::new(false),
            }),
        }
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.inner.config
    }

    pub fn people(&self) -> &DirectoryStore {
        &self.inner.people
    }

    pub fn detail(&self) -> &DetailStore {
        &self.inner.detail
    }

    pub fn theme(&self) -> &ThemeStore {
        &self.inner.theme
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Spawn the one list fetch. Later calls are no-ops and return `None`.
    pub fn start(&self) -> Option<JoinHandle<()>> {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            debug!("directory already started");
            return None;
        }

        info!(url = %self.inner.config.base_url, "loading directory");
        let this = self.clone();
        Some(tokio::spawn(async move { this.inner.people.load().await }))
    }

    /// Spawn a detail fetch for `id`.
    pub fn open_person(&self, id: PersonId) -> JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move { this.inner.detail.load_one(id).await })
    }

    /// Apply a route: the detail route triggers a detail fetch.
    pub fn navigate(&self, route: &Route) -> Option<JoinHandle<()>> {
        match route {
            Route::Directory => None,
            Route::Person(id) => Some(self.open_person(id.clone())),
        }
    }

    // ── One-shot fetches ─────────────────────────────────────────────

    /// Fetch every record, bypassing the stores.
    pub async fn fetch_people(&self) -> Result<Vec<Person>, CoreError> {
        self.inner.source.list_people().await
    }

    /// Fetch one record, bypassing the stores.
    pub async fn fetch_person(&self, id: &PersonId) -> Result<Person, CoreError> {
        self.inner.source.get_person(id).await
    }
}
