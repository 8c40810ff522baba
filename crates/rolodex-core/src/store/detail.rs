// ── Detail store ──
//
// Holds exactly one record, fetched by identifier. Every `load_one` bumps
// a generation counter; a response that comes back after a newer request
// was issued is dropped instead of overwriting the newer result.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, warn};

use super::FetchStatus;
use crate::error::FetchError;
use crate::model::{Person, PersonId};
use crate::source::PeopleSource;

#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// Identifier of the most recent request.
    pub requested: Option<PersonId>,
    pub person: Option<Person>,
    pub status: FetchStatus,
    pub error: Option<FetchError>,
}

impl DetailState {
    /// The record to show. Only a completed fetch has one; while loading
    /// or after a failure the previous record is kept but not shown.
    pub fn current(&self) -> Option<&Person> {
        match self.status {
            FetchStatus::Ready => self.person.as_ref(),
            _ => None,
        }
    }
}

pub struct DetailStore {
    source: Arc<dyn PeopleSource>,
    state: watch::Sender<DetailState>,
    generation: AtomicU64,
}

impl DetailStore {
    pub fn new(source: Arc<dyn PeopleSource>) -> Self {
        let (state, _) = watch::channel(DetailState::default());
        Self {
            source,
            state,
            generation: AtomicU64::new(0),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> DetailState {
        self.state.borrow().clone()
    }

    /// Fetch one record. Enters `Loading` on every call.
    ///
    /// Success replaces the held record; failure (including not-found)
    /// sets the detail error. A response superseded by a later call is
    /// discarded without touching state.
    pub async fn load_one(&self, id: PersonId) {
        // Bumped under the channel lock so `requested` always names the
        // newest generation.
        let mut generation = 0;
        self.state.send_modify(|s| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            s.requested = Some(id.clone());
            s.status = FetchStatus::Loading;
        });

        let result = self.source.get_person(&id).await;

        let applied = self.state.send_if_modified(|s| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            match &result {
                Ok(person) => {
                    s.person = Some(person.clone());
                    s.error = None;
                    s.status = FetchStatus::Ready;
                }
                Err(_) => {
                    s.error = Some(FetchError::Detail);
                    s.status = FetchStatus::Failed;
                }
            }
            true
        });

        match result {
            _ if !applied => debug!(%id, generation, "discarding stale detail response"),
            Ok(_) => debug!(%id, "detail loaded"),
            Err(e) => warn!(%id, error = %e, "detail fetch failed"),
        }
    }
}
