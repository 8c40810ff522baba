// ── Directory store ──
//
// Owns the fetched record set plus the list controls (search term, sort
// direction, current page). The visible page is never stored; it is
// derived from this state on every read.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use super::FetchStatus;
use crate::error::FetchError;
use crate::model::Person;
use crate::pipeline::{DerivedPage, ListQuery, SortDirection, derive_page};
use crate::source::PeopleSource;

/// Snapshot published to subscribers on every change.
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    /// Full record set in server order.
    pub people: Arc<Vec<Person>>,
    pub search_term: String,
    pub sort: SortDirection,
    /// 1-based.
    pub page: usize,
    pub status: FetchStatus,
    pub error: Option<FetchError>,
}

impl DirectoryState {
    fn initial() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery::new(self.search_term.clone(), self.sort, self.page)
    }

    /// Run the filter → sort → paginate pipeline over this snapshot.
    pub fn derived_page(&self) -> DerivedPage<Person> {
        derive_page(&self.people, &self.query())
    }
}

pub struct DirectoryStore {
    source: Arc<dyn PeopleSource>,
    state: watch::Sender<DirectoryState>,
}

impl DirectoryStore {
    pub fn new(source: Arc<dyn PeopleSource>) -> Self {
        let (state, _) = watch::channel(DirectoryState::initial());
        Self { source, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<DirectoryState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> DirectoryState {
        self.state.borrow().clone()
    }

    pub fn derived_page(&self) -> DerivedPage<Person> {
        self.state.borrow().derived_page()
    }

    // ── Fetch ────────────────────────────────────────────────────────

    /// Fetch the full record set. One network call, no retry.
    ///
    /// On failure the previous record set is kept and the error is set;
    /// either way the store leaves `Loading`.
    pub async fn load(&self) {
        self.state.send_modify(|s| s.status = FetchStatus::Loading);

        match self.source.list_people().await {
            Ok(people) => {
                debug!(count = people.len(), "directory loaded");
                self.state.send_modify(|s| {
                    s.people = Arc::new(people);
                    s.error = None;
                    s.status = FetchStatus::Ready;
                });
            }
            Err(e) => {
                warn!(error = %e, "directory fetch failed");
                self.state.send_modify(|s| {
                    s.error = Some(FetchError::Directory);
                    s.status = FetchStatus::Failed;
                });
            }
        }
    }

    // ── Controls ─────────────────────────────────────────────────────

    /// Replace the search term. A different term resets to page 1.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        self.state.send_if_modified(|s| {
            if s.search_term == term {
                return false;
            }
            s.search_term = term;
            s.page = 1;
            true
        });
    }

    /// Replace the sort direction. A different direction resets to page 1.
    pub fn set_sort_direction(&self, sort: SortDirection) {
        self.state.send_if_modified(|s| {
            if s.sort == sort {
                return false;
            }
            s.sort = sort;
            s.page = 1;
            true
        });
    }

    pub fn toggle_sort_direction(&self) -> SortDirection {
        let next = self.state.borrow().sort.toggled();
        self.set_sort_direction(next);
        next
    }

    /// Set the 1-based page. Not validated: the pipeline treats 0 as 1
    /// and a page past the end as empty.
    pub fn set_current_page(&self, page: usize) {
        self.state.send_if_modified(|s| {
            if s.page == page {
                return false;
            }
            s.page = page;
            true
        });
    }

    /// Advance one page, stopping at the last one.
    pub fn next_page(&self) {
        self.state.send_if_modified(|s| {
            let derived = s.derived_page();
            if !derived.has_next() {
                return false;
            }
            s.page = derived.page + 1;
            true
        });
    }

    /// Go back one page, stopping at the first one.
    pub fn prev_page(&self) {
        self.state.send_if_modified(|s| {
            if s.page <= 1 {
                return false;
            }
            s.page -= 1;
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockSource, person, sample_people};
    use pretty_assertions::assert_eq;

    fn store_with(source: MockSource) -> (Arc<MockSource>, DirectoryStore) {
        let source = Arc::new(source);
        let store = DirectoryStore::new(source.clone());
        (source, store)
    }

    fn page_names(store: &DirectoryStore) -> Vec<String> {
        store
            .derived_page()
            .items
            .into_iter()
            .map(|p| p.name)
            .collect()
    }

    #[tokio::test]
    async fn initial_state_is_idle_page_one() {
        let (_, store) = store_with(MockSource::new(Vec::new()));
        let state = store.snapshot();
        assert_eq!(state.status, FetchStatus::Idle);
        assert_eq!(state.page, 1);
        assert_eq!(state.sort, SortDirection::Ascending);
        assert!(state.search_term.is_empty());
        assert!(state.people.is_empty());
    }

    #[tokio::test]
    async fn load_success_populates_and_paginates() {
        let (source, store) = store_with(MockSource::new(sample_people()));
        store.load().await;

        let state = store.snapshot();
        assert_eq!(state.status, FetchStatus::Ready);
        assert_eq!(state.error, None);
        assert_eq!(state.people.len(), 10);
        assert_eq!(source.list_calls(), 1);

        let page = store.derived_page();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 6);
    }

    #[tokio::test]
    async fn load_failure_sets_error_and_keeps_records() {
        let (_, store) = store_with(MockSource::failing());
        store.load().await;

        let state = store.snapshot();
        assert_eq!(state.status, FetchStatus::Failed);
        assert_eq!(
            state.error.map(|e| e.to_string()).as_deref(),
            Some("Failed to fetch users")
        );
        assert!(state.people.is_empty());
        assert_eq!(store.derived_page().total_pages, 0);
    }

    #[tokio::test]
    async fn search_filters_and_resets_page() {
        let (_, store) = store_with(MockSource::new(vec![
            person(1, "Alice"),
            person(2, "Bob"),
            person(3, "alicia"),
        ]));
        store.load().await;
        store.set_current_page(2);

        store.set_search_term("ALI");
        assert_eq!(store.snapshot().page, 1);
        assert_eq!(page_names(&store), vec!["Alice", "alicia"]);
        assert_eq!(store.derived_page().total_pages, 1);
    }

    #[tokio::test]
    async fn same_search_term_does_not_reset_page() {
        let (_, store) = store_with(MockSource::new(sample_people()));
        store.load().await;
        store.set_search_term("");
        store.set_current_page(2);

        store.set_search_term("");
        assert_eq!(store.snapshot().page, 2);
    }

    #[tokio::test]
    async fn descending_sort_resets_page() {
        let (_, store) = store_with(MockSource::new(vec![
            person(1, "Alice"),
            person(2, "Bob"),
            person(3, "alicia"),
        ]));
        store.load().await;
        store.set_current_page(3);

        store.set_search_term("ali");
        store.set_sort_direction(SortDirection::Descending);
        assert_eq!(store.snapshot().page, 1);
        assert_eq!(page_names(&store), vec!["alicia", "Alice"]);
    }

    #[tokio::test]
    async fn toggle_sort_flips_direction() {
        let (_, store) = store_with(MockSource::new(sample_people()));
        assert_eq!(store.toggle_sort_direction(), SortDirection::Descending);
        assert_eq!(store.toggle_sort_direction(), SortDirection::Ascending);
    }

    #[tokio::test]
    async fn no_match_gives_zero_pages() {
        let (_, store) = store_with(MockSource::new(sample_people()));
        store.load().await;
        store.set_search_term("zzz");
        let page = store.derived_page();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn page_beyond_end_is_empty() {
        let (_, store) = store_with(MockSource::new(sample_people()));
        store.load().await;
        store.set_current_page(3);
        assert!(store.derived_page().items.is_empty());
    }

    #[tokio::test]
    async fn next_and_prev_stop_at_bounds() {
        let (_, store) = store_with(MockSource::new(sample_people()));
        store.load().await;

        store.prev_page();
        assert_eq!(store.snapshot().page, 1);

        store.next_page();
        assert_eq!(store.snapshot().page, 2);
        store.next_page();
        assert_eq!(store.snapshot().page, 2);

        store.prev_page();
        assert_eq!(store.snapshot().page, 1);
    }

    #[tokio::test]
    async fn subscribers_are_notified_of_control_changes() {
        let (_, store) = store_with(MockSource::new(sample_people()));
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.set_search_term("le");
        assert!(rx.has_changed().unwrap_or(false));
        assert_eq!(rx.borrow_and_update().search_term, "le");

        store.set_search_term("le");
        assert!(!rx.has_changed().unwrap_or(true));
    }

    fn thirteen_people() -> Vec<Person> {
        let mut people = sample_people();
        people.extend([
            person(11, "Ada Lovelace"),
            person(12, "Grace Hopper"),
            person(13, "Émile Zola"),
        ]);
        people
    }

    #[tokio::test]
    async fn thirteen_records_page_through_six_six_one() {
        let (_, store) = store_with(MockSource::new(thirteen_people()));
        store.load().await;

        let mut sizes = Vec::new();
        for n in 1..=3 {
            store.set_current_page(n);
            let page = store.derived_page();
            assert_eq!(page.total_pages, 3);
            sizes.push(page.items.len());
        }
        assert_eq!(sizes, vec![6, 6, 1]);
        assert_eq!(page_names(&store), vec!["Émile Zola"]);
    }

    #[tokio::test]
    async fn search_narrows_thirteen_to_two() {
        let (_, store) = store_with(MockSource::new(thirteen_people()));
        store.load().await;

        store.set_search_term("CLEMENTIN");
        let page = store.derived_page();
        assert_eq!(page.total_pages, 1);
        assert_eq!(
            page_names(&store),
            vec!["Clementina DuBuque", "Clementine Bauch"]
        );
    }

    #[tokio::test]
    async fn repeating_search_term_leaves_derived_page_unchanged() {
        let (_, store) = store_with(MockSource::new(thirteen_people()));
        store.load().await;
        store.set_sort_direction(SortDirection::Descending);
        store.set_current_page(2);

        store.set_search_term("e");
        let first = store.derived_page();
        store.set_search_term("e");
        let second = store.derived_page();

        assert_eq!(first, second);
        assert!(!first.items.is_empty());
    }
}
