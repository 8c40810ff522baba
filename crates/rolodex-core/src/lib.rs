// rolodex-core: Reactive data layer between rolodex-api and consumers (CLI/TUI).

pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod route;
pub mod source;
pub mod store;

#[cfg(test)]
mod test_utils;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::DirectoryConfig;
pub use controller::Directory;
pub use error::{CoreError, FetchError};
pub use model::{Address, Company, GeoPoint, Person, PersonId, ThemeMode};
pub use pipeline::{
    DerivedPage, ListQuery, Named, PAGE_SIZE, SortDirection, compare_names, derive_page,
    filter_and_sort,
};
pub use route::{ParseRouteError, Route};
pub use source::PeopleSource;
pub use store::{DetailState, DetailStore, DirectoryState, DirectoryStore, FetchStatus, ThemeStore};

// Default endpoint, re-exported for config defaults.
pub use rolodex_api::DEFAULT_BASE_URL;
