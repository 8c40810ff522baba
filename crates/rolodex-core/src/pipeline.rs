// ── List derivation pipeline ──
//
// filter → sort → paginate, recomputed from scratch on every read.
// Nothing here is stored; callers hand in the full record set and a
// query and get back the visible slice plus its page count.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::Person;

/// Records shown per page.
pub const PAGE_SIZE: usize = 6;

/// Anything the pipeline can search and sort by display name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

// ── Sort direction ─────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    #[strum(to_string = "asc", serialize = "ascending")]
    Ascending,
    #[serde(rename = "desc")]
    #[strum(to_string = "desc", serialize = "descending")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label shown on the sort control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "A to Z",
            Self::Descending => "Z to A",
        }
    }
}

/// Locale-style name ordering: case-insensitive first, then lowercase
/// before uppercase on names that differ only by case.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

// ── Query & result ─────────────────────────────────────────────────

/// Inputs to the pipeline. `page` is 1-based; 0 reads as 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search_term: String,
    pub sort: SortDirection,
    pub page: usize,
}

impl ListQuery {
    pub fn new(search_term: impl Into<String>, sort: SortDirection, page: usize) -> Self {
        Self {
            search_term: search_term.into(),
            sort,
            page,
        }
    }
}

/// One page of the filtered, sorted record set.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPage<T> {
    pub items: Vec<T>,
    /// The page that was sliced (1-based, never 0).
    pub page: usize,
    /// `ceil(total_matches / PAGE_SIZE)`; 0 when nothing matches.
    pub total_pages: usize,
    pub total_matches: usize,
}

impl<T> DerivedPage<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ── Pipeline stages ────────────────────────────────────────────────

/// Filter by case-insensitive substring on name, then sort by name.
pub fn filter_and_sort<'a, T: Named>(
    items: &'a [T],
    search_term: &str,
    sort: SortDirection,
) -> Vec<&'a T> {
    let needle = search_term.to_lowercase();
    let mut matches: Vec<&T> = items
        .iter()
        .filter(|item| item.name().to_lowercase().contains(&needle))
        .collect();

    matches.sort_by(|a, b| {
        let ord = compare_names(a.name(), b.name());
        match sort {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    matches
}

/// Run the whole pipeline. A page past the end yields an empty slice.
pub fn derive_page<T: Named + Clone>(items: &[T], query: &ListQuery) -> DerivedPage<T> {
    let matches = filter_and_sort(items, &query.search_term, query.sort);
    let total_matches = matches.len();
    let page = query.page.max(1);
    let start = (page - 1).saturating_mul(PAGE_SIZE);

    DerivedPage {
        items: matches
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .cloned()
            .collect(),
        page,
        total_pages: total_matches.div_ceil(PAGE_SIZE),
        total_matches,
    }
}
