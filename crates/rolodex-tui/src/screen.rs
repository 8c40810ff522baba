//! Screen identifier enum.

use std::fmt;

use rolodex_core::Route;

/// Identifies each TUI screen. One per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Directory,
    Person,
}

impl ScreenId {
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Directory => Self::Directory,
            Route::Person(_) => Self::Person,
        }
    }

    /// Short label for the header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Directory => "Team Directory",
            Self::Person => "Person",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
