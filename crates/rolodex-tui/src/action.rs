//! All possible UI actions. Actions are the sole mechanism for state mutation.

use rolodex_core::{DetailState, DirectoryState, Route, ThemeMode};

#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Navigation ──
    /// Switch views; entering `/user/{id}` starts a detail fetch.
    Navigate(Route),
    /// Back to the list from the detail view.
    GoBack,
    ToggleHelp,

    // ── List controls (forwarded to the directory store) ──
    SearchChanged(String),
    ToggleSort,
    NextPage,
    PrevPage,
    /// Jump straight to a 1-based page.
    GoToPage(usize),

    // ── Theme ──
    ToggleTheme,

    // ── Store snapshots (from the data bridge) ──
    DirectoryUpdated(DirectoryState),
    DetailUpdated(Box<DetailState>),
    ThemeChanged(ThemeMode),
}
