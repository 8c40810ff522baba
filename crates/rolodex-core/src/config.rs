// ── Runtime directory configuration ──
//
// Describes *where* the directory lives and how the session starts.
// The CLI/TUI builds a `DirectoryConfig` from rolodex-config and hands it
// in; core never reads config files.

use std::time::Duration;

use url::Url;

use crate::model::ThemeMode;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Base URL of the people API (e.g., `https://jsonplaceholder.typicode.com`).
    pub base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
    /// Display mode at startup.
    pub theme: ThemeMode,
}

impl DirectoryConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            theme: ThemeMode::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }
}
