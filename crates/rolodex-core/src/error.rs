// ── Core error types ──
//
// User-facing errors from rolodex-core. Consumers never see reqwest or
// serde failures directly; the `From<rolodex_api::Error>` impl translates
// transport-layer errors into domain variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach directory at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Directory request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Person not found: {identifier}")]
    PersonNotFound { identifier: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<rolodex_api::Error> for CoreError {
    fn from(err: rolodex_api::Error) -> Self {
        match err {
            rolodex_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(ToString::to_string)
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            rolodex_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            rolodex_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            rolodex_api::Error::ClientBuild(message) => CoreError::Config { message },
            rolodex_api::Error::NotFound { path } => CoreError::PersonNotFound {
                identifier: path
                    .rsplit('/')
                    .find(|s| !s.is_empty())
                    .unwrap_or_default()
                    .to_owned(),
            },
            rolodex_api::Error::Http { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            rolodex_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

// ── Store-level fetch failures ───────────────────────────────────────

/// The message a store shows in place of content after a failed fetch.
///
/// Deliberately coarse: the full [`CoreError`] is logged, the view only
/// ever sees one of these two strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FetchError {
    #[error("Failed to fetch users")]
    Directory,

    #[error("Failed to fetch user details")]
    Detail,
}
