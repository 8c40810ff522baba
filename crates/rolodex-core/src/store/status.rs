use serde::Serialize;
use strum::Display;

/// Lifecycle of a remote fetch: `Idle → Loading → {Ready, Failed}`.
///
/// A new request moves either terminal state back to `Loading`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

impl FetchStatus {
    pub fn is_loading(self) -> bool {
        self == Self::Loading
    }

    /// Idle stores render the same as loading ones: nothing to show yet.
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }
}
