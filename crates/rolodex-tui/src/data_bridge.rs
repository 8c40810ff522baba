//! Data bridge: connects the [`Directory`] stores to TUI actions.
//!
//! Runs as a background task: kicks off the one list fetch, then forwards
//! every directory, detail and theme snapshot as an [`Action`] through the
//! TUI's action channel.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use rolodex_core::Directory;

use crate::action::Action;

/// Forward store changes until cancelled or the action channel closes.
pub async fn spawn_data_bridge(
    directory: Directory,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) {
    let mut people = directory.people().subscribe();
    let mut detail = directory.detail().subscribe();
    let mut theme = directory.theme().subscribe();

    // Push initial snapshots so screens have state immediately
    let _ = action_tx.send(Action::DirectoryUpdated(
        people.borrow_and_update().clone(),
    ));
    let _ = action_tx.send(Action::ThemeChanged(*theme.borrow_and_update()));

    directory.start();

    loop {
        let action = tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Ok(()) = people.changed() => {
                Action::DirectoryUpdated(people.borrow_and_update().clone())
            }
            Ok(()) = detail.changed() => {
                Action::DetailUpdated(Box::new(detail.borrow_and_update().clone()))
            }
            Ok(()) = theme.changed() => {
                Action::ThemeChanged(*theme.borrow_and_update())
            }
            else => break,
        };

        if action_tx.send(action).is_err() {
            break;
        }
    }

    debug!("data bridge shut down");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use rolodex_core::{DirectoryConfig, ThemeMode};

    use super::*;

    fn offline_directory() -> Directory {
        // Port 1 refuses connections, so the list fetch fails fast.
        let url = "http://127.0.0.1:1".parse().unwrap();
        Directory::new(DirectoryConfig::new(url).with_timeout(Duration::from_secs(2))).unwrap()
    }

    async fn next(rx: &mut mpsc::UnboundedReceiver<Action>) -> Action {
        tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap()
    }

    #[tokio::test]
    async fn forwards_initial_snapshots_and_theme_changes() {
        let directory = offline_directory();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(spawn_data_bridge(directory.clone(), tx, cancel.clone()));

        assert!(matches!(next(&mut rx).await, Action::DirectoryUpdated(_)));
        assert!(matches!(
            next(&mut rx).await,
            Action::ThemeChanged(ThemeMode::Light)
        ));

        directory.theme().toggle();
        loop {
            if let Action::ThemeChanged(mode) = next(&mut rx).await {
                assert_eq!(mode, ThemeMode::Dark);
                break;
            }
        }

        cancel.cancel();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn failed_list_fetch_reaches_the_screen() {
        let directory = offline_directory();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();

        let handle = tokio::spawn(spawn_data_bridge(directory, tx, cancel.clone()));

        loop {
            if let Action::DirectoryUpdated(state) = next(&mut rx).await {
                if state.error.is_some() {
                    assert!(!state.status.is_loading());
                    break;
                }
            }
        }

        cancel.cancel();
        handle.await.unwrap();
    }
}
