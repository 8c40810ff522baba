// ── Theme store ──
//
// Process-lifetime display mode. The initial value may come from config;
// toggles are never written back.

use tokio::sync::watch;
use tracing::debug;

use crate::model::ThemeMode;

pub struct ThemeStore {
    mode: watch::Sender<ThemeMode>,
}

impl ThemeStore {
    pub fn new(initial: ThemeMode) -> Self {
        let (mode, _) = watch::channel(initial);
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode.borrow()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Flip between light and dark. Returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        self.mode.send_modify(|m| *m = m.toggled());
        let mode = self.mode();
        debug!(%mode, "theme toggled");
        mode
    }

    pub fn set(&self, mode: ThemeMode) {
        self.mode.send_if_modified(|m| {
            if *m == mode {
                return false;
            }
            *m = mode;
            true
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.mode.subscribe()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
