// ── Reactive state containers ──
//
// Each store owns one `watch` channel. Mutations go through the store's
// own methods (`send_modify` / `send_if_modified`) and every subscriber
// sees the new state on its next `changed()`.

mod detail;
mod directory;
mod status;
mod theme;

pub use detail::{DetailState, DetailStore};
pub use directory::{DirectoryState, DirectoryStore};
pub use status::FetchStatus;
pub use theme::ThemeStore;
