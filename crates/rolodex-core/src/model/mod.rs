// ── Domain model ──
//
// Canonical, read-only representations of directory records. Wire types
// from rolodex-api are converted into these in `convert.rs`.

mod person;
mod person_id;
mod theme;

pub use person::{Address, Company, GeoPoint, Person};
pub use person_id::PersonId;
pub use theme::ThemeMode;
