// rolodex-api: Async Rust client for JSONPlaceholder-style people directories

pub mod client;
pub mod error;
pub mod models;
pub mod transport;
mod users;

pub use client::{DEFAULT_BASE_URL, DirectoryClient};
pub use error::Error;
pub use models::{User, WireAddress, WireCompany, WireGeo, WireId};
pub use transport::TransportConfig;
