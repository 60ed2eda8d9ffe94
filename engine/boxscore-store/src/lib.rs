//! Boxscore persistence layer
//!
//! Holds one opaque upstream document per league. Backed by Postgres in
//! production, with an in-memory store for tests.

pub mod backend;
pub mod config;
pub mod error;
pub mod types;

pub use backend::{GameStore, MemoryGameStore, PgGameStore};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use types::{GameRecord, League, UnknownLeague};
