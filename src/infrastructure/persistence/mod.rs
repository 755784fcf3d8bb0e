//! Link store implementations.
//!
//! # Stores
//!
//! - [`InMemoryLinkStore`] - Process-local map behind a read/write lock
//! - [`PgLinkStore`] - PostgreSQL via SQLx, schema in `migrations/`

pub mod memory_link_store;
pub mod pg_link_store;

pub use memory_link_store::InMemoryLinkStore;
pub use pg_link_store::PgLinkStore;
