//! Infrastructure layer for external integrations.
//!
//! Implements the storage interface defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory and PostgreSQL link stores

pub mod persistence;
