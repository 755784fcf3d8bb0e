//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Link records, path data and tag activity
//! - [`repositories`] - The [`repositories::LinkStore`] persistence trait
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the HTTP layer
//! - Business rules are orchestrated in [`crate::application::services`]

pub mod entities;
pub mod repositories;
