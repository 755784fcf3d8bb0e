//! Data Transfer Objects for API requests.
//!
//! Responses serialize [`crate::domain::entities::Link`] directly, so only
//! request bodies live here.

pub mod link;

pub use link::{CreateLinkRequest, UpdateLinkRequest};
