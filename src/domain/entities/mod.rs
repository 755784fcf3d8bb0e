//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Link`] - A short link record with its click counter
//! - [`ShortCodeData`] - Code and optional tag parsed from a request path
//! - [`TagActivity`] - One tagged use of a short link
//! - [`LinkPatch`] - Partial update for an existing link

pub mod link;
pub mod short_code;
pub mod tag_activity;

pub use link::{DEFAULT_CREATED_BY, Link, timestamp_now};
pub use short_code::ShortCodeData;
pub use tag_activity::TagActivity;

/// Partial update for an existing link.
///
/// `None` or empty fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub original_url: Option<String>,
    pub custom_code: Option<String>,
}
