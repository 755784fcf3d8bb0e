//! HTTP middleware for request processing.
//!
//! Provides API key authentication and request tracing.

pub mod auth;
pub mod tracing;
