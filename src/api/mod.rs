//! HTTP layer: the management API and the public resolver.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses: JSON for `/api/urls*`, redirects and HTML pages elsewhere.
//!
//! # Modules
//!
//! - [`dto`] - Request bodies for the management API
//! - [`extractors`] - Body extractors that report failures as [`crate::AppError`]
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and request tracing
//! - [`routes`] - Management route configuration

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
