//! Application layer services implementing business logic.
//!
//! Services orchestrate domain rules and [`crate::domain::repositories::LinkStore`]
//! calls, and give HTTP handlers a narrow API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Create, read, update and delete links
//! - [`services::resolver_service::ResolverService`] - Redirect lookups and click bookkeeping
//! - [`services::auth_service::AuthService`] - Shared API key check

pub mod services;
