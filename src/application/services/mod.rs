//! Business logic services for the application layer.

pub mod auth_service;
pub mod deadline;
pub mod link_service;
pub mod resolver_service;

pub use auth_service::AuthService;
pub use link_service::{LinkService, LinkSettings};
pub use resolver_service::ResolverService;
