//! HTTP request handlers.
//!
//! [`links`] serves the authenticated management API, [`resolver`] the public
//! redirect paths.

pub mod links;
pub mod resolver;

pub use links::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    update_link_handler,
};
pub use resolver::{
    favicon_handler, home_handler, method_not_allowed_handler, resolve_handler,
};
