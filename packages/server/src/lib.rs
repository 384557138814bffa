// Eventdesk - API Core
//
// This crate provides the backend API for the Eventdesk admin interface:
// authenticated organizers create, edit, publish, and delete event posts.
// Architecture follows domain-driven design; all SQL lives in domain models.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
