//! Infrastructure layer for external integrations.
//!
//! This layer implements the port traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`dom`] - In-memory page hosting the login form
//! - [`http`] - `reqwest` client for the `/login` endpoint
//! - [`session`] - Session storage (in-memory and JSON file)
//! - [`navigation`] - Location tracking and relative path resolution

pub mod dom;
pub mod http;
pub mod navigation;
pub mod session;
