//! Port traits the controller depends on.
//!
//! The controller never touches a concrete page, HTTP client, storage or
//! location; it talks to these traits and the infrastructure layer provides
//! implementations.
//!
//! # Available Ports
//!
//! - [`Document`] - Element lookup on the hosting page
//! - [`LoginGateway`] - The `/login` request
//! - [`SessionStore`] - Session-scoped key-value storage
//! - [`Navigator`] - Page location changes
//!
//! # Testing
//!
//! Mock implementations are generated with `mockall` under `cfg(test)`.

pub mod document;
pub mod login_gateway;
pub mod navigator;
pub mod session_store;

pub use document::Document;
pub use login_gateway::LoginGateway;
pub use navigator::Navigator;
pub use session_store::SessionStore;

#[cfg(test)]
pub use login_gateway::MockLoginGateway;
#[cfg(test)]
pub use navigator::MockNavigator;
#[cfg(test)]
pub use session_store::MockSessionStore;
