//! # Login Form
//!
//! A headless login form controller: input validation, submit-button state,
//! credential submission, session storage and password visibility toggle.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Form state, validation rules and port traits
//! - **Application Layer** ([`application`]) - The [`LoginFormController`]
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP client, session stores,
//!   navigation and the in-memory page
//!
//! ## Flow
//!
//! 1. The controller binds to the page's form elements and disables submit
//! 2. Every field change re-enables submit once both fields are filled
//! 3. Submit re-validates, posts `{email, password}` to the login endpoint,
//!    stores the response in session storage and navigates to the dashboard
//! 4. Rejections and connection failures are shown in the error container
//!
//! ## Quick Start
//!
//! ```bash
//! export LOGIN_ENDPOINT="https://auth.example.com/login"
//! cargo run -- login --email user@example.com
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use application::services::LoginFormController;
pub use error::{BindError, StoreError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ControllerSettings, LoginFormController};
    pub use crate::domain::entities::{
        AuthResult, Credentials, FormState, HandlerOutcome, LoginOutcome, PasswordVisibility,
        SubmitOutcome, ValidationFailure,
    };
    pub use crate::domain::events::{FormEvent, SubmitEvent};
    pub use crate::domain::ports::{Document, LoginGateway, Navigator, SessionStore};
    pub use crate::error::{BindError, StoreError};
    pub use crate::infrastructure::dom::MemoryDocument;
    pub use crate::infrastructure::http::HttpLoginGateway;
    pub use crate::infrastructure::navigation::LocationNavigator;
    pub use crate::infrastructure::session::{FileSessionStore, MemorySessionStore};
}
