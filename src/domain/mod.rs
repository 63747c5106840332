//! Domain layer: form state, validation rules and port definitions.
//!
//! # Architecture
//!
//! - [`entities`] - Form state, credentials, outcomes and element handles
//! - [`ports`] - Traits for the page, the login request, session storage and navigation
//! - [`email`] - The email shape check
//! - [`events`] - Events the controller handles
//! - [`messages`] - User-facing texts and session keys
//!
//! # Design Principles
//!
//! - Nothing here depends on a concrete HTTP client, page or storage
//! - Port traits are implemented in [`crate::infrastructure`]
//! - Behavior lives in [`crate::application::services::LoginFormController`]

pub mod email;
pub mod entities;
pub mod events;
pub mod messages;
pub mod ports;
