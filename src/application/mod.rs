//! Application layer: the login form controller.
//!
//! The controller orchestrates the domain ports (page, gateway, session store,
//! navigator) and owns every piece of form behavior.
//!
//! # Available Services
//!
//! - [`services::login_controller::LoginFormController`] - Validation, submission and
//!   password toggle

pub mod services;
