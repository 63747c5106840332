//! Services for the application layer.

pub mod login_controller;

pub use login_controller::{ControllerSettings, LoginFormController};
