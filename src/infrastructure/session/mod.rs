//! Session storage implementations.
//!
//! Provides two [`crate::domain::ports::SessionStore`] implementations:
//! - [`MemorySessionStore`] - Lives as long as the process, like a browser tab's storage
//! - [`FileSessionStore`] - JSON object file, so a session outlives the terminal client

mod file_session;
mod memory_session;

pub use file_session::FileSessionStore;
pub use memory_session::MemorySessionStore;
