//! In-memory page hosting the login form.

mod memory_document;

pub use memory_document::MemoryDocument;
