//! Data models for the catalog

pub mod author;
pub mod publisher;

// Re-export commonly used types
pub use author::{Author, AuthorPayload};
pub use publisher::{Publisher, PublisherPayload};
