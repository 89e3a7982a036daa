//! Author model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Author {
    /// Sequence number assigned at creation (not the lookup key)
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Create / update author request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AuthorPayload {
    pub name: String,
    pub email: String,
}
