//! Publisher model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Publisher record. Identity is its position in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Publisher {
    pub name: String,
    pub city: String,
}

impl Publisher {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
        }
    }
}

/// Create / update publisher request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PublisherPayload {
    pub name: String,
    pub city: String,
}

impl From<PublisherPayload> for Publisher {
    fn from(payload: PublisherPayload) -> Self {
        Self {
            name: payload.name,
            city: payload.city,
        }
    }
}
