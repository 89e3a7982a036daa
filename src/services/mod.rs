//! Business logic services

pub mod authors;
pub mod publishers;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub publishers: publishers::PublishersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            authors: authors::AuthorsService::new(repository.clone()),
            publishers: publishers::PublishersService::new(repository),
        }
    }
}
