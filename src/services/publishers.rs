//! Publishers service

use crate::{
    error::AppResult,
    models::publisher::{Publisher, PublisherPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct PublishersService {
    repository: Repository,
}

impl PublishersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List publishers
    pub async fn list(&self) -> Vec<Publisher> {
        let publishers = self.repository.publishers.list().await;
        tracing::debug!(count = publishers.len(), "Listed publishers");
        publishers
    }

    /// Number of records held
    pub async fn count(&self) -> usize {
        self.repository.publishers.len().await
    }

    /// Create a publisher
    pub async fn create(&self, data: PublisherPayload) -> Publisher {
        let publisher = self.repository.publishers.create(data.into()).await;
        tracing::info!(name = %publisher.name, "Publisher created");
        publisher
    }

    /// Get publisher by position
    pub async fn get_by_index(&self, index: i64) -> AppResult<Publisher> {
        self.repository
            .publishers
            .get(index)
            .await
            .inspect_err(|_| tracing::warn!(index, "Publisher index out of range"))
    }

    /// Update the publisher at a position
    pub async fn update_by_index(&self, index: i64, data: &PublisherPayload) -> AppResult<Publisher> {
        let publisher = self
            .repository
            .publishers
            .update(index, &data.name, &data.city)
            .await
            .inspect_err(|_| tracing::warn!(index, "Publisher index out of range"))?;
        tracing::info!(index, "Publisher updated");
        Ok(publisher)
    }

    /// Delete the publisher at a position
    pub async fn delete_by_index(&self, index: i64) -> AppResult<Publisher> {
        let publisher = self
            .repository
            .publishers
            .delete(index)
            .await
            .inspect_err(|_| tracing::warn!(index, "Publisher index out of range"))?;
        tracing::info!(index, name = %publisher.name, "Publisher deleted");
        Ok(publisher)
    }
}
