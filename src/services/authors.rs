//! Authors service
//!
//! Out-of-range positions are reported as `None`, never as an error.

use crate::{
    models::author::{Author, AuthorPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List authors
    pub async fn list(&self) -> Vec<Author> {
        let authors = self.repository.authors.list().await;
        tracing::debug!(count = authors.len(), "Listed authors");
        authors
    }

    /// Number of records held
    pub async fn count(&self) -> usize {
        self.repository.authors.len().await
    }

    /// Create an author
    pub async fn create(&self, data: &AuthorPayload) -> Author {
        let author = self.repository.authors.create(&data.name, &data.email).await;
        tracing::info!(id = author.id, name = %author.name, "Author created");
        author
    }

    /// Get author by position
    pub async fn get_by_index(&self, index: i64) -> Option<Author> {
        let author = self.repository.authors.get(index).await;
        if author.is_none() {
            tracing::warn!(index, "Author index out of range");
        }
        author
    }

    /// Update the author at a position
    pub async fn update_by_index(&self, index: i64, data: &AuthorPayload) -> Option<Author> {
        let author = self
            .repository
            .authors
            .update(index, &data.name, &data.email)
            .await;
        match &author {
            Some(author) => tracing::info!(index, id = author.id, "Author updated"),
            None => tracing::warn!(index, "Author index out of range"),
        }
        author
    }

    /// Delete the author at a position
    pub async fn delete_by_index(&self, index: i64) -> Option<Author> {
        let author = self.repository.authors.delete(index).await;
        match &author {
            Some(author) => tracing::info!(index, id = author.id, "Author deleted"),
            None => tracing::warn!(index, "Author index out of range"),
        }
        author
    }
}
