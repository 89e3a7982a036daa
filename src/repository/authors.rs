//! Authors repository
//!
//! Records are addressed by their position in the sequence. The `id` carried by
//! each author is a creation sequence number and plays no part in lookups.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::author::Author;

#[derive(Debug, Default)]
struct AuthorsState {
    authors: Vec<Author>,
    last_id: u64,
}

impl AuthorsState {
    fn push(&mut self, name: String, email: String) -> Author {
        self.last_id += 1;
        let author = Author::new(self.last_id, name, email);
        self.authors.push(author.clone());
        author
    }
}

#[derive(Clone, Default)]
pub struct AuthorsRepository {
    state: Arc<RwLock<AuthorsState>>,
}

impl AuthorsRepository {
    /// Store holding the two startup authors (ids 1 and 2)
    pub fn seeded() -> Self {
        let mut state = AuthorsState::default();
        state.push("JRR Tolkien".to_string(), "jrr@tolkien.com".to_string());
        state.push("Jane Austen".to_string(), "jane@austen.com".to_string());
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// List all authors in their current order
    pub async fn list(&self) -> Vec<Author> {
        self.state.read().await.authors.clone()
    }

    /// Append a new author with the next id
    pub async fn create(&self, name: &str, email: &str) -> Author {
        self.state
            .write()
            .await
            .push(name.to_string(), email.to_string())
    }

    /// Get the author at `index`, if any
    pub async fn get(&self, index: i64) -> Option<Author> {
        let state = self.state.read().await;
        super::position(index, state.authors.len()).map(|i| state.authors[i].clone())
    }

    /// Overwrite name and email of the author at `index`.
    ///
    /// Every update consumes one id, in range or not: the replacement record is
    /// built as a new author before the position is looked up.
    pub async fn update(&self, index: i64, name: &str, email: &str) -> Option<Author> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let i = super::position(index, state.authors.len())?;
        let author = &mut state.authors[i];
        author.name = name.to_string();
        author.email = email.to_string();
        Some(author.clone())
    }

    /// Remove the author at `index`, shifting later authors down
    pub async fn delete(&self, index: i64) -> Option<Author> {
        let mut state = self.state.write().await;
        let i = super::position(index, state.authors.len())?;
        Some(state.authors.remove(i))
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.authors.len()
    }
}
