//! Publishers repository

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::publisher::Publisher,
};

#[derive(Clone, Default)]
pub struct PublishersRepository {
    publishers: Arc<RwLock<Vec<Publisher>>>,
}

impl PublishersRepository {
    /// Store holding the two startup publishers
    pub fn seeded() -> Self {
        Self {
            publishers: Arc::new(RwLock::new(vec![
                Publisher::new("Kunnskapsforlaget", "Trondheim"),
                Publisher::new("Damm", "Bergen"),
            ])),
        }
    }

    /// List all publishers in their current order
    pub async fn list(&self) -> Vec<Publisher> {
        self.publishers.read().await.clone()
    }

    /// Append a publisher
    pub async fn create(&self, publisher: Publisher) -> Publisher {
        self.publishers.write().await.push(publisher.clone());
        publisher
    }

    /// Get the publisher at `index`
    pub async fn get(&self, index: i64) -> AppResult<Publisher> {
        let publishers = self.publishers.read().await;
        let i = checked(index, publishers.len())?;
        Ok(publishers[i].clone())
    }

    /// Overwrite name and city of the publisher at `index`
    pub async fn update(&self, index: i64, name: &str, city: &str) -> AppResult<Publisher> {
        let mut publishers = self.publishers.write().await;
        let i = checked(index, publishers.len())?;
        let publisher = &mut publishers[i];
        publisher.name = name.to_string();
        publisher.city = city.to_string();
        Ok(publisher.clone())
    }

    /// Remove the publisher at `index`, shifting later publishers down
    pub async fn delete(&self, index: i64) -> AppResult<Publisher> {
        let mut publishers = self.publishers.write().await;
        let i = checked(index, publishers.len())?;
        Ok(publishers.remove(i))
    }

    pub async fn len(&self) -> usize {
        self.publishers.read().await.len()
    }
}

fn checked(index: i64, len: usize) -> AppResult<usize> {
    super::position(index, len).ok_or(AppError::IdOutOfRange)
}
