//! Repository layer: the in-memory record stores

pub mod authors;
pub mod publishers;

/// Main repository struct holding one store per collection
#[derive(Clone)]
pub struct Repository {
    pub authors: authors::AuthorsRepository,
    pub publishers: publishers::PublishersRepository,
}

impl Repository {
    /// Create a repository with both stores holding their seed records
    pub fn new() -> Self {
        Self {
            authors: authors::AuthorsRepository::seeded(),
            publishers: publishers::PublishersRepository::seeded(),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a signed path index into a position inside `0..len`
pub(crate) fn position(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}
