use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::BlogPost;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Replace an existing entity. Fails with `RepoError::NotFound` if absent.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog post repository - the store query interface used by the server,
/// seeding and verification.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// All posts, oldest first.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Any single post, if the store is not empty.
    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError>;

    /// Bulk insert. Returns the number of inserted rows.
    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<u64, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;

    /// Remove every post. Returns the number of removed rows.
    async fn clear(&self) -> Result<u64, RepoError>;
}
