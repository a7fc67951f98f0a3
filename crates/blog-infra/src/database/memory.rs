//! In-memory post store - used when no database is configured, and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::BlogPost;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

/// In-memory blog post repository backed by a HashMap with async RwLock.
///
/// Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    store: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn create(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        match store.get_mut(&post.id) {
            Some(slot) => {
                *slot = post.clone();
                Ok(post)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<BlogPost> = store.values().cloned().collect();
        posts.sort_by(|a, b| a.created.cmp(&b.created).then(a.id.cmp(&b.id)));
        Ok(posts)
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().next().cloned())
    }

    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;

        // All-or-nothing, like a single multi-row INSERT.
        if let Some(dup) = posts.iter().find(|p| store.contains_key(&p.id)) {
            return Err(RepoError::Constraint(format!(
                "Entity already exists: {}",
                dup.id
            )));
        }

        let inserted = posts.len() as u64;
        for post in posts {
            store.insert(post.id, post);
        }
        Ok(inserted)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }

    async fn clear(&self) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let removed = store.len() as u64;
        store.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use blog_core::domain::{Author, BlogPostUpdate};

    use super::*;

    fn post(title: &str) -> BlogPost {
        BlogPost::new(
            title.to_string(),
            "content".to_string(),
            Author::new("Grace", "Hopper"),
            None,
        )
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryBlogPostRepository::new();
        let saved = repo.create(post("one")).await.unwrap();
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_create_duplicate_id_is_constraint_error() {
        let repo = InMemoryBlogPostRepository::new();
        let p = post("one");
        repo.create(p.clone()).await.unwrap();
        assert!(matches!(
            repo.create(p).await,
            Err(RepoError::Constraint(_))
        ));
    }

    #[tokio::test]
    async fn test_update_replaces_existing() {
        let repo = InMemoryBlogPostRepository::new();
        let mut p = repo.create(post("one")).await.unwrap();
        p.apply(BlogPostUpdate {
            title: Some("two".to_string()),
            content: None,
        });
        repo.update(p.clone()).await.unwrap();
        assert_eq!(repo.find_by_id(p.id).await.unwrap().unwrap().title, "two");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryBlogPostRepository::new();
        assert!(matches!(
            repo.update(post("ghost")).await,
            Err(RepoError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryBlogPostRepository::new();
        let p = repo.create(post("one")).await.unwrap();
        repo.delete(p.id).await.unwrap();
        assert_eq!(repo.find_by_id(p.id).await.unwrap(), None);
        assert!(matches!(repo.delete(p.id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_insert_many_count_and_clear() {
        let repo = InMemoryBlogPostRepository::new();
        let batch: Vec<_> = (0..10).map(|i| post(&format!("post {i}"))).collect();

        assert_eq!(repo.insert_many(batch).await.unwrap(), 10);
        assert_eq!(repo.count().await.unwrap(), 10);
        assert!(repo.find_one().await.unwrap().is_some());

        assert_eq!(repo.clear().await.unwrap(), 10);
        assert_eq!(repo.clear().await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.find_one().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_many_rejects_duplicates_atomically() {
        let repo = InMemoryBlogPostRepository::new();
        let existing = repo.create(post("existing")).await.unwrap();

        let result = repo.insert_many(vec![post("fresh"), existing]).await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_created() {
        let repo = InMemoryBlogPostRepository::new();
        let now = chrono::Utc::now();
        let mut newer = post("newer");
        newer.created = now;
        let mut older = post("older");
        older.created = now - chrono::Duration::days(3);

        repo.insert_many(vec![newer, older]).await.unwrap();

        let titles: Vec<_> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["older", "newer"]);
    }
}
