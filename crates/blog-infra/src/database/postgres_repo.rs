//! PostgreSQL blog post repository.

use async_trait::async_trait;
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, TransactionTrait};

use blog_core::domain::BlogPost;
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// Rows per INSERT statement. Each row binds 6 parameters and PostgreSQL
/// caps a statement at 65535.
pub const INSERT_CHUNK_ROWS: usize = 1000;

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .order_by_asc(blog_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<u64, RepoError> {
        if posts.is_empty() {
            return Ok(0);
        }

        // One transaction so a failing chunk leaves nothing behind.
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let mut inserted = 0;
        for chunk in posts.chunks(INSERT_CHUNK_ROWS) {
            let models = chunk.iter().cloned().map(blog_post::ActiveModel::from);
            inserted += BlogPostEntity::insert_many(models)
                .exec_without_returning(&txn)
                .await
                .map_err(map_db_err)?;
        }
        txn.commit().await.map_err(map_db_err)?;

        tracing::debug!(inserted, "Bulk inserted blog posts");
        Ok(inserted)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        BlogPostEntity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn clear(&self) -> Result<u64, RepoError> {
        let result = BlogPostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }
}
