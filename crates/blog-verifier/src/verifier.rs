//! The contract verifier: seed, exercise, compare, tear down.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

use blog_core::domain::BlogPost;
use blog_core::ports::{BaseRepository, BlogPostRepository, FixtureGenerator};
use blog_shared::dto::{BLOG_POST_FIELDS, BlogPostResponse, UpdateBlogPostRequest};

use crate::client::ApiClient;
use crate::error::VerifyError;
use crate::fixtures::{create_payload, generate_record};
use crate::report::{Case, CaseOutcome, SuiteReport};

/// Posts seeded before each case unless configured otherwise.
pub const DEFAULT_SEED_COUNT: usize = 10;

/// Drives the `/posts` API and cross-checks it against the store.
pub struct ContractVerifier {
    client: ApiClient,
    store: Arc<dyn BlogPostRepository>,
    fixtures: Arc<dyn FixtureGenerator>,
    seed_count: usize,
}

impl ContractVerifier {
    pub fn new(
        client: ApiClient,
        store: Arc<dyn BlogPostRepository>,
        fixtures: Arc<dyn FixtureGenerator>,
    ) -> Self {
        Self {
            client,
            store,
            fixtures,
            seed_count: DEFAULT_SEED_COUNT,
        }
    }

    pub fn with_seed_count(mut self, seed_count: usize) -> Self {
        self.seed_count = seed_count;
        self
    }

    /// One synthetic post, not yet persisted.
    pub fn generate_record(&self) -> BlogPost {
        generate_record(self.fixtures.as_ref())
    }

    /// Generate `n` posts and bulk insert them. Returns what was stored.
    pub async fn seed(&self, n: usize) -> Result<Vec<BlogPost>, VerifyError> {
        tracing::info!(count = n, "Seeding database");

        let posts: Vec<BlogPost> = (0..n).map(|_| self.generate_record()).collect();
        let inserted = self.store.insert_many(posts.clone()).await?;

        ensure!(
            inserted == n as u64,
            "seeding inserted {inserted} posts, expected {n}"
        );
        Ok(posts)
    }

    /// Remove every post from the store. Safe to call repeatedly.
    pub async fn teardown(&self) -> Result<(), VerifyError> {
        tracing::warn!("Deleting database");

        let removed = self.store.clear().await?;
        tracing::debug!(removed, "Store cleared");
        Ok(())
    }

    /// GET /posts length equals the store count.
    pub async fn verify_list_count(&self) -> Result<(), VerifyError> {
        let reply = self.client.list_posts().await?;
        reply.expect_status(StatusCode::OK, "GET /posts")?;

        let items: Vec<Value> = reply.json()?;
        ensure!(!items.is_empty(), "GET /posts returned no posts");

        let count = self.store.count().await?;
        ensure!(
            items.len() as u64 == count,
            "GET /posts returned {} posts, store holds {count}",
            items.len()
        );
        Ok(())
    }

    /// GET /posts items carry every required key; the first one matches
    /// the stored record.
    pub async fn verify_list_fields(&self) -> Result<(), VerifyError> {
        let reply = self.client.list_posts().await?;
        reply.expect_status(StatusCode::OK, "GET /posts")?;
        ensure!(reply.is_json(), "GET /posts did not return JSON");

        let body: Value = reply.json()?;
        let items = match body.as_array() {
            Some(items) => items,
            None => {
                return Err(VerifyError::Assertion(
                    "GET /posts body is not an array".to_string(),
                ));
            }
        };
        ensure!(!items.is_empty(), "GET /posts returned no posts");

        for item in items {
            let object = match item.as_object() {
                Some(object) => object,
                None => {
                    return Err(VerifyError::Assertion(format!(
                        "GET /posts item is not an object: {item}"
                    )));
                }
            };
            for key in BLOG_POST_FIELDS {
                ensure!(
                    object.contains_key(key),
                    "GET /posts item is missing `{key}`: {item}"
                );
            }
        }

        let first: BlogPostResponse = serde_json::from_value(items[0].clone())?;
        let stored = self.stored(first.id).await?;
        ensure_matches("GET /posts", &first, &stored)
    }

    /// POST /posts persists the payload and assigns an id.
    pub async fn verify_create(&self) -> Result<(), VerifyError> {
        let record = self.generate_record();
        let payload = create_payload(&record);

        let reply = self.client.create_post(&payload).await?;
        reply.expect_status(StatusCode::CREATED, "POST /posts")?;
        ensure!(reply.is_json(), "POST /posts did not return JSON");

        let body: Value = reply.json()?;
        ensure!(
            body.get("id").is_some_and(|id| !id.is_null()),
            "POST /posts response has no id: {body}"
        );
        for key in BLOG_POST_FIELDS {
            ensure!(
                body.get(key).is_some(),
                "POST /posts response is missing `{key}`"
            );
        }

        let created: BlogPostResponse = serde_json::from_value(body)?;
        ensure!(
            created.title == payload.title,
            "POST /posts title mismatch"
        );
        ensure!(
            created.content == payload.content,
            "POST /posts content mismatch"
        );
        ensure!(
            created.author == payload.author,
            "POST /posts author mismatch"
        );

        let stored = self.stored(created.id).await?;
        ensure_matches("POST /posts", &created, &stored)
    }

    /// PUT /posts/{id} changes title and content and nothing else.
    pub async fn verify_update(&self) -> Result<(), VerifyError> {
        let target = self.pick_existing().await?;
        let update = UpdateBlogPostRequest {
            id: Some(target.id),
            title: Some(self.fixtures.sentence()),
            content: Some(self.fixtures.paragraph()),
        };

        let reply = self.client.update_post(target.id, &update).await?;
        reply.expect_status(StatusCode::NO_CONTENT, "PUT /posts/{id}")?;

        let stored = self.stored(target.id).await?;
        ensure!(
            Some(&stored.title) == update.title.as_ref(),
            "PUT /posts/{{id}} did not persist the new title"
        );
        ensure!(
            Some(&stored.content) == update.content.as_ref(),
            "PUT /posts/{{id}} did not persist the new content"
        );
        ensure!(
            stored.author == target.author,
            "PUT /posts/{{id}} changed the author"
        );
        ensure!(
            stored.created == target.created,
            "PUT /posts/{{id}} changed the creation time"
        );
        Ok(())
    }

    /// DELETE /posts/{id} removes the record.
    pub async fn verify_delete(&self) -> Result<(), VerifyError> {
        let target = self.pick_existing().await?;

        let reply = self.client.delete_post(target.id).await?;
        reply.expect_status(StatusCode::NO_CONTENT, "DELETE /posts/{id}")?;

        ensure!(
            self.store.find_by_id(target.id).await?.is_none(),
            "post {} still stored after DELETE",
            target.id
        );

        let lookup = self.client.get_post(target.id).await?;
        lookup.expect_status(StatusCode::NOT_FOUND, "GET /posts/{id} after DELETE")
    }

    /// Seed, run `case`, tear down. Teardown runs even when the case fails;
    /// the case's own error wins over a teardown error.
    pub async fn run_case(&self, case: Case) -> Result<(), VerifyError> {
        tracing::info!(%case, "Running contract case");

        let outcome = match self.seed(self.seed_count).await {
            Ok(_) => self.check(case).await,
            Err(e) => Err(e),
        };
        let teardown = self.teardown().await;

        outcome.and(teardown)
    }

    /// Run every case in order and collect the results.
    pub async fn run_all(&self) -> SuiteReport {
        let mut report = SuiteReport::default();

        for case in Case::ALL {
            let error = match self.run_case(case).await {
                Ok(()) => {
                    tracing::info!(%case, "Contract case passed");
                    None
                }
                Err(e) => {
                    tracing::error!(%case, error = %e, "Contract case failed");
                    Some(e.to_string())
                }
            };
            report.outcomes.push(CaseOutcome { case, error });
        }

        report
    }

    async fn check(&self, case: Case) -> Result<(), VerifyError> {
        match case {
            Case::ListMatchesStoreCount => self.verify_list_count().await,
            Case::ListItemsHaveRequiredFields => self.verify_list_fields().await,
            Case::CreateAssignsId => self.verify_create().await,
            Case::UpdateChangesFields => self.verify_update().await,
            Case::DeleteRemovesRecord => self.verify_delete().await,
        }
    }

    async fn stored(&self, id: uuid::Uuid) -> Result<BlogPost, VerifyError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| VerifyError::Assertion(format!("post {id} is not in the store")))
    }

    async fn pick_existing(&self) -> Result<BlogPost, VerifyError> {
        self.store
            .find_one()
            .await?
            .ok_or_else(|| VerifyError::Assertion("no seeded post available".to_string()))
    }
}

/// Compare an API representation with the stored record.
fn ensure_matches(
    what: &str,
    response: &BlogPostResponse,
    stored: &BlogPost,
) -> Result<(), VerifyError> {
    ensure!(response.id == stored.id, "{what}: id mismatch");
    ensure!(response.title == stored.title, "{what}: title mismatch");
    ensure!(
        response.content == stored.content,
        "{what}: content mismatch"
    );
    ensure!(
        response.author.first_name == stored.author.first_name
            && response.author.last_name == stored.author.last_name,
        "{what}: author mismatch ({} {} vs {})",
        response.author.first_name,
        response.author.last_name,
        stored.author.full_name()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use blog_infra::{InMemoryBlogPostRepository, RandomFixtureGenerator};

    use super::*;

    fn verifier(seed_count: usize) -> (ContractVerifier, Arc<InMemoryBlogPostRepository>) {
        let store = Arc::new(InMemoryBlogPostRepository::new());
        // Nothing listens on the discard port.
        let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let verifier = ContractVerifier::new(
            client,
            store.clone(),
            Arc::new(RandomFixtureGenerator::seeded(1)),
        )
        .with_seed_count(seed_count);
        (verifier, store)
    }

    #[tokio::test]
    async fn test_seed_inserts_exactly_n() {
        let (verifier, store) = verifier(10);
        let seeded = verifier.seed(10).await.unwrap();

        assert_eq!(seeded.len(), 10);
        assert_eq!(store.count().await.unwrap(), 10);
        for post in &seeded {
            assert_eq!(store.find_by_id(post.id).await.unwrap().as_ref(), Some(post));
        }
    }

    #[tokio::test]
    async fn test_teardown_is_idempotent() {
        let (verifier, store) = verifier(10);
        verifier.seed(5).await.unwrap();

        verifier.teardown().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        verifier.teardown().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failed_case_still_tears_down() {
        let (verifier, store) = verifier(3);

        let result = verifier.run_case(Case::ListMatchesStoreCount).await;

        assert!(matches!(result, Err(VerifyError::Http(_))));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_without_seed_data_fails() {
        let (verifier, _store) = verifier(0);
        let err = verifier.verify_update().await.unwrap_err();
        assert!(matches!(err, VerifyError::Assertion(_)), "{err}");
    }

    #[test]
    fn test_ensure_matches_detects_author_drift() {
        let fixtures = RandomFixtureGenerator::seeded(3);
        let stored = generate_record(&fixtures);
        let mut response = BlogPostResponse {
            id: stored.id,
            title: stored.title.clone(),
            content: stored.content.clone(),
            author: create_payload(&stored).author,
            created: stored.created,
        };
        assert!(ensure_matches("test", &response, &stored).is_ok());

        response.author.last_name.push('x');
        assert!(ensure_matches("test", &response, &stored).is_err());
    }
}
