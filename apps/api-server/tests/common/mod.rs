use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::ServerHandle;

use api_server::{AppConfig, AppState, StoreKind, build_server};
use blog_infra::{InMemoryBlogPostRepository, RandomFixtureGenerator};
use blog_verifier::{ApiClient, ContractVerifier};

/// A server on an ephemeral port sharing its store with a verifier.
pub struct TestApp {
    pub base_url: String,
    pub store: Arc<InMemoryBlogPostRepository>,
    pub verifier: ContractVerifier,
    handle: ServerHandle,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = Arc::new(InMemoryBlogPostRepository::new());
        let state = AppState::with_repository(store.clone(), StoreKind::Memory);

        let (server, addrs) =
            build_server(state, &AppConfig::ephemeral()).expect("failed to bind test server");
        let handle = server.handle();
        actix_web::rt::spawn(server);

        let base_url = format!("http://{}", addrs[0]);
        let client =
            ApiClient::new(base_url.clone(), Duration::from_secs(10)).expect("client builds");
        let verifier = ContractVerifier::new(
            client,
            store.clone(),
            Arc::new(RandomFixtureGenerator::seeded(2024)),
        );

        Self {
            base_url,
            store,
            verifier,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}
