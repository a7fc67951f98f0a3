//! # Contract Check
//!
//! Runs every CRUD contract case against a live `/posts` server, seeding and
//! clearing the server's database around each case.

mod config;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use blog_core::ports::FixtureGenerator;
use blog_infra::{DatabasePool, PostgresBlogPostRepository, RandomFixtureGenerator};
use blog_verifier::{ApiClient, ContractVerifier};

use config::CheckConfig;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = CheckConfig::from_env()?;
    tracing::info!(
        api = %config.api_base_url,
        seed_count = config.seed_count,
        "Starting contract check"
    );

    let pool = DatabasePool::connect(&config.database)
        .await
        .context("failed to connect to the test database")?;
    let store = Arc::new(PostgresBlogPostRepository::new(pool.conn));

    let fixtures: Arc<dyn FixtureGenerator> = match config.fixture_seed {
        Some(seed) => Arc::new(RandomFixtureGenerator::seeded(seed)),
        None => Arc::new(RandomFixtureGenerator::new()),
    };

    let client = ApiClient::new(config.api_base_url.clone(), config.request_timeout)?;
    let verifier = ContractVerifier::new(client, store, fixtures).with_seed_count(config.seed_count);

    let report = verifier.run_all().await;

    for outcome in &report.outcomes {
        match &outcome.error {
            None => tracing::info!(case = %outcome.case, "PASS"),
            Some(error) => tracing::error!(case = %outcome.case, %error, "FAIL"),
        }
    }
    tracing::info!(
        passed = report.passed_count(),
        total = report.outcomes.len(),
        "Contract check finished"
    );

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
